/// Packed bit matrix
pub mod matrix;
/// Version, level, mask and output symbol types
pub mod qr_code;
/// Working grid used while a symbol is built
pub mod symbol;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MAX_VERSION, MIN_VERSION, MaskPattern, QrSymbol, Version};
pub use symbol::{Module, SymbolMatrix};

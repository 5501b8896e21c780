//! qr_card - QR code symbols for personal contact pages
//!
//! A deterministic QR Code Model 2 encoder restricted to byte mode, error
//! correction level L and versions 1-10: enough for any page URL up to 271
//! bytes. Rendering to SVG, PNG or terminal text is provided alongside.
//!
//! ```
//! let symbol = qr_card::encode("https://example.com").unwrap();
//! assert_eq!(symbol.size(), 25);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven defaults
pub mod config;
/// Symbol encoding pipeline (bitstream, error correction, layout, masking)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrSymbol, BitMatrix, SymbolMatrix, Version, etc.)
pub mod models;
/// SVG, raster and text renderers
pub mod render;
/// Helpers for the command-line tools
pub mod tools;

pub use error::{EncodeError, RenderError};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrSymbol, Version};
pub use render::{RenderOptions, Theme};

use rayon::prelude::*;

/// Encode a UTF-8 string into a QR symbol
///
/// # Arguments
/// * `text` - Text to encode, typically the page URL
///
/// # Returns
/// The symbol with the smallest fitting version, or `EncodeError::TooLong`
/// when the UTF-8 bytes exceed 271
pub fn encode(text: &str) -> Result<QrSymbol, EncodeError> {
    encode_bytes(text.as_bytes())
}

/// Encode raw bytes into a QR symbol
pub fn encode_bytes(data: &[u8]) -> Result<QrSymbol, EncodeError> {
    encoder::encode_symbol(data)
}

/// Encode many independent inputs in parallel
///
/// Results keep the order of `texts`; each input succeeds or fails on its own.
pub fn encode_batch<S>(texts: &[S]) -> Vec<Result<QrSymbol, EncodeError>>
where
    S: AsRef<str> + Sync,
{
    texts.par_iter().map(|t| encode(t.as_ref())).collect()
}

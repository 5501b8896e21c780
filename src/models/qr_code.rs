use super::BitMatrix;

/// Smallest supported symbol version
pub const MIN_VERSION: u8 = 1;
/// Largest supported symbol version
pub const MAX_VERSION: u8 = 10;

/// QR Code symbol version (1-10)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Create a version, returning `None` outside 1-10
    pub fn new(number: u8) -> Option<Self> {
        (MIN_VERSION..=MAX_VERSION)
            .contains(&number)
            .then_some(Self(number))
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Width of the byte-mode character count field
    pub fn char_count_bits(&self) -> usize {
        if self.0 <= 9 { 8 } else { 16 }
    }

    /// Versions 7+ carry an 18-bit version information block
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// Iterate every supported version in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (MIN_VERSION..=MAX_VERSION).map(Version)
    }
}

/// Error correction level
///
/// Only level L (~7% recovery capacity) is produced by this encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
}

impl ECLevel {
    /// Two-bit level indicator used in the format information (L = 01)
    pub const fn format_bits(&self) -> u8 {
        match self {
            ECLevel::L => 0b01,
        }
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// All eight patterns in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Numeric id (0-7)
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Check if module at row `i`, column `j` should be flipped
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// Encoded QR code symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    /// Symbol version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern committed to the data modules
    pub mask_pattern: MaskPattern,
    /// Penalty score of the committed mask
    pub penalty: u32,
    /// Module matrix (true = dark, false = light)
    pub modules: BitMatrix,
}

impl QrSymbol {
    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.width()
    }

    /// Whether the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.get(x, y)
    }

    /// Row-major grid of booleans (`true` = dark)
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        let size = self.size();
        (0..size)
            .map(|y| (0..size).map(|x| self.modules.get(x, y)).collect())
            .collect()
    }
}

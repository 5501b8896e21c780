//! Error types for encoding and rendering

use thiserror::Error;

/// Failures of the symbol encoder.
///
/// None of these are recoverable by retrying: `TooLong` means the caller must
/// shorten the input, the others indicate a defect in the layout tables.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload exceeds the largest supported version
    #[error("payload of {len} bytes exceeds the {max}-byte capacity of version 10-L")]
    TooLong {
        /// Payload length in bytes
        len: usize,
        /// Largest accepted payload
        max: usize,
    },
    /// Error correction codeword count has no generator polynomial
    #[error("no generator polynomial for {ec_codewords} error correction codewords")]
    UnsupportedConfiguration {
        /// Requested error correction codeword count
        ec_codewords: usize,
    },
    /// Unreserved module count disagrees with the codeword layout
    #[error("data region holds {actual} modules, layout requires {expected}")]
    InternalSizeMismatch {
        /// Modules the layout requires
        expected: usize,
        /// Unreserved modules in the skeleton
        actual: usize,
    },
    /// A module was left unwritten when the symbol was frozen
    #[error("module ({x}, {y}) was never written")]
    UnwrittenModule {
        /// Column
        x: usize,
        /// Row
        y: usize,
    },
}

/// Failures of the rendering collaborators
#[derive(Error, Debug)]
pub enum RenderError {
    /// Colour string could not be parsed
    #[error("invalid colour {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),
    /// Raster encoding or file output failed
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

//! QR code symbol encoding
//!
//! Pipeline, leaves first:
//! - Bitstream construction and version selection
//! - GF(256) arithmetic and Reed-Solomon error correction
//! - Function-pattern skeleton and zigzag data placement
//! - Mask scoring and format information

/// Byte-mode bitstream construction and padding
pub mod bitstream;
/// Format and version information (BCH words and placement)
pub mod format;
/// GF(256) field arithmetic
pub mod gf256;
/// Mask application and penalty scoring
pub mod mask;
/// Zigzag data placement
pub mod placement;
/// Reed-Solomon error correction codewords
pub mod reed_solomon;
/// Function-pattern skeleton builder
pub mod skeleton;
/// Version selection and layout tables
pub mod version;

use tracing::debug;

use crate::error::EncodeError;
use crate::models::{ECLevel, QrSymbol};
use bitstream::{BitSequence, encode_data_codewords};
use format::write_format_info;
use mask::{apply_mask, select_mask};
use placement::place_data;
use reed_solomon::interleave_with_ecc;
use skeleton::build_skeleton;
use version::select_version;

/// Encode raw bytes into a level-L symbol of the smallest fitting version
pub fn encode_symbol(data: &[u8]) -> Result<QrSymbol, EncodeError> {
    let ec_level = ECLevel::L;
    let spec = select_version(data.len())?;
    debug!(
        bytes = data.len(),
        version = spec.version.number(),
        blocks = spec.num_blocks,
        "selected version"
    );

    let data_codewords = encode_data_codewords(data, &spec)?;
    let codewords = interleave_with_ecc(&data_codewords, &spec)?;
    debug!(
        data = spec.data_codewords,
        ecc = spec.ec_codewords,
        "computed error correction"
    );

    let mut matrix = build_skeleton(&spec);
    let bits = BitSequence::from_codewords(&codewords);
    place_data(&mut matrix, bits.as_bits(), &spec)?;

    let chosen = select_mask(&matrix, ec_level);
    apply_mask(&mut matrix, chosen.mask);
    write_format_info(&mut matrix, ec_level, chosen.mask);
    debug!(
        mask = chosen.mask.id(),
        penalty = chosen.penalty,
        "committed mask"
    );

    Ok(QrSymbol {
        version: spec.version,
        error_correction: ec_level,
        mask_pattern: chosen.mask,
        penalty: chosen.penalty,
        modules: matrix.to_bit_matrix()?,
    })
}

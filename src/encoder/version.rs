//! Version selection and per-version layout tables (error correction level L)

use crate::error::EncodeError;
use crate::models::{MAX_VERSION, Version};

// Tables from the QR Code specification (Model 2), level L. Index: version.
const TOTAL_CODEWORDS: [u16; 11] = [0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346];
const ECC_CODEWORDS_PER_BLOCK: [u8; 11] = [0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18];
const NUM_ERROR_CORRECTION_BLOCKS: [u8; 11] = [0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4];

/// Largest byte-mode payload that fits version 10-L
pub const MAX_PAYLOAD_BYTES: usize = 271;

/// Mode indicator width in bits
const MODE_BITS: usize = 4;

/// Immutable layout record for one version at level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    /// Symbol version
    pub version: Version,
    /// Data codewords across all blocks
    pub data_codewords: usize,
    /// Error correction codewords across all blocks
    pub ec_codewords: usize,
    /// Error correction codewords per block (generator polynomial degree)
    pub ec_codewords_per_block: usize,
    /// Number of Reed-Solomon blocks
    pub num_blocks: usize,
}

impl VersionSpec {
    /// Layout record for a version
    pub fn for_version(version: Version) -> Self {
        let v = version.number() as usize;
        let blocks = NUM_ERROR_CORRECTION_BLOCKS[v] as usize;
        let ecc_per_block = ECC_CODEWORDS_PER_BLOCK[v] as usize;
        let ec_total = blocks * ecc_per_block;
        Self {
            version,
            data_codewords: TOTAL_CODEWORDS[v] as usize - ec_total,
            ec_codewords: ec_total,
            ec_codewords_per_block: ecc_per_block,
            num_blocks: blocks,
        }
    }

    /// Side length in modules
    pub fn module_size(&self) -> usize {
        self.version.size()
    }

    /// Data capacity in bits
    pub fn data_bits(&self) -> usize {
        self.data_codewords * 8
    }

    /// Data plus error correction codewords
    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.ec_codewords
    }

    /// Byte-mode payload capacity (mode and count header subtracted)
    pub fn byte_capacity(&self) -> usize {
        (self.data_bits() - MODE_BITS - self.version.char_count_bits()) / 8
    }

    /// Modules left over after the last codeword
    pub fn remainder_bits(&self) -> usize {
        raw_data_modules(self.version) - self.total_codewords() * 8
    }

    /// Data codeword count of each block, short blocks first
    pub fn block_lengths(&self) -> Vec<usize> {
        let short_len = self.data_codewords / self.num_blocks;
        let long_blocks = self.data_codewords % self.num_blocks;
        (0..self.num_blocks)
            .map(|i| {
                if i < self.num_blocks - long_blocks {
                    short_len
                } else {
                    short_len + 1
                }
            })
            .collect()
    }
}

/// Smallest version whose level-L byte capacity fits `byte_len`
pub fn select_version(byte_len: usize) -> Result<VersionSpec, EncodeError> {
    Version::all()
        .map(VersionSpec::for_version)
        .find(|spec| spec.byte_capacity() >= byte_len)
        .ok_or(EncodeError::TooLong {
            len: byte_len,
            max: MAX_PAYLOAD_BYTES,
        })
}

/// Modules available for codewords once every function pattern is removed
pub fn raw_data_modules(version: Version) -> usize {
    let v = version.number() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if version.has_version_info() {
            result -= 36;
        }
    }
    result
}

/// Alignment pattern center coordinates (shared by rows and columns)
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    debug_assert!(v <= MAX_VERSION as usize);
    let num_align = v / 7 + 2;
    let step = (v * 8 + num_align * 3 + 5) / (num_align * 4 - 4) * 2;

    let mut positions = vec![6usize; num_align];
    let mut pos = version.size() - 7;
    for slot in positions.iter_mut().skip(1).rev() {
        *slot = pos;
        pos -= step;
    }
    positions
}

/// Byte-mode bitstream construction
use crate::encoder::version::VersionSpec;
use crate::error::EncodeError;

/// Byte mode indicator
const MODE_BYTE: u32 = 0b0100;
/// Pad codewords appended alternately after the terminator
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Append-only sequence of bits, MSB-first within each codeword
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<bool>,
}

impl BitSequence {
    /// Create an empty sequence with room for `capacity` bits
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: Vec::with_capacity(capacity),
        }
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    fn len(&self) -> usize {
        self.bits.len()
    }

    /// Bit slice view
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Terminate and pad to exactly `capacity_bits`.
    ///
    /// The terminator is cut short when fewer than four bits remain.
    pub fn pad_to(&mut self, capacity_bits: usize) {
        debug_assert!(capacity_bits % 8 == 0 && self.len() <= capacity_bits);
        let terminator = (capacity_bits - self.len()).min(4);
        self.push_bits(0, terminator);
        let align = (8 - self.len() % 8) % 8;
        self.push_bits(0, align);
        for pad in PAD_CODEWORDS.iter().cycle() {
            if self.len() >= capacity_bits {
                break;
            }
            self.push_bits(*pad as u32, 8);
        }
    }

    /// Pack into codewords; a trailing partial byte is zero-filled
    pub fn to_codewords(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }

    /// Expand codewords into bits, MSB-first
    pub fn from_codewords(codewords: &[u8]) -> Self {
        let mut seq = Self::with_capacity(codewords.len() * 8);
        for &cw in codewords {
            seq.push_bits(cw as u32, 8);
        }
        seq
    }
}

/// Mode indicator, character count and payload bytes (before padding)
pub fn encode_bits(data: &[u8], spec: &VersionSpec) -> Result<BitSequence, EncodeError> {
    let count_bits = spec.version.char_count_bits();
    let needed = 4 + count_bits + data.len() * 8;
    if needed > spec.data_bits() {
        return Err(EncodeError::TooLong {
            len: data.len(),
            max: spec.byte_capacity(),
        });
    }

    let mut bits = BitSequence::with_capacity(spec.data_bits());
    bits.push_bits(MODE_BYTE, 4);
    bits.push_bits(data.len() as u32, count_bits);
    for &byte in data {
        bits.push_bits(byte as u32, 8);
    }
    Ok(bits)
}

/// Full data codeword sequence for `spec`: header, payload, terminator, padding
pub fn encode_data_codewords(data: &[u8], spec: &VersionSpec) -> Result<Vec<u8>, EncodeError> {
    let mut bits = encode_bits(data, spec)?;
    bits.pad_to(spec.data_bits());
    debug_assert_eq!(bits.len(), spec.data_bits());
    Ok(bits.to_codewords())
}

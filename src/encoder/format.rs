/// Format and version information words and their placement
use crate::models::{ECLevel, MaskPattern, SymbolMatrix, Version};

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR mask applied to every format word
const FORMAT_MASK: u16 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Append the BCH remainder of `data` for a generator of degree `degree`
const fn bch_encode(data: u32, generator: u32, degree: u32) -> u32 {
    let mut rem = data;
    let mut i = 0;
    while i < degree {
        rem = (rem << 1) ^ (((rem >> (degree - 1)) & 1) * generator);
        i += 1;
    }
    (data << degree) | (rem & ((1 << degree) - 1))
}

const fn build_format_words(ec_level: ECLevel) -> [u16; 8] {
    let ec_bits = ec_level.format_bits();
    let mut words = [0u16; 8];
    let mut mask = 0;
    while mask < 8 {
        let data = ((ec_bits as u32) << 3) | mask as u32;
        words[mask] = bch_encode(data, FORMAT_GENERATOR, 10) as u16 ^ FORMAT_MASK;
        mask += 1;
    }
    words
}

/// Masked format words for level L, indexed by mask id
const FORMAT_WORDS_L: [u16; 8] = build_format_words(ECLevel::L);

/// 15-bit format word for a level and mask
pub fn format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    match ec_level {
        ECLevel::L => FORMAT_WORDS_L[mask.id() as usize],
    }
}

/// 18-bit version word (versions 7+)
pub fn version_bits(version: Version) -> u32 {
    bch_encode(version.number() as u32, VERSION_GENERATOR, 12)
}

/// Cell of each format bit, bit 0 first: (copy around top-left, split copy)
pub fn format_info_cells(size: usize) -> [[(usize, usize); 15]; 2] {
    let mut primary = [(0, 0); 15];
    let mut secondary = [(0, 0); 15];
    for (i, cell) in primary.iter_mut().enumerate() {
        *cell = match i {
            0..=5 => (8, i),
            6 => (8, 7),
            7 => (8, 8),
            8 => (7, 8),
            _ => (14 - i, 8),
        };
    }
    for (i, cell) in secondary.iter_mut().enumerate() {
        *cell = if i < 8 {
            (size - 1 - i, 8)
        } else {
            (8, size - 15 + i)
        };
    }
    [primary, secondary]
}

/// Cells of each version bit, bit 0 first: (top-right block, bottom-left block)
pub fn version_info_cells(size: usize) -> impl Iterator<Item = ((usize, usize), (usize, usize))> {
    (0..18).map(move |i| {
        let a = size - 11 + i % 3;
        let b = i / 3;
        ((a, b), (b, a))
    })
}

/// Write both copies of the format word into the reserved strips
pub fn write_format_info(matrix: &mut SymbolMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let bits = format_bits(ec_level, mask);
    for copy in format_info_cells(matrix.size()) {
        for (i, (x, y)) in copy.into_iter().enumerate() {
            matrix.write_reserved(x, y, (bits >> i) & 1 != 0);
        }
    }
}

/// Draw both version information blocks as function modules
pub fn write_version_info(matrix: &mut SymbolMatrix, version: Version) {
    if !version.has_version_info() {
        return;
    }
    let bits = version_bits(version);
    for (i, (top_right, bottom_left)) in version_info_cells(matrix.size()).enumerate() {
        let dark = (bits >> i) & 1 != 0;
        matrix.set_function(top_right.0, top_right.1, dark);
        matrix.set_function(bottom_left.0, bottom_left.1, dark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_words_level_l() {
        let expected = [
            0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976,
        ];
        for (mask, &word) in MaskPattern::ALL.iter().zip(expected.iter()) {
            assert_eq!(format_bits(ECLevel::L, *mask), word, "mask {}", mask.id());
        }
    }

    #[test]
    fn test_format_words_are_codewords() {
        // Unmasked words must be divisible by the generator
        for mask in MaskPattern::ALL {
            let word = (format_bits(ECLevel::L, mask) ^ FORMAT_MASK) as u32;
            let mut rem = word;
            for shift in (0..5).rev() {
                if rem & (1 << (shift + 10)) != 0 {
                    rem ^= FORMAT_GENERATOR << shift;
                }
            }
            assert_eq!(rem, 0);
        }
    }

    #[test]
    fn test_version_words() {
        let expected = [(7, 0x07C94), (8, 0x085BC), (9, 0x09A99), (10, 0x0A4D3)];
        for (v, word) in expected {
            assert_eq!(version_bits(Version::new(v).unwrap()), word);
        }
    }

    #[test]
    fn test_format_cells_are_distinct() {
        let size = 21;
        let [primary, secondary] = format_info_cells(size);
        let mut all: Vec<_> = primary.iter().chain(secondary.iter()).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 30);
        // Dark module sits just above the bottom-left strip
        assert!(!secondary.contains(&(8, size - 8)));
        assert!(secondary.contains(&(8, size - 7)));
        // Timing row and column stay clear
        assert!(primary.iter().all(|&(x, y)| x != 6 && y != 6));
    }

    #[test]
    fn test_write_format_info_mask_0() {
        let mut matrix = SymbolMatrix::new(21);
        for copy in format_info_cells(21) {
            for (x, y) in copy {
                matrix.reserve(x, y);
            }
        }
        write_format_info(&mut matrix, ECLevel::L, MaskPattern::Pattern0);
        // 0x77C4 = 111011111000100, MSB at row 8 column 0
        let row8: Vec<bool> = [0, 1, 2, 3, 4, 5, 7, 8]
            .iter()
            .map(|&x| matrix.is_dark(x, 8))
            .collect();
        assert_eq!(row8, vec![true, true, true, false, true, true, true, true]);
        // Same MSB at the bottom of column 8
        assert!(matrix.is_dark(8, 20));
        // Bit 0 at the right end of row 8
        assert!(!matrix.is_dark(20, 8));
    }
}

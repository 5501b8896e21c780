/// Data module placement following the zigzag column-pair traversal
use crate::encoder::version::VersionSpec;
use crate::error::EncodeError;
use crate::models::SymbolMatrix;

/// Thread codeword bits into every unreserved cell.
///
/// Column pairs are swept right to left starting at the bottom-right corner,
/// alternating upward and downward; column 6 (timing) is skipped. Within a
/// row the right column of the pair comes first. Cells left over after the
/// last bit are remainder bits and stay light.
pub fn place_data(
    matrix: &mut SymbolMatrix,
    bits: &[bool],
    spec: &VersionSpec,
) -> Result<(), EncodeError> {
    let expected = spec.total_codewords() * 8;
    let available = matrix.unreserved_count();
    if bits.len() != expected || available != expected + spec.remainder_bits() {
        return Err(EncodeError::InternalSizeMismatch {
            expected: expected + spec.remainder_bits(),
            actual: available,
        });
    }

    let dimension = matrix.size();
    let mut stream = bits.iter().copied();
    let mut upward = true;
    let mut col = dimension as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        let (right, left) = (col as usize, col as usize - 1);
        for step in 0..dimension {
            let row = if upward { dimension - 1 - step } else { step };
            for x in [right, left] {
                if !matrix.is_reserved(x, row) {
                    matrix.set_data(x, row, stream.next().unwrap_or(false));
                }
            }
        }

        upward = !upward;
        col -= 2;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::skeleton::build_skeleton;
    use crate::models::{Module, Version};

    fn spec(v: u8) -> VersionSpec {
        VersionSpec::for_version(Version::new(v).unwrap())
    }

    #[test]
    fn test_first_bits_fill_bottom_right_upward() {
        let spec = spec(1);
        let mut matrix = build_skeleton(&spec);
        let mut bits = vec![false; spec.total_codewords() * 8];
        // Pattern 1,0,0,1 over the first four bits
        bits[0] = true;
        bits[3] = true;
        place_data(&mut matrix, &bits, &spec).unwrap();

        assert_eq!(matrix.get(20, 20), Module::Dark);
        assert_eq!(matrix.get(19, 20), Module::Light);
        assert_eq!(matrix.get(20, 19), Module::Light);
        assert_eq!(matrix.get(19, 19), Module::Dark);
    }

    #[test]
    fn test_second_column_pair_runs_downward() {
        let spec = spec(1);
        let mut matrix = build_skeleton(&spec);
        // First pair (columns 20/19) holds 12 rows x 2 = 24 data cells above the format strip
        let mut bits = vec![false; spec.total_codewords() * 8];
        bits[24] = true;
        place_data(&mut matrix, &bits, &spec).unwrap();
        // Next pair starts at the top: row 9 is the first free row below the format strip
        assert_eq!(matrix.get(18, 9), Module::Dark);
        assert_eq!(matrix.get(17, 9), Module::Light);
    }

    #[test]
    fn test_every_unreserved_cell_written() {
        for version in Version::all() {
            let spec = VersionSpec::for_version(version);
            let mut matrix = build_skeleton(&spec);
            let bits = vec![true; spec.total_codewords() * 8];
            place_data(&mut matrix, &bits, &spec).unwrap();
            let size = matrix.size();
            let mut dark_data = 0;
            for y in 0..size {
                for x in 0..size {
                    if !matrix.is_reserved(x, y) {
                        assert_ne!(matrix.get(x, y), Module::Unset);
                        dark_data += matrix.is_dark(x, y) as usize;
                    }
                }
            }
            // Remainder cells stay light
            assert_eq!(dark_data, spec.total_codewords() * 8);
        }
    }

    #[test]
    fn test_wrong_bit_count_is_fatal() {
        let spec = spec(2);
        let mut matrix = build_skeleton(&spec);
        let bits = vec![false; spec.total_codewords() * 8 - 8];
        let err = place_data(&mut matrix, &bits, &spec).unwrap_err();
        assert!(matches!(err, EncodeError::InternalSizeMismatch { .. }));
    }

    #[test]
    fn test_mismatched_skeleton_is_fatal() {
        // Version 1 skeleton with version 2 layout
        let mut matrix = build_skeleton(&spec(1));
        let v2 = spec(2);
        let bits = vec![false; v2.total_codewords() * 8];
        let err = place_data(&mut matrix, &bits, &v2).unwrap_err();
        assert_eq!(
            err,
            EncodeError::InternalSizeMismatch {
                expected: 359,
                actual: 208
            }
        );
    }
}

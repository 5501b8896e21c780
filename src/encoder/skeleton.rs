use crate::encoder::format::{format_info_cells, write_version_info};
use crate::encoder::version::{VersionSpec, alignment_pattern_positions};
use crate::models::SymbolMatrix;

/// Build the function-pattern skeleton for a version.
///
/// Placement order: finders with separators, timing, alignment, format
/// reservation, dark module, version information. A cell reserved by an
/// earlier step is never overwritten by a later one.
pub fn build_skeleton(spec: &VersionSpec) -> SymbolMatrix {
    let size = spec.module_size();
    let mut matrix = SymbolMatrix::new(size);

    // Finder patterns + separators (9x9 areas, clipped to bounds)
    draw_finder(&mut matrix, 3, 3);
    draw_finder(&mut matrix, size - 4, 3);
    draw_finder(&mut matrix, 3, size - 4);

    // Timing patterns (row 6 and column 6)
    for i in 0..size {
        matrix.set_function(i, 6, i % 2 == 0);
        matrix.set_function(6, i, i % 2 == 0);
    }

    // Alignment patterns, skipping the three finder corners
    let align = alignment_pattern_positions(spec.version);
    if let (Some(&first), Some(&last)) = (align.first(), align.last()) {
        for &cy in &align {
            for &cx in &align {
                let in_tl = cx == first && cy == first;
                let in_tr = cx == last && cy == first;
                let in_bl = cx == first && cy == last;
                if in_tl || in_tr || in_bl {
                    continue;
                }
                draw_alignment(&mut matrix, cx, cy);
            }
        }
    }

    // Format info areas, written once the mask is known
    for copy in format_info_cells(size) {
        for (x, y) in copy {
            matrix.reserve(x, y);
        }
    }

    // Dark module
    matrix.set_function(8, size - 8, true);

    // Version info (v7+)
    write_version_info(&mut matrix, spec.version);

    matrix
}

fn draw_finder(matrix: &mut SymbolMatrix, cx: usize, cy: usize) {
    let size = matrix.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let x = cx as isize + dx;
            let y = cy as isize + dy;
            if x < 0 || y < 0 || x >= size || y >= size {
                continue;
            }
            let ring = dx.abs().max(dy.abs());
            matrix.set_function(x as usize, y as usize, ring != 2 && ring != 4);
        }
    }
}

fn draw_alignment(matrix: &mut SymbolMatrix, cx: usize, cy: usize) {
    for dy in 0..5usize {
        for dx in 0..5usize {
            let ring = dx.abs_diff(2).max(dy.abs_diff(2));
            matrix.set_function(cx + dx - 2, cy + dy - 2, ring != 1);
        }
    }
}

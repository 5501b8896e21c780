//! Mask application and penalty scoring
//!
//! Each candidate mask is applied to a copy of the placed matrix together with
//! its own format information, then scored with the four penalty rules:
//! - N1: runs of five or more same-colour modules in a row or column
//! - N2: 2x2 blocks of one colour
//! - N3: finder-like 1:1:3:1:1 sequences bordered by four light modules
//! - N4: deviation of the dark proportion from 50%

use tracing::debug;

use crate::encoder::format::write_format_info;
use crate::models::{ECLevel, MaskPattern, SymbolMatrix};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

const FINDER_LIKE: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];

/// A scored mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskCandidate {
    /// Mask pattern
    pub mask: MaskPattern,
    /// Total penalty (lower is better)
    pub penalty: u32,
}

/// XOR a mask into every unreserved module
pub fn apply_mask(matrix: &mut SymbolMatrix, mask: MaskPattern) {
    let size = matrix.size();
    for y in 0..size {
        for x in 0..size {
            if mask.is_masked(y, x) {
                matrix.flip_data(x, y);
            }
        }
    }
}

/// Score all eight masks against an unmasked, fully placed matrix
pub fn evaluate_masks(matrix: &SymbolMatrix, ec_level: ECLevel) -> [MaskCandidate; 8] {
    MaskPattern::ALL.map(|mask| {
        let mut candidate = matrix.clone();
        apply_mask(&mut candidate, mask);
        write_format_info(&mut candidate, ec_level, mask);
        let penalty = penalty_score(&candidate);
        debug!(mask = mask.id(), penalty, "scored mask candidate");
        MaskCandidate { mask, penalty }
    })
}

/// Mask with the strictly lowest penalty; ties go to the lowest id
pub fn select_mask(matrix: &SymbolMatrix, ec_level: ECLevel) -> MaskCandidate {
    best_candidate(&evaluate_masks(matrix, ec_level))
}

/// Lowest-penalty candidate, earliest wins ties
pub fn best_candidate(candidates: &[MaskCandidate; 8]) -> MaskCandidate {
    let mut best = candidates[0];
    for candidate in &candidates[1..] {
        if candidate.penalty < best.penalty {
            best = *candidate;
        }
    }
    best
}

/// Total penalty of a finished (masked, formatted) matrix
pub fn penalty_score(matrix: &SymbolMatrix) -> u32 {
    let size = matrix.size();
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|y| (0..size).map(|x| matrix.is_dark(x, y)).collect())
        .collect();
    let cols: Vec<Vec<bool>> = (0..size)
        .map(|x| (0..size).map(|y| matrix.is_dark(x, y)).collect())
        .collect();

    let mut penalty = 0;
    for line in rows.iter().chain(cols.iter()) {
        penalty += run_penalty(line);
        penalty += finder_like_penalty(line);
    }
    penalty += block_penalty(&rows);
    penalty += balance_penalty(matrix.dark_count(), size * size);
    penalty
}

/// N1 for a single row or column
pub fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut run = 0u32;
    let mut prev = None;
    for &module in line {
        if Some(module) == prev {
            run += 1;
        } else {
            if run >= 5 {
                penalty += PENALTY_N1 + (run - 5);
            }
            run = 1;
            prev = Some(module);
        }
    }
    if run >= 5 {
        penalty += PENALTY_N1 + (run - 5);
    }
    penalty
}

/// N2 over the whole grid
pub fn block_penalty(rows: &[Vec<bool>]) -> u32 {
    let mut penalty = 0;
    for pair in rows.windows(2) {
        let (top, bottom) = (&pair[0], &pair[1]);
        for x in 0..top.len().saturating_sub(1) {
            let color = top[x];
            if top[x + 1] == color && bottom[x] == color && bottom[x + 1] == color {
                penalty += PENALTY_N2;
            }
        }
    }
    penalty
}

/// N3 for a single row or column, treating the area outside the symbol as light
pub fn finder_like_penalty(line: &[bool]) -> u32 {
    let mut padded = Vec::with_capacity(line.len() + 8);
    padded.extend_from_slice(&[false; 4]);
    padded.extend_from_slice(line);
    padded.extend_from_slice(&[false; 4]);

    let mut penalty = 0;
    for window in padded.windows(FINDER_LIKE.len()) {
        let forward = window.iter().eq(FINDER_LIKE.iter());
        let backward = window.iter().eq(FINDER_LIKE.iter().rev());
        if forward || backward {
            penalty += PENALTY_N3;
        }
    }
    penalty
}

/// N4: ten points per full 5% step away from a 50% dark ratio
pub fn balance_penalty(dark: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let deviation = (dark * 20).abs_diff(total * 10);
    (deviation / total) as u32 * PENALTY_N4
}

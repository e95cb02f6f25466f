//! Construction of vertically symmetric grids
//!
//! Every family fills the left half by its own rule and then copies column
//! `j` of the right half from column `size - 1 - j`. Only
//! [`PatternType::VerticalSymmetry`] consumes random draws, one per left-half
//! cell in row-major order.

use crate::io::error::{GenerationError, Result};
use crate::pattern::model::{Cell, PatternType};
use ndarray::Array2;
use rand::Rng;

/// Reject sizes that cannot be split into two mirrored halves
///
/// # Errors
///
/// Returns [`GenerationError::InvalidGridSize`] for zero or odd sizes
pub fn ensure_even_grid_size(grid_size: usize) -> Result<()> {
    if grid_size == 0 || grid_size % 2 != 0 {
        return Err(GenerationError::InvalidGridSize { grid_size });
    }
    Ok(())
}

/// Build a complete symmetric pattern for the given family
///
/// # Errors
///
/// Returns an error if:
/// - `grid_size` is zero or odd
/// - The mirrored result fails the symmetry check
pub fn build_full_pattern<R: Rng + ?Sized>(
    pattern_type: PatternType,
    grid_size: usize,
    rng: &mut R,
) -> Result<Array2<Cell>> {
    ensure_even_grid_size(grid_size)?;

    let mid = grid_size / 2;
    let mut pattern = Array2::from_elem((grid_size, grid_size), Cell::Empty);

    for row in 0..grid_size {
        for col in 0..mid {
            let cell = left_half_cell(pattern_type, row, col, mid, rng);
            if let Some(slot) = pattern.get_mut((row, col)) {
                *slot = cell;
            }
        }
    }

    mirror_left_half(&mut pattern);
    verify_symmetry(&pattern)?;

    Ok(pattern)
}

fn left_half_cell<R: Rng + ?Sized>(
    pattern_type: PatternType,
    row: usize,
    col: usize,
    mid: usize,
    rng: &mut R,
) -> Cell {
    match pattern_type {
        PatternType::VerticalSymmetry => Cell::from_filled(rng.random_bool(0.5)),
        PatternType::VerticalSymmetryCheckerboard => Cell::from_filled((row + col) % 2 == 1),
        PatternType::VerticalSymmetryStripes => Cell::from_filled(row % 2 == 1),
        PatternType::VerticalSymmetryIncrement => Cell::from_filled(col < (row + 1).min(mid)),
    }
}

/// Overwrite the right half with the reflection of the left half
pub fn mirror_left_half(pattern: &mut Array2<Cell>) {
    let (rows, cols) = pattern.dim();
    let mid = cols / 2;

    for row in 0..rows {
        for col in mid..cols {
            let mirror_col = cols - 1 - col;
            let source = pattern.get((row, mirror_col)).copied().unwrap_or_default();
            if let Some(slot) = pattern.get_mut((row, col)) {
                *slot = source;
            }
        }
    }
}

/// Check the mirror invariant across the vertical centerline
///
/// # Errors
///
/// Returns [`GenerationError::SymmetryViolation`] naming the first mismatched pair
pub fn verify_symmetry(pattern: &Array2<Cell>) -> Result<()> {
    let (rows, cols) = pattern.dim();
    let mid = cols / 2;

    for row in 0..rows {
        for col in 0..mid {
            let mirror_col = cols - 1 - col;
            if pattern.get((row, col)) != pattern.get((row, mirror_col)) {
                return Err(GenerationError::SymmetryViolation {
                    row,
                    col,
                    mirror_col,
                });
            }
        }
    }

    Ok(())
}

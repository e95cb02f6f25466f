//! Pattern state: cell values, families, difficulty policy and the puzzle definition
//!
//! A [`PatternSpec`] is assembled once and never mutated afterwards. Its
//! constructor derives the incomplete grid from the full grid so the two can
//! never disagree outside the missing positions.

use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Grid coordinate as (row, column)
pub type Position = (usize, usize);

/// State of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nothing drawn
    #[default]
    Empty,
    /// Dark square
    Filled,
    /// Removed from the puzzle, only present in incomplete grids
    Missing,
}

impl Cell {
    /// Numeric encoding: empty 0, filled 1, missing -1
    pub const fn value(self) -> i8 {
        match self {
            Self::Empty => 0,
            Self::Filled => 1,
            Self::Missing => -1,
        }
    }

    /// Map a boolean fill decision to a cell
    pub const fn from_filled(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }

    /// Whether the cell renders as a dark square
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled)
    }
}

/// Generation rule applied to the left half before mirroring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternType {
    /// Independent coin flip per left-half cell
    VerticalSymmetry,
    /// Alternating cells, value `(row + col) % 2`
    VerticalSymmetryCheckerboard,
    /// Whole rows alternate, odd rows filled
    VerticalSymmetryStripes,
    /// Row `i` fills its first `i + 1` left-half cells
    VerticalSymmetryIncrement,
}

impl PatternType {
    /// Every family, in selection order
    pub const ALL: [Self; 4] = [
        Self::VerticalSymmetry,
        Self::VerticalSymmetryCheckerboard,
        Self::VerticalSymmetryStripes,
        Self::VerticalSymmetryIncrement,
    ];

    /// Stable identifier used in signatures, prompts and metadata
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VerticalSymmetry => "vertical_symmetry",
            Self::VerticalSymmetryCheckerboard => "vertical_symmetry_checkerboard",
            Self::VerticalSymmetryStripes => "vertical_symmetry_stripes",
            Self::VerticalSymmetryIncrement => "vertical_symmetry_increment",
        }
    }

    /// Look up a family by its identifier
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|pattern_type| pattern_type.as_str() == identifier)
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Puzzle difficulty, controlling grid size and how much of the right half is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Small grids, 30-40% of the right half missing
    Easy,
    /// Medium grids, 50-60% of the right half missing
    #[default]
    Medium,
    /// Large grids, 70-80% of the right half missing
    Hard,
}

impl Difficulty {
    /// Grid sizes drawn from for this difficulty
    pub const fn grid_sizes(self) -> &'static [usize] {
        match self {
            Self::Easy => &[4, 6],
            Self::Medium => &[6, 8],
            Self::Hard => &[8, 10],
        }
    }

    /// Fraction of right-half cells to remove as (low, high)
    pub const fn missing_ratio(self) -> (f64, f64) {
        match self {
            Self::Easy => (0.3, 0.4),
            Self::Medium => (0.5, 0.6),
            Self::Hard => (0.7, 0.8),
        }
    }

    /// Inclusive range of cells to remove from a right half of `right_half_cells`
    ///
    /// Both ends are floored, so small halves may collapse to a single value.
    pub fn missing_count_range(self, right_half_cells: usize) -> (usize, usize) {
        let (low, high) = self.missing_ratio();
        let cells = right_half_cells as f64;
        let min = (cells * low).floor() as usize;
        let max = (cells * high).floor() as usize;
        (min.min(right_half_cells), max.min(right_half_cells))
    }

    /// Every difficulty, easiest first
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase name used in metadata
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Look up a difficulty by its lowercase name
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str() == identifier)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of cells in the right half of a square grid
pub const fn right_half_cells(grid_size: usize) -> usize {
    grid_size * (grid_size - grid_size / 2)
}

/// Every right-half coordinate in row-major order
pub fn right_half_positions(grid_size: usize) -> Vec<Position> {
    let mid = grid_size / 2;
    (0..grid_size)
        .flat_map(|row| (mid..grid_size).map(move |col| (row, col)))
        .collect()
}

/// One symmetry completion puzzle: the full grid, the masked grid and what was masked
#[derive(Debug, Clone)]
pub struct PatternSpec {
    pattern_type: PatternType,
    grid_size: usize,
    full_pattern: Array2<Cell>,
    incomplete_pattern: Array2<Cell>,
    missing_positions: Vec<Position>,
    difficulty: Difficulty,
}

impl PatternSpec {
    /// Assemble a puzzle, deriving the incomplete grid from the full one
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The full pattern is not square
    /// - The full pattern contains missing cells
    /// - A missing position lies outside the right half or is repeated
    pub fn new(
        pattern_type: PatternType,
        difficulty: Difficulty,
        full_pattern: Array2<Cell>,
        missing_positions: Vec<Position>,
    ) -> Result<Self> {
        let (rows, cols) = full_pattern.dim();
        if rows != cols {
            return Err(invalid_parameter(
                "full_pattern",
                &format!("{rows}x{cols}"),
                &"pattern must be square",
            ));
        }
        if full_pattern.iter().any(|&cell| cell == Cell::Missing) {
            return Err(invalid_parameter(
                "full_pattern",
                &pattern_type,
                &"full pattern cannot contain missing cells",
            ));
        }

        let grid_size = rows;
        let mid = grid_size / 2;
        let mut incomplete_pattern = full_pattern.clone();
        let mut seen = HashSet::with_capacity(missing_positions.len());

        for &(row, col) in &missing_positions {
            if col < mid || !seen.insert((row, col)) {
                return Err(invalid_parameter(
                    "missing_positions",
                    &format!("({row}, {col})"),
                    &"missing cells must be distinct right-half coordinates",
                ));
            }
            let cell = incomplete_pattern.get_mut((row, col)).ok_or_else(|| {
                invalid_parameter(
                    "missing_positions",
                    &format!("({row}, {col})"),
                    &format!("outside a {grid_size}x{grid_size} grid"),
                )
            })?;
            *cell = Cell::Missing;
        }

        Ok(Self {
            pattern_type,
            grid_size,
            full_pattern,
            incomplete_pattern,
            missing_positions,
            difficulty,
        })
    }

    /// Family the full pattern was built from
    pub const fn pattern_type(&self) -> PatternType {
        self.pattern_type
    }

    /// Side length of the square grid
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Complete ground truth grid
    pub const fn full_pattern(&self) -> &Array2<Cell> {
        &self.full_pattern
    }

    /// Grid shown to the solver, with [`Cell::Missing`] at every removed cell
    pub const fn incomplete_pattern(&self) -> &Array2<Cell> {
        &self.incomplete_pattern
    }

    /// Removed coordinates in the order they were sampled
    pub fn missing_positions(&self) -> &[Position] {
        &self.missing_positions
    }

    /// Difficulty the pattern was assembled for
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Grid a renderer should draw for the requested frame
    pub const fn pattern_for_frame(&self, show_missing: bool) -> &Array2<Cell> {
        if show_missing {
            &self.incomplete_pattern
        } else {
            &self.full_pattern
        }
    }

    /// Content fingerprint used for deduplication within a run
    ///
    /// Missing positions are sorted first, so the sampling order does not
    /// affect the result.
    pub fn signature(&self) -> String {
        let mut sorted = self.missing_positions.clone();
        sorted.sort_unstable();

        let missing = sorted
            .iter()
            .map(|(row, col)| format!("{row},{col}"))
            .collect::<Vec<_>>()
            .join(",");

        let cells = self
            .full_pattern
            .iter()
            .map(|cell| cell.value().to_string())
            .collect::<String>();

        format!(
            "{}-{}-{missing}-{cells}",
            self.pattern_type, self.grid_size
        )
    }
}


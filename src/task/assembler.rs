//! One task-generation cycle: parameter draws, pattern build, masking and deduplication
//!
//! Random draws happen in a fixed order per attempt: grid size, family,
//! family cells, missing count, missing positions. Keeping that order is what
//! makes a seeded run reproducible.

use crate::io::configuration::MAX_DUPLICATE_RETRIES;
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::builder::build_full_pattern;
use crate::pattern::model::{
    Difficulty, PatternSpec, PatternType, right_half_cells, right_half_positions,
};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

/// Signatures of every task accepted so far in one run
///
/// Owned by the run and lent mutably to each generation call, so access is
/// strictly sequential.
#[derive(Debug, Default, Clone)]
pub struct SeenSignatures {
    signatures: HashSet<String>,
}

impl SeenSignatures {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a signature was already recorded
    pub fn contains(&self, signature: &str) -> bool {
        self.signatures.contains(signature)
    }

    /// Record a signature, returning `false` if it was already present
    pub fn insert(&mut self, signature: String) -> bool {
        self.signatures.insert(signature)
    }

    /// Number of distinct signatures recorded
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    /// Whether nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

/// Result of a generation cycle
#[derive(Debug, Clone)]
pub struct AssembledTask {
    /// The accepted pattern
    pub spec: PatternSpec,
    /// Signature recorded for `spec`
    pub signature: String,
    /// Patterns built, including the first one
    pub attempts: usize,
    /// Whether every attempt collided and a duplicate was accepted
    pub duplicate: bool,
}

/// Builds masked symmetric patterns for a fixed difficulty
#[derive(Debug, Clone, Copy)]
pub struct TaskAssembler {
    difficulty: Difficulty,
    max_retries: usize,
}

impl TaskAssembler {
    /// Create an assembler with the default retry budget
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            max_retries: MAX_DUPLICATE_RETRIES,
        }
    }

    /// Override how many extra attempts a colliding task gets
    pub const fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Difficulty every pattern is assembled for
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Draw parameters, build a full pattern and mask part of its right half
    ///
    /// # Errors
    ///
    /// Returns an error if pattern construction or masking fails
    pub fn create_pattern<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<PatternSpec> {
        let grid_size = *self
            .difficulty
            .grid_sizes()
            .choose(rng)
            .ok_or_else(|| {
                invalid_parameter("difficulty", &self.difficulty, &"no grid sizes configured")
            })?;
        let pattern_type = *PatternType::ALL
            .choose(rng)
            .ok_or_else(|| invalid_parameter("pattern_type", &"", &"no pattern families"))?;

        let full_pattern = build_full_pattern(pattern_type, grid_size, rng)?;

        let right_half = right_half_cells(grid_size);
        let (min_missing, max_missing) = self.difficulty.missing_count_range(right_half);
        let num_missing = rng.random_range(min_missing..=max_missing).min(right_half);

        let mut candidates = right_half_positions(grid_size);
        let (selected, _) = candidates.partial_shuffle(rng, num_missing);
        let missing_positions = selected.to_vec();

        log::debug!(
            "Built {pattern_type} {grid_size}x{grid_size} pattern with {num_missing}/{right_half} right-half cells missing"
        );

        PatternSpec::new(pattern_type, self.difficulty, full_pattern, missing_positions)
    }

    /// Generate one task, retrying on signature collisions, and record its signature
    ///
    /// The first non-colliding attempt wins. When all retries collide the last
    /// attempt is accepted anyway and flagged as a duplicate.
    ///
    /// # Errors
    ///
    /// Returns an error if any attempt fails to build a valid pattern
    pub fn generate_task<R: Rng + ?Sized>(
        &self,
        task_id: &str,
        seen: &mut SeenSignatures,
        rng: &mut R,
    ) -> Result<AssembledTask> {
        let mut spec = self.create_pattern(rng)?;
        let mut signature = spec.signature();
        let mut attempts = 1;

        if seen.contains(&signature) {
            for _ in 0..self.max_retries {
                spec = self.create_pattern(rng)?;
                signature = spec.signature();
                attempts += 1;
                if !seen.contains(&signature) {
                    break;
                }
            }
        }

        let duplicate = !seen.insert(signature.clone());
        if duplicate {
            log::warn!(
                "Task {task_id}: accepting duplicate pattern after {attempts} attempts ({})",
                spec.pattern_type()
            );
        }

        Ok(AssembledTask {
            spec,
            signature,
            attempts,
            duplicate,
        })
    }
}

//! Instruction text shown alongside each puzzle

use crate::pattern::model::PatternType;
use rand::Rng;
use rand::seq::IndexedRandom;

const DEFAULT_PROMPTS: [&str; 3] = [
    "Complete this pattern by filling in the missing grid cells on the right side. Observe the left half of the pattern and recognize that it should be mirrored to create a symmetric pattern. Fill in the right half by mirroring the left half across the vertical center line. Keep the camera view fixed in the top-down perspective and maintain all existing cells unchanged. Stop the video when the symmetric pattern is fully completed.",
    "Fill in the missing cells on the right side of the grid to complete the symmetric pattern. The left half shows the pattern that should be mirrored to the right. Mirror the left half across the vertical center line to complete the pattern. Maintain a fixed top-down camera view and keep all existing cells unchanged. Stop when the pattern is complete.",
    "Complete the symmetric pattern by mirroring the left half to the right. Observe the pattern in the left half and fill in the missing cells on the right side to create a vertically symmetric pattern. Keep the camera fixed in top-down view and preserve all existing cells. Stop the video when the symmetric pattern is fully completed.",
];

const VERTICAL_SYMMETRY_PROMPTS: [&str; 1] = [
    "Complete this pattern by filling in the missing grid cells on the right side. Observe the left half of the pattern and recognize that it should be mirrored to create a symmetric pattern. Fill in the right half by mirroring the left half across the vertical center line. Keep the camera view fixed in the top-down perspective and maintain all existing cells unchanged. Stop the video when the symmetric pattern is fully completed.",
];

const CHECKERBOARD_PROMPTS: [&str; 1] = [
    "Complete the checkerboard pattern by filling in the missing cells on the right side. The left half shows a checkerboard pattern that should be mirrored to the right. Mirror the left half across the vertical center line to complete the symmetric checkerboard. Keep the camera fixed in top-down view and preserve all existing cells. Stop when the pattern is complete.",
];

const STRIPES_PROMPTS: [&str; 1] = [
    "Complete the striped pattern by filling in the missing cells on the right side. The left half shows horizontal stripes that should be mirrored to the right. Mirror the left half across the vertical center line to complete the symmetric striped pattern. Keep the camera fixed in top-down view and preserve all existing cells. Stop when the pattern is complete.",
];

const INCREMENT_PROMPTS: [&str; 1] = [
    "Complete the incrementing pattern by filling in the missing cells on the right side. The left half shows a pattern where each row has an incrementing number of filled cells. Mirror the left half across the vertical center line to complete the symmetric incrementing pattern. Keep the camera fixed in top-down view and preserve all existing cells. Stop when the pattern is complete.",
];

/// Prompt pool, one per pattern family plus a generic fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptPool {
    /// Generic wording used for unrecognized identifiers
    #[default]
    Default,
    /// Wording specific to one family
    Family(PatternType),
}

impl PromptPool {
    /// Resolve an identifier, falling back to [`PromptPool::Default`] when unknown
    pub fn from_identifier(identifier: &str) -> Self {
        PatternType::from_identifier(identifier).map_or(Self::Default, Self::Family)
    }

    /// Every prompt in the pool, never empty
    pub const fn prompts(self) -> &'static [&'static str] {
        match self {
            Self::Default => &DEFAULT_PROMPTS,
            Self::Family(PatternType::VerticalSymmetry) => &VERTICAL_SYMMETRY_PROMPTS,
            Self::Family(PatternType::VerticalSymmetryCheckerboard) => &CHECKERBOARD_PROMPTS,
            Self::Family(PatternType::VerticalSymmetryStripes) => &STRIPES_PROMPTS,
            Self::Family(PatternType::VerticalSymmetryIncrement) => &INCREMENT_PROMPTS,
        }
    }

    /// Pick one prompt uniformly from the pool
    pub fn select<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        self.prompts()
            .choose(rng)
            .copied()
            .unwrap_or(DEFAULT_PROMPTS[0])
    }
}

impl From<PatternType> for PromptPool {
    fn from(pattern_type: PatternType) -> Self {
        Self::Family(pattern_type)
    }
}

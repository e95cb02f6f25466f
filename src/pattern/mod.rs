//! Symmetric pattern model and construction
//!
//! This module contains pattern-related functionality including:
//! - Cell states, pattern families and difficulty policy
//! - The immutable puzzle definition and its signature
//! - Family rules, mirroring and symmetry validation

/// Mirrored grid construction and validation
pub mod builder;
/// Pattern state and deduplication signatures
pub mod model;

pub use model::{Cell, Difficulty, PatternSpec, PatternType, Position};

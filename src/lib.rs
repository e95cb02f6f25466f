//! Dataset generator for symmetry completion puzzles
//!
//! Each task is a vertically symmetric grid with part of its right half
//! removed, paired with an instruction prompt, a first and final frame, and
//! an optional animation of the missing cells filling in.

#![forbid(unsafe_code)]

/// Input/output operations, rendering and error handling
pub mod io;
/// Symmetric pattern model and construction
pub mod pattern;
/// Task assembly, deduplication and prompts
pub mod task;

pub use io::error::{GenerationError, Result};

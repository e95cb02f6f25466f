//! Task generation on top of the pattern model
//!
//! This module contains task-related functionality including:
//! - Parameter draws, masking and signature deduplication
//! - Prompt pools per pattern family
//! - Task pair assembly with rendered frames and optional video

/// Masking and deduplication for one generation cycle
pub mod assembler;
/// Task pairs and the run-level generator
pub mod generator;
/// Instruction prompts
pub mod prompts;

pub use assembler::{AssembledTask, SeenSignatures, TaskAssembler};
pub use generator::{TaskGenerator, TaskMetadata, TaskPair};

//! Outer surfaces: command line, configuration, rendering, video and dataset output

/// Command-line arguments and the end-to-end dataset runner
pub mod cli;
/// Generation constants and run configuration
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Per-task dataset directories
pub mod output;
/// Progress display for generation runs
pub mod progress;
/// Raster rendering of pattern frames
pub mod render;
/// Ground truth animation frames and encoding
pub mod video;

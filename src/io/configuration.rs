//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use crate::pattern::Difficulty;
use std::path::PathBuf;

// Dataset identity
/// Domain tag attached to every task
pub const DEFAULT_DOMAIN: &str = "symmetry_completion";
/// Default destination directory for generated datasets
pub const DEFAULT_OUTPUT_DIR: &str = "data/questions";

// Canvas settings
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 768;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 512;
/// Fraction of the shorter canvas side covered by the grid
pub const GRID_CANVAS_FRACTION: f64 = 0.6;
/// Width of the border drawn around each cell
pub const GRID_LINE_WIDTH: u32 = 2;
/// Gap between a cell border and its fill square
pub const FILL_INSET: u32 = 2;

// Palette
/// Canvas background
pub const BACKGROUND_COLOR: [u8; 3] = [0xf8, 0xfa, 0xfc];
/// Cell border
pub const GRID_LINE_COLOR: [u8; 3] = [0xcb, 0xd5, 0xe1];
/// Filled cell
pub const FILL_COLOR: [u8; 3] = [0x1e, 0x29, 0x3b];
/// Empty cell
pub const EMPTY_COLOR: [u8; 3] = [0xff, 0xff, 0xff];

// Video settings
/// Default ground truth animation frame rate
pub const DEFAULT_VIDEO_FPS: u32 = 10;
/// Frames the animation rests on its first and last image
pub const HOLD_FRAMES: usize = 5;
/// Crossfade frames between first and final image
pub const TRANSITION_FRAMES: usize = 25;

// Task assembly
/// Extra attempts made when a task duplicates an earlier signature
pub const MAX_DUPLICATE_RETRIES: usize = 10;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Runtime settings for one dataset generation run
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Number of tasks to generate
    pub num_samples: usize,
    /// Domain tag written into every task
    pub domain: String,
    /// Difficulty applied to every task of the run
    pub difficulty: Difficulty,
    /// Seed for reproducible runs, `None` draws from the OS
    pub random_seed: Option<u64>,
    /// Destination directory for the dataset
    pub output_dir: PathBuf,
    /// Canvas size as (width, height)
    pub image_size: (u32, u32),
    /// Whether ground truth animations are produced
    pub generate_videos: bool,
    /// Animation frame rate
    pub video_fps: u32,
    /// Suppress progress output
    pub quiet: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            num_samples: 1,
            domain: DEFAULT_DOMAIN.to_string(),
            difficulty: Difficulty::default(),
            random_seed: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_size: (DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT),
            generate_videos: true,
            video_fps: DEFAULT_VIDEO_FPS,
            quiet: false,
        }
    }
}

impl GenerationConfig {
    /// Reject settings no run can satisfy
    ///
    /// # Errors
    ///
    /// Returns an error if the sample count, a canvas side or the frame rate is zero
    pub fn validate(&self) -> Result<()> {
        if self.num_samples == 0 {
            return Err(invalid_parameter(
                "num_samples",
                &self.num_samples,
                &"at least one sample is required",
            ));
        }
        let (width, height) = self.image_size;
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "image_size",
                &format!("{width}x{height}"),
                &"canvas sides must be non-zero",
            ));
        }
        if self.video_fps == 0 {
            return Err(invalid_parameter(
                "video_fps",
                &self.video_fps,
                &"frame rate must be non-zero",
            ));
        }
        Ok(())
    }

    /// Directory that holds every task folder of this run
    pub fn task_root(&self) -> PathBuf {
        self.output_dir.join(format!("{}_task", self.domain))
    }
}

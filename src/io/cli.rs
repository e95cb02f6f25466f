//! Command-line interface for generating symmetry completion datasets

use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DOMAIN, DEFAULT_OUTPUT_DIR,
    DEFAULT_VIDEO_FPS, GenerationConfig,
};
use crate::io::error::Result;
use crate::io::output::OutputWriter;
use crate::pattern::Difficulty;
use crate::task::generator::TaskGenerator;
use clap::Parser;
use clap::builder::{PossibleValuesParser, TypedValueParser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "symmetry-completion")]
#[command(
    author,
    version,
    about = "Generate symmetry completion task datasets"
)]
/// Command-line arguments for the dataset generator
pub struct Cli {
    /// Number of task samples to generate
    #[arg(short, long)]
    pub num_samples: usize,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Disable ground truth video generation
    #[arg(long)]
    pub no_videos: bool,

    /// Puzzle difficulty
    #[arg(short, long, default_value_t = Difficulty::Medium, value_parser = difficulty_parser())]
    pub difficulty: Difficulty,

    /// Canvas width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Ground truth video frame rate
    #[arg(long, default_value_t = DEFAULT_VIDEO_FPS)]
    pub fps: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

// Restricted to the known names, so the lookup cannot miss
fn difficulty_parser() -> impl TypedValueParser<Value = Difficulty> {
    PossibleValuesParser::new(Difficulty::ALL.map(Difficulty::as_str))
        .map(|name| Difficulty::from_identifier(&name).unwrap_or_default())
}

impl Cli {
    /// Check if ground truth videos should be produced
    pub const fn generate_videos(&self) -> bool {
        !self.no_videos
    }

    /// Translate arguments into a run configuration
    pub fn to_config(&self) -> GenerationConfig {
        GenerationConfig {
            num_samples: self.num_samples,
            domain: DEFAULT_DOMAIN.to_string(),
            difficulty: self.difficulty,
            random_seed: self.seed,
            output_dir: self.output.clone(),
            image_size: (self.width, self.height),
            generate_videos: self.generate_videos(),
            video_fps: self.fps,
            quiet: self.quiet,
        }
    }
}

/// Runs generation end to end: validate, generate, write
pub struct DatasetRunner {
    config: GenerationConfig,
}

impl DatasetRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: &Cli) -> Self {
        Self::from_config(cli.to_config())
    }

    /// Create a runner from an explicit configuration
    pub const fn from_config(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Generate and persist the dataset, returning the written task directories
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Generation hits a fatal error
    /// - Writing any task fails
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        self.config.validate()?;
        let start_time = Instant::now();

        log::info!(
            "Generating {} {} tasks (seed: {})",
            self.config.num_samples,
            self.config.difficulty,
            self.config
                .random_seed
                .map_or_else(|| String::from("random"), |seed| seed.to_string())
        );

        // Scratch animations live as long as the generator, so it must outlive the writes
        let mut generator = TaskGenerator::new(self.config.clone());
        let tasks = generator.generate_dataset()?;

        let writer = OutputWriter::new(&self.config.output_dir);
        let written = writer.write_dataset(&tasks)?;

        log::info!(
            "Generated {} tasks in {} ({:.1?})",
            written.len(),
            self.config.task_root().display(),
            start_time.elapsed()
        );

        Ok(written)
    }
}

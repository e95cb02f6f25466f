//! Task pair assembly: pattern, rendered frames, optional animation and prompt

use crate::io::configuration::{GenerationConfig, HOLD_FRAMES, TRANSITION_FRAMES};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::render::{FrameRenderer, GridRenderer};
use crate::io::video::{
    GifVideoEncoder, VideoEncoder, create_scratch_dir, filling_animation_frames,
    scratch_video_path,
};
use crate::pattern::model::{Difficulty, PatternSpec, PatternType, Position};
use crate::task::assembler::{SeenSignatures, TaskAssembler};
use crate::task::prompts::PromptPool;
use image::RgbImage;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Descriptive record written next to each task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskMetadata {
    /// Task identifier
    pub task_id: String,
    /// Domain tag
    pub domain: String,
    /// Difficulty the pattern was assembled for
    pub difficulty: Difficulty,
    /// Pattern family
    pub pattern_type: PatternType,
    /// Side length of the grid
    pub grid_size: usize,
    /// Number of removed cells
    pub missing_count: usize,
    /// Removed cells, sorted
    pub missing_positions: Vec<Position>,
    /// Deduplication fingerprint
    pub signature: String,
}

impl TaskMetadata {
    /// Describe an assembled pattern
    pub fn from_spec(task_id: &str, domain: &str, spec: &PatternSpec, signature: String) -> Self {
        let mut missing_positions = spec.missing_positions().to_vec();
        missing_positions.sort_unstable();

        Self {
            task_id: task_id.to_string(),
            domain: domain.to_string(),
            difficulty: spec.difficulty(),
            pattern_type: spec.pattern_type(),
            grid_size: spec.grid_size(),
            missing_count: missing_positions.len(),
            missing_positions,
            signature,
        }
    }
}

/// One finished dataset entry
#[derive(Debug, Clone)]
pub struct TaskPair {
    /// Task identifier
    pub task_id: String,
    /// Domain tag
    pub domain: String,
    /// Instruction describing the completion task
    pub prompt: String,
    /// Incomplete pattern frame
    pub first_image: RgbImage,
    /// Completed pattern frame
    pub final_image: RgbImage,
    /// Animation of the cells filling in, absent when encoding was skipped or failed
    ///
    /// Points into the generator's scratch directory, so it is only valid
    /// while that generator is alive.
    pub ground_truth_video: Option<PathBuf>,
    /// Pattern details
    pub metadata: TaskMetadata,
}

/// Drives task generation for one run
///
/// Owns the run's random source and seen-signature set, so a run built from
/// the same seed replays the same sequence of tasks. Animations are encoded
/// into a scratch directory private to the generator and deleted with it.
pub struct TaskGenerator {
    config: GenerationConfig,
    assembler: TaskAssembler,
    renderer: Box<dyn FrameRenderer>,
    video_encoder: Option<(Box<dyn VideoEncoder>, TempDir)>,
    seen_signatures: SeenSignatures,
    rng: StdRng,
}

impl TaskGenerator {
    /// Create a generator with the grid renderer and GIF encoder
    pub fn new(config: GenerationConfig) -> Self {
        let (width, height) = config.image_size;
        let renderer = Box::new(GridRenderer::new(width, height));
        let encoder: Box<dyn VideoEncoder> = Box::new(GifVideoEncoder::new(config.video_fps));
        Self::with_collaborators(config, renderer, Some(encoder))
    }

    /// Create a generator with explicit rendering and encoding collaborators
    ///
    /// The encoder is dropped when videos are disabled or it reports itself
    /// unavailable.
    pub fn with_collaborators(
        config: GenerationConfig,
        renderer: Box<dyn FrameRenderer>,
        video_encoder: Option<Box<dyn VideoEncoder>>,
    ) -> Self {
        let rng = config
            .random_seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        let video_encoder = if config.generate_videos {
            let encoder = video_encoder.filter(|encoder| encoder.is_available());
            if encoder.is_none() {
                log::warn!("Video encoder unavailable, tasks will have no ground truth video");
            }
            encoder.and_then(|encoder| match create_scratch_dir(&config.domain) {
                Ok(scratch_dir) => Some((encoder, scratch_dir)),
                Err(error) => {
                    log::warn!("Videos disabled: {error}");
                    None
                }
            })
        } else {
            None
        };

        Self {
            assembler: TaskAssembler::new(config.difficulty),
            config,
            renderer,
            video_encoder,
            seen_signatures: SeenSignatures::new(),
            rng,
        }
    }

    /// Run configuration
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Directory animations are encoded into, if videos are being produced
    pub fn scratch_dir(&self) -> Option<&Path> {
        self.video_encoder
            .as_ref()
            .map(|(_, scratch_dir)| scratch_dir.path())
    }

    /// Signatures accepted so far in this run
    pub const fn seen_signatures(&self) -> &SeenSignatures {
        &self.seen_signatures
    }

    /// Generate one complete task
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern cannot be assembled
    pub fn generate_task_pair(&mut self, task_id: &str) -> Result<TaskPair> {
        let assembled =
            self.assembler
                .generate_task(task_id, &mut self.seen_signatures, &mut self.rng)?;
        let spec = &assembled.spec;

        let first_image = self.renderer.render(spec, true);
        let final_image = self.renderer.render(spec, false);

        let ground_truth_video = self.video_encoder.as_ref().and_then(|(encoder, scratch_dir)| {
            let frames =
                filling_animation_frames(self.renderer.as_ref(), spec, HOLD_FRAMES, TRANSITION_FRAMES);
            encoder.encode(&frames, &scratch_video_path(scratch_dir.path(), task_id))
        });

        let prompt = PromptPool::from(spec.pattern_type()).select(&mut self.rng);
        let metadata =
            TaskMetadata::from_spec(task_id, &self.config.domain, spec, assembled.signature);

        Ok(TaskPair {
            task_id: task_id.to_string(),
            domain: self.config.domain.clone(),
            prompt: prompt.to_string(),
            first_image,
            final_image,
            ground_truth_video,
            metadata,
        })
    }

    /// Identifier of the task at `index`
    pub fn task_id(&self, index: usize) -> String {
        format!("{}_{index:04}", self.config.domain)
    }

    /// Generate every task of the run
    ///
    /// Task-local failures are logged and skipped; a fatal error aborts the run.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error, such as a symmetry violation
    pub fn generate_dataset(&mut self) -> Result<Vec<TaskPair>> {
        let total = self.config.num_samples;
        let mut progress = (!self.config.quiet).then(ProgressManager::new);
        if let Some(ref mut pm) = progress {
            pm.initialize(total);
        }

        let mut tasks = Vec::with_capacity(total);
        for index in 0..total {
            let task_id = self.task_id(index);
            match self.generate_task_pair(&task_id) {
                Ok(task) => tasks.push(task),
                Err(error) if error.is_fatal() => {
                    if let Some(ref pm) = progress {
                        pm.abandon();
                    }
                    return Err(error);
                }
                Err(error) => log::error!("Skipping task {task_id}: {error}"),
            }
            if let Some(ref mut pm) = progress {
                pm.complete_task(&task_id);
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }

        Ok(tasks)
    }
}

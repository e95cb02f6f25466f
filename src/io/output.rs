//! Dataset persistence: one directory per task with frames, prompt and metadata

use crate::io::error::{GenerationError, Result, file_system};
use crate::task::generator::TaskPair;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// File name of the incomplete pattern frame
pub const FIRST_FRAME_FILE: &str = "first_frame.png";
/// File name of the completed pattern frame
pub const FINAL_FRAME_FILE: &str = "final_frame.png";
/// File name of the instruction text
pub const PROMPT_FILE: &str = "prompt.txt";
/// File name of the pattern metadata
pub const METADATA_FILE: &str = "metadata.json";
/// File stem of the ground truth animation
pub const VIDEO_STEM: &str = "ground_truth";

/// Writes task pairs below `<root>/<domain>_task/<task_id>/`
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    /// Create a writer rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory a task is written to
    pub fn task_dir(&self, task: &TaskPair) -> PathBuf {
        self.root
            .join(format!("{}_task", task.domain))
            .join(&task.task_id)
    }

    /// Persist every task, returning the task directories in input order
    ///
    /// # Errors
    ///
    /// Returns the first failure to create a directory or write a file
    pub fn write_dataset(&self, tasks: &[TaskPair]) -> Result<Vec<PathBuf>> {
        tasks.iter().map(|task| self.write_task(task)).collect()
    }

    /// Persist a single task
    ///
    /// A video path that no longer exists is skipped with a warning; the
    /// frames, prompt and metadata are still written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The task directory cannot be created
    /// - A frame cannot be encoded or saved
    /// - The prompt, metadata or video cannot be written
    pub fn write_task(&self, task: &TaskPair) -> Result<PathBuf> {
        let dir = self.task_dir(task);
        std::fs::create_dir_all(&dir).map_err(|e| file_system(&dir, "create directory", e))?;

        save_frame(&task.first_image, &dir.join(FIRST_FRAME_FILE))?;
        save_frame(&task.final_image, &dir.join(FINAL_FRAME_FILE))?;

        let prompt_path = dir.join(PROMPT_FILE);
        std::fs::write(&prompt_path, &task.prompt)
            .map_err(|e| file_system(&prompt_path, "write prompt", e))?;

        let metadata = serde_json::to_string_pretty(&task.metadata).map_err(|e| {
            GenerationError::Serialization {
                task_id: task.task_id.clone(),
                source: e,
            }
        })?;
        let metadata_path = dir.join(METADATA_FILE);
        std::fs::write(&metadata_path, metadata)
            .map_err(|e| file_system(&metadata_path, "write metadata", e))?;

        if let Some(video) = &task.ground_truth_video {
            copy_video(video, &dir)?;
        }

        Ok(dir)
    }
}

fn save_frame(image: &RgbImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|e| GenerationError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

fn copy_video(video: &Path, dir: &Path) -> Result<()> {
    if !video.exists() {
        log::warn!("Ground truth video {} disappeared, skipping", video.display());
        return Ok(());
    }

    let extension = video.extension().unwrap_or_default().to_string_lossy();
    let target = dir.join(format!("{VIDEO_STEM}.{extension}"));
    std::fs::copy(video, &target).map_err(|e| file_system(&target, "copy video", e))?;
    Ok(())
}

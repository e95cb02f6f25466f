//! Ground truth animation: crossfade frames and best-effort GIF encoding

use crate::io::error::{GenerationError, Result, file_system};
use crate::io::render::FrameRenderer;
use crate::pattern::model::PatternSpec;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, ImageBuffer, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Turns an ordered frame sequence into an animation file
///
/// Encoding is best effort: failures are reported as `None`, never as errors,
/// so a task without a video is still a valid task.
pub trait VideoEncoder {
    /// Whether the encoder can produce output at all
    fn is_available(&self) -> bool;

    /// Encode `frames` to `output_path`, returning the written path on success
    fn encode(&self, frames: &[RgbImage], output_path: &Path) -> Option<PathBuf>;
}

/// Animated GIF encoder with a fixed frame rate
#[derive(Debug, Clone, Copy)]
pub struct GifVideoEncoder {
    fps: u32,
}

impl GifVideoEncoder {
    /// Create an encoder playing `fps` frames per second
    pub const fn new(fps: u32) -> Self {
        Self { fps }
    }

    /// File extension of the produced animations
    pub const fn extension() -> &'static str {
        "gif"
    }

    fn write_gif(&self, frames: &[RgbImage], output_path: &Path) -> Result<()> {
        if frames.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "frames",
                value: String::from("0"),
                reason: String::from("No frames to encode"),
            });
        }

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system(output_path, "create file", e))?;

        let delay = Delay::from_numer_denom_ms(1000, self.fps.max(1));
        let gif_frames = frames.iter().map(|frame| {
            let rgba = DynamicImage::ImageRgb8(frame.clone()).into_rgba8();
            Frame::from_parts(rgba, 0, 0, delay)
        });

        let mut encoder = GifEncoder::new(file);
        let export_error = |e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(gif_frames).map_err(export_error)?;

        Ok(())
    }
}

impl VideoEncoder for GifVideoEncoder {
    fn is_available(&self) -> bool {
        self.fps > 0
    }

    fn encode(&self, frames: &[RgbImage], output_path: &Path) -> Option<PathBuf> {
        match self.write_gif(frames, output_path) {
            Ok(()) => Some(output_path.to_path_buf()),
            Err(error) => {
                log::warn!("Video generation failed: {error}");
                None
            }
        }
    }
}

/// Private scratch directory holding one run's animations until they are written out
///
/// The directory and everything in it is removed when the value is dropped.
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn create_scratch_dir(domain: &str) -> Result<tempfile::TempDir> {
    tempfile::Builder::new()
        .prefix(&format!("{domain}_videos_"))
        .tempdir()
        .map_err(|e| file_system(std::env::temp_dir(), "create scratch directory", e))
}

/// Scratch location for a task's animation before it is copied into the dataset
pub fn scratch_video_path(scratch_dir: &Path, task_id: &str) -> PathBuf {
    scratch_dir.join(format!(
        "{task_id}_ground_truth.{}",
        GifVideoEncoder::extension()
    ))
}

/// Linear crossfade, `progress` 0 gives `first` and 1 gives `last`
pub fn blend(first: &RgbImage, last: &RgbImage, progress: f64) -> RgbImage {
    let t = progress.clamp(0.0, 1.0);
    ImageBuffer::from_fn(first.width(), first.height(), |x, y| {
        let from = first.get_pixel(x, y);
        let to = last.get_pixel_checked(x, y).unwrap_or(from);
        let mut channels = [0u8; 3];
        for (channel, (&a, &b)) in channels.iter_mut().zip(from.0.iter().zip(to.0.iter())) {
            let mixed = (f64::from(b) - f64::from(a)).mul_add(t, f64::from(a));
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
        Rgb(channels)
    })
}

/// Frames showing the missing cells filling in
///
/// Holds the first frame, crossfades over `transition_frames` steps ending on
/// the exact final frame, then holds the final frame.
pub fn filling_animation_frames<F: FrameRenderer + ?Sized>(
    renderer: &F,
    spec: &PatternSpec,
    hold_frames: usize,
    transition_frames: usize,
) -> Vec<RgbImage> {
    let first_frame = renderer.render(spec, true);
    let final_frame = renderer.render(spec, false);
    let mut frames = Vec::with_capacity(2 * hold_frames + transition_frames);

    frames.extend(std::iter::repeat_n(first_frame.clone(), hold_frames));

    for i in 0..transition_frames {
        let progress = if transition_frames > 1 {
            i as f64 / (transition_frames - 1) as f64
        } else {
            1.0
        };
        if progress >= 1.0 {
            frames.push(final_frame.clone());
        } else {
            frames.push(blend(&first_frame, &final_frame, progress));
        }
    }

    frames.extend(std::iter::repeat_n(final_frame, hold_frames));
    frames
}

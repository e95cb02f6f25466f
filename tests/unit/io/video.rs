//! Tests for crossfade frames and GIF encoding

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use symmetry_completion::io::configuration::{HOLD_FRAMES, TRANSITION_FRAMES};
    use symmetry_completion::io::render::{FrameRenderer, GridRenderer};
    use symmetry_completion::io::video::{
        GifVideoEncoder, VideoEncoder, blend, create_scratch_dir, filling_animation_frames,
        scratch_video_path,
    };
    use symmetry_completion::pattern::builder::build_full_pattern;
    use symmetry_completion::pattern::{Difficulty, PatternSpec, PatternType};

    fn stripes_spec() -> PatternSpec {
        let mut rng = StdRng::seed_from_u64(0);
        let full = build_full_pattern(PatternType::VerticalSymmetryStripes, 4, &mut rng).unwrap();
        PatternSpec::new(
            PatternType::VerticalSymmetryStripes,
            Difficulty::Easy,
            full,
            vec![(1, 2), (1, 3), (3, 3)],
        )
        .unwrap()
    }

    // Tests crossfade endpoints and midpoint rounding
    // Verified by truncating instead of rounding
    #[test]
    fn test_blend() {
        let black = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        let white = RgbImage::from_pixel(2, 2, Rgb([255, 255, 255]));

        assert_eq!(blend(&black, &white, 0.0), black);
        assert_eq!(blend(&black, &white, 1.0), white);
        assert_eq!(blend(&black, &white, 0.5).get_pixel(1, 1), &Rgb([128, 128, 128]));
        assert_eq!(blend(&black, &white, 3.0), white);
    }

    // Tests the animation holds, crossfades and lands exactly on the final frame
    // Verified by ending the transition one step short
    #[test]
    fn test_filling_animation_frames() {
        let renderer = GridRenderer::new(120, 80);
        let spec = stripes_spec();
        let first = renderer.render(&spec, true);
        let last = renderer.render(&spec, false);

        let frames = filling_animation_frames(&renderer, &spec, HOLD_FRAMES, TRANSITION_FRAMES);

        assert_eq!(frames.len(), 35);
        assert!(frames.iter().take(HOLD_FRAMES).all(|f| f == &first));
        assert_eq!(frames.get(HOLD_FRAMES), Some(&first));
        assert_eq!(frames.get(HOLD_FRAMES + TRANSITION_FRAMES - 1), Some(&last));
        assert!(frames.iter().skip(HOLD_FRAMES + TRANSITION_FRAMES).all(|f| f == &last));
        assert_ne!(frames.get(HOLD_FRAMES + 12), Some(&first));
        assert_ne!(frames.get(HOLD_FRAMES + 12), Some(&last));
    }

    // Tests a single transition step jumps straight to the final frame
    // Verified by dividing by zero steps
    #[test]
    fn test_single_transition_frame() {
        let renderer = GridRenderer::new(60, 60);
        let spec = stripes_spec();
        let frames = filling_animation_frames(&renderer, &spec, 0, 1);

        assert_eq!(frames, vec![renderer.render(&spec, false)]);
    }

    // Tests GIF encoding writes the file and reports its path
    // Verified by returning None on success
    #[test]
    fn test_gif_encode() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("clip.gif");
        let renderer = GridRenderer::new(40, 30);
        let frames = filling_animation_frames(&renderer, &stripes_spec(), 1, 3);

        let encoder = GifVideoEncoder::new(10);
        assert!(encoder.is_available());
        assert_eq!(encoder.encode(&frames, &path), Some(path.clone()));
        assert!(path.exists());
    }

    // Tests encoding nothing fails softly
    // Verified by returning the path for empty input
    #[test]
    fn test_gif_encode_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.gif");

        assert_eq!(GifVideoEncoder::new(10).encode(&[], &path), None);
        assert!(!GifVideoEncoder::new(0).is_available());
    }

    // Tests scratch paths are named per task inside the given directory
    // Verified by dropping the task id from the file name
    #[test]
    fn test_scratch_video_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = scratch_video_path(temp_dir.path(), "symmetry_completion_0007");

        assert_eq!(path.parent(), Some(temp_dir.path()));
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            "symmetry_completion_0007_ground_truth.gif"
        );
        assert_eq!(GifVideoEncoder::extension(), "gif");
    }

    // Tests every scratch directory is fresh and removed on drop
    // Verified by returning a fixed directory below the temp root
    #[test]
    fn test_scratch_dirs_are_private() {
        let first = create_scratch_dir("symmetry_completion").unwrap();
        let second = create_scratch_dir("symmetry_completion").unwrap();
        let first_path = first.path().to_path_buf();

        assert_ne!(first.path(), second.path());
        assert!(
            first_path
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("symmetry_completion_videos_")
        );

        drop(first);
        assert!(!first_path.exists());
        assert!(second.path().exists());
    }
}

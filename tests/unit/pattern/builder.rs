//! Tests for family rules, mirroring and symmetry validation

#[cfg(test)]
mod tests {
    use ndarray::{Array2, arr2};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use symmetry_completion::GenerationError;
    use symmetry_completion::pattern::builder::{
        build_full_pattern, ensure_even_grid_size, mirror_left_half, verify_symmetry,
    };
    use symmetry_completion::pattern::{Cell, PatternType};

    fn values(pattern: &Array2<Cell>) -> Array2<i8> {
        pattern.mapv(Cell::value)
    }

    fn assert_mirrored(pattern: &Array2<Cell>) {
        let (rows, cols) = pattern.dim();
        for row in 0..rows {
            for col in 0..cols / 2 {
                assert_eq!(
                    pattern.get((row, col)),
                    pattern.get((row, cols - 1 - col)),
                    "cell ({row}, {col}) does not mirror"
                );
            }
        }
    }

    // Tests the checkerboard rule on a 4x4 grid including the mirrored half
    // Verified by swapping the parity test to even cells
    #[test]
    fn test_checkerboard_four_by_four() {
        let mut rng = StdRng::seed_from_u64(0);
        let pattern =
            build_full_pattern(PatternType::VerticalSymmetryCheckerboard, 4, &mut rng).unwrap();

        let expected = arr2(&[
            [0i8, 1, 1, 0],
            [1, 0, 0, 1],
            [0, 1, 1, 0],
            [1, 0, 0, 1],
        ]);
        assert_eq!(values(&pattern), expected);
    }

    // Tests stripes fill whole odd rows and leave even rows empty
    // Verified by filling even rows instead
    #[test]
    fn test_stripes_alternate_rows() {
        let mut rng = StdRng::seed_from_u64(0);
        let pattern =
            build_full_pattern(PatternType::VerticalSymmetryStripes, 6, &mut rng).unwrap();

        for (row, line) in pattern.rows().into_iter().enumerate() {
            let expected = if row % 2 == 1 { Cell::Filled } else { Cell::Empty };
            assert!(line.iter().all(|&cell| cell == expected), "row {row}");
        }
    }

    // Tests the increment rule saturates at the half width
    // Verified by removing the min() clamp
    #[test]
    fn test_increment_triangle() {
        let mut rng = StdRng::seed_from_u64(0);
        let pattern =
            build_full_pattern(PatternType::VerticalSymmetryIncrement, 8, &mut rng).unwrap();
        let cells = values(&pattern);

        assert_eq!(cells.row(0).to_vec(), vec![1i8, 0, 0, 0, 0, 0, 0, 1]);
        assert_eq!(cells.row(2).to_vec(), vec![1i8, 1, 1, 0, 0, 1, 1, 1]);
        assert_eq!(cells.row(5).to_vec(), vec![1i8; 8]);
        assert_eq!(cells.row(7).to_vec(), vec![1i8; 8]);
    }

    // Tests every family stays symmetric over many seeds and sizes
    // Verified by skipping mirror_left_half
    #[test]
    fn test_all_families_symmetric() {
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            for pattern_type in PatternType::ALL {
                for size in [2, 4, 6, 8, 10, 12] {
                    let pattern = build_full_pattern(pattern_type, size, &mut rng).unwrap();
                    assert_eq!(pattern.dim(), (size, size));
                    assert!(pattern.iter().all(|&cell| cell != Cell::Missing));
                    assert_mirrored(&pattern);
                }
            }
        }
    }

    // Tests random patterns are reproducible from the same seed
    // Verified by reseeding inside the builder
    #[test]
    fn test_random_family_reproducible() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        let a = build_full_pattern(PatternType::VerticalSymmetry, 10, &mut first).unwrap();
        let b = build_full_pattern(PatternType::VerticalSymmetry, 10, &mut second).unwrap();
        assert_eq!(a, b);
    }

    // Tests odd and zero sizes are rejected with the dedicated error
    // Verified by accepting odd sizes
    #[test]
    fn test_odd_grid_size_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for size in [0, 1, 3, 5, 7, 9, 11] {
            for pattern_type in PatternType::ALL {
                let result = build_full_pattern(pattern_type, size, &mut rng);
                assert!(
                    matches!(
                        result,
                        Err(GenerationError::InvalidGridSize { grid_size }) if grid_size == size
                    ),
                    "size {size} should be rejected"
                );
            }
        }
        assert!(ensure_even_grid_size(4).is_ok());
    }

    // Tests the validator reports the first mismatched pair
    // Verified by comparing a column with itself
    #[test]
    fn test_verify_symmetry_detects_violation() {
        let mut pattern = Array2::from_elem((4, 4), Cell::Empty);
        if let Some(cell) = pattern.get_mut((2, 1)) {
            *cell = Cell::Filled;
        }

        let result = verify_symmetry(&pattern);
        assert!(matches!(
            result,
            Err(GenerationError::SymmetryViolation {
                row: 2,
                col: 1,
                mirror_col: 2
            })
        ));
    }

    // Tests mirroring repairs a hand-made left half
    // Verified by mirroring into the left half instead
    #[test]
    fn test_mirror_left_half() {
        let mut pattern = arr2(&[
            [Cell::Filled, Cell::Empty, Cell::Empty, Cell::Empty],
            [Cell::Empty, Cell::Filled, Cell::Empty, Cell::Empty],
        ]);
        mirror_left_half(&mut pattern);

        assert!(verify_symmetry(&pattern).is_ok());
        assert_eq!(pattern.get((0, 3)), Some(&Cell::Filled));
        assert_eq!(pattern.get((1, 2)), Some(&Cell::Filled));
    }
}

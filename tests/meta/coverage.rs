//! Structural checks keeping `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files don't require separate test files
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    // Relative paths of every directory and `.rs` file below `dir`
    fn rust_paths(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let Ok(stripped) = path.strip_prefix(base) else {
                return Err(io::Error::other("Failed to strip prefix"));
            };
            let relative = stripped.to_string_lossy().replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                rust_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect(root: &str) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        let base = Path::new(root);
        if let Err(error) = rust_paths(base, base, &mut paths) {
            assert!(!base.exists(), "Failed to read {root}: {error}");
        }
        paths
    }

    fn report(title: &str, entries: &[String]) -> String {
        format!("{title}:\n{}", entries.join("\n"))
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let unit_paths = collect(UNIT_DIR);
        let missing: Vec<String> = collect(SRC_DIR)
            .into_iter()
            .filter(|path| !is_organizational(path) && !unit_paths.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files/directories missing unit test counterparts", &missing)
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = collect(SRC_DIR);
        let orphaned: Vec<String> = collect(UNIT_DIR)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files/directories without a source counterpart", &orphaned)
        );
    }

    // A unit test file that its directory's mod.rs never declares is never compiled
    #[test]
    fn test_all_unit_tests_are_registered() {
        let unit_paths = collect(UNIT_DIR);
        let mut unregistered = Vec::new();

        for path in unit_paths.iter().filter(|path| !path.ends_with("mod.rs")) {
            let relative = Path::new(path);
            let Some(stem) = relative.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let parent = relative.parent().unwrap_or_else(|| Path::new(""));
            let mod_file = Path::new(UNIT_DIR).join(parent).join("mod.rs");

            let declared = fs::read_to_string(&mod_file).is_ok_and(|content| {
                content
                    .lines()
                    .map(str::trim)
                    .any(|line| line == format!("mod {stem};") || line == format!("pub mod {stem};"))
            });
            if !declared {
                unregistered.push(format!("  - tests/unit/{path} (not declared in {})", mod_file.display()));
            }
        }

        assert!(
            unregistered.is_empty(),
            "{}",
            report("Unit test modules never compiled", &unregistered)
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let mut files = BTreeSet::new();
        if let Err(error) = rust_paths(tests_root, tests_root, &mut files) {
            assert!(!tests_root.exists(), "Failed to scan tests directory: {error}");
        }

        let mut without_tests = Vec::new();
        for relative in files.iter().filter(|path| path.ends_with(".rs") && !path.ends_with("mod.rs")) {
            let path = tests_root.join(relative);
            let has_tests = fs::read_to_string(&path).is_ok_and(|content| content.contains("#[test]"));
            if !has_tests {
                without_tests.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            without_tests.is_empty(),
            "{}",
            report("Test files without any #[test] functions", &without_tests)
        );
    }
}

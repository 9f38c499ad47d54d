#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't require mirror files
    fn is_organizational(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = rust_paths_under(Path::new("src"));
        let test_paths = rust_paths_under(Path::new("tests/unit"));

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files missing unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = rust_paths_under(Path::new("src"));
        let test_paths = rust_paths_under(Path::new("tests/unit"));

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files with no corresponding src file:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut empty_files = Vec::new();
        for path in rust_paths_under(tests_dir) {
            // Top-level files are harness roots that only declare modules
            if path.ends_with("mod.rs") || !path.contains('/') {
                continue;
            }
            let content = fs::read_to_string(tests_dir.join(&path)).unwrap_or_default();
            if !content.contains("#[test]") {
                empty_files.push(format!("  - tests/{path}"));
            }
        }

        assert!(
            empty_files.is_empty(),
            "test files without any #[test] functions:\n{}",
            empty_files.join("\n")
        );
    }

    // Relative paths of every .rs file below a base directory
    fn rust_paths_under(base: &Path) -> HashSet<String> {
        let mut paths = HashSet::new();
        if base.is_dir() {
            if let Err(error) = collect(base, base, &mut paths) {
                panic!("failed to scan {}: {error}", base.display());
            }
        }
        paths
    }

    fn collect(dir: &Path, base: &Path, paths: &mut HashSet<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                collect(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_| io::Error::other("path escapes base directory"))?;
                paths.insert(relative.to_string_lossy().to_string());
            }
        }
        Ok(())
    }
}

//! Repository layout checks: every source file has a mirrored unit test file,
//! every test file holds tests, and every source file opens with module docs

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

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();

        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_strip_error| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn tree(dir: &str) -> BTreeSet<String> {
        let path = Path::new(dir);
        collect_relative_paths(path, path).unwrap_or_else(|error| {
            unreachable!("Failed to read {dir}: {error}");
        })
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files_without_tests: Vec<String> = tree("tests")
            .into_iter()
            .filter(|path| Path::new(path).extension().is_some())
            // The harness root and module organization files only declare modules
            .filter(|path| path != "main.rs" && !path.ends_with("mod.rs"))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests
                .iter()
                .map(|path| format!("  - tests/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_src_files_have_module_docs() {
        let undocumented: Vec<String> = tree(SRC_DIR)
            .into_iter()
            .filter(|path| Path::new(path).extension().is_some())
            .filter(|path| {
                fs::read_to_string(Path::new(SRC_DIR).join(path))
                    .map(|content| !content.trim_start().starts_with("//!"))
                    .unwrap_or(true)
            })
            .collect();

        assert!(
            undocumented.is_empty(),
            "The following src files don't start with a //! module comment:\n{}",
            undocumented
                .iter()
                .map(|path| format!("  - src/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

//! Aggregation integration tests
//!
//! Exercises the public library surface against real directories.

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use windsurfrules::{aggregate, RulesError};

fn setup(files: &[(&str, &str)]) -> (TempDir, PathBuf, PathBuf) {
    let temp = TempDir::new().unwrap();
    let rules = temp.path().join(".cursor").join("rules");
    std::fs::create_dir_all(&rules).unwrap();
    for (name, content) in files {
        std::fs::write(rules.join(name), content).unwrap();
    }
    let output = temp.path().join(".windsurfrules");
    (temp, rules, output)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

// =============================================================================
// Ordering and separators
// =============================================================================

mod ordering_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concrete_scenario() {
        let (_temp, rules, output) = setup(&[("a.md", "Rule A"), ("b.md", "Rule B")]);
        aggregate(&rules, &output).unwrap();
        assert_eq!(read(&output), "Rule A\nRule B\n");
    }

    #[test]
    fn test_fragments_follow_name_order_not_creation_order() {
        let (_temp, rules, output) = setup(&[
            ("30-testing.mdc", "testing"),
            ("10-style.mdc", "style"),
            ("20-naming.mdc", "naming"),
        ]);

        let report = aggregate(&rules, &output).unwrap();

        assert_eq!(read(&output), "style\nnaming\ntesting\n");
        assert_eq!(
            report.fragments,
            vec!["10-style.mdc", "20-naming.mdc", "30-testing.mdc"]
        );
    }

    #[test]
    fn test_output_is_exact_concatenation() {
        let files = [
            ("a", "first\nmulti-line\n"),
            ("b", ""),
            ("c", "  indented  "),
            ("d", "unicode: é ✓"),
        ];
        let (_temp, rules, output) = setup(&files);

        aggregate(&rules, &output).unwrap();

        let expected: String = files
            .iter()
            .map(|(_, content)| format!("{}\n", content))
            .collect();
        assert_eq!(read(&output), expected);
    }

    #[test]
    fn test_each_fragment_written_once() {
        let (_temp, rules, output) = setup(&[("x.md", "X"), ("y.md", "Y")]);
        let report = aggregate(&rules, &output).unwrap();

        let out = read(&output);
        assert_eq!(out.matches('X').count(), 1);
        assert_eq!(out.matches('Y').count(), 1);
        assert_eq!(report.bytes_written, out.len() as u64);
    }
}

// =============================================================================
// Overwrite and idempotence
// =============================================================================

mod overwrite_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_second_run_is_byte_identical() {
        let (_temp, rules, output) = setup(&[("a.md", "Rule A"), ("b.md", "Rule B\r\n")]);

        aggregate(&rules, &output).unwrap();
        let first = std::fs::read(&output).unwrap();
        aggregate(&rules, &output).unwrap();
        let second = std::fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_previous_content_is_discarded() {
        let (_temp, rules, output) = setup(&[("a.md", "short")]);
        std::fs::write(&output, "a much longer stale aggregate from an older run").unwrap();

        aggregate(&rules, &output).unwrap();

        assert_eq!(read(&output), "short\n");
    }

    #[test]
    fn test_removed_fragment_disappears() {
        let (_temp, rules, output) = setup(&[("a.md", "A"), ("b.md", "B")]);
        aggregate(&rules, &output).unwrap();

        std::fs::remove_file(rules.join("a.md")).unwrap();
        aggregate(&rules, &output).unwrap();

        assert_eq!(read(&output), "B\n");
    }
}

// =============================================================================
// Exclusions and failures
// =============================================================================

mod edge_case_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_subdirectory_contributes_nothing() {
        let (_temp, rules, output) = setup(&[("a.md", "A")]);
        let nested = rules.join("archive");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(nested.join("old.md"), "OLD").unwrap();

        aggregate(&rules, &output).unwrap();

        assert_eq!(read(&output), "A\n");
    }

    #[test]
    fn test_empty_rules_dir() {
        let (_temp, rules, output) = setup(&[]);
        aggregate(&rules, &output).unwrap();
        assert!(output.exists());
        assert_eq!(read(&output), "");
    }

    #[test]
    fn test_missing_rules_dir() {
        let temp = TempDir::new().unwrap();
        let rules = temp.path().join(".cursor").join("rules");
        let output = temp.path().join(".windsurfrules");

        let err = aggregate(&rules, &output).unwrap_err();

        assert!(err.to_string().contains(&rules.display().to_string()));
        assert!(matches!(err, RulesError::RulesDirNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_windows_line_endings_are_normalized() {
        let (_temp, rules, output) = setup(&[("a.md", "line one\r\nline two\r\n")]);
        aggregate(&rules, &output).unwrap();
        assert_eq!(read(&output), "line one\nline two\n\n");
    }
}

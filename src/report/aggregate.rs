//! Groups parsed violations by file and by package.

use super::loader::{CheckstyleReport, ErrorElement};
use crate::config::SummaryConfig;
use crate::types::{FileViolations, PackageCounts, Violation};
use std::path::{Component, Path};

/// Collects violations per file path, skipping clean files.
#[must_use]
pub fn group_by_file(report: &CheckstyleReport) -> FileViolations {
    let mut files = FileViolations::new();
    for file in &report.files {
        for err in &file.errors {
            files.push(&file.name, to_violation(err));
        }
    }
    files
}

fn to_violation(err: &ErrorElement) -> Violation {
    Violation {
        line: err.line,
        column: err.column,
        message: err.message.clone(),
        source: err.source.clone(),
    }
}

/// Sums violations per inferred package, in the order files are listed.
#[must_use]
pub fn group_by_package(files: &FileViolations, config: &SummaryConfig) -> PackageCounts {
    let mut counts = PackageCounts::new();
    for file in files {
        let package = infer_package(&file.path, &config.package_root, &config.fallback_package);
        counts.add(&package, file.violation_count());
    }
    counts
}

/// Best-effort package name from a source path.
///
/// Joins everything from the first `root` component up to the file's parent
/// with `.`; paths without a `root` component land in `fallback`.
#[must_use]
pub fn infer_package(path: &str, root: &str, fallback: &str) -> String {
    let parts: Vec<_> = Path::new(path)
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
        })
        .collect();

    let Some(start) = parts.iter().position(|p| p == root) else {
        return fallback.to_string();
    };
    let end = parts.len() - 1;
    parts.get(start..end).map(|dirs| dirs.join(".")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::loader::parse;

    fn package(path: &str) -> String {
        infer_package(path, "com", "misc")
    }

    #[test]
    fn test_infer_package_from_source_tree() {
        assert_eq!(package("src/main/java/com/chatapp/model/User.java"), "com.chatapp.model");
        assert_eq!(package("/home/ci/backend/src/main/java/com/chatapp/App.java"), "com.chatapp");
        assert_eq!(package("com/example/Foo.java"), "com.example");
    }

    #[test]
    fn test_infer_package_first_root_wins() {
        assert_eq!(package("com/a/com/b/X.java"), "com.a.com.b");
    }

    #[test]
    fn test_infer_package_fallback() {
        assert_eq!(package("scripts/Build.java"), "misc");
        assert_eq!(package("Build.java"), "misc");
        assert_eq!(package(""), "misc");
        assert_eq!(package("src/comet/X.java"), "misc");
    }

    #[test]
    fn test_infer_package_root_as_last_component() {
        assert_eq!(package("com/Foo.java"), "com");
        assert_eq!(package("build/com"), "");
    }

    #[test]
    fn test_group_by_file_skips_clean_files() {
        let report = parse(
            r#"<checkstyle>
<file name="Clean.java"></file>
<file name="com/example/Foo.java"><error line="1" message="a"/><error line="2"/></file>
</checkstyle>"#,
        )
        .unwrap();
        let files = group_by_file(&report);
        assert_eq!(files.len(), 1);
        assert!(files.get("Clean.java").is_none());

        let foo = files.get("com/example/Foo.java").unwrap();
        assert_eq!(foo.violations[0].message.as_deref(), Some("a"));
        assert_eq!(foo.violations[1].line, Some(2));
    }

    #[test]
    fn test_group_by_package_conserves_totals() {
        let report = parse(
            r#"<checkstyle>
<file name="src/com/example/Foo.java"><error/><error/><error/></file>
<file name="scripts/Build.java"><error/><error/></file>
<file name="src/com/example/Bar.java"><error/></file>
<file name="src/com/other/Baz.java"><error/></file>
</checkstyle>"#,
        )
        .unwrap();
        let files = group_by_file(&report);
        let packages = group_by_package(&files, &SummaryConfig::default());

        assert_eq!(packages.get("com.example"), Some(4));
        assert_eq!(packages.get("misc"), Some(2));
        assert_eq!(packages.get("com.other"), Some(1));
        assert_eq!(packages.total(), files.total_violations());
    }

    #[test]
    fn test_group_by_package_honours_config() {
        let report = parse(
            r#"<checkstyle><file name="src/org/acme/Foo.java"><error/></file></checkstyle>"#,
        )
        .unwrap();
        let config = SummaryConfig {
            package_root: "org".to_string(),
            fallback_package: "other".to_string(),
            ..SummaryConfig::default()
        };
        let packages = group_by_package(&group_by_file(&report), &config);
        assert_eq!(packages.get("org.acme"), Some(1));
        assert_eq!(packages.get("other"), None);
    }
}

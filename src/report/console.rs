//! Plain-text rendering of a [`Summary`].
//!
//! The output is consumed by humans and by scripts that grep it, so it is
//! never coloured.

use super::Summary;
use std::fmt::Write;

/// Renders the three summary blocks, separated by blank lines.
#[must_use]
pub fn render(summary: &Summary) -> String {
    let mut out = String::new();
    write_totals(&mut out, summary);
    out.push('\n');
    write_packages(&mut out, summary);
    out.push('\n');
    write_offenders(&mut out, summary);
    out
}

fn write_totals(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "Total files with violations: {}", summary.file_count());
}

fn write_packages(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "Violation count by package (descending):");
    for (package, count) in summary.packages_descending() {
        let _ = writeln!(out, "  {package}: {count}");
    }
}

fn write_offenders(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "Top offenders:");
    for file in summary.top_offenders() {
        let _ = writeln!(out, "  {}: {}", file.path, file.violation_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SummaryConfig;
    use crate::types::{FileViolations, Violation};

    #[test]
    fn test_render_exact_layout() {
        let mut files = FileViolations::new();
        for _ in 0..3 {
            files.push("com/example/Foo.java", Violation::default());
        }
        for _ in 0..2 {
            files.push("scripts/Build.java", Violation::default());
        }
        let summary = Summary::build(files, &SummaryConfig::default());

        let expected = "\
Total files with violations: 2

Violation count by package (descending):
  com.example: 3
  misc: 2

Top offenders:
  com/example/Foo.java: 3
  scripts/Build.java: 2
";
        assert_eq!(render(&summary), expected);
    }

    #[test]
    fn test_render_empty() {
        let summary = Summary::build(FileViolations::new(), &SummaryConfig::default());
        let expected = "\
Total files with violations: 0

Violation count by package (descending):

Top offenders:
";
        assert_eq!(render(&summary), expected);
    }
}

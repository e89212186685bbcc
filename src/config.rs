use std::path::PathBuf;

/// Fixed knobs for a summary run. Nothing here is read from disk or the
/// environment; `Default` is what the binary uses.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    /// Report location, relative to the working directory.
    pub report_path: PathBuf,
    /// Length of the "Top offenders" list.
    pub top_offenders: usize,
    /// Path segment that marks the root of a package tree.
    pub package_root: String,
    /// Bucket for files whose path has no `package_root` segment.
    pub fallback_package: String,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
            top_offenders: default_top_offenders(),
            package_root: default_package_root(),
            fallback_package: default_fallback_package(),
        }
    }
}

fn default_report_path() -> PathBuf { PathBuf::from("target/checkstyle-result.xml") }
fn default_top_offenders() -> usize { 20 }
fn default_package_root() -> String { "com".to_string() }
fn default_fallback_package() -> String { "misc".to_string() }

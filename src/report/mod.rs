//! Checkstyle report summarization.

pub mod aggregate;
pub mod console;
pub mod loader;

use crate::config::SummaryConfig;
use crate::error::Result;
use crate::types::{FileEntry, FileViolations, PackageCounts};
use std::cmp::Reverse;

/// Both groupings of one report, ready to print.
#[derive(Debug, Clone)]
pub struct Summary {
    files: FileViolations,
    packages: PackageCounts,
    top_offenders: usize,
}

impl Summary {
    #[must_use]
    pub fn build(files: FileViolations, config: &SummaryConfig) -> Self {
        let packages = aggregate::group_by_package(&files, config);
        Self {
            files,
            packages,
            top_offenders: config.top_offenders,
        }
    }

    /// Loads the configured report and summarizes it.
    ///
    /// # Errors
    /// Propagates loader errors.
    pub fn from_config(config: &SummaryConfig) -> Result<Self> {
        let report = loader::load(&config.report_path)?;
        Ok(Self::build(aggregate::group_by_file(&report), config))
    }

    #[must_use]
    pub fn packages(&self) -> &PackageCounts {
        &self.packages
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.files.total_violations()
    }

    /// Packages by count, highest first. Ties keep first-seen order.
    #[must_use]
    pub fn packages_descending(&self) -> Vec<(&str, usize)> {
        let mut sorted: Vec<_> = self.packages.iter().collect();
        sorted.sort_by_key(|&(_, count)| Reverse(count));
        sorted
    }

    /// The files with the most violations, highest first, capped at the
    /// configured length. Ties keep report order.
    #[must_use]
    pub fn top_offenders(&self) -> Vec<&FileEntry> {
        let mut offenders: Vec<_> = self.files.iter().collect();
        offenders.sort_by_key(|f| Reverse(f.violation_count()));
        offenders.truncate(self.top_offenders);
        offenders
    }
}

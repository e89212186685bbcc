use std::collections::HashMap;

/// A single Checkstyle `error` entry. Every attribute is optional in the
/// report, so every field is too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violation {
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub message: Option<String>,
    /// Rule identifier, e.g. `com.puppycrawl.tools.checkstyle.checks.whitespace.WhitespaceAroundCheck`.
    pub source: Option<String>,
}

/// All violations reported against one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: String,
    pub violations: Vec<Violation>,
}

impl FileEntry {
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }
}

/// Violations keyed by file path, in the order paths first appear in the report.
#[derive(Debug, Clone, Default)]
pub struct FileViolations {
    entries: Vec<FileEntry>,
    index: HashMap<String, usize>,
}

impl FileViolations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation to `path`, creating the entry on first sight.
    pub fn push(&mut self, path: &str, violation: Violation) {
        let slot = match self.index.get(path) {
            Some(&i) => i,
            None => {
                self.entries.push(FileEntry {
                    path: path.to_string(),
                    violations: Vec::new(),
                });
                self.index.insert(path.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        self.entries[slot].violations.push(violation);
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.index.get(path).map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn total_violations(&self) -> usize {
        self.entries.iter().map(FileEntry::violation_count).sum()
    }
}

impl<'a> IntoIterator for &'a FileViolations {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Violation totals per inferred package, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct PackageCounts {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl PackageCounts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, package: &str, count: usize) {
        if let Some(&i) = self.index.get(package) {
            self.entries[i].1 += count;
            return;
        }
        self.index.insert(package.to_string(), self.entries.len());
        self.entries.push((package.to_string(), count));
    }

    #[must_use]
    pub fn get(&self, package: &str) -> Option<usize> {
        self.index.get(package).map(|&i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

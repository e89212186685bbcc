// src/exit.rs
//! Standardized process exit codes for `checkstat`.
//!
//! Provides a stable contract for scripts and automation.

use crate::error::CheckstatError;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CheckstatExit {
    /// Summary printed.
    Success = 0,
    /// Generic error (missing report, IO).
    Error = 1,
    /// The report exists but is not a readable Checkstyle document.
    InvalidInput = 2,
}

impl CheckstatExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for CheckstatExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<&CheckstatError> for CheckstatExit {
    fn from(err: &CheckstatError) -> Self {
        match err {
            CheckstatError::ReportMissing { .. } | CheckstatError::Io { .. } => Self::Error,
            CheckstatError::Parse(_) => Self::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_codes_distinct() {
        assert_eq!(CheckstatExit::Success.code(), 0);
        assert_ne!(CheckstatExit::Error.code(), CheckstatExit::InvalidInput.code());
    }

    #[test]
    fn test_missing_report_maps_to_error() {
        let err = CheckstatError::ReportMissing {
            path: PathBuf::from("target/checkstyle-result.xml"),
        };
        assert_eq!(CheckstatExit::from(&err), CheckstatExit::Error);
    }
}

// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckstatError {
    #[error("{} not found. Run mvnw checkstyle:check first.", path.display())]
    ReportMissing { path: PathBuf },

    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("{0}")]
    Parse(#[from] quick_xml::de::DeError),
}

pub type Result<T> = std::result::Result<T, CheckstatError>;

use std::io;
use std::path::PathBuf;

use pldoc_html::RenderError;
use pldoc_parse::ParseError;
use thiserror::Error;

/// Anything that stops a documentation run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("missing value for {flag}")]
    MissingValue { flag: String },
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("no input directories or files")]
    NoInput,
    #[error("cannot read {}: {source}", path.display())]
    Walk { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl DriverError {
    /// Whether the usage text should accompany the message.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            DriverError::MissingValue { .. } | DriverError::UnknownOption(_) | DriverError::NoInput
        )
    }
}

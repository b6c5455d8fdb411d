use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to write the documentation site.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

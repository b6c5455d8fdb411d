//! PL/SQL documentation generator.
//!
//! ```text
//! roots ──► discover() ──► paths
//!                            │  (parallel, order kept)
//!                            ▼
//!                   pldoc_parse::parse() ──► FileSet
//!                                              │
//!                                              ▼
//!                                   pldoc_html::render() ──► <package>.html, main.css, pldoc.js
//! ```

mod discover;
mod error;
mod options;

pub use discover::discover;
pub use error::DriverError;
pub use options::{parse_args, Command, Options, USAGE};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use pldoc_ir::{File, FileSet};
use rayon::prelude::*;
use tracing::{debug, info};

/// Description given to every generated file set.
pub const DESCRIPTION: &str = "Documentation";

/// What a run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub packages: usize,
    pub pages: Vec<PathBuf>,
    pub output: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "documented {} package(s) from {} file(s) in {}",
            self.packages,
            self.files,
            self.output.display()
        )
    }
}

/// Discover, parse, and render.
///
/// The first failing file aborts the run; nothing is rendered in that case.
pub fn run(options: &Options) -> Result<Summary, DriverError> {
    let paths = discover(&options.roots, &options.ext)?;
    info!(files = paths.len(), ext = %options.ext, "discovered source files");

    let files = paths
        .par_iter()
        .map(|path| parse_path(path))
        .collect::<Result<Vec<File>, DriverError>>()?;

    let mut set = FileSet::new(Some(DESCRIPTION.to_string()));
    for file in files {
        set.add(file);
    }
    let packages = set.packages().count();
    info!(packages, "parsed packages");

    let pages = pldoc_html::render(&options.output, &set)?;
    info!(pages = pages.len(), output = %options.output.display(), "wrote documentation");

    Ok(Summary {
        files: paths.len(),
        packages,
        pages,
        output: options.output.clone(),
    })
}

/// Read and parse one file. The file is named by its path as given.
pub fn parse_path(path: &Path) -> Result<File, DriverError> {
    let src = fs::read(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let file = pldoc_parse::parse(&path.display().to_string(), &src)?;
    debug!(path = %path.display(), packages = file.packages.len(), "parsed file");
    Ok(file)
}

static TRACING_INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// `RUST_LOG` wins when set. Otherwise `verbose` enables `info` for the
/// pldoc crates, and nothing is installed without it. Safe to call more
/// than once.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if verbose {
            EnvFilter::new("pldoc=info,pldoc_parse=info,pldoc_html=info")
        } else {
            return;
        };
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .init();
    });
}

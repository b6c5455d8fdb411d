//! HTML documentation renderer.
//!
//! Turns a parsed [`FileSet`] into a static site: one page per package plus
//! the shared `main.css` and `pldoc.js` assets.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction with HTML escaping
//! - [`listing`]: one-line and multi-line declaration listings
//! - [`comment`]: doc text to paragraphs and preformatted blocks
//! - `page`: page layout, sidebar, search box, and sections

pub mod comment;
pub mod emitter;
mod error;
pub mod listing;
mod page;

pub use comment::{format_comment, format_doc};
pub use emitter::{escape, Emitter, StringEmitter};
pub use error::RenderError;
pub use listing::Listing;
pub use page::render_page;

use std::fs;
use std::path::{Path, PathBuf};

use pldoc_ir::FileSet;
use tracing::debug;

/// Stylesheet written next to the pages.
pub const MAIN_CSS: &str = include_str!("../static/main.css");

/// Search-box script written next to the pages.
pub const PLDOC_JS: &str = include_str!("../static/pldoc.js");

/// Title used when the file set has no description.
pub const DEFAULT_TITLE: &str = "Documentation";

/// Write the documentation site for `set` into `dir`.
///
/// The directory is created if missing. Returns the paths of the package
/// pages in the order they were written.
pub fn render(dir: &Path, set: &FileSet) -> Result<Vec<PathBuf>, RenderError> {
    fs::create_dir_all(dir).map_err(|source| RenderError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    write_file(&dir.join("main.css"), MAIN_CSS)?;
    write_file(&dir.join("pldoc.js"), PLDOC_JS)?;

    let mut pages = Vec::new();
    for package in set.packages() {
        let path = dir.join(page_file_name(package.name.as_str()));
        write_file(&path, &render_page(package, set))?;
        debug!(package = %package.name, path = %path.display(), "wrote page");
        pages.push(path);
    }
    Ok(pages)
}

/// File name of a package's page.
pub fn page_file_name(package: &str) -> String {
    format!("{package}.html")
}

fn write_file(path: &Path, contents: &str) -> Result<(), RenderError> {
    fs::write(path, contents).map_err(|source| RenderError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

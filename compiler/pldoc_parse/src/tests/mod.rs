//! Parser tests.
//!
//! - `package`: package discovery, names, bodies, offsets
//! - `comments`: doc-comment attribution
//! - `decls`: functions, parameters, variables, cursors, types
//! - `errors`: fatal errors and their messages
//! - `properties`: invariants checked over generated input

mod errors;

use pldoc_ir::{File, Package};

#[allow(clippy::expect_used)]
pub(super) fn parse_ok(src: &str) -> File {
    crate::parse("testfile", src.as_bytes()).expect("source should parse")
}

#[allow(clippy::expect_used)]
pub(super) fn first_package(src: &str) -> Package {
    parse_ok(src)
        .packages
        .into_iter()
        .next()
        .expect("source should contain a package")
}

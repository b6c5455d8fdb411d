//! Grammar productions.
//!
//! - `package`: files, packages, body skipping, conditional compilation
//! - `field`: variables, parameters, field lists
//! - `func`: function and procedure signatures
//! - `cursor`: cursor declarations
//! - `ty`: user-defined types and subtypes

mod cursor;
mod field;
mod func;
mod package;
mod ty;

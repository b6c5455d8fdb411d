//! AST for PL/SQL package specifications.
//!
//! Nodes own their text and store byte offsets. Declarations that may carry
//! a doc comment implement [`Documented`](crate::Documented); every node
//! implements [`Spanned`](crate::Spanned).
//!
//! The package-level item stream is a sum type ([`PackageItem`]) that
//! [`Package::new`] partitions once into per-kind lists.

mod decl;
mod field;
mod package;

pub use decl::{CursorDecl, FuncKind, FuncSpec, Sql, SubtypeDecl, TypeDecl, TypeDef, TypeKind};
pub use field::{Field, FieldKind, FieldList, Ident, ParamMode};
pub use package::{File, FileSet, Package, PackageItem};

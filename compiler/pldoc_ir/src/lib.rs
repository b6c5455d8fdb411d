//! pldoc IR - positions, tokens, and AST
//!
//! This crate contains the core data structures shared by the pldoc front end:
//! - Spans and the per-file line table for source locations
//! - Token kinds and the keyword table
//! - Comments and comment groups (doc comments)
//! - AST nodes for package specifications, plus their canonical rendering
//!
//! # Design Philosophy
//!
//! - **Offsets, not positions**: nodes store byte offsets; line/column are
//!   resolved on demand through [`SourceFile`].
//! - **Owned text**: every node owns its text (including cursor SQL), so the
//!   AST outlives the source buffer it was parsed from.
//! - **Tagged variants**: field kinds, type definitions, and package items are
//!   enums, partitioned into per-kind lists once per package.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-copied types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod ast;
mod comment;
mod source;
mod span;
pub mod token;
mod traits;

pub use ast::{
    CursorDecl, Field, FieldKind, FieldList, File, FileSet, FuncKind, FuncSpec, Ident, Package,
    PackageItem, ParamMode, Sql, SubtypeDecl, TypeDecl, TypeDef, TypeKind,
};
pub use comment::{Comment, CommentGroup};
pub use source::{Position, SourceFile};
pub use span::Span;
pub use token::TokenKind;
pub use traits::{Documented, Spanned};

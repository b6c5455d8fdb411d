//! Subtype, cursor, function, and type declarations.

use std::fmt;

use super::{FieldList, Ident};
use crate::{CommentGroup, Documented, Span, Spanned};

/// `subtype name is base;`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SubtypeDecl {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub base: Ident,
}

impl Documented for SubtypeDecl {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for SubtypeDecl {
    fn span(&self) -> Span {
        self.name.span().merge(self.base.span())
    }
}

/// Verbatim SQL text copied out of the source.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Sql {
    pub start: u32,
    pub text: String,
}

impl Sql {
    /// An empty fragment at `start`, for cursors declared by signature only.
    pub fn empty(start: u32) -> Self {
        Sql {
            start,
            text: String::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Spanned for Sql {
    fn span(&self) -> Span {
        Span::with_len(self.start, self.text.len())
    }
}

/// `cursor name[(params)] [return type] [is query];`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct CursorDecl {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub params: Option<FieldList>,
    pub ret: Option<Ident>,
    pub sql: Sql,
}

impl Documented for CursorDecl {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for CursorDecl {
    fn span(&self) -> Span {
        let mut span = self.name.span().merge(self.sql.span());
        if let Some(params) = &self.params {
            span = span.merge(params.span());
        }
        if let Some(ret) = &self.ret {
            span = span.merge(ret.span());
        }
        span
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FuncKind {
    Function,
    Procedure,
}

impl FuncKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FuncKind::Function => "function",
            FuncKind::Procedure => "procedure",
        }
    }
}

impl fmt::Display for FuncKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A function or procedure signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FuncSpec {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub params: Option<FieldList>,
    pub kind: FuncKind,
    /// Return type. Always `None` for procedures.
    pub ret: Option<Ident>,
    pub pipelined: bool,
    pub deterministic: bool,
    pub result_cache: bool,
}

impl FuncSpec {
    /// Modifier keywords in declaration order.
    pub fn modifiers(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.pipelined, "pipelined"),
            (self.deterministic, "deterministic"),
            (self.result_cache, "result_cache"),
        ]
        .into_iter()
        .filter_map(|(set, word)| set.then_some(word))
    }
}

impl Documented for FuncSpec {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for FuncSpec {
    fn span(&self) -> Span {
        let mut span = self.name.span();
        if let Some(params) = &self.params {
            span = span.merge(params.span());
        }
        if let Some(ret) = &self.ret {
            span = span.merge(ret.span());
        }
        span
    }
}

/// Category of a user-defined type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeKind {
    Table,
    Varray,
    Record,
    RefCursor,
}

impl TypeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Table => "table",
            TypeKind::Varray => "varray",
            TypeKind::Record => "record",
            TypeKind::RefCursor => "ref cursor",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition part of a `type name is ...;` declaration.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDef {
    /// `table of element [index by ...]`
    Table { element: Ident },
    /// `varray(bound) of element`
    Varray { bound: Option<Ident>, element: Ident },
    /// `record (fields)`
    Record { fields: FieldList },
    /// `ref cursor [return type]`; `None` is a weakly typed cursor.
    RefCursor { ret: Option<Ident> },
}

/// A user-defined type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDecl {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    pub def: TypeDef,
}

impl TypeDecl {
    pub fn kind(&self) -> TypeKind {
        match self.def {
            TypeDef::Table { .. } => TypeKind::Table,
            TypeDef::Varray { .. } => TypeKind::Varray,
            TypeDef::Record { .. } => TypeKind::Record,
            TypeDef::RefCursor { .. } => TypeKind::RefCursor,
        }
    }

    /// Element or return type for table, varray, and ref cursor types.
    pub fn element(&self) -> Option<&Ident> {
        match &self.def {
            TypeDef::Table { element } | TypeDef::Varray { element, .. } => Some(element),
            TypeDef::RefCursor { ret } => ret.as_ref(),
            TypeDef::Record { .. } => None,
        }
    }

    /// Record fields.
    pub fn fields(&self) -> Option<&FieldList> {
        match &self.def {
            TypeDef::Record { fields } => Some(fields),
            _ => None,
        }
    }
}

impl Documented for TypeDecl {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for TypeDecl {
    fn span(&self) -> Span {
        let span = self.name.span();
        match &self.def {
            TypeDef::Record { fields } => span.merge(fields.span()),
            TypeDef::Varray {
                bound: Some(bound),
                element,
            } => span.merge(bound.span()).merge(element.span()),
            _ => self.element().map_or(span, |e| span.merge(e.span())),
        }
    }
}

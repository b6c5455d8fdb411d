//! Packages, files, and file sets.

use super::{CursorDecl, Field, FuncSpec, Ident, SubtypeDecl, TypeDecl};
use crate::{CommentGroup, Documented, Span, Spanned};

/// One top-level declaration of a package specification.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PackageItem {
    Field(Field),
    Subtype(SubtypeDecl),
    Func(FuncSpec),
    Cursor(CursorDecl),
    Type(TypeDecl),
}

impl Spanned for PackageItem {
    fn span(&self) -> Span {
        match self {
            PackageItem::Field(f) => f.span(),
            PackageItem::Subtype(s) => s.span(),
            PackageItem::Func(f) => f.span(),
            PackageItem::Cursor(c) => c.span(),
            PackageItem::Type(t) => t.span(),
        }
    }
}

/// A package specification.
///
/// Declarations keep source order within their kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Package {
    pub doc: Option<CommentGroup>,
    /// Offset of `create` (or `package` when there is no `create`).
    pub first: u32,
    /// Offset just past the closing `end [name]`.
    pub last: u32,
    pub name: Ident,
    pub variables: Vec<Field>,
    pub subtypes: Vec<SubtypeDecl>,
    pub functions: Vec<FuncSpec>,
    pub cursors: Vec<CursorDecl>,
    pub types: Vec<TypeDecl>,
}

impl Package {
    /// Build a package, partitioning `items` by kind.
    pub fn new(
        doc: Option<CommentGroup>,
        name: Ident,
        first: u32,
        last: u32,
        items: Vec<PackageItem>,
    ) -> Self {
        let mut package = Package {
            doc,
            first,
            last,
            name,
            variables: Vec::new(),
            subtypes: Vec::new(),
            functions: Vec::new(),
            cursors: Vec::new(),
            types: Vec::new(),
        };
        for item in items {
            match item {
                PackageItem::Field(f) => package.variables.push(f),
                PackageItem::Subtype(s) => package.subtypes.push(s),
                PackageItem::Func(f) => package.functions.push(f),
                PackageItem::Cursor(c) => package.cursors.push(c),
                PackageItem::Type(t) => package.types.push(t),
            }
        }
        package
    }

    /// Total number of declarations.
    pub fn decl_count(&self) -> usize {
        self.variables.len()
            + self.subtypes.len()
            + self.functions.len()
            + self.cursors.len()
            + self.types.len()
    }
}

impl Documented for Package {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for Package {
    fn span(&self) -> Span {
        Span::new(self.first, self.last.max(self.first))
    }
}

/// A parsed source file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct File {
    pub name: String,
    pub packages: Vec<Package>,
}

/// All files of one documentation run.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FileSet {
    pub description: Option<String>,
    pub files: Vec<File>,
}

impl FileSet {
    pub fn new(description: Option<String>) -> Self {
        FileSet {
            description,
            files: Vec::new(),
        }
    }

    pub fn add(&mut self, file: File) {
        self.files.push(file);
    }

    /// Packages across all files, in file order.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.files.iter().flat_map(|f| f.packages.iter())
    }
}

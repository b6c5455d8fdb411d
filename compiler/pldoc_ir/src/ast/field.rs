//! Identifiers, fields, and field lists.

use std::fmt;

use crate::{CommentGroup, Documented, Span, Spanned};

/// An identifier, or any text synthesized from several tokens
/// (`schema.table.col%type`, `varchar2(2000)`, `empty_clob()`).
///
/// `name` is normalized text, so its length says nothing about the source;
/// `start..end` is the range the text was read from.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Ident {
    pub name: String,
    pub start: u32,
    pub end: u32,
}

impl Ident {
    /// An identifier read from `span` of the source.
    pub fn spanning(name: impl Into<String>, span: Span) -> Self {
        Ident {
            name: name.into(),
            start: span.start,
            end: span.end,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl Spanned for Ident {
    fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// What a [`Field`] declares.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FieldKind {
    Variable,
    Constant,
    Exception,
    Parameter,
}

impl FieldKind {
    /// Section header used by listings.
    pub fn header(self) -> &'static str {
        match self {
            FieldKind::Variable => "var",
            FieldKind::Constant => "const",
            FieldKind::Exception => "exception",
            FieldKind::Parameter => "param",
        }
    }
}

/// Parameter mode. Only meaningful for parameters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ParamMode {
    #[default]
    None,
    In,
    Out,
    InOut,
}

impl fmt::Display for ParamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ParamMode::None => "",
            ParamMode::In => "in",
            ParamMode::Out => "out",
            ParamMode::InOut => "in out",
        })
    }
}

/// A variable, constant, exception, parameter, or record field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Field {
    pub doc: Option<CommentGroup>,
    pub name: Ident,
    /// Declared type; `None` for exceptions.
    pub ty: Option<Ident>,
    pub kind: FieldKind,
    pub mode: ParamMode,
    pub default: Option<Ident>,
    /// Set when the type carries `not null`.
    pub not_null: bool,
}

impl Field {
    pub fn variable(
        doc: Option<CommentGroup>,
        name: Ident,
        ty: Ident,
        default: Option<Ident>,
        not_null: bool,
    ) -> Self {
        Field {
            doc,
            name,
            ty: Some(ty),
            kind: FieldKind::Variable,
            mode: ParamMode::None,
            default,
            not_null,
        }
    }

    pub fn constant(
        doc: Option<CommentGroup>,
        name: Ident,
        ty: Ident,
        default: Option<Ident>,
        not_null: bool,
    ) -> Self {
        Field {
            kind: FieldKind::Constant,
            ..Field::variable(doc, name, ty, default, not_null)
        }
    }

    pub fn exception(doc: Option<CommentGroup>, name: Ident) -> Self {
        Field {
            doc,
            name,
            ty: None,
            kind: FieldKind::Exception,
            mode: ParamMode::None,
            default: None,
            not_null: false,
        }
    }

    pub fn parameter(
        doc: Option<CommentGroup>,
        name: Ident,
        mode: ParamMode,
        ty: Ident,
        default: Option<Ident>,
    ) -> Self {
        Field {
            doc,
            name,
            ty: Some(ty),
            kind: FieldKind::Parameter,
            mode,
            default,
            not_null: false,
        }
    }

    /// Type text, or `""` when absent.
    pub fn type_name(&self) -> &str {
        self.ty.as_ref().map_or("", Ident::as_str)
    }

    /// Default value text, if any.
    pub fn default_value(&self) -> Option<&str> {
        self.default.as_ref().map(Ident::as_str)
    }
}

impl Documented for Field {
    fn doc(&self) -> Option<&CommentGroup> {
        self.doc.as_ref()
    }
}

impl Spanned for Field {
    fn span(&self) -> Span {
        let mut span = self.name.span();
        if let Some(ty) = &self.ty {
            span = span.merge(ty.span());
        }
        if let Some(default) = &self.default {
            span = span.merge(default.span());
        }
        span
    }
}

/// The canonical one-line form used by listings.
///
/// Renders nothing when the name is missing, or when a variable, constant,
/// or parameter has no type.
impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ty = self.type_name();
        if self.name.is_empty() || (ty.is_empty() && self.kind != FieldKind::Exception) {
            return Ok(());
        }

        match self.kind {
            FieldKind::Variable => write!(f, "{} {ty}", self.name)?,
            FieldKind::Constant => write!(f, "{} constant {ty}", self.name)?,
            FieldKind::Exception => return write!(f, "{} exception", self.name),
            FieldKind::Parameter => {
                write!(f, "{}", self.name)?;
                if self.mode != ParamMode::None {
                    write!(f, " {}", self.mode)?;
                }
                write!(f, " {ty}")?;
            }
        }

        if let Some(default) = self.default_value() {
            let keyword = if self.kind == FieldKind::Parameter { "default" } else { ":=" };
            write!(f, " {keyword} {default}")?;
        }
        Ok(())
    }
}

/// A parenthesized list of parameters or record fields.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct FieldList {
    /// Offset of `(`.
    pub opening: u32,
    pub list: Vec<Field>,
    /// Offset of `)`.
    pub closing: u32,
}

impl FieldList {
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.list.iter()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.iter()
    }
}

impl Spanned for FieldList {
    fn span(&self) -> Span {
        Span::new(self.opening, self.closing.saturating_add(1).max(self.opening))
    }
}

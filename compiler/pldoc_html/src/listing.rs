//! Declaration listings.
//!
//! A listing is the plain-text signature shown in a `<pre>` block above a
//! declaration's docs. Parameter and field lists are broken one entry per
//! line with a four-space indent.

use std::fmt::Write;

use pldoc_ir::{CursorDecl, Field, FieldList, FuncSpec, SubtypeDecl, TypeDecl, TypeDef};

/// Indentation of list entries.
pub const INDENT: &str = "    ";

/// A declaration that can be listed on a page.
pub trait Listing {
    /// Short kind label, such as `function` or `ref cursor`.
    fn header(&self) -> &'static str;

    /// Full listing text.
    fn listing(&self) -> String;
}

/// `(\n    a,\n    b\n)`, or nothing for a missing or empty list.
pub fn field_list_listing(list: Option<&FieldList>) -> String {
    let Some(list) = list.filter(|l| !l.is_empty()) else {
        return String::new();
    };

    let mut out = String::from("(\n");
    for (i, field) in list.iter().enumerate() {
        out.push_str(INDENT);
        let _ = write!(out, "{field}");
        if i + 1 < list.len() {
            out.push(',');
        }
        out.push('\n');
    }
    out.push(')');
    out
}

impl Listing for Field {
    fn header(&self) -> &'static str {
        self.kind.header()
    }

    fn listing(&self) -> String {
        self.to_string()
    }
}

impl Listing for FuncSpec {
    fn header(&self) -> &'static str {
        self.kind.as_str()
    }

    fn listing(&self) -> String {
        let mut out = String::from(self.header());
        if !self.name.is_empty() {
            out.push(' ');
            out.push_str(self.name.as_str());
        }
        out.push_str(&field_list_listing(self.params.as_ref()));
        if let Some(ret) = &self.ret {
            out.push_str(" return ");
            out.push_str(ret.as_str());
        }
        for modifier in self.modifiers() {
            out.push(' ');
            out.push_str(modifier);
        }
        out
    }
}

impl Listing for TypeDecl {
    fn header(&self) -> &'static str {
        self.kind().as_str()
    }

    fn listing(&self) -> String {
        let mut out = format!("type {} is {}", self.name, self.header());
        match &self.def {
            TypeDef::Table { element } => {
                let _ = write!(out, " of {element}");
            }
            TypeDef::Varray { bound, element } => {
                if let Some(bound) = bound {
                    let _ = write!(out, "({bound})");
                }
                let _ = write!(out, " of {element}");
            }
            TypeDef::Record { fields } => out.push_str(&field_list_listing(Some(fields))),
            TypeDef::RefCursor { ret: Some(ret) } => {
                let _ = write!(out, " return {ret}");
            }
            TypeDef::RefCursor { ret: None } => {}
        }
        out
    }
}

impl Listing for CursorDecl {
    fn header(&self) -> &'static str {
        "cursor"
    }

    /// The query is omitted for a cursor declared without one.
    fn listing(&self) -> String {
        let mut out = format!("cursor {}", self.name);
        out.push_str(&field_list_listing(self.params.as_ref()));
        if let Some(ret) = &self.ret {
            let _ = write!(out, " return {ret}");
        }
        if !self.sql.is_empty() {
            out.push_str(" is\n");
            out.push_str(&self.sql.text);
        }
        out
    }
}

impl Listing for SubtypeDecl {
    fn header(&self) -> &'static str {
        "subtype"
    }

    fn listing(&self) -> String {
        format!("subtype {} is {}", self.name, self.base)
    }
}

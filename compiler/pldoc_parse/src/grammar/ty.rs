//! User-defined types and subtypes.

use pldoc_ir::{Ident, Span, SubtypeDecl, TokenKind, TypeDecl, TypeDef};
use tracing::debug;

use crate::text::TypeText;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `TYPE name IS ...;`. The current token is `TYPE`; the parser
    /// stops on the closing `;`.
    ///
    /// Type categories other than table, varray, record, and ref cursor
    /// are skipped and yield `None`.
    pub(crate) fn parse_type(&mut self) -> Result<Option<TypeDecl>, ParseError> {
        let doc = self.take_lead_comment();
        let name = self.parse_ident()?;
        self.next()?;
        self.test(TokenKind::Is)?;
        self.next()?;

        let def = match self.kind {
            TokenKind::Table | TokenKind::Varray => self.parse_list_type()?,
            TokenKind::Record => self.parse_record_type()?,
            TokenKind::Ref => self.parse_ref_cursor_type()?,
            _ => {
                debug!(name = %name, kind = %self.kind, "skipping unsupported type");
                self.scan_to(TokenKind::Semicolon)?;
                return Ok(None);
            }
        };
        Ok(Some(TypeDecl { doc, name, def }))
    }

    /// `TABLE OF element ...` or `VARRAY(bound) OF element`.
    fn parse_list_type(&mut self) -> Result<TypeDef, ParseError> {
        let varray = self.check(TokenKind::Varray);
        self.next()?;

        let mut bound = None;
        if varray && self.check(TokenKind::LParen) {
            let pos = self.pos;
            let group = self.scan_balanced_parens()?;
            let inner = group
                .strip_prefix('(')
                .and_then(|g| g.strip_suffix(')'))
                .unwrap_or(&group);
            let span = Span::new(pos + 1, self.end.saturating_sub(1).max(pos + 1));
            bound = Some(Ident::spanning(inner, span));
        }

        self.scan_to(TokenKind::Of)?;
        let element = self.parse_type_tail()?;

        Ok(if varray {
            TypeDef::Varray { bound, element }
        } else {
            TypeDef::Table { element }
        })
    }

    /// `RECORD (fields)`.
    fn parse_record_type(&mut self) -> Result<TypeDef, ParseError> {
        self.next()?;
        self.test(TokenKind::LParen)?;
        let fields = self.parse_field_list()?;
        Ok(TypeDef::Record { fields })
    }

    /// `REF CURSOR [RETURN type]`.
    fn parse_ref_cursor_type(&mut self) -> Result<TypeDef, ParseError> {
        self.next()?;
        self.expect(TokenKind::Cursor)?;

        if self.check(TokenKind::Semicolon) {
            return Ok(TypeDef::RefCursor { ret: None });
        }
        self.test(TokenKind::Return)?;
        let ret = self.parse_type_tail()?;
        Ok(TypeDef::RefCursor { ret: Some(ret) })
    }

    /// Parse `SUBTYPE name IS base [constraints];`. The current token is
    /// `SUBTYPE`; the parser stops on the closing `;`.
    pub(crate) fn parse_subtype(&mut self) -> Result<SubtypeDecl, ParseError> {
        let doc = self.take_lead_comment();
        let name = self.parse_ident()?;
        self.next()?;
        self.test(TokenKind::Is)?;
        let base = self.parse_type_tail()?;
        Ok(SubtypeDecl { doc, name, base })
    }

    /// Text after the current token up to `;` or EOF.
    fn parse_type_tail(&mut self) -> Result<Ident, ParseError> {
        self.next()?;
        let start = self.pos;
        let mut text = TypeText::new();
        while !matches!(self.kind, TokenKind::Semicolon | TokenKind::Eof) {
            text.push(self.kind, &self.lit, self.span());
            self.next()?;
        }
        Ok(text.into_ident(start))
    }
}

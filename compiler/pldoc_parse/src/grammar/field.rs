//! Variables, constants, exceptions, parameters, and record fields.

use pldoc_ir::{Field, FieldList, Ident, ParamMode, Span, TokenKind};

use crate::text::TypeText;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse a variable, constant, or exception declaration. The current
    /// token is its name.
    ///
    /// Everything up to `;` after the name is the type; a top-level `:=` or
    /// `DEFAULT` starts the default value.
    pub(crate) fn parse_field(&mut self) -> Result<Field, ParseError> {
        let doc = self.take_lead_comment();
        let name = self.gen_ident()?;
        self.next()?;

        if self.check(TokenKind::Exception) {
            return Ok(Field::exception(doc, name));
        }

        let constant = self.check(TokenKind::Constant);
        if constant {
            self.next()?;
        }
        let type_start = self.pos;

        let mut ty = TypeText::new();
        let mut default = TypeText::new();
        let mut in_default = false;
        let mut not_null = false;
        let mut prev = TokenKind::Eof;
        let mut depth = 0u32;

        while !matches!(self.kind, TokenKind::Semicolon | TokenKind::Eof) {
            match self.kind {
                TokenKind::Assign | TokenKind::Default if !in_default && depth == 0 => {
                    in_default = true;
                    self.next()?;
                    continue;
                }
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                TokenKind::Null if !in_default && prev == TokenKind::Not => not_null = true,
                _ => {}
            }
            let target = if in_default { &mut default } else { &mut ty };
            target.push(self.kind, &self.lit, self.span());
            prev = self.kind;
            self.next()?;
        }

        let ty = ty.into_ident(type_start);
        let default = default.into_option();
        Ok(if constant {
            Field::constant(doc, name, ty, default, not_null)
        } else {
            Field::variable(doc, name, ty, default, not_null)
        })
    }

    /// Parse a parenthesized parameter or record-field list. The current
    /// token is `(`; the parser stops after the matching `)`.
    pub(crate) fn parse_field_list(&mut self) -> Result<FieldList, ParseError> {
        let opening = self.pos;
        let mut list = Vec::new();
        let closing = loop {
            list.push(self.parse_param()?);
            if self.check(TokenKind::RParen) {
                break self.pos;
            }
            self.test(TokenKind::Comma)?;
        };
        self.next()?;
        Ok(FieldList {
            opening,
            list,
            closing,
        })
    }

    /// Parse one parameter or record field. The current token is the `(`
    /// or `,` before it; the parser stops on the `,` or `)` after it.
    ///
    /// The name may be any word, keywords included.
    fn parse_param(&mut self) -> Result<Field, ParseError> {
        self.next()?;
        let name = Ident::spanning(self.lit.as_ref(), self.span());
        let doc = self.take_field_comment();

        self.next()?;
        let mode = match self.kind {
            TokenKind::Out => {
                self.next()?;
                ParamMode::Out
            }
            TokenKind::In => {
                self.next()?;
                if self.check(TokenKind::Out) {
                    self.next()?;
                    ParamMode::InOut
                } else {
                    ParamMode::In
                }
            }
            _ => ParamMode::None,
        };
        if self.check(TokenKind::Ident) && self.lit == "nocopy" {
            self.next()?;
        }
        if !self.kind.is_keyword() {
            self.test(TokenKind::Ident)?;
        }

        let type_start = self.pos;
        let mut ty = TypeText::new();
        let mut depth = 0u32;
        loop {
            match self.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen if depth > 0 => depth -= 1,
                TokenKind::Comma
                | TokenKind::RParen
                | TokenKind::Default
                | TokenKind::Assign
                | TokenKind::Eof
                    if depth == 0 =>
                {
                    break
                }
                TokenKind::Eof => break,
                _ => {}
            }
            ty.push(self.kind, &self.lit, self.span());
            self.next()?;
        }

        let mut default = TypeText::new();
        if matches!(self.kind, TokenKind::Default | TokenKind::Assign) {
            loop {
                self.next()?;
                match self.kind {
                    TokenKind::Comma | TokenKind::RParen | TokenKind::Eof => break,
                    TokenKind::LParen => {
                        let pos = self.pos;
                        let group = self.scan_balanced_parens()?;
                        default.push_group(&group, Span::new(pos, self.end));
                    }
                    _ => default.push(self.kind, &self.lit, self.span()),
                }
            }
        }

        Ok(Field::parameter(
            doc,
            name,
            mode,
            ty.into_ident(type_start),
            default.into_option(),
        ))
    }

    /// Capture a parenthesized group as text. The current token must be
    /// `(`; the parser stops on the matching `)`.
    pub(crate) fn scan_balanced_parens(&mut self) -> Result<String, ParseError> {
        self.test(TokenKind::LParen)?;
        let mut text = TypeText::new();
        text.push(self.kind, &self.lit, self.span());
        let mut depth = 1u32;
        while depth != 0 && !self.check(TokenKind::Eof) {
            self.next()?;
            match self.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            text.push(self.kind, &self.lit, self.span());
        }
        Ok(text.into_string())
    }
}

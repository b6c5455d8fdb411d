//! Cursor declarations.

use pldoc_ir::{CursorDecl, Ident, Sql, TokenKind};

use crate::text::TypeText;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse `CURSOR name [(params)] [RETURN type] [IS query];`. The
    /// current token is `CURSOR`; the parser stops on the closing `;`.
    ///
    /// The query is copied verbatim from the source, from its first token
    /// up to (not including) the `;`.
    pub(crate) fn parse_cursor(&mut self) -> Result<CursorDecl, ParseError> {
        let doc = self.take_lead_comment();
        let name = self.parse_ident()?;
        self.next()?;

        let params = if self.check(TokenKind::LParen) {
            Some(self.parse_field_list()?)
        } else {
            None
        };

        let ret = if self.check(TokenKind::Return) {
            Some(self.parse_cursor_result()?)
        } else {
            None
        };

        let sql = if self.check(TokenKind::Semicolon) {
            Sql::empty(self.pos)
        } else {
            self.scan_to(TokenKind::Is)?;
            self.next()?;
            let start = self.pos;
            self.scan_to(TokenKind::Semicolon)?;
            Sql {
                start,
                text: self.source_slice(start, self.pos).to_owned(),
            }
        };

        Ok(CursorDecl {
            doc,
            name,
            params,
            ret,
            sql,
        })
    }

    /// Parse `RETURN <type>` up to `IS` or `;`.
    fn parse_cursor_result(&mut self) -> Result<Ident, ParseError> {
        self.test(TokenKind::Return)?;
        self.next()?;
        let start = self.pos;
        let mut text = TypeText::new();
        while !matches!(
            self.kind,
            TokenKind::Is | TokenKind::Semicolon | TokenKind::Eof
        ) {
            text.push(self.kind, &self.lit, self.span());
            self.next()?;
        }
        Ok(text.into_ident(start))
    }
}

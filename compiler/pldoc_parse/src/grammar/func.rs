//! Function and procedure signatures.

use pldoc_ir::{FuncKind, FuncSpec, Ident, TokenKind};

use crate::text::TypeText;
use crate::{ParseError, Parser};

/// Clauses that may follow a function's return type.
fn is_func_clause(kind: TokenKind, lit: &str) -> bool {
    match kind {
        TokenKind::Pipelined
        | TokenKind::Deterministic
        | TokenKind::ResultCache
        | TokenKind::Semicolon
        | TokenKind::Eof => true,
        TokenKind::Ident => lit == "parallel_enable",
        _ => false,
    }
}

/// Function modifier flags.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
struct FuncOpts {
    pipelined: bool,
    deterministic: bool,
    result_cache: bool,
}

impl Parser<'_> {
    /// Parse a function or procedure signature. The current token is
    /// `FUNCTION` or `PROCEDURE`; the parser stops on the closing `;`.
    pub(crate) fn parse_func_spec(&mut self) -> Result<FuncSpec, ParseError> {
        let kind = if self.check(TokenKind::Procedure) {
            FuncKind::Procedure
        } else {
            FuncKind::Function
        };
        let doc = self.take_lead_comment();
        let name = self.parse_ident()?;

        self.next()?;
        let params = if self.check(TokenKind::LParen) {
            Some(self.parse_field_list()?)
        } else {
            None
        };

        let mut ret = None;
        let mut opts = FuncOpts::default();
        if kind == FuncKind::Function {
            ret = Some(self.parse_func_result()?);
            opts = self.parse_func_opts()?;
        }
        self.scan_to(TokenKind::Semicolon)?;

        Ok(FuncSpec {
            doc,
            name,
            params,
            kind,
            ret,
            pipelined: opts.pipelined,
            deterministic: opts.deterministic,
            result_cache: opts.result_cache,
        })
    }

    /// Parse `RETURN <type>`, stopping at the first modifier clause or `;`.
    fn parse_func_result(&mut self) -> Result<Ident, ParseError> {
        self.test(TokenKind::Return)?;
        self.next()?;
        let start = self.pos;
        let mut text = TypeText::new();
        while !is_func_clause(self.kind, &self.lit) {
            text.push(self.kind, &self.lit, self.span());
            self.next()?;
        }
        Ok(text.into_ident(start))
    }

    /// Collect modifier keywords up to `;`. Clause arguments such as
    /// `result_cache relies_on (t)` are skipped.
    fn parse_func_opts(&mut self) -> Result<FuncOpts, ParseError> {
        let mut opts = FuncOpts::default();
        while !matches!(self.kind, TokenKind::Semicolon | TokenKind::Eof) {
            match self.kind {
                TokenKind::Pipelined => opts.pipelined = true,
                TokenKind::Deterministic => opts.deterministic = true,
                TokenKind::ResultCache => opts.result_cache = true,
                _ => {}
            }
            self.next()?;
        }
        Ok(opts)
    }
}

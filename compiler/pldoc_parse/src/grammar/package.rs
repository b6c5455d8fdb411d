//! Files and packages.

use pldoc_ir::{File, Ident, Package, PackageItem, TokenKind};
use tracing::debug;

use crate::{ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse every package specification in the file.
    pub fn parse_file(mut self) -> Result<File, ParseError> {
        let mut packages = Vec::new();
        while !self.check(TokenKind::Eof) {
            if let Some(package) = self.parse_package()? {
                packages.push(package);
            }
        }
        Ok(File {
            name: self.filename().to_owned(),
            packages,
        })
    }

    /// Find and parse the next package specification.
    ///
    /// `PACKAGE` only starts a package inside a `CREATE` statement; the
    /// lead comment of that `CREATE` is the package's doc. Returns `None`
    /// for a package body or when the input ends first.
    fn parse_package(&mut self) -> Result<Option<Package>, ParseError> {
        let mut create = None;
        let mut doc = None;
        loop {
            match self.kind {
                TokenKind::Eof => return Ok(None),
                TokenKind::Package if create.is_some() => break,
                TokenKind::Create => {
                    create = Some(self.pos);
                    doc = self.take_lead_comment();
                }
                TokenKind::Semicolon => {
                    create = None;
                    doc = None;
                }
                _ => {}
            }
            self.next()?;
        }
        let first = create.unwrap_or(self.pos);

        let Some(name) = self.parse_package_name()? else {
            return Ok(None);
        };
        let (items, last) = self.parse_package_nodes(&name)?;
        let package = Package::new(doc, name, first, last, items);
        debug!(
            package = %package.name,
            decls = package.decl_count(),
            "parsed package"
        );
        Ok(Some(package))
    }

    /// Parse the name after `PACKAGE`, dropping any schema qualifier.
    ///
    /// Leaves the parser on the `IS`/`AS` that opens the specification,
    /// skipping header clauses such as `authid` or `accessible by`. A
    /// package body is skipped whole and yields `None`.
    fn parse_package_name(&mut self) -> Result<Option<Ident>, ParseError> {
        self.next()?;
        if self.check(TokenKind::Body) {
            self.skip_package_body()?;
            return Ok(None);
        }

        let mut name = self.gen_ident()?;
        self.next()?;
        if self.check(TokenKind::Dot) {
            name = self.parse_ident()?;
            self.next()?;
        }

        while !matches!(self.kind, TokenKind::Is | TokenKind::As | TokenKind::Eof) {
            self.next()?;
        }
        Ok(Some(name))
    }

    /// Skip a package body by balancing block openers against `END`.
    ///
    /// `END IF` and `END LOOP` close statements that never opened a block;
    /// `CASE` opens one that its `END` (or `END CASE`) closes.
    fn skip_package_body(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let mut depth: u32 = 1;
        self.next()?;
        while !self.check(TokenKind::Eof) {
            match self.kind {
                TokenKind::Begin => depth += 1,
                TokenKind::Ident if self.lit == "case" => depth += 1,
                TokenKind::End => {
                    self.next()?;
                    let closes_statement =
                        self.check(TokenKind::If) || (self.check(TokenKind::Ident) && self.lit == "loop");
                    if !closes_statement {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                        if !(self.check(TokenKind::Ident) && self.lit == "case") {
                            // Already looking at the token after END.
                            continue;
                        }
                    }
                }
                _ => {}
            }
            self.next()?;
        }
        debug!(start, end = self.pos, "skipped package body");
        Ok(())
    }

    /// Parse declarations up to the package's `END [name]`.
    ///
    /// Returns the items and the offset just past the closing `END` or
    /// name.
    fn parse_package_nodes(
        &mut self,
        name: &Ident,
    ) -> Result<(Vec<PackageItem>, u32), ParseError> {
        let mut items = Vec::new();
        let mut last = self.pos;

        while !self.check(TokenKind::Eof) {
            self.next()?;
            last = self.pos;

            match self.kind {
                TokenKind::Dollar => self.skip_cond()?,
                TokenKind::Ident => items.push(PackageItem::Field(self.parse_field()?)),
                TokenKind::Cursor => items.push(PackageItem::Cursor(self.parse_cursor()?)),
                TokenKind::Function | TokenKind::Procedure => {
                    items.push(PackageItem::Func(self.parse_func_spec()?));
                }
                TokenKind::Pragma => self.scan_to(TokenKind::Semicolon)?,
                TokenKind::Type => {
                    if let Some(ty) = self.parse_type()? {
                        items.push(PackageItem::Type(ty));
                    }
                }
                TokenKind::Subtype => items.push(PackageItem::Subtype(self.parse_subtype()?)),
                TokenKind::End => {
                    last = self.end;
                    self.next()?;
                    if self.check(TokenKind::Ident) {
                        if self.lit != name.name {
                            return Err(self.error(ParseErrorKind::PackageNameMismatch {
                                expected: name.name.clone(),
                            }));
                        }
                        last = self.end;
                    }
                    break;
                }
                TokenKind::Semicolon | TokenKind::Eof => {}
                _ => {
                    debug!(
                        pos = self.pos,
                        kind = %self.kind,
                        "skipping unrecognized declaration"
                    );
                    self.scan_to(TokenKind::Semicolon)?;
                }
            }
        }
        Ok((items, last))
    }

    /// Skip a conditional-compilation marker.
    ///
    /// `$IF`/`$ELSIF` conditions are skipped through `$THEN` and `$ERROR`
    /// through `$END`. Other markers (`$ELSE`, `$END`, `$$name`) are one or
    /// two tokens.
    fn skip_cond(&mut self) -> Result<(), ParseError> {
        self.next()?;
        if self.check(TokenKind::Dollar) {
            self.next()?;
        }
        match self.kind {
            TokenKind::If | TokenKind::Elsif => self.skip_to_directive(|k, lit| {
                k == TokenKind::Ident && lit == "then"
            }),
            TokenKind::Ident if self.lit == "error" => {
                self.skip_to_directive(|k, _| k == TokenKind::End)
            }
            _ => Ok(()),
        }
    }

    /// Advance to the token after the next `$` whose following token
    /// satisfies `closes`, or to EOF.
    fn skip_to_directive(
        &mut self,
        closes: impl Fn(TokenKind, &str) -> bool,
    ) -> Result<(), ParseError> {
        loop {
            self.scan_to(TokenKind::Dollar)?;
            if self.check(TokenKind::Eof) {
                return Ok(());
            }
            self.next()?;
            if closes(self.kind, &self.lit) {
                return Ok(());
            }
        }
    }
}

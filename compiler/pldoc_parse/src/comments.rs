//! Doc-comment attribution.
//!
//! Comments never reach the grammar. While advancing to the next
//! non-comment token the parser groups them and fills two slots that
//! describe the comments around the token it stops on:
//!
//! - the **line comment** starts on the same line as the previous token
//!   and ends on a line before the next one (or at EOF);
//! - the **lead comment** is the last group before the token, ending on
//!   the line immediately above it.
//!
//! A group is a run of comments with at most one blank line between them.
//! Both slots are cleared on every advance, so a slot always describes the
//! current token.

use pldoc_ir::{Comment, CommentGroup, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Take the current comment and return it with the line it ends on.
    fn consume_comment(&mut self) -> Result<(Comment, usize), ParseError> {
        let mut endline = self.line(self.pos);
        if self.lit.starts_with("/*") {
            endline += self.lit.bytes().filter(|&b| b == b'\n').count();
        }
        let comment = Comment::new(self.lit.as_ref(), self.pos);
        self.next0()?;
        Ok((comment, endline))
    }

    /// Take a group of adjacent comments. A non-comment token or more than
    /// `n` blank lines end the group.
    fn consume_comment_group(
        &mut self,
        n: usize,
    ) -> Result<(Option<CommentGroup>, usize), ParseError> {
        let mut list = Vec::new();
        let mut endline = self.line(self.pos);
        while self.check(TokenKind::Comment) && self.line(self.pos) <= endline + n {
            let (comment, end) = self.consume_comment()?;
            list.push(comment);
            endline = end;
        }
        Ok((CommentGroup::new(list), endline))
    }

    /// Advance to the next non-comment token, filling the comment slots.
    pub(crate) fn next(&mut self) -> Result<(), ParseError> {
        self.lead_comment = None;
        self.line_comment = None;
        let prev = self.started.then_some(self.pos);
        self.started = true;
        self.next0()?;

        if !self.check(TokenKind::Comment) {
            return Ok(());
        }

        if let Some(prev) = prev {
            if self.line(self.pos) == self.line(prev) {
                // Same line as the previous token: never a lead comment.
                let (group, endline) = self.consume_comment_group(0)?;
                if self.line(self.pos) != endline || self.check(TokenKind::Eof) {
                    self.line_comment = group;
                }
            }
        }

        let mut last = None;
        while self.check(TokenKind::Comment) {
            let (group, endline) = self.consume_comment_group(1)?;
            last = group.map(|g| (g, endline));
        }

        if let Some((group, endline)) = last {
            if endline + 1 == self.line(self.pos) {
                self.lead_comment = Some(group);
            }
        }
        Ok(())
    }

    /// Doc for a declaration: its lead comment.
    pub(crate) fn take_lead_comment(&mut self) -> Option<CommentGroup> {
        self.lead_comment.take()
    }

    /// Doc for a parameter or record field: the lead comment, else the
    /// line comment.
    pub(crate) fn take_field_comment(&mut self) -> Option<CommentGroup> {
        self.lead_comment.take().or_else(|| self.line_comment.take())
    }
}

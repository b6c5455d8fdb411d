//! Focused traits for interface segregation.
//!
//! - `Spanned` - just span access
//! - `Documented` - just doc comment access

use super::{CommentGroup, Span};

/// Trait for nodes that have a source location span.
///
/// Every node satisfies `start() <= end()`; both lie within the source
/// file the node was parsed from.
pub trait Spanned {
    /// Get the source location span.
    fn span(&self) -> Span;

    /// Offset of the first byte of the node.
    #[inline]
    fn start(&self) -> u32 {
        self.span().start
    }

    /// Offset immediately after the node.
    #[inline]
    fn end(&self) -> u32 {
        self.span().end
    }
}

/// Trait for declarations that may carry a doc comment.
pub trait Documented {
    /// The attached doc comment group, if any.
    fn doc(&self) -> Option<&CommentGroup>;

    /// Canonical doc text, or the empty string when undocumented.
    fn doc_text(&self) -> String {
        self.doc().map(CommentGroup::text).unwrap_or_default()
    }
}

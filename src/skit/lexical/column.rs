//! Column bookkeeping for lexical values
//!
//! Columns are 1-based and inclusive at both ends. A span is always derived from a start
//! column and the verbatim text it covers; there is no way to set its end directly.
//! Lengths count characters (Unicode scalar values), not bytes.

use std::fmt;

/// The columns covered by a verbatim span on a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnSpan {
    from: usize,
    to: usize,
}

impl ColumnSpan {
    /// Span covering `verbatim` when it starts on `from`.
    ///
    /// `from` is expected to be at least 1 and `verbatim` non-empty; both are checked by the
    /// value constructors before a span is built. Returns `None` when the last column is
    /// past `usize::MAX`.
    pub(crate) fn covering(from: usize, verbatim: &str) -> Option<Self> {
        let length = verbatim.chars().count();
        let to = from.checked_add(length.saturating_sub(1))?;
        Some(Self { from, to })
    }

    /// First column of the span.
    pub fn from(&self) -> usize {
        self.from
    }

    /// Last column of the span.
    pub fn to(&self) -> usize {
        self.to
    }

    /// Number of columns covered. Always at least 1.
    pub fn width(&self) -> usize {
        self.to - self.from + 1
    }
}

impl fmt::Display for ColumnSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

//! Immutable text snapshots and character spans
//!
//! Offsets everywhere in this crate are character (Unicode scalar) indices
//! into the rope, not byte offsets.

use std::fmt;

use ropey::Rope;

/// Identifier of a text snapshot. Each edit produces a strictly larger id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VersionId(pub u64);

impl VersionId {
    /// The id the next edit will carry
    pub fn next(self) -> Self {
        VersionId(self.0 + 1)
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Half-open range of character offsets `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Create a span; `end` is clamped so it never precedes `start`
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Span of `len` characters starting at `offset`
    pub fn at(offset: usize, len: usize) -> Self {
        Self {
            start: offset,
            end: offset + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// True when the two spans share at least one character
    pub fn overlaps(&self, other: &TextSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// One immutable snapshot of buffer text.
///
/// Cloning is cheap: the rope shares its chunks between snapshots.
#[derive(Debug, Clone)]
pub struct SourceVersion {
    id: VersionId,
    text: Rope,
}

impl SourceVersion {
    pub fn new(id: VersionId, text: Rope) -> Self {
        Self { id, text }
    }

    /// Snapshot of a string, mainly for tests and one-shot scans
    pub fn from_text(id: VersionId, text: &str) -> Self {
        Self {
            id,
            text: Rope::from_str(text),
        }
    }

    pub fn id(&self) -> VersionId {
        self.id
    }

    pub fn rope(&self) -> &Rope {
        &self.text
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.text.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }

    /// Character at `offset`, or `None` past the end
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get_char(offset)
    }

    /// Span covering the whole text
    pub fn full_span(&self) -> TextSpan {
        TextSpan::new(0, self.len_chars())
    }

    /// Copy out the characters covered by `span` (clamped to the text)
    pub fn slice_to_string(&self, span: TextSpan) -> String {
        let len = self.len_chars();
        let start = span.start.min(len);
        let end = span.end.min(len);
        self.text.slice(start..end).to_string()
    }
}

impl fmt::Display for SourceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}

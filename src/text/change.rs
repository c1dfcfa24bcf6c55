//! Edit and content-type events delivered by the host buffer

use super::version::{SourceVersion, TextSpan};

/// One replaced region of an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSpan {
    /// Start offset, identical in the before and after versions
    pub start: usize,
    /// Text that was removed
    pub old_text: String,
    /// Text that was inserted
    pub new_text: String,
}

impl ChangeSpan {
    pub fn new(start: usize, old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self {
            start,
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }

    /// Region of the before version that was replaced
    pub fn old_span(&self) -> TextSpan {
        TextSpan::at(self.start, self.old_text.chars().count())
    }

    /// Region of the after version holding the inserted text
    pub fn new_span(&self) -> TextSpan {
        TextSpan::at(self.start, self.new_text.chars().count())
    }
}

/// A text edit: the snapshots on both sides plus what changed between them
#[derive(Debug, Clone)]
pub struct TextChange {
    pub before: SourceVersion,
    pub after: SourceVersion,
    pub changes: Vec<ChangeSpan>,
}

impl TextChange {
    pub fn new(before: SourceVersion, after: SourceVersion, changes: Vec<ChangeSpan>) -> Self {
        Self {
            before,
            after,
            changes,
        }
    }

    /// Earliest offset touched by the edit, if anything changed
    pub fn start(&self) -> Option<usize> {
        self.changes.iter().map(|c| c.start).min()
    }

    /// Every removed and inserted fragment
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.changes
            .iter()
            .flat_map(|c| [c.old_text.as_str(), c.new_text.as_str()])
    }
}

/// The buffer switched to another content type
#[derive(Debug, Clone)]
pub struct ContentTypeChange {
    pub before: String,
    pub after: String,
    /// Snapshot current at the moment of the switch
    pub version: SourceVersion,
}

impl ContentTypeChange {
    /// False when only the identity of the content type object changed,
    /// not its name
    pub fn changes_type(&self) -> bool {
        self.before != self.after
    }
}

//! Host-side text buffer
//!
//! A minimal editable buffer that produces a fresh [`SourceVersion`] per edit
//! and announces edits and content-type switches through event sources. It
//! stands in for the host editor's buffer when wiring a tagger.

use ropey::Rope;

use super::change::{ChangeSpan, ContentTypeChange, TextChange};
use super::version::{SourceVersion, TextSpan, VersionId};
use crate::events::{EventSource, Subscription};

/// Editable text plus its content type
#[derive(Debug)]
pub struct TextBuffer {
    current: SourceVersion,
    content_type: String,
    text_changed: EventSource<TextChange>,
    content_type_changed: EventSource<ContentTypeChange>,
}

impl TextBuffer {
    /// Create a buffer; the initial snapshot is version 0
    pub fn new(text: &str, content_type: impl Into<String>) -> Self {
        Self {
            current: SourceVersion::new(VersionId::default(), Rope::from_str(text)),
            content_type: content_type.into(),
            text_changed: EventSource::new(),
            content_type_changed: EventSource::new(),
        }
    }

    /// The current snapshot
    pub fn snapshot(&self) -> SourceVersion {
        self.current.clone()
    }

    pub fn version(&self) -> VersionId {
        self.current.id()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn len_chars(&self) -> usize {
        self.current.len_chars()
    }

    pub fn insert(&mut self, offset: usize, text: &str) -> SourceVersion {
        self.replace(TextSpan::at(offset, 0), text)
    }

    pub fn remove(&mut self, span: TextSpan) -> SourceVersion {
        self.replace(span, "")
    }

    /// Replace `span` with `text`, producing and announcing a new version.
    ///
    /// Spans reaching past the end are clamped to the text.
    pub fn replace(&mut self, span: TextSpan, text: &str) -> SourceVersion {
        let len = self.current.len_chars();
        let start = span.start.min(len);
        let end = span.end.clamp(start, len);

        let before = self.current.clone();
        let mut rope = before.rope().clone();
        let old_text = rope.slice(start..end).to_string();
        rope.remove(start..end);
        rope.insert(start, text);

        let after = SourceVersion::new(before.id().next(), rope);
        self.current = after.clone();

        tracing::trace!(
            "TextBuffer: {} -> {} replaced {} chars at {} with {} chars",
            before.id(),
            after.id(),
            end - start,
            start,
            text.chars().count()
        );

        let change = TextChange::new(
            before,
            after.clone(),
            vec![ChangeSpan::new(start, old_text, text)],
        );
        self.text_changed.emit(&change);
        after
    }

    /// Switch the content type. Listeners are notified even when the name is
    /// unchanged; they decide whether that matters.
    pub fn set_content_type(&mut self, content_type: impl Into<String>) {
        let after = content_type.into();
        let before = std::mem::replace(&mut self.content_type, after.clone());
        let change = ContentTypeChange {
            before,
            after,
            version: self.current.clone(),
        };
        self.content_type_changed.emit(&change);
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn on_text_changed(
        &self,
        callback: impl Fn(&TextChange) + Send + Sync + 'static,
    ) -> Subscription {
        self.text_changed.subscribe(callback)
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn on_content_type_changed(
        &self,
        callback: impl Fn(&ContentTypeChange) + Send + Sync + 'static,
    ) -> Subscription {
        self.content_type_changed.subscribe(callback)
    }

    /// Number of listeners across both event sources
    pub fn listener_count(&self) -> usize {
        self.text_changed.listener_count() + self.content_type_changed.listener_count()
    }
}

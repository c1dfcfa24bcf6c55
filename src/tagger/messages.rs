//! Inputs and outputs of the tagger

use std::sync::Arc;

use crate::language::LanguageProfile;
use crate::settings::RainbowSettings;
use crate::text::{ContentTypeChange, TextChange, TextSpan, VersionId};

/// Triggers the tagger reacts to
#[derive(Debug, Clone)]
pub enum RainbowMsg {
    /// The buffer was edited
    TextChanged(TextChange),

    /// The buffer's content type changed; `profile` is the resolved profile
    /// for the new type
    ContentTypeChanged {
        change: ContentTypeChange,
        profile: Arc<LanguageProfile>,
    },

    /// Global settings changed
    SettingsChanged(RainbowSettings),
}

/// Region of a snapshot whose tags consumers should query again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagsChanged {
    pub version: VersionId,
    pub span: TextSpan,
}

impl TagsChanged {
    /// From `start` to the end of a text of `len` characters
    pub fn to_end(version: VersionId, start: usize, len: usize) -> Self {
        Self {
            version,
            span: TextSpan::new(start.min(len), len),
        }
    }
}

//! Scanner for plain text: every bracket counts

use std::sync::Arc;

use super::chars::TextChars;
use super::{BraceEvent, BraceScanner, ScanState};
use crate::language::LanguageProfile;

pub struct PlainScanner {
    profile: Arc<LanguageProfile>,
}

impl PlainScanner {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self { profile }
    }
}

impl BraceScanner for PlainScanner {
    fn reset(&mut self) {}

    fn extract(&mut self, tc: &mut TextChars<'_>) -> Option<BraceEvent> {
        while let Some(ch) = tc.current() {
            let offset = tc.position();
            tc.advance();
            if self.profile.is_brace(ch) {
                return Some(BraceEvent::new(ch, offset));
            }
        }
        None
    }

    fn state(&self) -> ScanState {
        ScanState::PlainText
    }
}

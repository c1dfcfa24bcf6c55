//! Scanner for SQL dialects

use std::sync::Arc;

use super::chars::TextChars;
use super::lexical::{self, Escapes};
use super::{BraceEvent, BraceScanner, ScanState};
use crate::language::LanguageProfile;

/// `--` and `/* */` comments, `'` strings and `"` quoted identifiers.
///
/// SQL has no escape character; a doubled quote (`'it''s'`) scans as two
/// adjacent literals, which hides the same characters.
pub struct SqlScanner {
    profile: Arc<LanguageProfile>,
    state: ScanState,
}

impl SqlScanner {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self {
            profile,
            state: ScanState::PlainText,
        }
    }
}

impl BraceScanner for SqlScanner {
    fn reset(&mut self) {
        self.state = ScanState::PlainText;
    }

    fn extract(&mut self, tc: &mut TextChars<'_>) -> Option<BraceEvent> {
        lexical::resume(&mut self.state, tc, Escapes::NONE);

        while let Some(ch) = tc.current() {
            match (ch, tc.peek()) {
                ('-', Some('-')) => {
                    tc.skip(2);
                    self.state = ScanState::LineComment;
                }
                ('/', Some('*')) => {
                    tc.skip(2);
                    self.state = ScanState::BlockComment;
                }
                ('\'', _) => {
                    tc.advance();
                    self.state = ScanState::SingleQuotedString;
                }
                ('"', _) => {
                    tc.advance();
                    self.state = ScanState::DoubleQuotedString;
                }
                (ch, _) if self.profile.is_brace(ch) => {
                    let event = BraceEvent::new(ch, tc.position());
                    tc.advance();
                    return Some(event);
                }
                _ => {
                    tc.advance();
                    continue;
                }
            }
            lexical::resume(&mut self.state, tc, Escapes::NONE);
        }
        None
    }

    fn state(&self) -> ScanState {
        self.state
    }
}

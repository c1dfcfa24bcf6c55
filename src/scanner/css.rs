//! Scanner for stylesheets (CSS, SCSS, LESS)

use std::sync::Arc;

use super::chars::TextChars;
use super::lexical::{self, Escapes};
use super::{BraceEvent, BraceScanner, ScanState};
use crate::language::LanguageProfile;

/// `/* */` comments and both quote styles with `\` escapes.
///
/// Plain CSS has no line comments, but SCSS and LESS do, so `//` is treated
/// as one too. It only counts at the start of input or after whitespace,
/// which keeps `url(//cdn/x.png)` and `url(http://x)` intact.
pub struct CssScanner {
    profile: Arc<LanguageProfile>,
    state: ScanState,
}

impl CssScanner {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        Self {
            profile,
            state: ScanState::PlainText,
        }
    }

    fn starts_line_comment(&self, tc: &TextChars<'_>) -> bool {
        let language = self.profile.language();
        tc.previous()
            .map_or(true, |prev| language.is_context_boundary(prev))
    }
}

impl BraceScanner for CssScanner {
    fn reset(&mut self) {
        self.state = ScanState::PlainText;
    }

    fn extract(&mut self, tc: &mut TextChars<'_>) -> Option<BraceEvent> {
        lexical::resume(&mut self.state, tc, Escapes::BACKSLASH);

        while let Some(ch) = tc.current() {
            match (ch, tc.peek()) {
                ('/', Some('*')) => {
                    tc.skip(2);
                    self.state = ScanState::BlockComment;
                }
                ('/', Some('/')) if self.starts_line_comment(tc) => {
                    tc.skip(2);
                    self.state = ScanState::LineComment;
                }
                ('"', _) => {
                    tc.advance();
                    self.state = ScanState::DoubleQuotedString;
                }
                ('\'', _) => {
                    tc.advance();
                    self.state = ScanState::SingleQuotedString;
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
            lexical::resume(&mut self.state, tc, Escapes::BACKSLASH);
        }
        None
    }

    fn state(&self) -> ScanState {
        self.state
    }
}

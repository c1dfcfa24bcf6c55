//! Scanner for C-like languages (C, C++, C#, Java, JavaScript, Go, JSON, Rust)

use std::sync::Arc;

use super::chars::TextChars;
use super::lexical::{self, Escapes};
use super::{BraceEvent, BraceScanner, ScanState};
use crate::language::{LanguageId, LanguageProfile};

/// `//` and `/* */` comments, `"` strings and `'` character literals, all
/// with `\` escapes.
///
/// JavaScript and TypeScript template literals and Go raw strings are
/// backtick strings; only the former honour `\`. Template substitutions
/// (`${...}`) are part of the literal.
pub struct CFamilyScanner {
    profile: Arc<LanguageProfile>,
    state: ScanState,
    /// `'` may start a lifetime or loop label rather than a literal
    lifetimes: bool,
    backticks: bool,
    escapes: Escapes,
}

impl CFamilyScanner {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        let language = profile.language();
        let escapes = Escapes {
            backtick: (language != LanguageId::Go).then_some('\\'),
            ..Escapes::BACKSLASH
        };
        Self {
            backticks: language.has_backtick_strings(),
            profile,
            state: ScanState::PlainText,
            lifetimes: false,
            escapes,
        }
    }

    /// Variant for Rust, where `'a` is a lifetime and not an unterminated
    /// character literal
    pub fn with_lifetimes(profile: Arc<LanguageProfile>) -> Self {
        Self {
            lifetimes: true,
            ..Self::new(profile)
        }
    }

    /// With the cursor on a `'`, decide whether it opens a character literal
    fn opens_char_literal(&self, tc: &TextChars<'_>) -> bool {
        if !self.lifetimes {
            return true;
        }
        // 'x' or '\n'; anything else ('a, 'outer:) is a lifetime or label
        tc.peek() == Some('\\') || (tc.peek().is_some() && tc.peek_nth(2) == Some('\''))
    }
}

impl BraceScanner for CFamilyScanner {
    fn reset(&mut self) {
        self.state = ScanState::PlainText;
    }

    fn extract(&mut self, tc: &mut TextChars<'_>) -> Option<BraceEvent> {
        lexical::resume(&mut self.state, tc, self.escapes);

        // An unfinished construct after `resume` means the input is exhausted
        while let Some(ch) = tc.current() {
            match (ch, tc.peek()) {
                ('/', Some('*')) => {
                    tc.skip(2);
                    self.state = ScanState::BlockComment;
                }
                ('/', Some('/')) => {
                    tc.skip(2);
                    self.state = ScanState::LineComment;
                }
                ('"', _) => {
                    tc.advance();
                    self.state = ScanState::DoubleQuotedString;
                }
                ('\'', _) if self.opens_char_literal(tc) => {
                    tc.advance();
                    self.state = ScanState::SingleQuotedString;
                }
                ('`', _) if self.backticks => {
                    tc.advance();
                    self.state = ScanState::BacktickString;
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
            lexical::resume(&mut self.state, tc, self.escapes);
        }
        None
    }

    fn state(&self) -> ScanState {
        self.state
    }
}

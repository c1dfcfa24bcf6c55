//! Scanner for hash-comment languages (Python, Shell, YAML, TOML)

use std::sync::Arc;

use super::chars::TextChars;
use super::lexical::{self, Escapes};
use super::{BraceEvent, BraceScanner, ScanState};
use crate::language::{LanguageId, LanguageProfile};

/// `#` line comments and both quote styles.
///
/// The dialects disagree on details, so the language decides:
/// - Python and TOML start a comment at any `#`; Shell and YAML only at the
///   start of a word (`${#var}`, `a#b` are not comments).
/// - Only Python and double-quoted strings honour `\` inside quotes; shell,
///   YAML and TOML single-quoted strings are literal.
/// - YAML quotes only open a string at the start of a scalar, so the
///   apostrophe in `title: it's fine` is plain text.
/// - Python and TOML have `"""` and `'''` strings that may span lines and
///   contain lone quotes.
pub struct ScriptScanner {
    profile: Arc<LanguageProfile>,
    state: ScanState,
    comment_anywhere: bool,
    quotes_need_boundary: bool,
    triple_quotes: bool,
    escapes: Escapes,
}

impl ScriptScanner {
    pub fn new(profile: Arc<LanguageProfile>) -> Self {
        let language = profile.language();
        Self {
            profile,
            state: ScanState::PlainText,
            comment_anywhere: matches!(language, LanguageId::Python | LanguageId::Toml),
            quotes_need_boundary: language == LanguageId::Yaml,
            triple_quotes: matches!(language, LanguageId::Python | LanguageId::Toml),
            escapes: Escapes {
                single: (language == LanguageId::Python).then_some('\\'),
                double: Some('\\'),
                backtick: None,
            },
        }
    }

    fn opens_comment(&self, tc: &TextChars<'_>) -> bool {
        self.comment_anywhere || tc.previous().map_or(true, char::is_whitespace)
    }

    fn opens_string(&self, tc: &TextChars<'_>) -> bool {
        let language = self.profile.language();
        !self.quotes_need_boundary
            || tc
                .previous()
                .map_or(true, |prev| language.is_context_boundary(prev))
    }

    /// Enter the string opened by `quote`, cursor on the opening quote
    fn open_string(&mut self, tc: &mut TextChars<'_>, quote: char) {
        let triple = self.triple_quotes && lexical::at_triple_quote(tc, quote);
        self.state = match (quote, triple) {
            ('"', true) => ScanState::TripleDoubleQuotedString,
            ('"', false) => ScanState::DoubleQuotedString,
            (_, true) => ScanState::TripleSingleQuotedString,
            (_, false) => ScanState::SingleQuotedString,
        };
        tc.skip(if triple { 3 } else { 1 });
    }

    fn resume(&mut self, tc: &mut TextChars<'_>) {
        lexical::resume(&mut self.state, tc, self.escapes);
    }
}

impl BraceScanner for ScriptScanner {
    fn reset(&mut self) {
        self.state = ScanState::PlainText;
    }

    fn extract(&mut self, tc: &mut TextChars<'_>) -> Option<BraceEvent> {
        self.resume(tc);

        while let Some(ch) = tc.current() {
            match ch {
                '#' if self.opens_comment(tc) => {
                    tc.advance();
                    self.state = ScanState::LineComment;
                }
                '"' | '\'' if self.opens_string(tc) => self.open_string(tc, ch),
                ch if self.profile.is_brace(ch) => {
                    let event = BraceEvent::new(ch, tc.position());
                    tc.advance();
                    return Some(event);
                }
                _ => {
                    tc.advance();
                    continue;
                }
            }
            self.resume(tc);
        }
        None
    }

    fn state(&self) -> ScanState {
        self.state
    }
}

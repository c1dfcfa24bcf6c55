//! Lexical brace scanning
//!
//! Turns a text snapshot into the ordered sequence of bracket positions that
//! lie outside comments and string literals.
//!
//! ## Architecture
//!
//! ```text
//! SourceVersion ─→ TextChars ─→ BraceScanner::extract ─→ BraceEvent*
//!                                  (one per lexical family)
//! ```
//!
//! Each scanner is a single-pass, left-to-right state machine. Its
//! [`ScanState`] survives between `extract` calls, so constructs spanning
//! many lines (block comments, multi-line strings) are handled without
//! backtracking. A full scan always starts with [`BraceScanner::reset`].

mod c_family;
mod chars;
mod css;
mod lexical;
mod plain;
mod script;
mod sql;

use std::sync::Arc;

pub use c_family::CFamilyScanner;
pub use chars::TextChars;
pub use css::CssScanner;
pub use plain::PlainScanner;
pub use script::ScriptScanner;
pub use sql::SqlScanner;

use crate::language::{LanguageProfile, LexicalFamily};
use crate::text::SourceVersion;

/// Where the scanner currently is, lexically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    PlainText,
    BlockComment,
    LineComment,
    SingleQuotedString,
    DoubleQuotedString,
    /// Python and TOML `'''` strings
    TripleSingleQuotedString,
    /// Python and TOML `"""` strings
    TripleDoubleQuotedString,
    /// JavaScript/TypeScript template literals, Go raw strings
    BacktickString,
}

/// A bracket found in plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceEvent {
    pub ch: char,
    /// Absolute character offset in the scanned snapshot
    pub offset: usize,
}

impl BraceEvent {
    pub fn new(ch: char, offset: usize) -> Self {
        Self { ch, offset }
    }
}

/// Per-language brace extraction
pub trait BraceScanner: Send {
    /// Return to plain text; called before every full scan
    fn reset(&mut self);

    /// Advance `chars` to just past the next bracket in plain text and
    /// report it, or return `None` once the input is exhausted
    fn extract(&mut self, chars: &mut TextChars<'_>) -> Option<BraceEvent>;

    /// Lexical state after the last `extract` call
    fn state(&self) -> ScanState;
}

/// Create the scanner for a profile's lexical family
pub fn scanner_for(profile: Arc<LanguageProfile>) -> Box<dyn BraceScanner> {
    match profile.family() {
        LexicalFamily::CFamily => Box::new(CFamilyScanner::new(profile)),
        LexicalFamily::Rust => Box::new(CFamilyScanner::with_lifetimes(profile)),
        LexicalFamily::Css => Box::new(CssScanner::new(profile)),
        LexicalFamily::Script => Box::new(ScriptScanner::new(profile)),
        LexicalFamily::Sql => Box::new(SqlScanner::new(profile)),
        LexicalFamily::Plain => Box::new(PlainScanner::new(profile)),
    }
}

/// Lazy sequence of every [`BraceEvent`] in a snapshot, from offset 0.
///
/// Creating an extractor resets the scanner, so a new extractor over the
/// same snapshot restarts the sequence.
pub struct BraceExtractor<'a, S: BraceScanner + ?Sized> {
    chars: TextChars<'a>,
    scanner: &'a mut S,
}

impl<'a, S: BraceScanner + ?Sized> BraceExtractor<'a, S> {
    pub fn new(version: &'a SourceVersion, scanner: &'a mut S) -> Self {
        scanner.reset();
        Self {
            chars: TextChars::new(version.rope()),
            scanner,
        }
    }

    /// Lexical state the scan is in so far
    pub fn state(&self) -> ScanState {
        self.scanner.state()
    }
}

impl<S: BraceScanner + ?Sized> Iterator for BraceExtractor<'_, S> {
    type Item = BraceEvent;

    fn next(&mut self) -> Option<BraceEvent> {
        self.scanner.extract(&mut self.chars)
    }
}

/// Scan a whole snapshot with a fresh scanner for `profile`
pub fn extract_braces(version: &SourceVersion, profile: Arc<LanguageProfile>) -> Vec<BraceEvent> {
    let mut scanner = scanner_for(profile);
    BraceExtractor::new(version, scanner.as_mut()).collect()
}

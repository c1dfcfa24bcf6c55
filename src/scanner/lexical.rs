//! Comment and string skipping shared by the per-family scanners

use super::chars::TextChars;
use super::ScanState;

/// Consume a `/* ... */` body, cursor already past the opener.
/// Returns true once the closer has been consumed.
pub(crate) fn skip_block_comment(tc: &mut TextChars<'_>) -> bool {
    while let Some(ch) = tc.current() {
        if ch == '*' && tc.peek() == Some('/') {
            tc.skip(2);
            return true;
        }
        tc.advance();
    }
    false
}

/// Consume a string body up to and including `quote`, cursor already past
/// the opening quote. An escape character and whatever follows it are
/// skipped as one unit. Returns true once the terminator has been consumed.
pub(crate) fn skip_quoted(tc: &mut TextChars<'_>, quote: char, escape: Option<char>) -> bool {
    while let Some(ch) = tc.current() {
        if Some(ch) == escape {
            tc.skip(2);
        } else if ch == quote {
            tc.advance();
            return true;
        } else {
            tc.advance();
        }
    }
    false
}

/// Consume a `"""` / `'''` body, cursor already past the opening triple.
/// Single or doubled quotes inside do not terminate it.
pub(crate) fn skip_triple_quoted(
    tc: &mut TextChars<'_>,
    quote: char,
    escape: Option<char>,
) -> bool {
    while let Some(ch) = tc.current() {
        if Some(ch) == escape {
            tc.skip(2);
        } else if ch == quote && tc.peek() == Some(quote) && tc.peek_nth(2) == Some(quote) {
            tc.skip(3);
            return true;
        } else {
            tc.advance();
        }
    }
    false
}

/// Whether the cursor sits on three consecutive `quote` characters
pub(crate) fn at_triple_quote(tc: &TextChars<'_>, quote: char) -> bool {
    tc.current() == Some(quote) && tc.peek() == Some(quote) && tc.peek_nth(2) == Some(quote)
}

/// Escape character honoured inside each kind of string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Escapes {
    pub single: Option<char>,
    pub double: Option<char>,
    pub backtick: Option<char>,
}

impl Escapes {
    pub(crate) const BACKSLASH: Escapes = Escapes {
        single: Some('\\'),
        double: Some('\\'),
        backtick: Some('\\'),
    };

    pub(crate) const NONE: Escapes = Escapes {
        single: None,
        double: None,
        backtick: None,
    };
}

/// Finish whatever construct `state` describes, switching back to plain text
/// when its terminator is found. At end of input the state is left as is.
pub(crate) fn resume(state: &mut ScanState, tc: &mut TextChars<'_>, escapes: Escapes) {
    let finished = match *state {
        ScanState::PlainText => return,
        ScanState::BlockComment => skip_block_comment(tc),
        ScanState::LineComment => tc.skip_to_line_end(),
        ScanState::SingleQuotedString => skip_quoted(tc, '\'', escapes.single),
        ScanState::DoubleQuotedString => skip_quoted(tc, '"', escapes.double),
        ScanState::TripleSingleQuotedString => skip_triple_quoted(tc, '\'', escapes.single),
        ScanState::TripleDoubleQuotedString => skip_triple_quoted(tc, '"', escapes.double),
        ScanState::BacktickString => skip_quoted(tc, '`', escapes.backtick),
    };
    if finished {
        *state = ScanState::PlainText;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ropey::Rope;

    #[test]
    fn test_escaped_quote_does_not_terminate() {
        let rope = Rope::from_str(r#"a\"b" tail"#);
        let mut tc = TextChars::new(&rope);
        assert!(skip_quoted(&mut tc, '"', Some('\\')));
        assert_eq!(tc.position(), 5);
    }

    #[test]
    fn test_escape_at_end_of_input() {
        let rope = Rope::from_str("abc\\");
        let mut tc = TextChars::new(&rope);
        assert!(!skip_quoted(&mut tc, '"', Some('\\')));
        assert!(tc.at_end());
    }

    #[test]
    fn test_unterminated_comment_keeps_state() {
        let rope = Rope::from_str(" never closed (");
        let mut tc = TextChars::new(&rope);
        let mut state = ScanState::BlockComment;
        resume(&mut state, &mut tc, Escapes::NONE);
        assert_eq!(state, ScanState::BlockComment);
        assert!(tc.at_end());
    }

    #[test]
    fn test_line_comment_stops_before_newline() {
        let rope = Rope::from_str(" ( \n)");
        let mut tc = TextChars::new(&rope);
        let mut state = ScanState::LineComment;
        resume(&mut state, &mut tc, Escapes::NONE);
        assert_eq!(state, ScanState::PlainText);
        assert_eq!(tc.current(), Some('\n'));
    }

    #[test]
    fn test_triple_quote_ignores_lone_quotes() {
        let rope = Rope::from_str("say \"hi\" [\"\"\" tail");
        let mut tc = TextChars::new(&rope);
        assert!(skip_triple_quoted(&mut tc, '"', Some('\\')));
        assert_eq!(tc.position(), 13);
    }

    #[test]
    fn test_unterminated_backtick_keeps_state() {
        let rope = Rope::from_str("${a} ( ");
        let mut tc = TextChars::new(&rope);
        let mut state = ScanState::BacktickString;
        resume(&mut state, &mut tc, Escapes::BACKSLASH);
        assert_eq!(state, ScanState::BacktickString);
        assert!(tc.at_end());
    }
}

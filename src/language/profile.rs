//! Language profiles: bracket pairs plus the characters that matter to the scanner

use std::collections::{HashMap, HashSet};

use super::languages::{LanguageId, LexicalFamily};
use crate::error::ProfileError;

/// Immutable bracket configuration for one language.
///
/// Holds the open → close mapping and the lexical characters (quotes, escape,
/// comment delimiters) whose appearance in an edit may change bracket
/// structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    language: LanguageId,
    /// Open/close pairs in definition order
    pairs: Vec<(char, char)>,
    closer_for: HashMap<char, char>,
    closers: HashSet<char>,
}

impl LanguageProfile {
    /// Build a profile from a bracket list of consecutive open/close pairs,
    /// e.g. `"(){}[]"`.
    ///
    /// Rejects lists that cannot describe a consistent mapping.
    pub fn new(language: LanguageId, brace_list: &str) -> Result<Self, ProfileError> {
        let chars: Vec<char> = brace_list.chars().collect();
        if chars.is_empty() {
            return Err(ProfileError::EmptyBraceList);
        }
        if chars.len() % 2 != 0 {
            return Err(ProfileError::OddBraceList { len: chars.len() });
        }

        let mut profile = Self {
            language,
            pairs: Vec::with_capacity(chars.len() / 2),
            closer_for: HashMap::new(),
            closers: HashSet::new(),
        };

        for pair in chars.chunks_exact(2) {
            let (open, close) = (pair[0], pair[1]);
            if let Some(ch) = [open, close]
                .into_iter()
                .find(|&ch| ch.is_whitespace() || is_lexical(language, ch))
            {
                return Err(ProfileError::ReservedCharacter(ch));
            }
            if open == close {
                return Err(ProfileError::AmbiguousBrace(open));
            }
            if profile.closer_for.contains_key(&open) {
                return Err(ProfileError::DuplicateOpener(open));
            }
            profile.closer_for.insert(open, close);
            profile.closers.insert(close);
            profile.pairs.push((open, close));
        }

        if let Some(&(open, _)) = profile
            .pairs
            .iter()
            .find(|(open, _)| profile.closers.contains(open))
        {
            return Err(ProfileError::AmbiguousBrace(open));
        }

        Ok(profile)
    }

    /// Profile with the language's built-in bracket list
    pub fn builtin(language: LanguageId) -> Self {
        let pairs = [('(', ')'), ('{', '}'), ('[', ']')];
        Self {
            language,
            pairs: pairs.to_vec(),
            closer_for: pairs.iter().copied().collect(),
            closers: pairs.iter().map(|&(_, close)| close).collect(),
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn family(&self) -> LexicalFamily {
        self.language.lexical_family()
    }

    /// Bracket pairs in definition order
    pub fn pairs(&self) -> &[(char, char)] {
        &self.pairs
    }

    /// The bracket list this profile was built from
    pub fn brace_list(&self) -> String {
        self.pairs
            .iter()
            .flat_map(|&(open, close)| [open, close])
            .collect()
    }

    pub fn is_opening(&self, ch: char) -> bool {
        self.closer_for.contains_key(&ch)
    }

    pub fn is_closing(&self, ch: char) -> bool {
        self.closers.contains(&ch)
    }

    /// Opener or closer
    pub fn is_brace(&self, ch: char) -> bool {
        self.is_opening(ch) || self.is_closing(ch)
    }

    /// The closer an opener requires
    pub fn closer_for(&self, open: char) -> Option<char> {
        self.closer_for.get(&open).copied()
    }

    /// Whether `ch` appearing in an edit may change bracket, string or comment
    /// structure
    pub fn is_significant(&self, ch: char) -> bool {
        self.is_brace(ch)
            || is_lexical(self.language, ch)
            || self.language.is_context_boundary(ch)
    }

    /// Whether any character of `text` is significant
    pub fn has_significant(&self, text: &str) -> bool {
        text.chars().any(|ch| self.is_significant(ch))
    }
}

/// Quote, escape or comment delimiter of the language
fn is_lexical(language: LanguageId, ch: char) -> bool {
    let family = language.lexical_family();
    family.quotes().contains(&ch)
        || family.escape() == Some(ch)
        || family.comment_chars().contains(&ch)
        || (ch == '`' && language.has_backtick_strings())
}

//! Stack-based bracket pairing
//!
//! Consumes the brace events of one full scan and lazily yields a tag for
//! every opener and for every closer that matches the innermost open pair.

use crate::language::LanguageProfile;
use crate::scanner::{BraceEvent, BraceExtractor, BraceScanner};
use crate::text::SourceVersion;

use super::tags::TagAssignment;

/// An opener waiting for its closer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub brace: char,
    /// Number of pairs already open when this one was pushed
    pub depth: usize,
    pub open: usize,
}

/// Lazy tag producer over a stream of brace events.
///
/// - An opener is pushed with `depth = stack size` and tagged immediately.
/// - A closer is tagged (with its opener's depth) only when it is the closer
///   the top of the stack requires; otherwise it is ignored and the stack is
///   left untouched.
/// - Openers still on the stack at the end stay unmatched.
pub struct PairMatcher<'p, I> {
    events: I,
    profile: &'p LanguageProfile,
    levels: usize,
    stack: Vec<Pair>,
}

impl<'p, I> PairMatcher<'p, I>
where
    I: Iterator<Item = BraceEvent>,
{
    /// `levels` is the number of distinct depth classes (K)
    pub fn new(events: I, profile: &'p LanguageProfile, levels: usize) -> Self {
        Self {
            events,
            profile,
            levels,
            stack: Vec::new(),
        }
    }

    /// Pairs opened but not yet closed, outermost first
    pub fn open_pairs(&self) -> &[Pair] {
        &self.stack
    }
}

impl<I> Iterator for PairMatcher<'_, I>
where
    I: Iterator<Item = BraceEvent>,
{
    type Item = TagAssignment;

    fn next(&mut self) -> Option<TagAssignment> {
        for event in self.events.by_ref() {
            if self.profile.is_opening(event.ch) {
                let pair = Pair {
                    brace: event.ch,
                    depth: self.stack.len(),
                    open: event.offset,
                };
                self.stack.push(pair);
                return Some(TagAssignment::new(pair.open, pair.depth, self.levels));
            }

            let closes_top = self
                .stack
                .last()
                .and_then(|top| self.profile.closer_for(top.brace))
                == Some(event.ch);
            if closes_top {
                if let Some(pair) = self.stack.pop() {
                    return Some(TagAssignment::new(event.offset, pair.depth, self.levels));
                }
            }
        }
        None
    }
}

/// Tags for a whole snapshot, computed lazily from offset 0.
///
/// Calling this again over the same snapshot restarts the sequence; the
/// scanner is reset first.
pub fn rainbow_tags<'a, S>(
    version: &'a SourceVersion,
    profile: &'a LanguageProfile,
    scanner: &'a mut S,
    levels: usize,
) -> PairMatcher<'a, BraceExtractor<'a, S>>
where
    S: BraceScanner + ?Sized,
{
    PairMatcher::new(BraceExtractor::new(version, scanner), profile, levels)
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use rainbow_braces::language::{LanguageId, LanguageProfile};
use rainbow_braces::rainbow::rainbow_tags;
use rainbow_braces::scanner::{extract_braces, scanner_for};
use rainbow_braces::{RainbowTagger, SourceVersion, Subscription, TagsChanged, VersionId};

/// Snapshot with version id 1
pub fn version(text: &str) -> SourceVersion {
    SourceVersion::from_text(VersionId(1), text)
}

pub fn profile(language: LanguageId) -> Arc<LanguageProfile> {
    Arc::new(LanguageProfile::builtin(language))
}

/// Brackets the scanner reports, in order
pub fn braces(language: LanguageId, text: &str) -> String {
    extract_braces(&version(text), profile(language))
        .into_iter()
        .map(|event| event.ch)
        .collect()
}

/// `(offset, depth, class index)` of every tag for `text`
pub fn tag_triples(language: LanguageId, text: &str, levels: usize) -> Vec<(usize, usize, usize)> {
    let version = version(text);
    let profile = profile(language);
    let mut scanner = scanner_for(Arc::clone(&profile));
    rainbow_tags(&version, &profile, scanner.as_mut(), levels)
        .map(|tag| (tag.offset(), tag.depth, tag.class.index()))
        .collect()
}

/// Records every notification a tagger emits
pub fn record_notifications(tagger: &RainbowTagger) -> (Arc<Mutex<Vec<TagsChanged>>>, Subscription) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = tagger.subscribe_tags_changed(move |changed| {
        sink.lock().unwrap().push(*changed);
    });
    (seen, subscription)
}

/// Tiny deterministic xorshift generator for property-style tests
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        Self(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Random text drawn from `alphabet`
    pub fn text(&mut self, alphabet: &[char], len: usize) -> String {
        (0..len).map(|_| alphabet[self.below(alphabet.len())]).collect()
    }
}

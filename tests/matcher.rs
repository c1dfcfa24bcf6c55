//! Pair matching and depth class tests over real scans

mod common;

use common::{tag_triples, XorShift};
use rainbow_braces::language::LanguageId;
use rainbow_braces::rainbow::{DepthClass, PairMatcher, TagAssignment};
use rainbow_braces::scanner::BraceEvent;
use rainbow_braces::LanguageProfile;

// ========================================================================
// Scenarios
// ========================================================================

#[test]
fn test_end_to_end_nested_call() {
    let tags = tag_triples(LanguageId::C, "foo(bar{baz[1]})", 4);
    assert_eq!(
        tags,
        vec![
            (3, 0, 0),
            (7, 1, 1),
            (11, 2, 2),
            (13, 2, 2),
            (14, 1, 1),
            (15, 0, 0)
        ]
    );
}

#[test]
fn test_mismatched_closer_gets_no_tag() {
    assert_eq!(tag_triples(LanguageId::C, "(]", 4), vec![(0, 0, 0)]);
}

#[test]
fn test_unmatched_opener_keeps_opening_tag() {
    assert_eq!(
        tag_triples(LanguageId::C, "f(a, g(b)", 4),
        vec![(1, 0, 0), (6, 1, 1), (8, 1, 1)]
    );
}

#[test]
fn test_brackets_in_strings_do_not_nest() {
    let tags = tag_triples(LanguageId::JavaScript, "f(\"((\", /* [ */ g())", 4);
    let offsets: Vec<usize> = tags.iter().map(|t| t.0).collect();
    let depths: Vec<usize> = tags.iter().map(|t| t.1).collect();
    assert_eq!(offsets, vec![1, 17, 18, 19]);
    assert_eq!(depths, vec![0, 1, 1, 0]);
}

#[test]
fn test_classes_cycle_through_levels() {
    let text = "(".repeat(9) + &")".repeat(9);
    let tags = tag_triples(LanguageId::PlainText, &text, 4);
    let opener_classes: Vec<usize> = tags[..9].iter().map(|t| t.2).collect();
    assert_eq!(opener_classes, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    assert!(tags.iter().all(|&(_, depth, class)| class == depth % 4));
}

#[test]
fn test_single_level_is_one_class() {
    let tags = tag_triples(LanguageId::C, "{[()]}", 1);
    assert!(tags.iter().all(|&(_, _, class)| class == 0));
}

#[test]
fn test_classification_names() {
    let tag = TagAssignment::new(0, 5, 4);
    assert_eq!(tag.class, DepthClass(1));
    assert_eq!(tag.class.name(), "rainbow2");
    assert_eq!(DepthClass::from_depth(3, 4).name(), "rainbow4");
}

#[test]
fn test_custom_bracket_profile() {
    let profile = LanguageProfile::new(LanguageId::Rust, "()<>").unwrap();
    let events = vec![
        BraceEvent::new('<', 0),
        BraceEvent::new('(', 1),
        BraceEvent::new(')', 2),
        BraceEvent::new('>', 3),
    ];
    let depths: Vec<usize> = PairMatcher::new(events.into_iter(), &profile, 4)
        .map(|tag| tag.depth)
        .collect();
    assert_eq!(depths, vec![0, 1, 1, 0]);
}

// ========================================================================
// Depth property over generated well-nested texts
// ========================================================================

const BRACKETS: [(char, char); 3] = [('(', ')'), ('{', '}'), ('[', ']')];

/// Append a well-nested fragment, recording every pair's offsets
fn generate(rng: &mut XorShift, out: &mut String, pairs: &mut Vec<(usize, usize)>, budget: usize) {
    for _ in 0..rng.below(4) {
        if budget == 0 || rng.below(3) == 0 {
            let len = 1 + rng.below(3);
            out.push_str(&rng.text(&['a', 'b', ' ', ';', '\n'], len));
            continue;
        }
        let (open, close) = BRACKETS[rng.below(BRACKETS.len())];
        let start = out.len();
        out.push(open);
        generate(rng, out, pairs, budget - 1);
        pairs.push((start, out.len()));
        out.push(close);
    }
}

#[test]
fn test_depth_counts_enclosing_pairs() {
    let mut rng = XorShift::new(0x5eed);
    for round in 0..200 {
        let mut text = String::new();
        let mut pairs = Vec::new();
        generate(&mut rng, &mut text, &mut pairs, 6);

        let tags = tag_triples(LanguageId::PlainText, &text, 4);
        assert_eq!(tags.len(), pairs.len() * 2, "round {round}: {text:?}");

        for &(open, close) in &pairs {
            let expected = pairs
                .iter()
                .filter(|&&(o, c)| o < open && open < c)
                .count();
            let opener = tags.iter().find(|t| t.0 == open);
            let closer = tags.iter().find(|t| t.0 == close);
            assert_eq!(opener.map(|t| t.1), Some(expected), "round {round}: {text:?}");
            assert_eq!(closer.map(|t| t.1), Some(expected), "round {round}: {text:?}");
            assert_eq!(opener.map(|t| t.2), Some(expected % 4));
        }
    }
}

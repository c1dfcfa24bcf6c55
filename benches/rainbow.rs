//! Benchmarks for brace scanning, pair matching and incremental retagging
//!
//! Run with: cargo bench --bench rainbow

use std::sync::Arc;

use rainbow_braces::language::{LanguageId, LanguageProfile};
use rainbow_braces::rainbow::rainbow_tags;
use rainbow_braces::scanner::{extract_braces, scanner_for};
use rainbow_braces::{
    LanguageRegistry, RainbowSettings, RainbowTagger, SettingsStore, SourceVersion, TextBuffer,
    TextSpan, VersionId,
};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

// ============================================================================
// Generated sources
// ============================================================================

fn generate_large_rust(lines: usize) -> String {
    let mut source = String::with_capacity(lines * 50);
    source.push_str("use std::collections::HashMap;\n\n");

    for i in 0..lines / 10 {
        source.push_str(&format!(
            r#"fn function_{}<'a>(x: &'a [i32]) -> i32 {{
    // sum of (x[0], x[1])
    let result = x[0] * 2;
    println!("Value: {{}} ({{}})", result, '}}');
    result
}}

"#,
            i
        ));
    }
    source
}

fn generate_large_css(lines: usize) -> String {
    let mut source = String::with_capacity(lines * 40);
    for i in 0..lines / 5 {
        source.push_str(&format!(
            r#".item-{} a[href^="http"] {{
  /* {{ ignored }} */
  background: url("img/{}.png");
  margin: calc(1px + (2px * 3));
}}
"#,
            i, i
        ));
    }
    source
}

fn version(text: &str) -> SourceVersion {
    SourceVersion::from_text(VersionId(1), text)
}

// ============================================================================
// Scanner only
// ============================================================================

#[divan::bench(args = [100, 1000, 10000])]
fn scan_large_rust(bencher: divan::Bencher, lines: usize) {
    let version = version(&generate_large_rust(lines));
    let profile = Arc::new(LanguageProfile::builtin(LanguageId::Rust));

    bencher.bench_local(|| divan::black_box(extract_braces(&version, Arc::clone(&profile))));
}

#[divan::bench(args = [100, 1000, 10000])]
fn scan_large_css(bencher: divan::Bencher, lines: usize) {
    let version = version(&generate_large_css(lines));
    let profile = Arc::new(LanguageProfile::builtin(LanguageId::Css));

    bencher.bench_local(|| divan::black_box(extract_braces(&version, Arc::clone(&profile))));
}

// ============================================================================
// Full rescan (scanner + matcher)
// ============================================================================

#[divan::bench(args = [100, 1000, 10000])]
fn full_rescan_rust(bencher: divan::Bencher, lines: usize) {
    let version = version(&generate_large_rust(lines));
    let profile = Arc::new(LanguageProfile::builtin(LanguageId::Rust));
    let mut scanner = scanner_for(Arc::clone(&profile));

    bencher.bench_local(|| {
        rainbow_tags(&version, &profile, scanner.as_mut(), 4)
            .map(divan::black_box)
            .count()
    });
}

#[divan::bench(args = [100, 1000, 10000])]
fn first_screen_of_tags(bencher: divan::Bencher, lines: usize) {
    let version = version(&generate_large_rust(lines));
    let profile = Arc::new(LanguageProfile::builtin(LanguageId::Rust));
    let mut scanner = scanner_for(Arc::clone(&profile));

    // Lazy production: only the tags a viewport needs
    bencher.bench_local(|| {
        rainbow_tags(&version, &profile, scanner.as_mut(), 4)
            .take(200)
            .map(divan::black_box)
            .count()
    });
}

// ============================================================================
// Incremental controller
// ============================================================================

fn attached(lines: usize) -> (TextBuffer, SettingsStore, RainbowTagger) {
    let buffer = TextBuffer::new(&generate_large_rust(lines), "rust");
    let settings = SettingsStore::new(RainbowSettings::default());
    let tagger = RainbowTagger::attach(&buffer, &settings, Arc::new(LanguageRegistry::new()));
    (buffer, settings, tagger)
}

#[divan::bench(args = [100, 1000, 10000])]
fn edit_without_significant_chars(bencher: divan::Bencher, lines: usize) {
    let (mut buffer, _settings, tagger) = attached(lines);
    let offset = buffer.len_chars() / 2;

    bencher.bench_local(|| {
        buffer.insert(offset, "x");
        divan::black_box(tagger.generation())
    });
}

#[divan::bench(args = [100, 1000, 10000])]
fn edit_with_bracket(bencher: divan::Bencher, lines: usize) {
    let (mut buffer, _settings, tagger) = attached(lines);
    let offset = buffer.len_chars() / 2;

    bencher.bench_local(|| {
        buffer.insert(offset, "(");
        divan::black_box(tagger.generation())
    });
}

#[divan::bench(args = [100, 1000, 10000])]
fn viewport_query(bencher: divan::Bencher, lines: usize) {
    let (buffer, _settings, tagger) = attached(lines);
    let start = buffer.len_chars() / 2;
    let spans = [TextSpan::at(start, 4000)];

    bencher.bench_local(|| divan::black_box(tagger.tags(buffer.version(), &spans)));
}

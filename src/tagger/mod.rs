//! Incremental rainbow tagging for one buffer
//!
//! Owns the published [`TagSet`] of a buffer and decides when a trigger
//! requires a rescan.
//!
//! ## Architecture
//!
//! ```text
//! TextBuffer edit ───────┐
//! content type change ───┼─→ RainbowMsg ─→ TaggerCore::handle
//! SettingsStore change ──┘        │
//!                                 ├─ nothing significant → re-bind TagSet
//!                                 └─ rescan from offset 0 → swap TagSet
//!                                                         → TagsChanged
//! ```
//!
//! Rescans are serialised by the scan lock and run to completion. Readers
//! only take the publication lock, for the instant needed to clone the
//! current `Arc<TagSet>`, so they never wait for a scan.

mod messages;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

pub use messages::{RainbowMsg, TagsChanged};

use crate::events::{EventSource, Subscription};
use crate::language::{LanguageProfile, LanguageRegistry};
use crate::rainbow::{rainbow_tags, TagAssignment, TagSet};
use crate::scanner::{scanner_for, BraceScanner};
use crate::settings::{RainbowSettings, SettingsStore};
use crate::text::{ContentTypeChange, SourceVersion, TextBuffer, TextChange, TextSpan, VersionId};

/// State touched only while handling a trigger
struct ScanContext {
    profile: Arc<LanguageProfile>,
    scanner: Box<dyn BraceScanner>,
    settings: RainbowSettings,
    /// Latest snapshot seen, scanned or not
    current: SourceVersion,
    rescans: u64,
}

impl ScanContext {
    /// Full scan of `version` from offset 0
    fn rescan(&mut self, version: SourceVersion) -> TagSet {
        self.rescans += 1;
        let tags: Vec<TagAssignment> = rainbow_tags(
            &version,
            &self.profile,
            self.scanner.as_mut(),
            self.settings.levels(),
        )
        .collect();

        tracing::trace!(
            "rescan #{} of {} ({}): {} chars, {} tags",
            self.rescans,
            version.id(),
            self.profile.language().display_name(),
            version.len_chars(),
            tags.len()
        );

        let set = TagSet::new(version.id(), self.rescans, tags);
        self.current = version;
        set
    }
}

struct TaggerCore {
    scan: Mutex<ScanContext>,
    published: Mutex<Arc<TagSet>>,
    enabled: AtomicBool,
    tags_changed: EventSource<TagsChanged>,
}

impl TaggerCore {
    fn handle(&self, msg: RainbowMsg) -> Option<TagsChanged> {
        let notification = {
            let mut ctx = self.scan.lock();
            match msg {
                RainbowMsg::TextChanged(change) => self.on_text_changed(&mut ctx, change),
                RainbowMsg::ContentTypeChanged { change, profile } => {
                    self.on_content_type_changed(&mut ctx, change, profile)
                }
                RainbowMsg::SettingsChanged(settings) => {
                    self.on_settings_changed(&mut ctx, settings)
                }
            }
        };

        // Listeners run without the scan lock so they may query or send
        // further triggers
        if let Some(changed) = &notification {
            self.tags_changed.emit(changed);
        }
        notification
    }

    fn on_text_changed(&self, ctx: &mut ScanContext, change: TextChange) -> Option<TagsChanged> {
        if !ctx.settings.enabled {
            tracing::trace!("edit to {} ignored while disabled", change.after.id());
            ctx.current = change.after;
            return None;
        }

        let significant = change
            .fragments()
            .any(|fragment| ctx.profile.has_significant(fragment));

        match change.start() {
            Some(start) if significant => {
                let id = change.after.id();
                let len = change.after.len_chars();
                let set = ctx.rescan(change.after);
                self.publish(set);
                Some(TagsChanged::to_end(id, start, len))
            }
            _ => {
                let id = change.after.id();
                ctx.current = change.after;
                let mut published = self.published.lock();
                tracing::debug!(
                    "edit to {} has no significant characters; keeping generation {}",
                    id,
                    published.generation()
                );
                *published = Arc::new(published.rebind(id));
                None
            }
        }
    }

    fn on_content_type_changed(
        &self,
        ctx: &mut ScanContext,
        change: ContentTypeChange,
        profile: Arc<LanguageProfile>,
    ) -> Option<TagsChanged> {
        if !change.changes_type() {
            tracing::debug!("content type {:?} unchanged; ignoring", change.after);
            return None;
        }

        tracing::debug!(
            "content type {:?} -> {:?} ({})",
            change.before,
            change.after,
            profile.language().display_name()
        );
        ctx.scanner = scanner_for(Arc::clone(&profile));
        ctx.profile = profile;

        let id = change.version.id();
        let len = change.version.len_chars();
        let set = ctx.rescan(change.version);
        self.publish(set);
        Some(TagsChanged::to_end(id, 0, len))
    }

    fn on_settings_changed(
        &self,
        ctx: &mut ScanContext,
        settings: RainbowSettings,
    ) -> Option<TagsChanged> {
        let was_enabled = ctx.settings.enabled;
        ctx.settings = settings;
        self.enabled.store(settings.enabled, Ordering::Release);

        let id = ctx.current.id();
        let len = ctx.current.len_chars();
        if settings.enabled {
            let version = ctx.current.clone();
            let set = ctx.rescan(version);
            self.publish(set);
            Some(TagsChanged::to_end(id, 0, len))
        } else if was_enabled {
            // Stored tags are kept for a cheap re-enable; consumers just
            // need to redraw without them
            tracing::debug!("rainbow tags disabled");
            Some(TagsChanged::to_end(id, 0, len))
        } else {
            None
        }
    }

    fn publish(&self, set: TagSet) {
        let set = Arc::new(set);
        let previous = std::mem::replace(&mut *self.published.lock(), set);
        drop(previous);
    }

    fn tag_set(&self) -> Arc<TagSet> {
        Arc::clone(&self.published.lock())
    }

    fn tags(&self, version: VersionId, spans: &[TextSpan]) -> Vec<TagAssignment> {
        if spans.is_empty() || !self.enabled.load(Ordering::Acquire) {
            return Vec::new();
        }
        let set = self.tag_set();
        if set.version() != version {
            tracing::trace!(
                "stale tag query for {} (published {})",
                version,
                set.version()
            );
            return Vec::new();
        }
        set.tags_in(spans)
    }
}

/// Rainbow tagger for one buffer.
///
/// Can be driven directly through [`RainbowTagger::update`] or attached to a
/// [`TextBuffer`] and [`SettingsStore`], in which case it listens to them
/// until [`RainbowTagger::dispose`] is called or it is dropped.
pub struct RainbowTagger {
    core: Arc<TaggerCore>,
    subscriptions: Vec<Subscription>,
}

impl RainbowTagger {
    /// Create a tagger and scan `version` right away (when enabled)
    pub fn new(
        version: SourceVersion,
        profile: Arc<LanguageProfile>,
        settings: RainbowSettings,
    ) -> Self {
        let mut ctx = ScanContext {
            scanner: scanner_for(Arc::clone(&profile)),
            profile,
            settings,
            current: version.clone(),
            rescans: 0,
        };
        let initial = if settings.enabled {
            ctx.rescan(version)
        } else {
            TagSet::empty(version.id())
        };

        Self {
            core: Arc::new(TaggerCore {
                scan: Mutex::new(ctx),
                published: Mutex::new(Arc::new(initial)),
                enabled: AtomicBool::new(settings.enabled),
                tags_changed: EventSource::new(),
            }),
            subscriptions: Vec::new(),
        }
    }

    /// Create a tagger for `buffer` and subscribe to its edits, its content
    /// type changes and to `settings`
    pub fn attach(
        buffer: &TextBuffer,
        settings: &SettingsStore,
        registry: Arc<LanguageRegistry>,
    ) -> Self {
        let profile = registry.resolve(buffer.content_type());
        tracing::debug!(
            "attaching rainbow tagger: content type {:?} -> {}",
            buffer.content_type(),
            profile.language().display_name()
        );
        let mut tagger = Self::new(buffer.snapshot(), profile, settings.current());
        let core = Arc::downgrade(&tagger.core);

        let weak = core.clone();
        tagger.subscriptions.push(buffer.on_text_changed(move |change| {
            if let Some(core) = weak.upgrade() {
                core.handle(RainbowMsg::TextChanged(change.clone()));
            }
        }));

        let weak = core.clone();
        tagger
            .subscriptions
            .push(buffer.on_content_type_changed(move |change| {
                if let Some(core) = weak.upgrade() {
                    let profile = registry.resolve(&change.after);
                    core.handle(RainbowMsg::ContentTypeChanged {
                        change: change.clone(),
                        profile,
                    });
                }
            }));

        let weak = core;
        tagger.subscriptions.push(settings.on_changed(move |settings| {
            if let Some(core) = weak.upgrade() {
                core.handle(RainbowMsg::SettingsChanged(*settings));
            }
        }));

        tagger
    }

    /// Feed one trigger; returns the region to re-render, if any
    pub fn update(&self, msg: RainbowMsg) -> Option<TagsChanged> {
        self.core.handle(msg)
    }

    /// Published tags overlapping `spans`.
    ///
    /// Empty when disabled, when `spans` is empty, or when `version` is not
    /// the snapshot the published tags belong to.
    pub fn tags(&self, version: VersionId, spans: &[TextSpan]) -> Vec<TagAssignment> {
        self.core.tags(version, spans)
    }

    /// The currently published tag set, regardless of the enabled switch
    pub fn tag_set(&self) -> Arc<TagSet> {
        self.core.tag_set()
    }

    /// Number of rescans behind the published tags
    pub fn generation(&self) -> u64 {
        self.core.tag_set().generation()
    }

    pub fn is_enabled(&self) -> bool {
        self.core.enabled.load(Ordering::Acquire)
    }

    /// Active profile. Waits for an in-flight rescan.
    pub fn profile(&self) -> Arc<LanguageProfile> {
        Arc::clone(&self.core.scan.lock().profile)
    }

    /// Active settings. Waits for an in-flight rescan.
    pub fn settings(&self) -> RainbowSettings {
        self.core.scan.lock().settings
    }

    /// Cloneable read-only handle for other threads
    pub fn reader(&self) -> TagReader {
        TagReader {
            core: Arc::clone(&self.core),
        }
    }

    /// Subscribe to change notifications
    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe_tags_changed(
        &self,
        callback: impl Fn(&TagsChanged) + Send + Sync + 'static,
    ) -> Subscription {
        self.core.tags_changed.subscribe(callback)
    }

    /// Whether the tagger still listens to host event sources
    pub fn is_attached(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    /// Stop listening to every host event source. Idempotent.
    pub fn dispose(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        tracing::debug!(
            "disposing rainbow tagger ({} subscriptions)",
            self.subscriptions.len()
        );
        self.subscriptions.clear();
    }
}

impl Drop for RainbowTagger {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Read-only view of a tagger's published tags, usable from any thread
#[derive(Clone)]
pub struct TagReader {
    core: Arc<TaggerCore>,
}

impl TagReader {
    /// Same contract as [`RainbowTagger::tags`]
    pub fn tags(&self, version: VersionId, spans: &[TextSpan]) -> Vec<TagAssignment> {
        self.core.tags(version, spans)
    }

    pub fn tag_set(&self) -> Arc<TagSet> {
        self.core.tag_set()
    }

    pub fn is_enabled(&self) -> bool {
        self.core.enabled.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageId;
    use crate::text::ChangeSpan;

    fn tagger(text: &str) -> RainbowTagger {
        RainbowTagger::new(
            SourceVersion::from_text(VersionId(1), text),
            Arc::new(LanguageProfile::builtin(LanguageId::C)),
            RainbowSettings::default(),
        )
    }

    fn edit(before: &SourceVersion, start: usize, old: &str, new: &str) -> TextChange {
        let mut rope = before.rope().clone();
        rope.remove(start..start + old.chars().count());
        rope.insert(start, new);
        TextChange::new(
            before.clone(),
            SourceVersion::new(before.id().next(), rope),
            vec![ChangeSpan::new(start, old, new)],
        )
    }

    #[test]
    fn test_initial_scan() {
        let tagger = tagger("f(a[0])");
        let set = tagger.tag_set();
        assert_eq!(set.generation(), 1);
        assert_eq!(set.len(), 4);
        assert_eq!(set.version(), VersionId(1));
    }

    #[test]
    fn test_initially_disabled_publishes_nothing() {
        let tagger = RainbowTagger::new(
            SourceVersion::from_text(VersionId(1), "()"),
            Arc::new(LanguageProfile::builtin(LanguageId::C)),
            RainbowSettings {
                enabled: false,
                ..Default::default()
            },
        );
        assert_eq!(tagger.generation(), 0);
        assert!(tagger.tag_set().is_empty());
    }

    #[test]
    fn test_significant_edit_notifies_from_edit_start() {
        let tagger = tagger("f(a) g");
        let before = SourceVersion::from_text(VersionId(1), "f(a) g");
        let change = edit(&before, 5, "", "[x]");

        let notification = tagger.update(RainbowMsg::TextChanged(change));
        assert_eq!(
            notification,
            Some(TagsChanged {
                version: VersionId(2),
                span: TextSpan::new(5, 9),
            })
        );
        assert_eq!(tagger.generation(), 2);
    }

    #[test]
    fn test_insignificant_edit_rebinds() {
        let tagger = tagger("f(a)");
        let before = SourceVersion::from_text(VersionId(1), "f(a)");
        let old_set = tagger.tag_set();

        let notification = tagger.update(RainbowMsg::TextChanged(edit(&before, 4, "", "x")));
        assert_eq!(notification, None);

        let new_set = tagger.tag_set();
        assert_eq!(new_set.version(), VersionId(2));
        assert!(new_set.same_scan(&old_set));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut tagger = tagger("");
        assert!(!tagger.is_attached());
        tagger.dispose();
        tagger.dispose();
    }
}

//! Global rainbow settings and their change notification

use crate::events::{EventSource, Subscription};

/// Default number of distinct depth classes
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Settings consumed by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainbowSettings {
    /// Feature switch; when off, queries return no tags
    pub enabled: bool,
    /// Number of distinct depth classes (K)
    pub max_depth: usize,
}

impl Default for RainbowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RainbowSettings {
    /// Depth class count, never zero
    pub fn levels(&self) -> usize {
        self.max_depth.max(1)
    }
}

/// Holds the current settings and tells subscribers when they change
#[derive(Debug, Default)]
pub struct SettingsStore {
    current: RainbowSettings,
    changed: EventSource<RainbowSettings>,
}

impl SettingsStore {
    pub fn new(settings: RainbowSettings) -> Self {
        Self {
            current: settings,
            changed: EventSource::new(),
        }
    }

    pub fn current(&self) -> RainbowSettings {
        self.current
    }

    /// Replace the settings. Subscribers hear about it only if something
    /// actually changed.
    pub fn set(&mut self, settings: RainbowSettings) {
        if settings == self.current {
            return;
        }
        tracing::debug!("SettingsStore: {:?} -> {:?}", self.current, settings);
        self.current = settings;
        self.changed.emit(&settings);
    }

    /// Edit the settings in place
    pub fn update(&mut self, edit: impl FnOnce(&mut RainbowSettings)) {
        let mut settings = self.current;
        edit(&mut settings);
        self.set(settings);
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn on_changed(
        &self,
        callback: impl Fn(&RainbowSettings) + Send + Sync + 'static,
    ) -> Subscription {
        self.changed.subscribe(callback)
    }

    pub fn listener_count(&self) -> usize {
        self.changed.listener_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_defaults() {
        let settings = RainbowSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.max_depth, 4);
        assert_eq!(RainbowSettings { max_depth: 0, ..settings }.levels(), 1);
    }

    #[test]
    fn test_only_real_changes_notify() {
        let mut store = SettingsStore::default();
        let hits = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&hits);
        let _sub = store.on_changed(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        store.update(|s| s.enabled = true);
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        store.update(|s| s.enabled = false);
        store.update(|s| s.max_depth = 6);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert_eq!(
            store.current(),
            RainbowSettings {
                enabled: false,
                max_depth: 6
            }
        );
    }
}

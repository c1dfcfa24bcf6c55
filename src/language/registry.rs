//! Content type → profile resolution

use std::collections::HashMap;
use std::sync::Arc;

use super::languages::LanguageId;
use super::profile::LanguageProfile;

/// Resolves content types to shared language profiles.
///
/// Built-in profiles exist for every [`LanguageId`]; overrides replace them.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    profiles: HashMap<LanguageId, Arc<LanguageProfile>>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageRegistry {
    /// Registry holding the built-in profile of every language
    pub fn new() -> Self {
        let profiles = LanguageId::ALL
            .iter()
            .map(|&lang| (lang, Arc::new(LanguageProfile::builtin(lang))))
            .collect();
        Self { profiles }
    }

    /// Replace the profile used for the override's language
    pub fn with_override(mut self, profile: LanguageProfile) -> Self {
        self.set_override(profile);
        self
    }

    pub fn set_override(&mut self, profile: LanguageProfile) {
        tracing::debug!(
            "LanguageRegistry: bracket override for {} = {:?}",
            profile.language().display_name(),
            profile.brace_list()
        );
        self.profiles.insert(profile.language(), Arc::new(profile));
    }

    /// Profile for a language
    pub fn profile(&self, language: LanguageId) -> Arc<LanguageProfile> {
        match self.profiles.get(&language) {
            Some(profile) => Arc::clone(profile),
            None => Arc::new(LanguageProfile::builtin(language)),
        }
    }

    /// Profile for a host content-type name; unknown types get plain text
    pub fn resolve(&self, content_type: &str) -> Arc<LanguageProfile> {
        self.profile(LanguageId::from_content_type(content_type))
    }
}

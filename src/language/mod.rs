//! Language detection and bracket profiles

mod languages;
mod profile;
mod registry;

pub use languages::{LanguageId, LexicalFamily};
pub use profile::LanguageProfile;
pub use registry::LanguageRegistry;

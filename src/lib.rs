//! Rainbow Braces - depth-cycling bracket colouring
//!
//! Finds the brackets of a text snapshot that lie outside comments and string
//! literals, pairs them, and tags every matched bracket with a depth class
//! (`depth mod K`) that a renderer maps to a colour. Tags are recomputed only
//! when an edit touches a character that can change bracket structure.
//!
//! ## Architecture
//!
//! ```text
//! TextBuffer / SettingsStore ─→ RainbowTagger (tagger/)
//!                                   │ rescan
//!                                   ▼
//! SourceVersion ─→ BraceScanner (scanner/) ─→ PairMatcher (rainbow/) ─→ TagSet
//!                      ▲
//!                      └── LanguageProfile (language/)
//! ```

pub mod config;
pub mod config_paths;
pub mod error;
pub mod events;
pub mod language;
pub mod rainbow;
pub mod scanner;
pub mod settings;
pub mod tagger;
pub mod text;
pub mod tracing;

// Re-export commonly used types
pub use config::RainbowConfig;
pub use error::{ConfigError, ProfileError};
pub use events::{EventSource, Subscription};
pub use language::{LanguageId, LanguageProfile, LanguageRegistry};
pub use rainbow::{rainbow_tags, DepthClass, TagAssignment, TagSet};
pub use settings::{RainbowSettings, SettingsStore};
pub use tagger::{RainbowMsg, RainbowTagger, TagReader, TagsChanged};
pub use text::{SourceVersion, TextBuffer, TextChange, TextSpan, VersionId};

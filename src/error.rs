//! Error types
//!
//! Malformed bracket nesting and stale queries are not errors; they have
//! defined silent outcomes. Only configuration mistakes surface here.

use thiserror::Error;

/// A bracket list that cannot form a language profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("bracket list is empty")]
    EmptyBraceList,

    #[error("bracket list has odd length {len}; expected open/close pairs")]
    OddBraceList { len: usize },

    #[error("opening bracket {0:?} is defined more than once")]
    DuplicateOpener(char),

    #[error("bracket {0:?} is used both as an opener and as a closer")]
    AmbiguousBrace(char),

    #[error("{0:?} cannot be a bracket: it is whitespace, a quote, a comment delimiter or the escape character")]
    ReservedCharacter(char),
}

/// Problems loading or validating [`crate::config::RainbowConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("max_depth must be at least 1 (got {0})")]
    InvalidMaxDepth(usize),

    #[error("unknown language {0:?} in bracket overrides")]
    UnknownLanguage(String),

    #[error("invalid bracket override for {language}: {source}")]
    Profile {
        language: String,
        #[source]
        source: ProfileError,
    },
}

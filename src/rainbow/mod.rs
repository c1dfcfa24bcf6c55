//! Depth-based bracket colouring
//!
//! Pairs the brace events of a scan and assigns each matched bracket a
//! cyclic depth class.
//!
//! ## Architecture
//!
//! ```text
//! BraceExtractor ─→ PairMatcher ─→ TagAssignment* ─→ TagSet (per snapshot)
//! ```

mod matcher;
mod tags;

pub use matcher::{rainbow_tags, Pair, PairMatcher};
pub use tags::{DepthClass, TagAssignment, TagSet, CLASSIFICATION_PREFIX};

//! Rainbow tag data structures
//!
//! Defines depth classes, per-bracket tag assignments and the published
//! tag set for one text snapshot.

use std::sync::Arc;

use crate::text::{TextSpan, VersionId};

/// Prefix of the classification names handed to the renderer
pub const CLASSIFICATION_PREFIX: &str = "rainbow";

/// Cyclic style index: `depth mod K`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DepthClass(pub usize);

impl DepthClass {
    /// Class for a nesting depth with `levels` distinct styles.
    /// `levels` of zero is treated as one.
    pub fn from_depth(depth: usize, levels: usize) -> Self {
        DepthClass(depth % levels.max(1))
    }

    pub fn index(&self) -> usize {
        self.0
    }

    /// Classification name, 1-based: class 0 is `"rainbow1"`
    pub fn name(&self) -> String {
        format!("{}{}", CLASSIFICATION_PREFIX, self.0 + 1)
    }
}

/// Style assignment for one bracket character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagAssignment {
    /// Always one character long
    pub span: TextSpan,
    /// Nesting depth of the pair this bracket belongs to
    pub depth: usize,
    pub class: DepthClass,
}

impl TagAssignment {
    pub fn new(offset: usize, depth: usize, levels: usize) -> Self {
        Self {
            span: TextSpan::at(offset, 1),
            depth,
            class: DepthClass::from_depth(depth, levels),
        }
    }

    pub fn offset(&self) -> usize {
        self.span.start
    }
}

/// Every tag computed for one snapshot, in increasing offset order.
///
/// Cloning shares the tag storage. The generation counts completed rescans;
/// a set that was only re-bound to a newer snapshot keeps its generation and
/// its storage.
#[derive(Debug, Clone)]
pub struct TagSet {
    version: VersionId,
    generation: u64,
    tags: Arc<[TagAssignment]>,
}

impl TagSet {
    /// Empty set bound to `version` (generation 0: nothing scanned yet)
    pub fn empty(version: VersionId) -> Self {
        Self {
            version,
            generation: 0,
            tags: Arc::from(Vec::new()),
        }
    }

    /// `tags` must be sorted by offset, as the pair matcher produces them
    pub fn new(version: VersionId, generation: u64, tags: Vec<TagAssignment>) -> Self {
        debug_assert!(tags.windows(2).all(|w| w[0].offset() < w[1].offset()));
        Self {
            version,
            generation,
            tags: Arc::from(tags),
        }
    }

    pub fn version(&self) -> VersionId {
        self.version
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn tags(&self) -> &[TagAssignment] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Same tags and generation, bound to another snapshot
    pub fn rebind(&self, version: VersionId) -> Self {
        Self {
            version,
            generation: self.generation,
            tags: Arc::clone(&self.tags),
        }
    }

    /// True when both sets come from the same rescan
    pub fn same_scan(&self, other: &TagSet) -> bool {
        self.generation == other.generation && Arc::ptr_eq(&self.tags, &other.tags)
    }

    /// Tag covering `offset`, if any
    pub fn tag_at(&self, offset: usize) -> Option<&TagAssignment> {
        self.tags
            .binary_search_by_key(&offset, TagAssignment::offset)
            .ok()
            .map(|idx| &self.tags[idx])
    }

    /// Tags overlapping any of `spans`, in offset order, without duplicates
    pub fn tags_in(&self, spans: &[TextSpan]) -> Vec<TagAssignment> {
        let mut found = Vec::new();
        for span in spans {
            let first = self.tags.partition_point(|tag| tag.span.end <= span.start);
            found.extend(
                self.tags[first..]
                    .iter()
                    .take_while(|tag| tag.span.start < span.end)
                    .filter(|tag| tag.span.overlaps(span)),
            );
        }
        if spans.len() > 1 {
            found.sort_by_key(TagAssignment::offset);
            found.dedup();
        }
        found
    }
}

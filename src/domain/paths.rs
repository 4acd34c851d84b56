//! # Resource Paths
//!
//! Segment-based path model shared by selections, status entries, and stage
//! requests. Every staging comparison happens on these paths, with
//! forward-slash separators regardless of platform.

use std::fmt;

/// An ordered sequence of path segments.
///
/// The empty path (zero segments) is a real value: it denotes the project
/// root itself, not the absence of a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// The canonical empty path.
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parses a `/`-separated path. Leading, trailing, and repeated
    /// separators are ignored, so `"/proj/a/"` and `"proj/a"` are equal.
    pub fn parse(raw: &str) -> Self {
        Self {
            segments: raw
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, if any. Used as a display name fallback.
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// True when every segment of `self` matches the start of `other`.
    /// The empty path prefixes everything.
    pub fn is_prefix_of(&self, other: &ResourcePath) -> bool {
        self.segments.len() <= other.segments.len()
            && self.segments.iter().zip(&other.segments).all(|(a, b)| a == b)
    }

    /// Returns a copy with the first `count` segments dropped.
    pub fn remove_first_segments(&self, count: usize) -> ResourcePath {
        ResourcePath {
            segments: self.segments.iter().skip(count).cloned().collect(),
        }
    }

    /// Strips `root` off the front of this path, yielding the root-relative
    /// form. A path equal to `root` yields the canonical empty path.
    ///
    /// Panics when `root` is not a prefix of `self`: resources handed to the
    /// staging flow are required to live under the project root, anything
    /// else is a wiring bug in the caller.
    pub fn relative_to(&self, root: &ResourcePath) -> ResourcePath {
        assert!(
            root.is_prefix_of(self),
            "resource `{self}` lies outside project root `{root}`"
        );
        self.remove_first_segments(root.segment_count())
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

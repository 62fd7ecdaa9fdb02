//! Version ordering for branch names
//!
//! Branch version slots are dotted numeric components with an optional
//! pre-release tag (`6.10.0`, `2.3`, `1.0.0-rc1`). Ordering is numeric
//! per component, so `6.10.0` sorts after `6.7.0`.

use std::cmp::Ordering;

/// A parsed version: dotted numeric components plus optional pre-release tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    components: Vec<u64>,
    pre: Option<String>,
}

impl Version {
    /// Parse a version string.
    ///
    /// Returns `None` unless every dotted component before the first `-`
    /// is numeric.
    pub fn parse(input: &str) -> Option<Self> {
        let (numbers, pre) = match input.split_once('-') {
            Some((n, p)) => (n, Some(p.to_string())),
            None => (input, None),
        };

        let components = numbers
            .split('.')
            .map(|c| c.parse::<u64>().ok())
            .collect::<Option<Vec<_>>>()?;

        Some(Self { components, pre })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components).then_with(|| {
            // A release sorts after any pre-release of the same number
            match (&self.pre, &other.pre) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            }
        })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two strings as versions, with a deterministic fallback.
///
/// Both parse: numeric version order, original string as tiebreaker.
/// One parses: the parseable one sorts first. Neither parses: plain
/// string order. The fallback exists because whole branch names are
/// sorted this way when a group has no recognizable version shape —
/// a degraded path that assumes the names are version-like.
pub fn compare_versionish(a: &str, b: &str) -> Ordering {
    match (Version::parse(a), Version::parse(b)) {
        (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

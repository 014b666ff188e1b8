//! Configurable version ordering, equality and hashing

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use crate::version::Version;

/// Comparison strictness levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionComparison {
    /// Compare numeric components and pre-release labels, ignore metadata
    Default,
    /// Compare only the numeric components
    Version,
    /// Compare numeric components and pre-release labels, ignore metadata
    VersionRelease,
    /// Additionally require build metadata to match
    VersionReleaseMetadata,
}

/// Reusable comparer implementing a total order over versions at a fixed
/// strictness level.
///
/// All relational behavior of [`Version`] (operators, `Ord`, `Eq`, `Hash`)
/// is derived from a default-mode instance of this type, so explicit and
/// implicit comparisons always agree.
#[derive(Debug, Clone, Copy)]
pub struct VersionComparer {
    mode: VersionComparison,
}

impl VersionComparer {
    /// Create a comparer with the given comparison mode
    pub fn new(mode: VersionComparison) -> Self {
        VersionComparer { mode }
    }

    pub fn mode(&self) -> VersionComparison {
        self.mode
    }

    /// Three-way comparison under this comparer's mode
    pub fn compare(&self, a: &Version, b: &Version) -> Ordering {
        let numeric = a
            .major()
            .cmp(&b.major())
            .then_with(|| a.minor().cmp(&b.minor()))
            .then_with(|| a.patch().cmp(&b.patch()))
            .then_with(|| a.revision().cmp(&b.revision()));
        if numeric != Ordering::Equal {
            return numeric;
        }

        if self.mode == VersionComparison::Version {
            return Ordering::Equal;
        }

        let release = compare_release(a.release_labels(), b.release_labels());
        if release != Ordering::Equal {
            return release;
        }

        if self.mode == VersionComparison::VersionReleaseMetadata {
            return compare_ascii_ci(a.metadata().unwrap_or(""), b.metadata().unwrap_or(""));
        }

        Ordering::Equal
    }

    /// Equality under this comparer's mode
    pub fn equals(&self, a: &Version, b: &Version) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Hash consistent with [`equals`](Self::equals) under this comparer's mode
    pub fn hash(&self, version: &Version) -> u64 {
        let mut hasher = DefaultHasher::new();
        hasher.write(self.comparison_key(version).as_bytes());
        hasher.finish()
    }

    /// The canonical lowercase string the hash is computed over. Metadata is
    /// included only in `VersionReleaseMetadata` mode, pre-release labels only
    /// outside `Version` mode, so equal values always share a key.
    pub(crate) fn comparison_key(&self, version: &Version) -> String {
        let mut key = if version.revision() > 0 {
            format!(
                "{}.{}.{}.{}",
                version.major(),
                version.minor(),
                version.patch(),
                version.revision()
            )
        } else {
            format!("{}.{}.{}", version.major(), version.minor(), version.patch())
        };

        if self.mode != VersionComparison::Version && version.is_prerelease() {
            key.push('-');
            key.push_str(&version.release());
        }

        if self.mode == VersionComparison::VersionReleaseMetadata {
            if let Some(metadata) = version.metadata() {
                key.push('+');
                key.push_str(metadata);
            }
        }

        key.make_ascii_lowercase();
        key
    }
}

impl Default for VersionComparer {
    fn default() -> Self {
        Self::new(VersionComparison::Default)
    }
}

/// Compare pre-release label sequences per SemVer 2.0 rule 11: a stable
/// release outranks any pre-release, numeric identifiers rank below
/// alphanumeric ones at the same position, and a strict prefix ranks below
/// the longer sequence.
fn compare_release(a: &[String], b: &[String]) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }

    for (left, right) in a.iter().zip(b.iter()) {
        let ordering = compare_label(left, right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    a.len().cmp(&b.len())
}

fn compare_label(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => compare_ascii_ci(a, b),
    }
}

fn compare_ascii_ci(a: &str, b: &str) -> Ordering {
    let left = a.bytes().map(|c| c.to_ascii_lowercase());
    let right = b.bytes().map(|c| c.to_ascii_lowercase());
    left.cmp(right)
}

//! Immutable version value type

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparer::{VersionComparer, VersionComparison};
use crate::version_parser::{VersionParser, VersionParserError};

/// An immutable semantic version with optional legacy revision component,
/// pre-release labels and build metadata.
///
/// Values are created through parsing or the component constructors and never
/// change afterwards. Equality, ordering and hashing are all driven by the
/// default [`VersionComparer`], which ignores build metadata.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    revision: u64,
    release_labels: Vec<String>,
    metadata: Option<String>,
    original: Option<String>,
}

impl Version {
    /// Create a stable release version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self::from_parts(major, minor, patch, 0, Vec::new(), None, None)
    }

    /// Create a legacy 4-component version
    pub fn with_revision(major: u64, minor: u64, patch: u64, revision: u64) -> Self {
        Self::from_parts(major, minor, patch, revision, Vec::new(), None, None)
    }

    /// Create a version with pre-release labels and build metadata.
    ///
    /// Empty labels are dropped, so an all-empty label list produces a stable
    /// release. Empty metadata is treated as absent.
    pub fn with_release(
        major: u64,
        minor: u64,
        patch: u64,
        release_labels: &[&str],
        metadata: Option<&str>,
    ) -> Self {
        let labels = release_labels
            .iter()
            .filter(|label| !label.is_empty())
            .map(|label| label.to_string())
            .collect();
        let metadata = metadata.filter(|m| !m.is_empty()).map(str::to_string);

        Self::from_parts(major, minor, patch, 0, labels, metadata, None)
    }

    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        revision: u64,
        release_labels: Vec<String>,
        metadata: Option<String>,
        original: Option<String>,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            revision,
            release_labels,
            metadata,
            original,
        }
    }

    /// Parse a version using the lenient grammar
    pub fn parse(text: &str) -> Result<Self, VersionParserError> {
        VersionParser::new().parse(text)
    }

    /// Parse a version using the lenient grammar, returning `None` on failure
    pub fn try_parse(text: &str) -> Option<Self> {
        VersionParser::new().try_parse(text)
    }

    /// Parse a version using the strict SemVer 2.0 grammar, returning `None` on failure
    pub fn try_parse_strict(text: &str) -> Option<Self> {
        VersionParser::new().try_parse_strict(text)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The legacy 4th version component, 0 when absent
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The ordered pre-release labels, empty for a stable release
    pub fn release_labels(&self) -> &[String] {
        &self.release_labels
    }

    /// The pre-release labels joined with dots, empty for a stable release
    pub fn release(&self) -> String {
        self.release_labels.join(".")
    }

    /// The build metadata, `None` when absent
    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        !self.release_labels.is_empty()
    }

    pub fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }

    /// Whether the version carries a nonzero legacy revision component
    pub fn is_legacy_version(&self) -> bool {
        self.revision > 0
    }

    /// Render the canonical form: 3 numeric components (4 when the legacy
    /// revision is nonzero), then `-labels` and `+metadata` when present.
    pub fn to_normalized_string(&self) -> String {
        let mut out = if self.revision > 0 {
            format!("{}.{}.{}.{}", self.major, self.minor, self.patch, self.revision)
        } else {
            format!("{}.{}.{}", self.major, self.minor, self.patch)
        };

        if self.is_prerelease() {
            out.push('-');
            out.push_str(&self.release());
        }

        if let Some(metadata) = &self.metadata {
            out.push('+');
            out.push_str(metadata);
        }

        out
    }

    /// Compare against another version under the given comparison mode
    pub fn compare_to(&self, other: &Version, mode: VersionComparison) -> Ordering {
        VersionComparer::new(mode).compare(self, other)
    }

    /// Test equality against another version under the given comparison mode
    pub fn equals(&self, other: &Version, mode: VersionComparison) -> bool {
        VersionComparer::new(mode).equals(self, other)
    }
}

impl fmt::Display for Version {
    /// The original form: the parsed text when the value came from a parse,
    /// otherwise a synthesized legacy-style string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(original) = &self.original {
            return f.write_str(original);
        }

        write!(f, "{}.{}.{}.{}", self.major, self.minor, self.patch, self.revision)?;
        if self.is_prerelease() {
            write!(f, "-{}", self.release())?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        VersionComparer::default().equals(self, other)
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(VersionComparer::default().comparison_key(self).as_bytes());
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        VersionComparer::default().compare(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(version: &Version) -> u64 {
        let mut hasher = DefaultHasher::new();
        version.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_component_constructors() {
        let version = Version::new(1, 2, 3);
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert_eq!(version.revision(), 0);
        assert!(!version.is_prerelease());
        assert!(!version.has_metadata());
        assert!(!version.is_legacy_version());

        let legacy = Version::with_revision(1, 2, 3, 4);
        assert_eq!(legacy.revision(), 4);
        assert!(legacy.is_legacy_version());

        let prerelease = Version::with_release(1, 2, 3, &["alpha", "1"], Some("build5"));
        assert_eq!(prerelease.release_labels(), &["alpha", "1"]);
        assert_eq!(prerelease.release(), "alpha.1");
        assert_eq!(prerelease.metadata(), Some("build5"));
        assert!(prerelease.is_prerelease());
        assert!(prerelease.has_metadata());
    }

    #[test]
    fn test_empty_labels_collapse_to_stable() {
        let version = Version::with_release(1, 0, 0, &["", ""], None);
        assert!(!version.is_prerelease());
        assert_eq!(version.release_labels().len(), 0);

        let mixed = Version::with_release(1, 0, 0, &["alpha", ""], Some(""));
        assert_eq!(mixed.release_labels(), &["alpha"]);
        assert!(!mixed.has_metadata());
    }

    #[test]
    fn test_synthesized_original_string() {
        // Programmatically constructed values render legacy style
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3.0");
        assert_eq!(Version::with_revision(1, 2, 3, 4).to_string(), "1.2.3.4");
        assert_eq!(
            Version::with_release(1, 2, 3, &["alpha", "1"], None).to_string(),
            "1.2.3.0-alpha.1"
        );
        // Metadata is not part of the synthesized original form
        assert_eq!(
            Version::with_release(1, 2, 3, &["alpha"], Some("build")).to_string(),
            "1.2.3.0-alpha"
        );
    }

    #[test]
    fn test_parsed_original_string() {
        assert_eq!(Version::parse("1.2.3-alpha+build").unwrap().to_string(), "1.2.3-alpha+build");
        assert_eq!(Version::parse("  1.2.3  ").unwrap().to_string(), "1.2.3");
        assert_eq!(Version::parse("01.2.3").unwrap().to_string(), "01.2.3");
    }

    #[test]
    fn test_normalized_string() {
        assert_eq!(Version::new(1, 2, 3).to_normalized_string(), "1.2.3");
        assert_eq!(Version::with_revision(1, 2, 3, 4).to_normalized_string(), "1.2.3.4");
        assert_eq!(Version::with_revision(1, 2, 3, 0).to_normalized_string(), "1.2.3");
        assert_eq!(
            Version::with_release(1, 2, 3, &["alpha", "1"], Some("build")).to_normalized_string(),
            "1.2.3-alpha.1+build"
        );
        assert_eq!(Version::parse("2.3.18.2-a").unwrap().to_normalized_string(), "2.3.18.2-a");
        assert_eq!(Version::parse("01.02.3").unwrap().to_normalized_string(), "1.2.3");
    }

    #[test]
    fn test_from_str_uses_lenient_grammar() {
        let version: Version = "1.2.3.4-beta".parse().unwrap();
        assert_eq!(version.revision(), 4);
        assert_eq!(version.release(), "beta");

        assert!("not a version".parse::<Version>().is_err());
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let plain = Version::parse("1.2.3").unwrap();
        let zero = Version::parse("1.2.3+0").unwrap();
        let number = Version::parse("1.2.3+321").unwrap();
        let word = Version::parse("1.2.3+XYZ").unwrap();

        for a in [&plain, &zero, &number, &word] {
            for b in [&plain, &zero, &number, &word] {
                assert_eq!(a, b);
                assert_eq!(hash_of(a), hash_of(b));
                assert_eq!(a.cmp(b), Ordering::Equal);
            }
        }
    }

    #[test]
    fn test_prerelease_equality_ignores_metadata() {
        let base = Version::parse("1.2.3-alpha").unwrap();
        for other in ["1.2.3-alpha+0", "1.2.3-alpha+10", "1.2.3-alpha+beta"] {
            let parsed = Version::parse(other).unwrap();
            assert_eq!(base, parsed);
            assert_eq!(hash_of(&base), hash_of(&parsed));
        }
    }

    #[test]
    fn test_equality_is_case_insensitive_over_labels() {
        let upper = Version::parse("1.2.3-ALPHA").unwrap();
        let lower = Version::parse("1.2.3-alpha").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(hash_of(&upper), hash_of(&lower));
        assert_eq!(upper.cmp(&lower), Ordering::Equal);
    }

    #[test]
    fn test_equality_laws() {
        let a = Version::parse("1.2.3-alpha+1").unwrap();
        let b = Version::parse("1.2.3-Alpha+2").unwrap();
        let c = Version::parse("1.2.3-ALPHA").unwrap();

        // Reflexive
        assert_eq!(a, a);
        // Symmetric
        assert_eq!(a, b);
        assert_eq!(b, a);
        // Transitive
        assert_eq!(b, c);
        assert_eq!(a, c);
    }

    #[test]
    fn test_ordering_via_ord() {
        let mut versions = vec![
            Version::parse("1.0.0").unwrap(),
            Version::parse("1.0.0-alpha").unwrap(),
            Version::parse("0.9.9").unwrap(),
            Version::parse("1.0.0-alpha.1").unwrap(),
            // Digit-initial release labels only pass the strict grammar
            Version::try_parse_strict("1.0.0-1").unwrap(),
        ];
        versions.sort();

        let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["0.9.9", "1.0.0-1", "1.0.0-alpha", "1.0.0-alpha.1", "1.0.0"]
        );
    }

    #[test]
    fn test_option_ordering_treats_absent_as_lower() {
        let version = Version::parse("0.0.1").unwrap();
        assert!(Some(&version) > None);
    }

    #[test]
    fn test_idempotent_reparse_of_normalized_form() {
        for text in ["1.2.3", "1.2.3-alpha.1+build", "2.3.18.2-a", "01.02.3-Beta"] {
            let parsed = Version::parse(text).unwrap();
            let reparsed = Version::parse(&parsed.to_normalized_string()).unwrap();
            assert_eq!(parsed, reparsed);
            assert_eq!(parsed.to_normalized_string(), reparsed.to_normalized_string());
        }
    }
}

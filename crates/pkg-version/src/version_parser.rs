//! Version parsing under the lenient and strict grammars

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionParserError {
    #[error("version string is empty")]
    Empty,
    #[error("Invalid version string \"{0}\"")]
    Malformed(String),
}

lazy_static! {
    // Lenient grammar: 1 to 4 dot-separated digit runs (leading zeros and
    // whitespace around interior dots permitted), an optional free-form
    // release section starting with a letter, and an optional single-segment
    // build metadata section.
    static ref LENIENT_VERSION_RE: Regex = Regex::new(
        r"(?i)^(?P<version>\d+(?:\s*\.\s*\d+){0,3})(?:-(?P<release>[a-z][0-9a-z.-]*))?(?:\+(?P<metadata>[0-9a-z-]+))?$"
    ).unwrap();

    // Strict SemVer 2.0 grammar: exactly 3 numeric components without leading
    // zeros, dot-separated non-empty release identifiers, single-segment
    // build metadata. No whitespace anywhere.
    static ref STRICT_VERSION_RE: Regex = Regex::new(
        r"^(?P<version>(?:0|[1-9]\d*)(?:\.(?:0|[1-9]\d*)){2})(?:-(?P<release>[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+(?P<metadata>[0-9A-Za-z-]+))?$"
    ).unwrap();
}

/// Parser turning version strings into [`Version`] values
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse under the lenient grammar, with a descriptive error on failure
    pub fn parse(&self, text: &str) -> Result<Version, VersionParserError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(VersionParserError::Empty);
        }

        parse_lenient(trimmed).ok_or_else(|| VersionParserError::Malformed(trimmed.to_string()))
    }

    /// Parse under the lenient grammar, returning `None` on failure
    pub fn try_parse(&self, text: &str) -> Option<Version> {
        parse_lenient(text.trim())
    }

    /// Parse under the strict SemVer 2.0 grammar, returning `None` on failure
    pub fn try_parse_strict(&self, text: &str) -> Option<Version> {
        parse_strict(text)
    }

    /// Check whether a string is a valid lenient-grammar version
    pub fn is_valid(&self, text: &str) -> bool {
        self.try_parse(text).is_some()
    }
}

impl Default for VersionParser {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_lenient(trimmed: &str) -> Option<Version> {
    if trimmed.is_empty() {
        return None;
    }

    let caps = LENIENT_VERSION_RE.captures(trimmed)?;

    let mut components = [0u64; 4];
    let mut count = 0;
    for piece in caps.name("version").unwrap().as_str().split('.') {
        components[count] = piece.trim().parse().ok()?;
        count += 1;
    }

    let release_labels = caps.name("release").map_or_else(Vec::new, |release| {
        release
            .as_str()
            .split('.')
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    });
    let metadata = caps.name("metadata").map(|m| m.as_str().to_string());

    // The original form drops any whitespace the lenient grammar allowed
    // around interior dots.
    let original: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();

    Some(Version::from_parts(
        components[0],
        components[1],
        components[2],
        components[3],
        release_labels,
        metadata,
        Some(original),
    ))
}

fn parse_strict(text: &str) -> Option<Version> {
    let caps = STRICT_VERSION_RE.captures(text)?;

    let mut components = [0u64; 3];
    for (i, piece) in caps.name("version").unwrap().as_str().split('.').enumerate() {
        components[i] = piece.parse().ok()?;
    }

    let release_labels = caps.name("release").map_or_else(Vec::new, |release| {
        release.as_str().split('.').map(str::to_string).collect()
    });
    let metadata = caps.name("metadata").map(|m| m.as_str().to_string());

    Some(Version::from_parts(
        components[0],
        components[1],
        components[2],
        0,
        release_labels,
        metadata,
        Some(text.to_string()),
    ))
}

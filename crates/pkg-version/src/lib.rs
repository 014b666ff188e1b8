//! Package version parsing and comparison
//!
//! This crate provides an immutable version value type with two parsing
//! grammars (a lenient grammar that also covers legacy 4-component versions,
//! and a strict SemVer 2.0 grammar) plus a comparison algebra with
//! configurable strictness for ordering, equality and hashing.

mod comparator;
mod comparer;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use comparer::{VersionComparer, VersionComparison};
pub use version::Version;
pub use version_parser::{VersionParser, VersionParserError};

//! String-level comparison facade

use std::cmp::Ordering;

use crate::comparer::VersionComparer;
use crate::version::Version;

/// Comparator for comparing version strings without handling [`Version`]
/// values directly. Inputs are parsed with the lenient grammar and compared
/// with the default comparer.
pub struct Comparator;

impl Comparator {
    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">", version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, ">=", version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<", version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "<=", version2)
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "==", version2)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &str, version2: &str) -> bool {
        Self::compare(version1, "!=", version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare(version1: &str, operator: &str, version2: &str) -> bool {
        let left = Version::try_parse(version1);
        let right = Version::try_parse(version2);

        let (left, right) = match (left, right) {
            (Some(left), Some(right)) => (left, right),
            // Unparseable input satisfies no relation except inequality of
            // differing raw strings.
            _ => return matches!(operator, "!=" | "<>") && version1 != version2,
        };

        let ordering = VersionComparer::default().compare(&left, &right);
        match operator {
            "=" | "==" => ordering == Ordering::Equal,
            "!=" | "<>" => ordering != Ordering::Equal,
            ">" => ordering == Ordering::Greater,
            ">=" => ordering != Ordering::Less,
            "<" => ordering == Ordering::Less,
            "<=" => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Sort version strings in ascending order, dropping unparseable entries
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort version strings in descending order, dropping unparseable entries
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, text)| Version::try_parse(text).map(|v| (v, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let ordering = a.cmp(b);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}

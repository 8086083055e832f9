// std imports
use std::collections::HashSet;

// third-party imports
use wildcard::{WILDCARD_STR, contains_wildcard};

// local imports
use crate::{
    entry::PatternEntry,
    normalize::{CaseFolding, normalize_pattern},
};

// ---

/// Construction options of a [`PatternList`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListOptions {
    /// Component delimiter, `None` or an empty string disables splitting.
    pub delimiter: Option<String>,
    pub case_sensitive: bool,
}

impl ListOptions {
    pub fn new(delimiter: Option<&str>, case_sensitive: bool) -> Self {
        Self {
            delimiter: delimiter.map(String::from),
            case_sensitive,
        }
    }
}

// ---

/// A single named allow or deny list.
///
/// Patterns without wildcards are kept in an exact-match set, patterns with wildcards
/// are split into components by the delimiter and matched component-wise.
/// A bare `*` pattern is stored as a literal in the exact-match set and makes
/// the list match any present value.
///
/// The list is immutable after construction and can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct PatternList {
    exact: HashSet<String>,
    patterns: HashSet<PatternEntry>,
    folding: CaseFolding,
    delimiter: Option<String>,
}

impl PatternList {
    /// Creates a new list from raw patterns.
    ///
    /// Each pattern gets runs of `*` collapsed and, unless `case_sensitive` is set,
    /// is folded to upper case.
    pub fn new<I>(patterns: I, delimiter: Option<&str>, case_sensitive: bool) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::with_options(patterns, ListOptions::new(delimiter, case_sensitive))
    }

    /// Creates a list without any patterns, it matches nothing.
    pub fn empty(delimiter: Option<&str>, case_sensitive: bool) -> Self {
        Self::new(std::iter::empty::<&str>(), delimiter, case_sensitive)
    }

    /// Creates a new list from raw patterns using the given options.
    pub fn with_options<I>(patterns: I, options: ListOptions) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let delimiter = options.delimiter.filter(|d| !d.is_empty());
        let folding = CaseFolding::new(options.case_sensitive);

        let mut exact = HashSet::new();
        let mut entries = HashSet::new();

        for pattern in patterns {
            let pattern = normalize_pattern(pattern.as_ref(), folding);
            if pattern == WILDCARD_STR || !contains_wildcard(&pattern) {
                exact.insert(pattern);
            } else {
                entries.insert(PatternEntry::new(&pattern, delimiter.as_deref()));
            }
        }

        log::debug!(
            "pattern list created with {} exact and {} wildcard patterns",
            exact.len(),
            entries.len()
        );

        Self {
            exact,
            patterns: entries,
            folding,
            delimiter,
        }
    }

    /// Returns `true` if the value matches any pattern in the list.
    ///
    /// A missing value never matches, not even the bare `*` pattern.
    /// Any present value, including an empty one, matches the bare `*` pattern.
    pub fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };

        let value = self.folding.fold(value);

        if self.exact.contains(&*value) {
            log::debug!("list contains matching exact value: {}", value);
            return true;
        }
        if self.matches_any() {
            log::debug!("list contains wildcard any {:?} pattern so all values match", WILDCARD_STR);
            return true;
        }
        if self.patterns.is_empty() {
            return false;
        }

        let value = PatternEntry::new(&value, self.delimiter.as_deref());

        for pattern in &self.patterns {
            // entries with a different number of components are skipped, others may still match
            if pattern.matches(&value) == Some(true) {
                log::debug!("found match for {} with pattern {}", value, pattern);
                return true;
            }
        }

        false
    }

    /// Returns `true` if the list contains the bare `*` pattern.
    #[inline]
    pub fn matches_any(&self) -> bool {
        self.exact.contains(WILDCARD_STR)
    }

    #[inline]
    pub fn case_sensitive(&self) -> bool {
        self.folding.is_sensitive()
    }

    #[inline]
    pub fn delimiter(&self) -> Option<&str> {
        self.delimiter.as_deref()
    }

    /// Number of distinct exact-match patterns, including the bare `*`.
    #[inline]
    pub fn exact_len(&self) -> usize {
        self.exact.len()
    }

    /// Number of distinct wildcard patterns.
    #[inline]
    pub fn wildcard_len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.patterns.is_empty()
    }
}

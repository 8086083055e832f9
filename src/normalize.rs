//! Normalization applied identically to loaded patterns and queried values.
//!
//! Case-insensitive lists fold both sides to upper case using the default Unicode
//! case mapping from [`str::to_uppercase`]. The mapping is locale independent, which has
//! known consequences for some scripts: `ß` folds to `SS`, so `"straße"` and `"STRASSE"`
//! are considered equal, and the Turkish dotless `ı` folds to the plain `I`.

// std imports
use std::borrow::Cow;

// ---

/// Case handling mode of a pattern list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CaseFolding {
    /// Values and patterns are compared as is.
    Sensitive,
    /// Values and patterns are folded to upper case before comparison.
    #[default]
    Insensitive,
}

impl CaseFolding {
    pub fn new(case_sensitive: bool) -> Self {
        if case_sensitive { Self::Sensitive } else { Self::Insensitive }
    }

    #[inline]
    pub fn is_sensitive(self) -> bool {
        self == Self::Sensitive
    }

    /// Folds the string according to the mode.
    pub fn fold(self, s: &str) -> Cow<'_, str> {
        match self {
            Self::Sensitive => Cow::Borrowed(s),
            Self::Insensitive if s.is_ascii() && !s.bytes().any(|b| b.is_ascii_lowercase()) => Cow::Borrowed(s),
            Self::Insensitive => Cow::Owned(s.to_uppercase()),
        }
    }
}

/// Normalizes a raw pattern before it is stored.
///
/// Runs of wildcards are collapsed first, then the case is folded.
pub fn normalize_pattern(raw: &str, folding: CaseFolding) -> String {
    folding.fold(&wildcard::collapse(raw)).into_owned()
}

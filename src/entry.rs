// std imports
use std::fmt;

// ---

/// A pattern or a candidate value split into ordered components.
///
/// Components are separated by a literal delimiter, for example `"@"` for email
/// addresses or `"."` for IPv4 addresses. Equality and hashing cover the whole
/// ordered component sequence, so entries can be deduplicated in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PatternEntry {
    components: Vec<String>,
}

impl PatternEntry {
    /// Splits `value` into components.
    ///
    /// - An empty value has no components.
    /// - A missing or empty delimiter leaves the whole value as a single component.
    /// - Otherwise the value is split on every occurrence of the delimiter,
    ///   keeping empty components between adjacent delimiters.
    pub fn new(value: &str, delimiter: Option<&str>) -> Self {
        let components = if value.is_empty() {
            Vec::new()
        } else {
            match delimiter {
                Some(delimiter) if !delimiter.is_empty() => value.split(delimiter).map(String::from).collect(),
                _ => vec![value.to_owned()],
            }
        };

        Self { components }
    }

    #[inline]
    pub fn components(&self) -> &[String] {
        &self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Matches a candidate value against this entry used as a pattern.
    ///
    /// Returns `None` if the component counts differ and the entry cannot be compared
    /// with the value at all. Otherwise every component of the value must match the
    /// wildcard pattern of the corresponding component of the entry.
    pub fn matches(&self, value: &PatternEntry) -> Option<bool> {
        if self.len() != value.len() {
            return None;
        }

        Some(
            self.components
                .iter()
                .zip(&value.components)
                .all(|(pattern, value)| wildcard::matches(value, pattern)),
        )
    }
}

impl fmt::Display for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, component) in self.components.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{}'", component)?;
        }
        write!(f, "]")
    }
}

use std::borrow::Cow;
use std::fmt;

use memchr::{memchr, memmem};

use crate::utf8::utf8_char_width;

/// The wildcard marker, matches zero or more characters.
pub const WILDCARD: char = '*';

/// The wildcard marker as a string, a pattern that matches anything.
pub const WILDCARD_STR: &str = "*";

const WILDCARD_BYTE: u8 = b'*';

/// Tests whether `value` matches `pattern` as a whole.
///
/// Each `*` in the pattern matches zero or more characters, any other character matches itself.
/// The function does not normalize its arguments, so case folding and wildcard collapsing
/// have to be done by the caller beforehand.
///
/// # Examples
///
/// ```
/// use wildcard::matches;
///
/// assert!(matches("anyone", "*"));
/// assert!(matches("10", "1*"));
/// assert!(matches("http://www.example.com", "*www.*.com*"));
/// assert!(!matches("http://www.example.edu", "*www.*.com*"));
/// ```
pub fn matches(value: &str, pattern: &str) -> bool {
    if value == pattern || pattern == WILDCARD_STR {
        return true;
    }

    let value = value.as_bytes();
    let pattern = pattern.as_bytes();

    let mut vi = 0;
    let mut pi = 0;
    let mut star_pi: Option<usize> = None;
    let mut star_vi = 0;

    while vi < value.len() {
        if pattern.get(pi) == Some(&WILDCARD_BYTE) {
            star_pi = Some(pi);
            star_vi = vi;
            pi += 1;
            continue;
        }

        let width = utf8_char_width(value[vi]);
        if pattern.get(pi..pi + width) == value.get(vi..vi + width) {
            vi += width;
            pi += width;
        } else if let Some(sp) = star_pi {
            star_vi += utf8_char_width(value[star_vi]);
            vi = star_vi;
            pi = sp + 1;
        } else {
            return false;
        }
    }

    while pattern.get(pi) == Some(&WILDCARD_BYTE) {
        pi += 1;
    }

    pi == pattern.len()
}

/// Returns `true` if the string contains the wildcard marker.
#[inline]
pub fn contains_wildcard(s: &str) -> bool {
    memchr(WILDCARD_BYTE, s.as_bytes()).is_some()
}

/// Collapses every run of consecutive wildcard markers into a single one.
///
/// Returns the input unchanged (borrowed) if there is nothing to collapse.
///
/// ```
/// use wildcard::collapse;
///
/// assert_eq!(collapse("a**b***"), "a*b*");
/// assert_eq!(collapse("a*b"), "a*b");
/// ```
pub fn collapse(raw: &str) -> Cow<'_, str> {
    if memmem::find(raw.as_bytes(), b"**").is_none() {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len());
    let mut prev_wild = false;
    for ch in raw.chars() {
        let wild = ch == WILDCARD;
        if !(wild && prev_wild) {
            result.push(ch);
        }
        prev_wild = wild;
    }

    Cow::Owned(result)
}

/// A normalized wildcard pattern.
///
/// The pattern text is stored with runs of `*` collapsed, so `"a**b"` and `"a*b"`
/// produce equal patterns.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("startswith*");
/// assert!(pattern.matches("startswith_andhasmore"));
/// assert!(!pattern.matches("notstartswith"));
/// assert_eq!(Pattern::new("a**b"), Pattern::new("a*b"));
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Default)]
pub struct Pattern {
    text: String,
}

impl Pattern {
    /// Creates a new pattern from a string, collapsing repeated wildcards.
    ///
    /// This function is infallible, all input strings are valid patterns.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            text: collapse(raw.as_ref()).into_owned(),
        }
    }

    /// Returns the normalized pattern text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the pattern is a bare wildcard that matches anything.
    #[inline]
    pub fn is_any(&self) -> bool {
        self.text == WILDCARD_STR
    }

    /// Returns `true` if the pattern contains at least one wildcard.
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        contains_wildcard(&self.text)
    }

    /// Tests whether the pattern matches the given text as a whole.
    #[inline]
    pub fn matches(&self, text: &str) -> bool {
        matches(text, &self.text)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

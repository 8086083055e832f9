//! A minimal wildcard matcher for allow/deny list patterns.
//!
//! The only metacharacter is `*`, which matches zero or more characters.
//! There are no single-character wildcards, no character classes and no escapes,
//! so every other character in a pattern matches itself.
//!
//! # Features
//!
//! - **Linear-amortized matching**: classic two-pointer scan with a single backtrack point
//! - **Any number of wildcards**: at the start, in the middle, at the end, or all of them
//! - **UTF-8 aware**: the scan advances by whole characters and never splits one
//! - **Normalization helpers**: collapse runs of `*` before storing a pattern
//!
//! # Examples
//!
//! ```
//! use wildcard::{Pattern, matches};
//!
//! assert!(matches("www.example.com", "www.*.com"));
//! assert!(!matches("www.com", "www.*.com"));
//!
//! let pattern = Pattern::new("*www.**.com*");
//! assert_eq!(pattern.to_string(), "*www.*.com*");
//! assert!(pattern.matches("http://www.example.com"));
//! assert!(!pattern.matches("http://www.example.edu"));
//! ```
//!
//! # UTF-8 Handling
//!
//! ```
//! use wildcard::matches;
//!
//! assert!(matches("這是中國人something", "*something"));
//! assert!(matches("더 유니 코드.abc.더 유니 코드", "더 유니 코드.*.더 유니 코드"));
//! ```

mod pattern;
mod utf8;

pub use pattern::*;

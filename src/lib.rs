//! Allow and deny list matching with wildcard patterns.
//!
//! A [`PatternList`] holds patterns of a single list. A pattern is either an exact string
//! or a string with `*` wildcards, each matching zero or more characters. With a component
//! delimiter, such as `"@"` for email addresses or `"."` for IPv4 addresses, wildcard patterns
//! and values are split into components that are matched pairwise, so a wildcard never
//! crosses a delimiter.
//!
//! ```
//! use listmatch::PatternList;
//!
//! let list = PatternList::new(["10.0.0.*", "10.100.0.1"], Some("."), false);
//! assert!(list.matches(Some("10.0.0.1")));
//! assert!(list.matches(Some("10.100.0.1")));
//! assert!(!list.matches(Some("10.100.0.2")));
//! assert!(!list.matches(None));
//! ```
//!
//! A [`Registry`] holds any number of lists referenced by name.

// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod entry;
pub mod error;
pub mod list;
pub mod normalize;
pub mod registry;
pub mod settings;
pub mod source;
pub mod vfs;

// private modules
mod appdirs;

// public uses
pub use entry::PatternEntry;
pub use list::{ListOptions, PatternList};
pub use normalize::CaseFolding;
pub use registry::Registry;
pub use settings::Settings;
pub use source::{read_patterns, read_patterns_from_file};
pub use wildcard::WILDCARD;

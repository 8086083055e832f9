// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::settings::ListSettings;

// ---

/// Checks values against named allow and deny lists with wildcard patterns.
///
/// Prints `match` or `no-match` followed by a tab and the value for each value.
/// Exits with status 0 if all values matched, 1 if any did not, and 2 on error.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be specified multiple times.
    ///
    /// An empty value or "-" discards the default configuration and all configuration files specified before it.
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Vec<String>,

    /// Name of the list to check values against.
    #[arg(long, short = 'l', default_value = DEFAULT_LIST, env = "LISTMATCH_LIST")]
    pub list: String,

    /// Inline pattern for the list given by --list, may be specified multiple times.
    #[arg(long = "pattern", short = 'p', value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Pattern file for the list given by --list, may be specified multiple times.
    #[arg(long = "patterns-file", short = 'f', value_name = "FILE")]
    pub pattern_files: Vec<PathBuf>,

    /// Component delimiter for inline patterns, for example "@" for email addresses.
    #[arg(long, short = 'd')]
    pub delimiter: Option<String>,

    /// Compare inline patterns and values case sensitively.
    #[arg(long, short = 's')]
    pub case_sensitive: bool,

    /// Print names of all configured lists and exit.
    #[arg(long)]
    pub list_names: bool,

    /// Do not print results, report them with the exit status only.
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Values to check, read from stdin line by line if none are given.
    pub values: Vec<String>,
}

pub const DEFAULT_LIST: &str = "cli";

impl Opt {
    /// Returns configuration files to load and whether the default ones should be skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();
        (&self.config[offset..], no_default)
    }

    /// Returns settings of the list defined on the command line, if any.
    pub fn inline_list(&self) -> Option<ListSettings> {
        if self.patterns.is_empty() && self.pattern_files.is_empty() {
            return None;
        }

        Some(ListSettings {
            patterns: self.patterns.clone(),
            files: self.pattern_files.clone(),
            delimiter: self.delimiter.clone(),
            case_sensitive: self.case_sensitive,
        })
    }
}

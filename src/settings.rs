// std imports
use std::collections::BTreeMap;
use std::include_str;
use std::path::{Path, PathBuf};

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::{error::Result, list::ListOptions};

// ---

static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub lists: BTreeMap<String, ListSettings>,
}

impl Settings {
    /// Loads settings from the embedded defaults followed by the given sources.
    ///
    /// Later sources override values of the earlier ones.
    pub fn load<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    log::debug!("adding configuration source {}", file.path.display());
                    builder.add_source(File::from(file.path.as_path()).required(file.required))
                }
                Source::Str(value, format) => builder.add_source(File::from_str(&value, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

/// Settings of a single named list.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct ListSettings {
    /// Inline patterns.
    pub patterns: Vec<String>,
    /// Pattern files, one pattern per line, `#` starts a comment.
    pub files: Vec<PathBuf>,
    /// Component delimiter, splitting is disabled if it is missing or empty.
    pub delimiter: Option<String>,
    pub case_sensitive: bool,
}

impl ListSettings {
    pub fn options(&self) -> ListOptions {
        ListOptions::new(self.delimiter.as_deref(), self.case_sensitive)
    }
}

// ---

/// A configuration source.
#[derive(Debug, Clone)]
pub enum Source {
    File(SourceFile),
    Str(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

// ---

/// A configuration file, the format is detected by its extension.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    required: bool,
}

impl SourceFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_owned(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

#[cfg(test)]
mod tests;

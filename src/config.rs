// std imports
use std::path::{Path, PathBuf};

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "listmatch";

/// Environment variable with an additional configuration file path.
pub const ENV_CONFIG: &str = "LISTMATCH_CONFIG";

// ---

/// Loads settings from the default locations.
pub fn load() -> Result<Settings> {
    Loader::new(Vec::new()).load()
}

/// Creates a loader that loads settings from the given files after the default locations.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().into()).collect())
}

pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file and the one from the environment.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        let mut sources = Vec::<Source>::new();

        if !self.no_default {
            if let Some(dirs) = app_dirs() {
                sources.push(SourceFile::new(dirs.config_dir.join("config.yaml")).required(false).into());
            }
            if let Some(path) = std::env::var_os(ENV_CONFIG).filter(|v| !v.is_empty()) {
                sources.push(SourceFile::new(path).into());
            }
        }

        sources.extend(self.paths.iter().map(|path| SourceFile::new(path).into()));

        Settings::load(sources)
    }
}

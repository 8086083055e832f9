// std imports
use std::collections::{HashMap, HashSet};

// local imports
use crate::{
    error::{Error, Result},
    list::PatternList,
    settings::Settings,
    source::PatternSource,
    vfs::{FileSystem, LocalFileSystem},
};

// ---

/// A set of pattern lists referenced by name.
///
/// List names are case sensitive. The registry is immutable once built,
/// so it can be shared by reference between any number of readers.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    lists: HashMap<String, PatternList>,
}

impl Registry {
    pub fn new(lists: HashMap<String, PatternList>) -> Self {
        Self { lists }
    }

    /// Builds all lists described by the settings, reading pattern files from the local file system.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::from_settings_with(settings, &PatternSource::new(LocalFileSystem))
    }

    /// Builds all lists described by the settings using the given pattern source.
    ///
    /// Fails as a whole if any pattern file of any list cannot be read.
    pub fn from_settings_with<FS: FileSystem>(settings: &Settings, source: &PatternSource<FS>) -> Result<Self> {
        let mut lists = HashMap::with_capacity(settings.lists.len());

        for (name, list) in &settings.lists {
            let mut patterns: HashSet<String> = list.patterns.iter().cloned().collect();
            for file in &list.files {
                patterns.extend(source.read(file)?);
            }

            log::debug!("loaded list {:?} with {} patterns", name, patterns.len());
            lists.insert(name.clone(), PatternList::with_options(patterns, list.options()));
        }

        Ok(Self { lists })
    }

    /// Returns `true` if the value matches the list with the given name.
    ///
    /// An unknown list matches nothing.
    pub fn matches_list(&self, name: &str, value: Option<&str>) -> bool {
        match self.lists.get(name) {
            Some(list) => list.matches(value),
            None => {
                log::debug!("no such list {:?}", name);
                false
            }
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&PatternList> {
        self.lists.get(name)
    }

    /// Returns the list with the given name or an error naming the known lists.
    pub fn require(&self, name: &str) -> Result<&PatternList> {
        self.get(name).ok_or_else(|| Error::UnknownList {
            name: name.to_owned(),
            known: self.names().into_iter().map(String::from).collect(),
        })
    }

    /// Returns the sorted names of all lists.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.lists.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl FromIterator<(String, PatternList)> for Registry {
    fn from_iter<T: IntoIterator<Item = (String, PatternList)>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//! Loading of raw patterns from text sources.
//!
//! A pattern source is a UTF-8 text with one pattern per line.
//! Everything from the first `#` to the end of the line is a comment,
//! surrounding whitespace is trimmed, and blank lines are skipped.
//! Duplicate patterns collapse into one.

// std imports
use std::{
    collections::HashSet,
    io::{self, BufRead, BufReader},
    path::Path,
};

// local imports
use crate::{
    error::{Error, Result},
    vfs::{FileSystem, LocalFileSystem},
};

// ---

const COMMENT: char = '#';

/// Reads patterns from a buffered reader.
pub fn read_patterns<R: BufRead>(reader: R) -> io::Result<HashSet<String>> {
    let mut patterns = HashSet::new();

    for line in reader.lines() {
        if let Some(pattern) = parse_line(&line?) {
            patterns.insert(pattern.to_owned());
        }
    }

    Ok(patterns)
}

/// Reads patterns from a file on the local file system.
pub fn read_patterns_from_file(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    PatternSource::new(LocalFileSystem).read(path.as_ref())
}

fn parse_line(line: &str) -> Option<&str> {
    let content = match line.split_once(COMMENT) {
        Some((content, _)) => content,
        None => line,
    };
    let content = content.trim();
    if content.is_empty() { None } else { Some(content) }
}

// ---

/// Reads pattern files through a [`FileSystem`].
pub struct PatternSource<FS> {
    fs: FS,
}

impl<FS: FileSystem> PatternSource<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Reads all patterns from the file at `path`.
    ///
    /// Any failure, including one in the middle of the file, fails the whole read.
    pub fn read(&self, path: &Path) -> Result<HashSet<String>> {
        log::debug!("reading patterns from {}", path.display());

        let wrap = |source: io::Error| Error::PatternSource {
            path: path.to_owned(),
            source,
        };

        let file = self.fs.open(path).map_err(wrap)?;
        let patterns = read_patterns(BufReader::new(file)).map_err(wrap)?;

        log::debug!("read {} patterns from {}", patterns.len(), path.display());
        Ok(patterns)
    }
}

#[cfg(test)]
mod tests;

// stdlib imports
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

// third-party imports
#[cfg(test)]
use mockall::mock;

// ---

pub trait FileSystem {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + Sync>>;
}

#[cfg(test)]
mock! {
    pub FileSystem {}

    impl FileSystem for FileSystem {
        fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + Sync>>;
    }
}

macro_rules! delegate_fs_methods {
    () => {
        #[inline]
        fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + Sync>> {
            (**self).open(path)
        }
    };
}

impl<T> FileSystem for &T
where
    T: FileSystem,
{
    delegate_fs_methods!();
}

impl<T> FileSystem for std::sync::Arc<T>
where
    T: FileSystem,
{
    delegate_fs_methods!();
}

// ---

#[derive(Default, Clone, Copy, Debug)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    #[inline]
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send + Sync>> {
        Ok(Box::new(fs::File::open(path)?))
    }
}

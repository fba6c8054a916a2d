//! File-opening port.
//!
//! Code that wants its file access to be interceptable in tests opens files
//! through a `FileOpener` instead of `std::fs::File` directly. Production
//! wiring passes `OsFileOpener`; tests pass a `MockOpener` wrapping it.

use std::fmt;
use std::io::{self, Read, Seek, Write};
use std::path::Path;

use crate::domain::OpenMode;

/// An open file, real or substituted.
pub trait FileHandle: Read + Write + Seek + fmt::Debug {
    /// The name the file was opened under.
    fn name(&self) -> &Path;
}

/// Port for opening files.
pub trait FileOpener {
    /// Open `path` with the given mode flags.
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>>;

    /// Open `path` read-only and read it to the end as UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let mut file = self.open(path, OpenMode::read())?;
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    }
}

impl<T: FileOpener + ?Sized> FileOpener for &T {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>> {
        (**self).open(path, mode)
    }
}

impl<T: FileOpener + ?Sized> FileOpener for Box<T> {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>> {
        (**self).open(path, mode)
    }
}

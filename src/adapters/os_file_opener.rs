//! `FileOpener` backed by the operating system.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::domain::OpenMode;
use crate::ports::{FileHandle, FileOpener};

/// Opens real files through `std::fs::OpenOptions`.
///
/// Relative paths resolve against the process working directory, or against
/// `root` when the opener was created with [`OsFileOpener::rooted`].
#[derive(Debug, Clone, Default)]
pub struct OsFileOpener {
    root: Option<PathBuf>,
}

impl OsFileOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `root` instead of the working directory.
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self { root: Some(root.into()) }
    }

    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl FileOpener for OsFileOpener {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>> {
        let file = mode.to_open_options().open(self.resolve_path(path))?;
        Ok(Box::new(OsFile { file, name: path.to_path_buf() }))
    }
}

/// A real file together with the name it was opened under.
#[derive(Debug)]
pub struct OsFile {
    file: File,
    name: PathBuf,
}

impl FileHandle for OsFile {
    fn name(&self) -> &Path {
        &self.name
    }
}

impl Read for OsFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for OsFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Seek for OsFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.file.seek(pos)
    }
}

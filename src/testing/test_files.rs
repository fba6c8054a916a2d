//! In-memory `FileOpener` double for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::adapters::MemoryFile;
use crate::domain::OpenMode;
use crate::ports::{FileHandle, FileOpener};

/// Seeded file map that records every open request it serves.
#[derive(Debug, Default)]
pub struct TestFiles {
    files: HashMap<PathBuf, String>,
    calls: RefCell<Vec<(PathBuf, OpenMode)>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    /// Every `(path, mode)` this opener was asked for, in call order.
    pub fn calls(&self) -> Vec<(PathBuf, OpenMode)> {
        self.calls.borrow().clone()
    }
}

impl FileOpener for TestFiles {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>> {
        self.calls.borrow_mut().push((path.to_path_buf(), mode));
        let content = self.files.get(path).ok_or_else(|| {
            let message = format!("Mock file not found: {}", path.display());
            io::Error::new(io::ErrorKind::NotFound, message)
        })?;
        Ok(Box::new(MemoryFile::new(path, content)))
    }
}

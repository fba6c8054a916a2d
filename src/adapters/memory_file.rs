//! In-memory stand-in for a real file.

use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::ports::FileHandle;

/// Readable, writable, seekable text buffer with a file name.
///
/// Starts positioned at the beginning of its contents. Writes land in the
/// buffer only; nothing reaches the filesystem.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    buffer: Cursor<Vec<u8>>,
    name: PathBuf,
}

impl MemoryFile {
    pub fn new(name: impl Into<PathBuf>, contents: &str) -> Self {
        Self { buffer: Cursor::new(contents.as_bytes().to_vec()), name: name.into() }
    }

    /// Everything currently in the buffer, regardless of position.
    pub fn contents(&self) -> &[u8] {
        self.buffer.get_ref()
    }
}

impl FileHandle for MemoryFile {
    fn name(&self) -> &Path {
        &self.name
    }
}

impl Read for MemoryFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.buffer.read(buf)
    }
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for MemoryFile {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.buffer.seek(pos)
    }
}

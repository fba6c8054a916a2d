//! Concrete `FileOpener` implementations and file handles.

pub mod memory_file;
pub mod os_file_opener;

pub use memory_file::MemoryFile;
pub use os_file_opener::{OsFile, OsFileOpener};

mod file_opener;

pub use file_opener::{FileHandle, FileOpener};

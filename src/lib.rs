//! mock_open: intercept one filename during a test, pass the rest through,
//! and verify afterwards what was opened.
//!
//! Code under test opens files through a [`FileOpener`]. In production that
//! is an [`OsFileOpener`]; in a test it is the [`MockOpener`] of a scope:
//!
//! ```no_run
//! use std::path::Path;
//! use mock_open::{FileOpener, scoped_mock_open};
//!
//! fn load_greeting(opener: &dyn FileOpener) -> std::io::Result<String> {
//!     opener.read_to_string(Path::new("greeting.txt"))
//! }
//!
//! let scope = scoped_mock_open("greeting.txt", Some("hello"), true);
//! assert_eq!(load_greeting(scope.opener()).unwrap(), "hello");
//! scope.finish().unwrap();
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{MemoryFile, OsFile, OsFileOpener};
pub use domain::{MockOpenError, MockOpenOptions, OpenMode, OpenRegistry};
pub use ports::{FileHandle, FileOpener};
pub use services::{MockOpenScope, MockOpener, scoped_mock_open, with_mock_open};

//! Scoped file-open interception.
//!
//! A `MockOpener` sits in front of another `FileOpener` (the inner opener).
//! Requests for the mocked filename get a fresh `MemoryFile`; everything
//! else is delegated to the inner opener unchanged. Every name opened is
//! recorded, and when the scope finishes the record is checked: the mocked
//! file must have been opened, and nothing else may have been.
//!
//! Two ways to drive a scope:
//!
//! - guard form: [`MockOpenScope::start`] / [`scoped_mock_open`], then
//!   [`MockOpenScope::finish`];
//! - closure form: [`with_mock_open`], which always verifies on success.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;

use tracing::{debug, trace};

use crate::adapters::{MemoryFile, OsFileOpener};
use crate::domain::{MockOpenError, MockOpenOptions, OpenMode, OpenRegistry};
use crate::ports::{FileHandle, FileOpener};

/// `FileOpener` that substitutes one filename and passes the rest through.
///
/// Not `Sync`: a scope belongs to the thread that created it.
#[derive(Debug)]
pub struct MockOpener<O> {
    inner: O,
    options: MockOpenOptions,
    registry: RefCell<OpenRegistry>,
}

impl<O: FileOpener> MockOpener<O> {
    pub fn new(options: MockOpenOptions, inner: O) -> Self {
        Self { inner, options, registry: RefCell::new(OpenRegistry::new()) }
    }

    pub fn filename(&self) -> &Path {
        &self.options.filename
    }

    pub fn options(&self) -> &MockOpenOptions {
        &self.options
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Whether `name` has been opened through this opener so far.
    pub fn was_opened(&self, name: &Path) -> bool {
        self.registry.borrow().contains(name)
    }

    /// Names opened so far, sorted.
    pub fn opened_files(&self) -> Vec<PathBuf> {
        self.registry.borrow().names().map(Path::to_path_buf).collect()
    }

    fn take_registry(&self) -> OpenRegistry {
        self.registry.take()
    }
}

impl<O: FileOpener> FileOpener for MockOpener<O> {
    fn open(&self, path: &Path, mode: OpenMode) -> io::Result<Box<dyn FileHandle>> {
        // Byte-exact: `a.txt/` and `a.txt` are different requests.
        if path.as_os_str() == self.options.filename.as_os_str() {
            trace!("mock_open: substituting {}", path.display());
            let file = MemoryFile::new(&self.options.filename, self.options.contents_or_empty());
            self.registry.borrow_mut().record(&self.options.filename);
            return Ok(Box::new(file));
        }

        trace!("mock_open: passing through {}", path.display());
        let file = self.inner.open(path, mode)?;
        self.registry.borrow_mut().record(file.name());
        Ok(file)
    }
}

/// Check a finished scope's registry against its options.
///
/// The missing-open check runs before the unexpected-open check.
pub(crate) fn verify(
    options: &MockOpenOptions,
    mut registry: OpenRegistry,
) -> Result<(), MockOpenError> {
    let opened = registry.take(&options.filename);
    if !options.complain {
        return Ok(());
    }
    if !opened {
        return Err(MockOpenError::NotOpened { filename: options.filename.clone() });
    }
    match MockOpenError::not_mocked(registry.into_names()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Guard for one interception scope.
///
/// Hand [`MockOpenScope::opener`] to the code under test, then call
/// [`MockOpenScope::finish`] to verify. Dropping the scope without finishing
/// skips verification.
#[derive(Debug)]
#[must_use = "call `finish` to verify which files were opened"]
pub struct MockOpenScope<O: FileOpener> {
    opener: MockOpener<O>,
    done: bool,
}

impl<O: FileOpener> MockOpenScope<O> {
    pub fn start(options: MockOpenOptions, inner: O) -> Self {
        debug!(
            "mock_open scope started for {} (complain: {})",
            options.filename.display(),
            options.complain
        );
        Self { opener: MockOpener::new(options, inner), done: false }
    }

    pub fn opener(&self) -> &MockOpener<O> {
        &self.opener
    }

    pub fn opened_files(&self) -> Vec<PathBuf> {
        self.opener.opened_files()
    }

    /// End the scope and verify what was opened.
    pub fn finish(mut self) -> Result<(), MockOpenError> {
        self.done = true;
        let registry = self.opener.take_registry();
        let result = verify(&self.opener.options, registry);
        match &result {
            Ok(()) => debug!("mock_open scope finished for {}", self.opener.filename().display()),
            Err(err) => debug!("mock_open scope failed: {}", err),
        }
        result
    }

    /// End the scope without verifying.
    fn abandon(mut self) {
        self.done = true;
    }
}

impl<O: FileOpener> Drop for MockOpenScope<O> {
    fn drop(&mut self) {
        if !self.done && !thread::panicking() {
            debug!(
                "mock_open scope for {} dropped without verification",
                self.opener.filename().display()
            );
        }
    }
}

/// Start a scope intercepting `filename` in front of the real OS opener.
///
/// `contents` of `None` behaves as an empty file.
pub fn scoped_mock_open(
    filename: impl Into<PathBuf>,
    contents: Option<&str>,
    complain: bool,
) -> MockOpenScope<OsFileOpener> {
    let mut options = MockOpenOptions::new(filename).complain(complain);
    if let Some(contents) = contents {
        options = options.contents(contents);
    }
    MockOpenScope::start(options, OsFileOpener::new())
}

/// Run `block` with an interceptor in front of `inner`, then verify.
///
/// An error returned by `block` propagates as-is and verification is skipped.
/// Otherwise verification failures are converted into `E`.
pub fn with_mock_open<O, T, E, F>(options: MockOpenOptions, inner: O, block: F) -> Result<T, E>
where
    O: FileOpener,
    F: FnOnce(&MockOpener<O>) -> Result<T, E>,
    E: From<MockOpenError>,
{
    let scope = MockOpenScope::start(options, inner);
    let outcome = block(scope.opener());
    match outcome {
        Ok(value) => {
            scope.finish()?;
            Ok(value)
        }
        Err(err) => {
            scope.abandon();
            Err(err)
        }
    }
}

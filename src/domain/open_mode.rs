//! Open mode flags passed through to the inner opener.
//!
//! `OpenMode` mirrors the flag set of `std::fs::OpenOptions` so that an
//! interceptor can forward the caller's request unchanged. Mode strings in
//! the familiar `r`/`w`/`a`/`x` form parse into the same flags.

use std::fs::OpenOptions;
use std::str::FromStr;

use super::error::MockOpenError;

/// Flags describing how a file should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub truncate: bool,
    pub create: bool,
    pub create_new: bool,
}

impl Default for OpenMode {
    fn default() -> Self {
        Self::read()
    }
}

impl OpenMode {
    /// Read-only, the file must exist.
    pub const fn read() -> Self {
        Self {
            read: true,
            write: false,
            append: false,
            truncate: false,
            create: false,
            create_new: false,
        }
    }

    /// Write-only, created if missing and truncated otherwise.
    pub const fn write() -> Self {
        Self {
            read: false,
            write: true,
            append: false,
            truncate: true,
            create: true,
            create_new: false,
        }
    }

    /// Append-only, created if missing.
    pub const fn append() -> Self {
        Self {
            read: false,
            write: false,
            append: true,
            truncate: false,
            create: true,
            create_new: false,
        }
    }

    /// Write-only, fails if the file already exists.
    pub const fn create_new() -> Self {
        Self {
            read: false,
            write: true,
            append: false,
            truncate: false,
            create: false,
            create_new: true,
        }
    }

    /// Add read access (the `+` in `w+`, `a+`, `x+`).
    pub const fn with_read(mut self) -> Self {
        self.read = true;
        self
    }

    /// Add write access without changing creation flags (the `+` in `r+`).
    pub const fn with_write(mut self) -> Self {
        self.write = true;
        self
    }

    /// Translate into `std::fs::OpenOptions`.
    pub fn to_open_options(self) -> OpenOptions {
        let mut options = OpenOptions::new();
        options
            .read(self.read)
            .write(self.write)
            .append(self.append)
            .truncate(self.truncate)
            .create(self.create)
            .create_new(self.create_new);
        options
    }
}

/// Parses `r`, `w`, `a` or `x`, plus at most one `+` and at most one `b`
/// or `t`, in any order (`"rb+"`, `"b+r"` and `"+rb"` are the same mode).
impl FromStr for OpenMode {
    type Err = MockOpenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MockOpenError::InvalidMode(s.to_string());

        let mut base = None;
        let mut plus = false;
        let mut kind = false;
        for c in s.chars() {
            match c {
                'r' | 'w' | 'a' | 'x' if base.is_none() => base = Some(c),
                '+' if !plus => plus = true,
                // Binary and text are the same thing for byte-oriented handles.
                'b' | 't' if !kind => kind = true,
                _ => return Err(invalid()),
            }
        }

        let mode = match base.ok_or_else(invalid)? {
            'r' => OpenMode::read(),
            'w' => OpenMode::write(),
            'a' => OpenMode::append(),
            _ => OpenMode::create_new(),
        };
        Ok(match (plus, base) {
            (false, _) => mode,
            (true, Some('r')) => mode.with_write(),
            (true, _) => mode.with_read(),
        })
    }
}

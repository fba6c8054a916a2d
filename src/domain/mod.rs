pub mod error;
pub mod open_mode;
pub mod options;
pub mod registry;

pub use error::MockOpenError;
pub use open_mode::OpenMode;
pub use options::MockOpenOptions;
pub use registry::OpenRegistry;

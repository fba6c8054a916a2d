pub mod mock_open;

pub use mock_open::{MockOpenScope, MockOpener, scoped_mock_open, with_mock_open};

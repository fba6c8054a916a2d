mod test_files;

pub use test_files::TestFiles;

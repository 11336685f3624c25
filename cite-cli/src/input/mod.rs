//! Input handling module

pub mod file_reader;
pub mod source;

pub use file_reader::FileReader;
pub use source::InputSource;

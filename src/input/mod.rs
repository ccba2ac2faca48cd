//! Line-oriented input from arguments, files and stdin.

mod reader;

pub use reader::LineReader;

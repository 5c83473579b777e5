//! Input handling: file format detection and text extraction

pub mod reader;

pub use reader::{DocumentReader, SourceFormat};

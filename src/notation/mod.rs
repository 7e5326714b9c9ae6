//! Notation document model and text parser.

pub mod document;
pub mod parser;

pub use document::{NotationDocument, RawAction};
pub use parser::{parse, ParseError};

pub mod document;

pub use document::{BlockDocument, BlockUpdate, Direction, EditError};

pub mod code_fence;
pub mod list;
pub mod media;
pub mod quote;

pub use code_fence::CodeFence;
pub use list::ListKind;
pub use media::{Caption, Image, Video};
pub use quote::Quote;

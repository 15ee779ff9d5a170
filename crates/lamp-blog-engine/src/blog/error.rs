use super::BlogId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlogError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Blog not found: {0}")]
    NotFound(String),

    #[error("A blog with slug '{0}' already exists")]
    DuplicateSlug(String),

    #[error("Title '{0}' does not produce a usable slug")]
    InvalidTitle(String),

    #[error("Author '{author_id}' may not modify blog {blog}")]
    Forbidden { blog: BlogId, author_id: String },

    #[error("Invalid blog ID: {0}")]
    InvalidId(String),

    #[error("Invalid action '{0}'. Use \"like\" or \"unlike\"")]
    InvalidAction(String),
}

//! Content module - posts, projects, front-matter and rendering

pub mod frontmatter;
pub mod loader;
pub mod markdown;
mod post;
pub mod schema;
mod slug;

pub use frontmatter::{split_frontmatter, RawFrontmatter};
pub use loader::{ContentIndex, IndexReport};
pub use markdown::MarkdownRenderer;
pub use post::{
    ContentItem, ContentType, Document, Post, PostCategory, PostMeta, PostTopic, Project,
    ProjectMeta,
};
pub use schema::Schema;
pub use self::slug::{slug_from_path, slugify};

/// Result type for content operations
pub type Result<T> = std::result::Result<T, crate::error::ContentError>;

//! Error types for content indexing
//!
//! Schema failures and missing slugs are distinct variants so callers can
//! map them to different outcomes: a validation failure halts the build, a
//! missing slug becomes a not-found page.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::content::ContentType;

/// A single field that failed schema validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Front-matter that does not satisfy a content schema
///
/// Carries every failing field, not just the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub slug: String,
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    /// Names of the fields that failed, in schema order
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Whether the given field is among the failures
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' has invalid front-matter (", self.slug)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", field)?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while indexing or loading content
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("{path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    #[error("{path}: malformed front-matter: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no {content_type} found with slug '{slug}'")]
    NotFound {
        content_type: ContentType,
        slug: String,
    },

    #[error("duplicate {content_type} slug '{slug}': {first} and {second}")]
    DuplicateSlug {
        content_type: ContentType,
        slug: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("content loader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ContentError {
    pub fn not_found(content_type: ContentType, slug: impl Into<String>) -> Self {
        Self::NotFound {
            content_type,
            slug: slug.into(),
        }
    }

    /// True for the not-found outcome of a slug lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The schema failure, if this error is one
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<glob::GlobError> for ContentError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::Io {
            path,
            source: err.into(),
        }
    }
}

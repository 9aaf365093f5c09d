//! Post and Project models

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The two content namespaces; slugs are unique within each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Project,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Project => "project",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "post" | "posts" | "blog" => Ok(ContentType::Post),
            "project" | "projects" => Ok(ContentType::Project),
            _ => Err(format!("unknown content type '{}' (expected post or project)", s)),
        }
    }
}

/// Blog post category, one sub-directory of the blog root each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Articles,
    Notes,
    Snippets,
}

impl PostCategory {
    pub const ALL: [PostCategory; 3] = [
        PostCategory::Articles,
        PostCategory::Notes,
        PostCategory::Snippets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Articles => "articles",
            PostCategory::Notes => "notes",
            PostCategory::Snippets => "snippets",
        }
    }
}

impl fmt::Display for PostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "unknown category '{}' (expected one of: articles, notes, snippets)",
                    s
                )
            })
    }
}

/// Subject tag of a post
///
/// Topics order by their name, byte-wise, so `AI` sorts before
/// `Accessibility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostTopic {
    Accessibility,
    #[serde(rename = "AI")]
    Ai,
    Animation,
    #[serde(rename = "CSS")]
    Css,
    Databases,
    Git,
    #[serde(rename = "HTML")]
    Html,
    JavaScript,
    #[serde(rename = "NextJS")]
    NextJs,
    Performance,
    React,
    State,
    Tailwind,
    Testing,
    TypeScript,
}

impl PostTopic {
    pub const ALL: [PostTopic; 15] = [
        PostTopic::Accessibility,
        PostTopic::Ai,
        PostTopic::Animation,
        PostTopic::Css,
        PostTopic::Databases,
        PostTopic::Git,
        PostTopic::Html,
        PostTopic::JavaScript,
        PostTopic::NextJs,
        PostTopic::Performance,
        PostTopic::React,
        PostTopic::State,
        PostTopic::Tailwind,
        PostTopic::Testing,
        PostTopic::TypeScript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PostTopic::Accessibility => "Accessibility",
            PostTopic::Ai => "AI",
            PostTopic::Animation => "Animation",
            PostTopic::Css => "CSS",
            PostTopic::Databases => "Databases",
            PostTopic::Git => "Git",
            PostTopic::Html => "HTML",
            PostTopic::JavaScript => "JavaScript",
            PostTopic::NextJs => "NextJS",
            PostTopic::Performance => "Performance",
            PostTopic::React => "React",
            PostTopic::State => "State",
            PostTopic::Tailwind => "Tailwind",
            PostTopic::Testing => "Testing",
            PostTopic::TypeScript => "TypeScript",
        }
    }

    /// Resolve a lowercase route segment (`/blog/all/nextjs`) to its topic
    pub fn from_route_segment(segment: &str) -> Option<Self> {
        PostTopic::ALL
            .into_iter()
            .find(|topic| topic.as_str().eq_ignore_ascii_case(segment))
    }

    /// Lowercase form used in topic routes
    pub fn route_segment(&self) -> String {
        slug::slugify(self.as_str())
    }
}

impl Ord for PostTopic {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for PostTopic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PostTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostTopic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PostTopic::ALL
            .into_iter()
            .find(|topic| topic.as_str() == s)
            .ok_or_else(|| format!("unknown topic '{}'", s))
    }
}

/// Validated metadata of a blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Slug (file name without extension)
    pub slug: String,

    pub title: String,

    pub description: String,

    /// Creation date, ISO-8601 UTC
    pub created: String,

    /// Last updated date, ISO-8601 UTC
    pub updated: String,

    pub category: PostCategory,

    /// Topics as authored, never empty
    pub topics: Vec<PostTopic>,
}

impl PostMeta {
    pub fn has_topic(&self, topic: PostTopic) -> bool {
        self.topics.contains(&topic)
    }
}

/// Validated metadata of a showcased project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub created: String,
    pub updated: String,

    /// Preview image location
    pub img_url: String,

    /// Preview image alt text
    pub img_alt: String,

    /// Class-name token for the preview card background
    pub gradient: String,
}

/// Metadata of either content type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    Post(PostMeta),
    Project(ProjectMeta),
}

impl ContentItem {
    pub fn content_type(&self) -> ContentType {
        match self {
            ContentItem::Post(_) => ContentType::Post,
            ContentItem::Project(_) => ContentType::Project,
        }
    }

    pub fn slug(&self) -> &str {
        match self {
            ContentItem::Post(meta) => &meta.slug,
            ContentItem::Project(meta) => &meta.slug,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ContentItem::Post(meta) => &meta.title,
            ContentItem::Project(meta) => &meta.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ContentItem::Post(meta) => &meta.description,
            ContentItem::Project(meta) => &meta.description,
        }
    }

    pub fn created(&self) -> &str {
        match self {
            ContentItem::Post(meta) => &meta.created,
            ContentItem::Project(meta) => &meta.created,
        }
    }

    pub fn updated(&self) -> &str {
        match self {
            ContentItem::Post(meta) => &meta.updated,
            ContentItem::Project(meta) => &meta.updated,
        }
    }

    pub fn as_project(&self) -> Option<&ProjectMeta> {
        match self {
            ContentItem::Project(meta) => Some(meta),
            ContentItem::Post(_) => None,
        }
    }
}

impl From<PostMeta> for ContentItem {
    fn from(meta: PostMeta) -> Self {
        ContentItem::Post(meta)
    }
}

impl From<ProjectMeta> for ContentItem {
    fn from(meta: ProjectMeta) -> Self {
        ContentItem::Project(meta)
    }
}

/// A fully loaded content file
#[derive(Debug, Clone, Serialize)]
pub struct Document<M> {
    /// Validated front-matter
    pub meta: M,

    /// Raw markdown after the front-matter block
    pub body: String,

    /// Rendered HTML
    pub content: String,
}

impl<M> Document<M> {
    /// Convert the metadata while keeping body and content
    pub fn map_meta<N>(self, f: impl FnOnce(M) -> N) -> Document<N> {
        Document {
            meta: f(self.meta),
            body: self.body,
            content: self.content,
        }
    }

    /// Table of contents of the body
    pub fn headings(&self) -> Vec<crate::toc::TocHeading> {
        crate::toc::extract_headings(&self.body)
    }
}

/// A blog post with its body
pub type Post = Document<PostMeta>;

/// A project with its body
pub type Project = Document<ProjectMeta>;

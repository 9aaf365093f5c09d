//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::content::loader::{DEFAULT_BLOG_DIR, DEFAULT_EXTENSION, DEFAULT_PROJECTS_DIR};
use crate::content::PostCategory;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub url: String,

    // Content layout
    pub content_dir: String,
    pub blog_dir: String,
    pub projects_dir: String,
    pub extension: String,

    // Listings
    pub recent_posts: usize,
    #[serde(default = "default_blog_routes")]
    pub blog_routes: Vec<BlogRoute>,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Store any additional fields, in file order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Nate Stephens".to_string(),
            author: "Nate Stephens".to_string(),
            description: "A technical blog about web development focusing on React, Next.js, TypeScript, CSS, and more.".to_string(),
            url: "http://localhost:3000".to_string(),

            content_dir: "posts".to_string(),
            blog_dir: DEFAULT_BLOG_DIR.to_string(),
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),

            recent_posts: 5,
            blog_routes: default_blog_routes(),

            highlight: HighlightConfig::default(),
            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config {:?}", path))?;
        Ok(config)
    }

    /// The blog section for a category (`None` is the all-posts section)
    pub fn blog_route(&self, category: Option<PostCategory>) -> Option<&BlogRoute> {
        self.blog_routes.iter().find(|route| route.category == category)
    }
}

/// One section of the blog: all posts, or one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogRoute {
    pub title: String,

    /// Category shown in this section; absent for all posts
    #[serde(default)]
    pub category: Option<PostCategory>,

    /// Short tagline
    pub brief: String,

    /// Long description
    pub description: String,
}

impl BlogRoute {
    fn new(title: &str, category: Option<PostCategory>, brief: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            category,
            brief: brief.to_string(),
            description: description.to_string(),
        }
    }

    /// Route segment under `/blog/`
    pub fn segment(&self) -> &'static str {
        self.category.map(|c| c.as_str()).unwrap_or("all")
    }
}

fn default_blog_routes() -> Vec<BlogRoute> {
    vec![
        BlogRoute::new(
            "All Posts",
            None,
            "All of my published content",
            "All of my published content. This includes articles, notes, and code snippets pertaining to React, Next.js, TypeScript, CSS and more.",
        ),
        BlogRoute::new(
            "Articles",
            Some(PostCategory::Articles),
            "Thoughts and info worth sharing",
            "Articles I've written pertaining to subjects such as React, Next.js, TypeScript, CSS and more.",
        ),
        BlogRoute::new(
            "Notes",
            Some(PostCategory::Notes),
            "Reductions of broader subjects",
            "Notes I've taken while learning subjects such as React, Next.js, TypeScript, CSS and more.",
        ),
        BlogRoute::new(
            "Snippets",
            Some(PostCategory::Snippets),
            "Code bits worth remembering",
            "Code snippets pertaining to React, Next.js, TypeScript, CSS and more.",
        ),
    ]
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// syntect theme name
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: crate::content::markdown::DEFAULT_THEME.to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "posts");
        assert_eq!(config.blog_dir, "blog");
        assert_eq!(config.extension, "mdx");
        assert_eq!(config.blog_routes.len(), 4);
        assert_eq!(config.recent_posts, 5);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
content_dir: content
extension: md
recent_posts: 3
highlight:
  line_number: true
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.extension, "md");
        assert_eq!(config.recent_posts, 3);
        assert!(config.highlight.line_number);
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert_eq!(config.blog_routes.len(), 4);
        assert_eq!(
            config.extra.get("analytics").and_then(|v| v.as_str()),
            Some("plausible")
        );
    }

    #[test]
    fn test_blog_route_lookup() {
        let config = SiteConfig::default();
        assert_eq!(config.blog_route(None).unwrap().title, "All Posts");
        assert_eq!(
            config.blog_route(Some(PostCategory::Notes)).unwrap().segment(),
            "notes"
        );
    }

    #[test]
    fn test_custom_blog_routes() {
        let yaml = r#"
blog_routes:
  - title: Everything
    brief: All of it
    description: Every post
  - title: Notes
    category: notes
    brief: Short
    description: Notes only
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.blog_routes.len(), 2);
        assert_eq!(config.blog_routes[0].segment(), "all");
        assert_eq!(config.blog_routes[1].segment(), "notes");
    }
}

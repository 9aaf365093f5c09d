//! Route helpers for posts, projects and blog sections

use crate::config::{BlogRoute, SiteConfig};
use crate::content::{ContentItem, PostTopic};

/// Path of a blog post
///
/// # Examples
/// ```ignore
/// post_path("git-tips") // -> "/git-tips"
/// ```
pub fn post_path(slug: &str) -> String {
    format!("/{}", slug)
}

/// Path of a project page
pub fn project_path(slug: &str) -> String {
    format!("/projects/{}", slug)
}

/// Path of any content item
pub fn item_path(item: &ContentItem) -> String {
    match item {
        ContentItem::Post(meta) => post_path(&meta.slug),
        ContentItem::Project(meta) => project_path(&meta.slug),
    }
}

/// Path of a blog section
///
/// # Examples
/// ```ignore
/// blog_path(&notes_route) // -> "/blog/notes"
/// ```
pub fn blog_path(route: &BlogRoute) -> String {
    format!("/blog/{}", route.segment())
}

/// Path of a blog section narrowed to one topic
///
/// # Examples
/// ```ignore
/// topic_path(&all_route, PostTopic::NextJs) // -> "/blog/all/nextjs"
/// ```
pub fn topic_path(route: &BlogRoute, topic: PostTopic) -> String {
    format!("{}/{}", blog_path(route), topic.route_segment())
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

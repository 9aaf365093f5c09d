//! List site content

use anyhow::Result;

use crate::content::{ContentItem, ContentType, PostCategory, PostTopic};
use crate::helpers::{display_date, item_path};
use crate::Site;

/// Filters and output format for `list`
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub category: Option<PostCategory>,
    pub topic: Option<PostTopic>,
    /// Content type for `slugs`; both when absent
    pub content_type: Option<ContentType>,
    pub json: bool,
}

/// List site content by type
pub async fn run(site: &Site, what: &str, options: &ListOptions) -> Result<()> {
    print!("{}", render(site, what, options).await?);
    Ok(())
}

/// Build the listing text for `what`
pub async fn render(site: &Site, what: &str, options: &ListOptions) -> Result<String> {
    let index = site.index();
    let mut out = String::new();

    match what {
        "post" | "posts" | "project" | "projects" => {
            let content_type: ContentType = what.parse().map_err(anyhow::Error::msg)?;
            let items = index
                .list_previews(content_type, options.category, options.topic)
                .await?;

            if options.json {
                out.push_str(&serde_json::to_string_pretty(&items)?);
                out.push('\n');
            } else {
                let label = match content_type {
                    ContentType::Post => "Posts",
                    ContentType::Project => "Projects",
                };
                out.push_str(&format!("{} ({}):\n", label, items.len()));
                for item in &items {
                    out.push_str(&format!("  {}\n", preview_line(item)));
                }
            }
        }
        "topic" | "topics" => {
            let topics = index.list_topics_in_use(options.category).await?;
            if options.json {
                out.push_str(&serde_json::to_string_pretty(&topics)?);
                out.push('\n');
            } else {
                out.push_str(&format!("Topics ({}):\n", topics.len()));
                for topic in topics {
                    out.push_str(&format!("  {}\n", topic));
                }
            }
        }
        "recent" => {
            let posts = index.recent_posts(site.config.recent_posts).await?;
            if options.json {
                out.push_str(&serde_json::to_string_pretty(&posts)?);
                out.push('\n');
            } else {
                out.push_str("Recently Published:\n");
                for post in posts {
                    out.push_str(&format!(
                        "  {} - {}\n",
                        post.title,
                        display_date(&post.created).unwrap_or_default()
                    ));
                }
            }
        }
        "slug" | "slugs" => {
            let types = match options.content_type {
                Some(content_type) => vec![content_type],
                None => vec![ContentType::Post, ContentType::Project],
            };
            for content_type in types {
                let slugs = index.list_all_slugs(content_type)?;
                if options.json {
                    out.push_str(&serde_json::to_string_pretty(&slugs)?);
                    out.push('\n');
                } else {
                    for slug in slugs {
                        out.push_str(&format!("{} {}\n", content_type, slug));
                    }
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, projects, topics, recent, slugs",
                what
            );
        }
    }

    Ok(out)
}

fn preview_line(item: &ContentItem) -> String {
    let date = display_date(item.created()).unwrap_or_default();
    match item {
        ContentItem::Post(meta) => {
            let topics: Vec<&str> = meta.topics.iter().map(|t| t.as_str()).collect();
            format!(
                "{} - {} [{}] ({}) {}",
                date,
                meta.title,
                meta.category,
                topics.join(", "),
                item_path(item)
            )
        }
        ContentItem::Project(meta) => format!("{} - {} {}", date, meta.title, item_path(item)),
    }
}

//! Show one post or project

use anyhow::Result;

use crate::content::{ContentItem, ContentType, Document};
use crate::helpers::{display_date, full_url_for, item_path};
use crate::Site;

/// Show a document by type and slug
pub async fn run(site: &Site, content_type: ContentType, slug: &str, html: bool, json: bool) -> Result<()> {
    print!("{}", render(site, content_type, slug, html, json).await?);
    Ok(())
}

pub async fn render(
    site: &Site,
    content_type: ContentType,
    slug: &str,
    html: bool,
    json: bool,
) -> Result<String> {
    let doc = site.index().find_by_slug(content_type, slug).await?;

    if json {
        let mut out = serde_json::to_string_pretty(&doc)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = describe(site, &doc);
    if html {
        out.push('\n');
        out.push_str(&doc.content);
        if !doc.content.ends_with('\n') {
            out.push('\n');
        }
    }
    Ok(out)
}

fn describe(site: &Site, doc: &Document<ContentItem>) -> String {
    let meta = &doc.meta;
    let mut out = String::new();

    out.push_str(&format!("{}\n", meta.title()));
    out.push_str(&format!("  {}\n", meta.description()));
    out.push_str(&format!(
        "  url:      {}\n",
        full_url_for(&site.config, &item_path(meta))
    ));
    out.push_str(&format!(
        "  created:  {}\n",
        display_date(meta.created()).unwrap_or_else(|| meta.created().to_string())
    ));
    out.push_str(&format!(
        "  updated:  {}\n",
        display_date(meta.updated()).unwrap_or_else(|| meta.updated().to_string())
    ));

    match meta {
        ContentItem::Post(post) => {
            let topics: Vec<&str> = post.topics.iter().map(|t| t.as_str()).collect();
            out.push_str(&format!("  category: {}\n", post.category));
            out.push_str(&format!("  topics:   {}\n", topics.join(", ")));
        }
        ContentItem::Project(project) => {
            out.push_str(&format!("  image:    {} ({})\n", project.img_url, project.img_alt));
            out.push_str(&format!("  gradient: {}\n", project.gradient));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;

    #[tokio::test]
    async fn test_show_post() {
        let (_dir, site) = test_support::site();
        let out = render(&site, ContentType::Post, "rebase", false, false)
            .await
            .unwrap();
        assert!(out.starts_with("Rebase\n  About Rebase\n"));
        assert!(out.contains("url:      http://localhost:3000/rebase"));
        assert!(out.contains("created:  May 20, 2023"));
        assert!(out.contains("category: notes"));
        assert!(out.contains("topics:   Git"));
        assert!(!out.contains("<p>"));
    }

    #[tokio::test]
    async fn test_show_project_with_html() {
        let (_dir, site) = test_support::site();
        let out = render(&site, ContentType::Project, "tracker", true, false)
            .await
            .unwrap();
        assert!(out.contains("/projects/tracker"));
        assert!(out.contains("image:    /img/tracker.png (tracker screenshot)"));
        assert!(out.contains("<p>Project body.</p>"));
    }

    #[tokio::test]
    async fn test_show_json() {
        let (_dir, site) = test_support::site();
        let out = render(&site, ContentType::Post, "hooks", false, true)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["meta"]["type"], "post");
        assert_eq!(value["meta"]["created"], "2023-03-01T00:00:00.000Z");
        assert!(value["content"].as_str().unwrap().contains(r#"id="intro""#));
    }

    #[tokio::test]
    async fn test_show_missing() {
        let (_dir, site) = test_support::site();
        let err = render(&site, ContentType::Project, "hooks", false, false)
            .await
            .unwrap_err();
        let err = err.downcast_ref::<crate::ContentError>().unwrap();
        assert!(err.is_not_found());
    }
}

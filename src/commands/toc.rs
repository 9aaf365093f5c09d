//! Print a post's table of contents

use anyhow::Result;

use crate::toc::TocHeading;
use crate::Site;

pub async fn run(site: &Site, slug: &str, json: bool) -> Result<()> {
    print!("{}", render(site, slug, json).await?);
    Ok(())
}

pub async fn render(site: &Site, slug: &str, json: bool) -> Result<String> {
    let post = site.index().find_post(slug).await?;
    let headings = post.headings();

    if json {
        let mut out = serde_json::to_string_pretty(&headings)?;
        out.push('\n');
        return Ok(out);
    }

    let mut out = format!("{} ({} headings)\n", post.meta.title, headings.len());
    for heading in &headings {
        out.push_str(&outline_line(heading));
    }
    Ok(out)
}

fn outline_line(heading: &TocHeading) -> String {
    format!(
        "{}- {} (#{})\n",
        "  ".repeat(heading.depth + 1),
        heading.content,
        heading.slug
    )
}

//! CLI commands

pub mod check;
pub mod list;
pub mod routes;
pub mod show;
pub mod toc;

#[cfg(test)]
pub(crate) mod test_support;

use anyhow::{anyhow, Result};

use crate::content::{PostCategory, PostTopic};

/// Parse a category argument
pub fn parse_category(s: &str) -> Result<PostCategory> {
    s.to_ascii_lowercase().parse().map_err(|e: String| anyhow!(e))
}

/// Parse a topic argument, either its name (`NextJS`) or route form (`nextjs`)
pub fn parse_topic(s: &str) -> Result<PostTopic> {
    PostTopic::from_route_segment(s).ok_or_else(|| {
        let names: Vec<&str> = PostTopic::ALL.iter().map(|t| t.as_str()).collect();
        anyhow!("Unknown topic: {}. Available: {}", s, names.join(", "))
    })
}

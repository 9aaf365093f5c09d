//! Table of contents extraction
//!
//! Builds the heading list a navigation sidebar renders next to a post.
//! Only h2-h6 are collected; h1 is the page title. Depth is the rank of a
//! heading's level among the levels the document actually uses, so a post
//! written with h2 and h4 only gets depths 0 and 1.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::content::slugify;

lazy_static! {
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^(#{2,6})[ \t]+(.+)$").unwrap();
}

/// Inline markup removed from heading text
const INLINE_MARKUP: &[char] = &['`', '*', '_', ':'];

/// Heading level marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    /// Tag for a markdown level (number of `#`)
    pub fn from_level(level: usize) -> Option<Self> {
        match level {
            1 => Some(HeadingTag::H1),
            2 => Some(HeadingTag::H2),
            3 => Some(HeadingTag::H3),
            4 => Some(HeadingTag::H4),
            5 => Some(HeadingTag::H5),
            6 => Some(HeadingTag::H6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocHeading {
    pub tag: HeadingTag,

    /// Display text with inline markup stripped
    pub content: String,

    /// Anchor id; repeats of the same text get a `-N` suffix
    pub slug: String,

    /// Rank of `tag` among the distinct levels in the document
    pub depth: usize,
}

/// Hands out anchor slugs, suffixing repeats with their occurrence count
///
/// Counts are per normalized text across the whole document, whatever the
/// heading level: `Summary`, `Summary`, `Summary` become `summary`,
/// `summary-1`, `summary-2`.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for the next heading with this text
    pub fn slug(&mut self, text: &str) -> String {
        let base = slugify(text);
        match self.seen.get_mut(&base) {
            Some(count) => {
                *count += 1;
                format!("{}-{}", base, count)
            }
            None => {
                self.seen.insert(base.clone(), 0);
                base
            }
        }
    }
}

/// Remove inline markup characters from heading text
pub fn strip_inline_markup(text: &str) -> String {
    text.chars().filter(|c| !INLINE_MARKUP.contains(c)).collect()
}

/// Extract the table of contents from a markdown body
pub fn extract_headings(markdown: &str) -> Vec<TocHeading> {
    let raw: Vec<(HeadingTag, String)> = HEADING_RE
        .captures_iter(markdown)
        .filter_map(|caps| {
            let tag = HeadingTag::from_level(caps[1].len())?;
            let content = strip_inline_markup(caps[2].trim_end_matches('\r'));
            Some((tag, content))
        })
        .collect();

    let levels: Vec<HeadingTag> = raw
        .iter()
        .map(|(tag, _)| *tag)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut slugger = Slugger::new();
    raw.into_iter()
        .map(|(tag, content)| {
            let depth = levels.iter().position(|level| *level == tag).unwrap_or(0);
            let slug = slugger.slug(&content);
            TocHeading {
                tag,
                content,
                slug,
                depth,
            }
        })
        .collect()
}

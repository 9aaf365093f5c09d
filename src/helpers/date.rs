//! Date helper functions

use chrono::{DateTime, Utc};

use crate::content::frontmatter::parse_date_string;

fn parse(iso: &str) -> Option<DateTime<Utc>> {
    parse_date_string(iso)
}

/// Short display date used in preview lists
///
/// # Examples
/// ```ignore
/// display_date("2023-05-01T00:00:00.000Z") // -> "May 1, 2023"
/// ```
pub fn display_date(iso: &str) -> Option<String> {
    parse(iso).map(|dt| dt.format("%b %-d, %Y").to_string())
}

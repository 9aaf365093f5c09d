//! Front-matter extraction and date normalization

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_yaml::{Mapping, Value};

/// Untyped front-matter: the YAML block as a string-keyed mapping
///
/// Nothing here is trusted until it passes a schema in [`super::schema`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFrontmatter {
    fields: Mapping,
}

impl RawFrontmatter {
    pub fn new(fields: Mapping) -> Self {
        Self { fields }
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Split a content file into its front-matter and markdown body
///
/// The block must open on the first line with `---` and close with a line
/// starting with `---`. Without both delimiters the front-matter is empty
/// and the whole source is the body. A block that is present but not a YAML
/// mapping is an error.
pub fn split_frontmatter(source: &str) -> Result<(RawFrontmatter, &str), serde_yaml::Error> {
    let Some(rest) = source.strip_prefix("---") else {
        return Ok((RawFrontmatter::default(), source));
    };

    // `---` must be alone on its line
    let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
        Some(rest) => rest,
        None => return Ok((RawFrontmatter::default(), source)),
    };

    let (yaml_content, remaining) = if let Some(body) = rest.strip_prefix("---") {
        ("", body)
    } else if let Some(end_pos) = rest.find("\n---") {
        (&rest[..end_pos], &rest[end_pos + 4..])
    } else {
        return Ok((RawFrontmatter::default(), source));
    };

    // Drop the remainder of the closing delimiter line
    let body = match remaining.find('\n') {
        Some(pos) => &remaining[pos + 1..],
        None => "",
    };

    if yaml_content.trim().is_empty() {
        return Ok((RawFrontmatter::default(), body));
    }

    let fields: Mapping = serde_yaml::from_str(yaml_content)?;
    Ok((RawFrontmatter::new(fields), body))
}

/// Parse a front-matter date and normalize it to an ISO-8601 UTC string
///
/// Naive dates and times are taken as UTC. The output always has
/// millisecond precision and a `Z` suffix, so normalized strings compare
/// chronologically and parse back to themselves.
pub fn normalize_date(s: &str) -> Option<String> {
    parse_date_string(s).map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse a date string in various formats
pub fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with an offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

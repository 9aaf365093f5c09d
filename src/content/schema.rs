//! Front-matter schemas for posts and projects
//!
//! Validation walks every field of a schema and collects each failure, so a
//! single run reports everything wrong with a file. Unknown keys are ignored.

use std::str::FromStr;

use serde_yaml::Value;

use super::frontmatter::{normalize_date, RawFrontmatter};
use super::post::{ContentType, PostCategory, PostMeta, PostTopic, ProjectMeta};
use crate::error::{FieldError, ValidationError};

/// A metadata record that can be validated out of raw front-matter
pub trait Schema: Sized + Send + 'static {
    /// Namespace the record belongs to
    const CONTENT_TYPE: ContentType;

    /// Validate `raw` and attach `slug`
    fn from_frontmatter(raw: &RawFrontmatter, slug: &str) -> Result<Self, ValidationError>;

    /// Normalized creation date; sorts chronologically as a string
    fn created(&self) -> &str;
}

impl Schema for PostMeta {
    const CONTENT_TYPE: ContentType = ContentType::Post;

    fn from_frontmatter(raw: &RawFrontmatter, slug: &str) -> Result<Self, ValidationError> {
        let mut fields = FieldChecker::new(raw);

        let title = fields.string("title");
        let description = fields.string("description");
        let created = fields.date("created");
        let updated = fields.date("updated");
        let category = fields.category("category");
        let topics = fields.topics("topics");

        match (title, description, created, updated, category, topics) {
            (
                Some(title),
                Some(description),
                Some(created),
                Some(updated),
                Some(category),
                Some(topics),
            ) if fields.is_clean() => Ok(PostMeta {
                slug: slug.to_string(),
                title,
                description,
                created,
                updated,
                category,
                topics,
            }),
            _ => Err(fields.into_error(slug)),
        }
    }

    fn created(&self) -> &str {
        &self.created
    }
}

impl Schema for ProjectMeta {
    const CONTENT_TYPE: ContentType = ContentType::Project;

    fn from_frontmatter(raw: &RawFrontmatter, slug: &str) -> Result<Self, ValidationError> {
        let mut fields = FieldChecker::new(raw);

        let title = fields.string("title");
        let description = fields.string("description");
        let created = fields.date("created");
        let updated = fields.date("updated");
        let img_url = fields.string("imgUrl");
        let img_alt = fields.string("imgAlt");
        let gradient = fields.string("gradient");

        match (title, description, created, updated, img_url, img_alt, gradient) {
            (
                Some(title),
                Some(description),
                Some(created),
                Some(updated),
                Some(img_url),
                Some(img_alt),
                Some(gradient),
            ) if fields.is_clean() => Ok(ProjectMeta {
                slug: slug.to_string(),
                title,
                description,
                created,
                updated,
                img_url,
                img_alt,
                gradient,
            }),
            _ => Err(fields.into_error(slug)),
        }
    }

    fn created(&self) -> &str {
        &self.created
    }
}

/// Per-field checks that record failures instead of returning early
struct FieldChecker<'a> {
    raw: &'a RawFrontmatter,
    errors: Vec<FieldError>,
}

impl<'a> FieldChecker<'a> {
    fn new(raw: &'a RawFrontmatter) -> Self {
        Self {
            raw,
            errors: Vec::new(),
        }
    }

    fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn into_error(self, slug: &str) -> ValidationError {
        ValidationError {
            slug: slug.to_string(),
            fields: self.errors,
        }
    }

    fn fail(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    fn present(&mut self, field: &str) -> Option<&'a Value> {
        match self.raw.get(field) {
            None | Some(Value::Null) => {
                self.fail(field, "required field is missing");
                None
            }
            Some(value) => Some(value),
        }
    }

    /// A string that is non-empty after trimming; returned trimmed
    fn string(&mut self, field: &str) -> Option<String> {
        let value = self.present(field)?;
        let Some(s) = value.as_str() else {
            self.fail(field, format!("expected a string, found {}", describe(value)));
            return None;
        };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            self.fail(field, "must not be empty");
            return None;
        }
        Some(trimmed.to_string())
    }

    fn date(&mut self, field: &str) -> Option<String> {
        let value = self.present(field)?;
        let Some(s) = value.as_str() else {
            self.fail(field, format!("expected a date, found {}", describe(value)));
            return None;
        };
        match normalize_date(s) {
            Some(normalized) => Some(normalized),
            None => {
                self.fail(field, format!("'{}' is not a valid date", s.trim()));
                None
            }
        }
    }

    fn category(&mut self, field: &str) -> Option<PostCategory> {
        let value = self.present(field)?;
        let Some(s) = value.as_str() else {
            self.fail(field, format!("expected a category, found {}", describe(value)));
            return None;
        };
        match PostCategory::from_str(s.trim()) {
            Ok(category) => Some(category),
            Err(message) => {
                self.fail(field, message);
                None
            }
        }
    }

    /// A non-empty list of distinct topics; a bare string counts as one
    fn topics(&mut self, field: &str) -> Option<Vec<PostTopic>> {
        let value = self.present(field)?;
        let items: Vec<&Value> = match value {
            Value::Sequence(seq) => seq.iter().collect(),
            Value::String(_) => vec![value],
            other => {
                self.fail(field, format!("expected a list of topics, found {}", describe(other)));
                return None;
            }
        };

        if items.is_empty() {
            self.fail(field, "must contain at least one topic");
            return None;
        }

        let mut topics = Vec::with_capacity(items.len());
        let mut ok = true;
        for item in items {
            let Some(name) = item.as_str() else {
                self.fail(field, format!("expected a topic name, found {}", describe(item)));
                ok = false;
                continue;
            };
            match PostTopic::from_str(name.trim()) {
                Ok(topic) if topics.contains(&topic) => {
                    self.fail(field, format!("duplicate topic '{}'", topic));
                    ok = false;
                }
                Ok(topic) => topics.push(topic),
                Err(message) => {
                    self.fail(field, message);
                    ok = false;
                }
            }
        }

        ok.then_some(topics)
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

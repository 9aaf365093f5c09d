//! Content index - enumerates, loads and queries posts and projects
//!
//! Nothing is cached: every query globs the content root again and reads
//! the matching files, so results always reflect what is on disk.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use tokio::task::JoinHandle;

use super::frontmatter::split_frontmatter;
use super::markdown::MarkdownRenderer;
use super::post::{
    ContentItem, ContentType, Document, PostCategory, PostMeta, PostTopic, ProjectMeta,
};
use super::schema::Schema;
use super::slug::slug_from_path;
use super::{Post, Project, Result};
use crate::config::SiteConfig;
use crate::error::ContentError;

/// Default content layout
pub const DEFAULT_BLOG_DIR: &str = "blog";
pub const DEFAULT_PROJECTS_DIR: &str = "projects";
pub const DEFAULT_EXTENSION: &str = "mdx";

/// Counts from a full validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub posts: usize,
    pub projects: usize,
}

/// Query interface over a content directory
pub struct ContentIndex {
    root: PathBuf,
    blog_dir: String,
    projects_dir: String,
    extension: String,
    renderer: MarkdownRenderer,
}

impl ContentIndex {
    /// Index the content under `root` with the default layout
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            blog_dir: DEFAULT_BLOG_DIR.to_string(),
            projects_dir: DEFAULT_PROJECTS_DIR.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Index the content directory named in the site configuration
    pub fn from_config(base_dir: &Path, config: &SiteConfig) -> Self {
        Self {
            root: base_dir.join(&config.content_dir),
            blog_dir: config.blog_dir.clone(),
            projects_dir: config.projects_dir.clone(),
            extension: config.extension.trim_start_matches('.').to_string(),
            renderer: MarkdownRenderer::with_options(
                &config.highlight.theme,
                config.highlight.line_number,
            ),
        }
    }

    /// Use a different content file extension
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all files of a content type
    pub fn type_dir(&self, content_type: ContentType) -> PathBuf {
        match content_type {
            ContentType::Post => self.root.join(&self.blog_dir),
            ContentType::Project => self.root.join(&self.projects_dir),
        }
    }

    //* Previews

    /// Previews of one content type, newest first
    ///
    /// `category` and `topic` only apply to posts; projects have neither, so
    /// asking for projects with a filter yields nothing.
    pub async fn list_previews(
        &self,
        content_type: ContentType,
        category: Option<PostCategory>,
        topic: Option<PostTopic>,
    ) -> Result<Vec<ContentItem>> {
        match content_type {
            ContentType::Post => Ok(self
                .post_previews(category, topic)
                .await?
                .into_iter()
                .map(ContentItem::Post)
                .collect()),
            ContentType::Project if category.is_some() || topic.is_some() => {
                tracing::debug!("Projects have no category or topics, returning no previews");
                Ok(Vec::new())
            }
            ContentType::Project => Ok(self
                .project_previews()
                .await?
                .into_iter()
                .map(ContentItem::Project)
                .collect()),
        }
    }

    /// Post previews, newest first, optionally narrowed by category and topic
    pub async fn post_previews(
        &self,
        category: Option<PostCategory>,
        topic: Option<PostTopic>,
    ) -> Result<Vec<PostMeta>> {
        let paths = self.post_paths(category)?;
        let mut previews: Vec<PostMeta> = load_previews(paths).await?;

        if let Some(category) = category {
            for meta in previews.iter().filter(|m| m.category != category) {
                tracing::warn!(
                    "Post '{}' is filed under {} but declares category {}",
                    meta.slug,
                    category,
                    meta.category
                );
            }
        }

        sort_by_created_desc(&mut previews);

        if let Some(topic) = topic {
            previews.retain(|meta| meta.has_topic(topic));
        }

        Ok(previews)
    }

    /// Project previews, newest first
    pub async fn project_previews(&self) -> Result<Vec<ProjectMeta>> {
        let paths = self.content_paths(ContentType::Project)?;
        let mut previews: Vec<ProjectMeta> = load_previews(paths).await?;
        sort_by_created_desc(&mut previews);
        Ok(previews)
    }

    /// The `limit` most recently created posts
    pub async fn recent_posts(&self, limit: usize) -> Result<Vec<PostMeta>> {
        let mut previews = self.post_previews(None, None).await?;
        previews.truncate(limit);
        Ok(previews)
    }

    /// Topics used by posts in `category` (all posts when `None`), sorted
    pub async fn list_topics_in_use(&self, category: Option<PostCategory>) -> Result<Vec<PostTopic>> {
        let previews = self.post_previews(category, None).await?;
        let topics: BTreeSet<PostTopic> = previews
            .iter()
            .flat_map(|meta| meta.topics.iter().copied())
            .collect();
        Ok(topics.into_iter().collect())
    }

    //* Documents

    /// Load one document by slug
    pub async fn find_by_slug(
        &self,
        content_type: ContentType,
        slug: &str,
    ) -> Result<Document<ContentItem>> {
        match content_type {
            ContentType::Post => Ok(self.find_post(slug).await?.map_meta(ContentItem::Post)),
            ContentType::Project => Ok(self
                .find_project(slug)
                .await?
                .map_meta(ContentItem::Project)),
        }
    }

    pub async fn find_post(&self, slug: &str) -> Result<Post> {
        self.find_document(slug).await
    }

    pub async fn find_project(&self, slug: &str) -> Result<Project> {
        self.find_document(slug).await
    }

    async fn find_document<M: Schema>(&self, slug: &str) -> Result<Document<M>> {
        let path = self
            .content_paths(M::CONTENT_TYPE)?
            .into_iter()
            .find(|path| slug_from_path(path) == slug)
            .ok_or_else(|| ContentError::not_found(M::CONTENT_TYPE, slug))?;

        tracing::debug!("Loading {} '{}' from {:?}", M::CONTENT_TYPE, slug, path);

        let source = read_source(&path).await?;
        let (meta, body) = parse_source::<M>(&path, &source)?;
        let content = self.renderer.render(body);

        Ok(Document {
            meta,
            body: body.to_string(),
            content,
        })
    }

    //* Slugs

    /// Every slug of a content type, in enumeration order
    pub fn list_all_slugs(&self, content_type: ContentType) -> Result<Vec<String>> {
        Ok(self
            .content_paths(content_type)?
            .iter()
            .map(|path| slug_from_path(path))
            .collect())
    }

    /// Validate every file and make sure no two files share a slug
    pub async fn check(&self) -> Result<IndexReport> {
        self.check_unique_slugs(ContentType::Post)?;
        self.check_unique_slugs(ContentType::Project)?;

        let posts = self.post_previews(None, None).await?;
        let projects = self.project_previews().await?;

        Ok(IndexReport {
            posts: posts.len(),
            projects: projects.len(),
        })
    }

    fn check_unique_slugs(&self, content_type: ContentType) -> Result<()> {
        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        for path in self.content_paths(content_type)? {
            let slug = slug_from_path(&path);
            if let Some(first) = seen.get(&slug) {
                return Err(ContentError::DuplicateSlug {
                    content_type,
                    slug,
                    first: first.clone(),
                    second: path,
                });
            }
            seen.insert(slug, path);
        }
        Ok(())
    }

    //* Paths

    fn content_paths(&self, content_type: ContentType) -> Result<Vec<PathBuf>> {
        self.glob(&self.type_dir(content_type))
    }

    fn post_paths(&self, category: Option<PostCategory>) -> Result<Vec<PathBuf>> {
        let dir = self.type_dir(ContentType::Post);
        match category {
            Some(category) => self.glob(&dir.join(category.as_str())),
            None => self.glob(&dir),
        }
    }

    /// All content files below `dir`, sorted by path
    fn glob(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let pattern = format!(
            "{}/**/*.{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            self.extension
        );

        // Hidden files (drafts, editor leftovers) are never content
        let options = glob::MatchOptions {
            require_literal_leading_dot: true,
            ..Default::default()
        };

        let mut paths = Vec::new();
        for entry in glob::glob_with(&pattern, options)? {
            let path = entry?;
            if path.is_file() {
                paths.push(path);
            }
        }

        tracing::debug!("{} content files match {}", paths.len(), pattern);
        Ok(paths)
    }
}

/// Load and validate every file concurrently, keeping enumeration order
async fn load_previews<M: Schema>(paths: Vec<PathBuf>) -> Result<Vec<M>> {
    let handles: Vec<JoinHandle<Result<M>>> = paths
        .into_iter()
        .map(|path| tokio::spawn(async move { load_preview::<M>(path).await }))
        .collect();

    let mut previews = Vec::with_capacity(handles.len());
    for handle in handles {
        previews.push(handle.await??);
    }
    Ok(previews)
}

async fn load_preview<M: Schema>(path: PathBuf) -> Result<M> {
    let source = read_source(&path).await?;
    let (meta, _) = parse_source::<M>(&path, &source)?;
    Ok(meta)
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Validate a file's front-matter and return it with the body
fn parse_source<'a, M: Schema>(path: &Path, source: &'a str) -> Result<(M, &'a str)> {
    let (raw, body) = split_frontmatter(source).map_err(|source| ContentError::Frontmatter {
        path: path.to_path_buf(),
        source,
    })?;

    if raw.is_empty() {
        tracing::debug!("{:?} has no front-matter", path);
    }

    let slug = slug_from_path(path);
    let meta = M::from_frontmatter(&raw, &slug).map_err(|source| ContentError::Validation {
        path: path.to_path_buf(),
        source,
    })?;

    Ok((meta, body))
}

/// Newest first; the sort is stable so equal dates keep enumeration order
fn sort_by_created_desc<M: Schema>(previews: &mut [M]) {
    previews.sort_by(|a, b| b.created().cmp(a.created()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn post_source(title: &str, created: &str, category: &str, topics: &[&str]) -> String {
        let topics: String = topics.iter().map(|t| format!("  - {}\n", t)).collect();
        format!(
            "---\ntitle: {}\ndescription: About {}\ncreated: {}\nupdated: {}\ncategory: {}\ntopics:\n{}---\n\n## Intro\n\nHello.\n\n## Summary\n",
            title, title, created, created, category, topics
        )
    }

    fn project_source(title: &str, created: &str) -> String {
        format!(
            "---\ntitle: {}\ndescription: The {} project\ncreated: {}\nupdated: {}\nimgUrl: /img/{}.png\nimgAlt: {} screenshot\ngradient: gradient-teal\n---\n\nProject body.\n",
            title, title, created, created, title, title
        )
    }

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write(
            root,
            "blog/articles/hooks.mdx",
            &post_source("Hooks", "2023-03-01", "articles", &["React", "JavaScript"]),
        );
        write(
            root,
            "blog/articles/grid.mdx",
            &post_source("Grid", "2023-07-15", "articles", &["CSS"]),
        );
        write(
            root,
            "blog/notes/rebase.mdx",
            &post_source("Rebase", "2023-05-20", "notes", &["Git", "CSS"]),
        );
        write(
            root,
            "blog/snippets/debounce.mdx",
            &post_source("Debounce", "2022-12-01", "snippets", &["JavaScript"]),
        );
        write(root, "projects/portfolio.mdx", &project_source("portfolio", "2022-01-10"));
        write(root, "projects/tracker.mdx", &project_source("tracker", "2023-02-02"));
        write(root, "projects/notes.txt", "not content");
        dir
    }

    fn slugs(items: &[PostMeta]) -> Vec<&str> {
        items.iter().map(|m| m.slug.as_str()).collect()
    }

    #[tokio::test]
    async fn test_post_previews_sorted_newest_first() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let previews = index.post_previews(None, None).await.unwrap();
        assert_eq!(slugs(&previews), vec!["grid", "rebase", "hooks", "debounce"]);
        for pair in previews.windows(2) {
            assert!(pair[0].created >= pair[1].created);
        }
    }

    #[tokio::test]
    async fn test_post_previews_by_category() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let previews = index
            .post_previews(Some(PostCategory::Articles), None)
            .await
            .unwrap();
        assert_eq!(slugs(&previews), vec!["grid", "hooks"]);
    }

    #[tokio::test]
    async fn test_post_previews_by_topic() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let previews = index
            .post_previews(None, Some(PostTopic::Css))
            .await
            .unwrap();
        assert_eq!(slugs(&previews), vec!["grid", "rebase"]);

        let none = index
            .post_previews(Some(PostCategory::Snippets), Some(PostTopic::Css))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_list_previews_projects() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let items = index
            .list_previews(ContentType::Project, None, None)
            .await
            .unwrap();
        let slugs: Vec<&str> = items.iter().map(|i| i.slug()).collect();
        assert_eq!(slugs, vec!["tracker", "portfolio"]);
        assert!(items.iter().all(|i| i.content_type() == ContentType::Project));

        let filtered = index
            .list_previews(ContentType::Project, None, Some(PostTopic::Css))
            .await
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[tokio::test]
    async fn test_empty_and_missing_directories() {
        let dir = TempDir::new().unwrap();
        let index = ContentIndex::new(dir.path());
        assert!(index
            .list_previews(ContentType::Post, None, None)
            .await
            .unwrap()
            .is_empty());

        fs::create_dir_all(dir.path().join("blog/notes")).unwrap();
        assert!(index
            .post_previews(Some(PostCategory::Notes), None)
            .await
            .unwrap()
            .is_empty());
        assert!(index.list_all_slugs(ContentType::Project).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_equal_dates_keep_enumeration_order() {
        let dir = TempDir::new().unwrap();
        for name in ["a", "b", "c"] {
            write(
                dir.path(),
                &format!("blog/notes/{}.mdx", name),
                &post_source(name, "2023-01-01", "notes", &["Git"]),
            );
        }
        let index = ContentIndex::new(dir.path());
        let previews = index.post_previews(None, None).await.unwrap();
        assert_eq!(slugs(&previews), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_topics_in_use() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let topics = index.list_topics_in_use(None).await.unwrap();
        assert_eq!(
            topics,
            vec![
                PostTopic::Css,
                PostTopic::Git,
                PostTopic::JavaScript,
                PostTopic::React
            ]
        );

        let notes = index
            .list_topics_in_use(Some(PostCategory::Notes))
            .await
            .unwrap();
        assert_eq!(notes, vec![PostTopic::Css, PostTopic::Git]);
    }

    #[tokio::test]
    async fn test_recent_posts() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let recent = index.recent_posts(2).await.unwrap();
        assert_eq!(slugs(&recent), vec!["grid", "rebase"]);
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let post = index.find_post("rebase").await.unwrap();
        assert_eq!(post.meta.title, "Rebase");
        assert_eq!(post.meta.category, PostCategory::Notes);
        assert!(post.body.contains("## Intro"));
        assert!(post.content.contains(r#"<h2 id="intro">"#));

        let headings = post.headings();
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].slug, "summary");
    }

    #[tokio::test]
    async fn test_find_by_slug_project() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let doc = index
            .find_by_slug(ContentType::Project, "tracker")
            .await
            .unwrap();
        let meta = doc.meta.as_project().unwrap();
        assert_eq!(meta.img_url, "/img/tracker.png");
        assert!(doc.content.contains("Project body."));
    }

    #[tokio::test]
    async fn test_find_by_slug_not_found() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let err = index
            .find_by_slug(ContentType::Post, "missing")
            .await
            .unwrap_err();
        assert!(err.is_not_found());

        // A project slug is not a post slug
        let err = index.find_post("portfolio").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_slug_must_match_whole_file_name() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let err = index.find_post("base").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_malformed_file_aborts_listing() {
        let dir = fixture();
        write(
            dir.path(),
            "blog/notes/broken.mdx",
            "---\ndescription: No title here\ncreated: 2023-01-01\nupdated: 2023-01-01\ncategory: notes\ntopics: [Git]\n---\nBody\n",
        );
        let index = ContentIndex::new(dir.path());

        let err = index.post_previews(None, None).await.unwrap_err();
        let validation = err.validation().expect("validation error");
        assert_eq!(validation.field_names(), vec!["title"]);
        assert!(err.to_string().contains("broken.mdx"));

        let err = index.find_post("broken").await.unwrap_err();
        assert!(err.validation().unwrap().has_field("title"));

        // Other categories are unaffected
        assert_eq!(
            index
                .post_previews(Some(PostCategory::Articles), None)
                .await
                .unwrap()
                .len(),
            2
        );
    }

    #[tokio::test]
    async fn test_unparseable_frontmatter() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "projects/bad.mdx", "---\ntitle: [oops\n---\nBody\n");
        let index = ContentIndex::new(dir.path());
        let err = index.project_previews().await.unwrap_err();
        assert!(matches!(err, ContentError::Frontmatter { .. }));
    }

    #[tokio::test]
    async fn test_list_all_slugs() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let mut posts = index.list_all_slugs(ContentType::Post).unwrap();
        posts.sort();
        assert_eq!(posts, vec!["debounce", "grid", "hooks", "rebase"]);
        assert_eq!(
            index.list_all_slugs(ContentType::Project).unwrap(),
            vec!["portfolio", "tracker"]
        );
    }

    #[tokio::test]
    async fn test_check_reports_counts() {
        let dir = fixture();
        let index = ContentIndex::new(dir.path());
        let report = index.check().await.unwrap();
        assert_eq!(report, IndexReport { posts: 4, projects: 2 });
    }

    #[tokio::test]
    async fn test_check_rejects_duplicate_slugs() {
        let dir = fixture();
        write(
            dir.path(),
            "blog/snippets/hooks.mdx",
            &post_source("Hooks again", "2023-01-01", "snippets", &["React"]),
        );
        let index = ContentIndex::new(dir.path());
        let err = index.check().await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::DuplicateSlug { ref slug, .. } if slug == "hooks"
        ));
    }

    #[tokio::test]
    async fn test_hidden_files_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "blog/notes/ok.mdx",
            &post_source("ok", "2023-01-01", "notes", &["Git"]),
        );
        write(dir.path(), "blog/notes/.mdx", "---\ntitle: Nameless\n---\n");
        write(dir.path(), "blog/notes/.draft.mdx", "---\ntitle: Draft\n---\n");
        let index = ContentIndex::new(dir.path());

        assert_eq!(index.list_all_slugs(ContentType::Post).unwrap(), vec!["ok"]);
        let previews = index.post_previews(None, None).await.unwrap();
        assert_eq!(slugs(&previews), vec!["ok"]);
        assert!(index.check().await.is_ok());
    }

    #[tokio::test]
    async fn test_custom_extension() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "projects/site.md", &project_source("site", "2023-01-01"));
        let index = ContentIndex::new(dir.path()).with_extension(".md");
        assert_eq!(index.list_all_slugs(ContentType::Project).unwrap(), vec!["site"]);
    }
}

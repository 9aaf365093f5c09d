//! Content fixtures shared by command tests

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::Site;

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub fn post(title: &str, created: &str, category: &str, topics: &[&str], body: &str) -> String {
    format!(
        "---\ntitle: {}\ndescription: About {}\ncreated: {}\nupdated: {}\ncategory: {}\ntopics: [{}]\n---\n{}",
        title,
        title,
        created,
        created,
        category,
        topics.join(", "),
        body
    )
}

pub fn project(title: &str, created: &str) -> String {
    format!(
        "---\ntitle: {}\ndescription: The {} project\ncreated: {}\nupdated: {}\nimgUrl: /img/{}.png\nimgAlt: {} screenshot\ngradient: gradient-teal\n---\nProject body.\n",
        title, title, created, created, title, title
    )
}

/// A site with two articles, one note and one project under `posts/`
pub fn site() -> (TempDir, Site) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "posts/blog/articles/hooks.mdx",
        &post(
            "Hooks",
            "2023-03-01",
            "articles",
            &["React", "JavaScript"],
            "## Intro\n\n### Why `useEffect`\n\n## Summary\n\n#### Summary\n",
        ),
    );
    write(
        root,
        "posts/blog/articles/grid.mdx",
        &post("Grid", "2023-07-15", "articles", &["CSS"], "Grid body.\n"),
    );
    write(
        root,
        "posts/blog/notes/rebase.mdx",
        &post("Rebase", "2023-05-20", "notes", &["Git"], "Rebase body.\n"),
    );
    write(root, "posts/projects/tracker.mdx", &project("tracker", "2023-02-02"));

    let site = Site::new(root).unwrap();
    (dir, site)
}

//! Enumerate every page path of the site

use anyhow::Result;

use crate::content::ContentType;
use crate::helpers::{blog_path, post_path, project_path, topic_path};
use crate::Site;

/// Pages that exist regardless of content
const STATIC_ROUTES: [&str; 3] = ["/", "/about", "/projects"];

pub async fn run(site: &Site) -> Result<()> {
    for route in collect_routes(site).await? {
        println!("{}", route);
    }
    Ok(())
}

/// Every path a static build of the site has to produce
///
/// Blog sections get one page per topic their posts use; posts and projects
/// get one page per slug.
pub async fn collect_routes(site: &Site) -> Result<Vec<String>> {
    let index = site.index();
    let mut routes: Vec<String> = STATIC_ROUTES.iter().map(|r| r.to_string()).collect();

    for route in &site.config.blog_routes {
        routes.push(blog_path(route));
        for topic in index.list_topics_in_use(route.category).await? {
            routes.push(topic_path(route, topic));
        }
    }

    routes.extend(
        index
            .list_all_slugs(ContentType::Post)?
            .iter()
            .map(|slug| post_path(slug)),
    );
    routes.extend(
        index
            .list_all_slugs(ContentType::Project)?
            .iter()
            .map(|slug| project_path(slug)),
    );

    tracing::debug!("Collected {} routes", routes.len());
    Ok(routes)
}

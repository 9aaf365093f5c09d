//! Validate all content

use anyhow::Result;

use crate::content::IndexReport;
use crate::Site;

/// Validate every post and project, failing on the first bad file
pub async fn run(site: &Site) -> Result<()> {
    let report = check(site).await?;
    println!(
        "All content is valid: {} posts, {} projects",
        report.posts, report.projects
    );
    Ok(())
}

pub async fn check(site: &Site) -> Result<IndexReport> {
    tracing::info!("Checking content in {:?}", site.content_dir);
    let report = site.index().check().await?;
    tracing::debug!("Checked {:?}", report);
    Ok(report)
}

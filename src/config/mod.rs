//! Configuration module

mod site;

pub use site::BlogRoute;
pub use site::HighlightConfig;
pub use site::SiteConfig;

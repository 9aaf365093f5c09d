//! Helper functions for listings and routes

mod date;
mod url;

pub use date::*;
pub use url::*;

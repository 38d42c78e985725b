//! Static site generation for citygen.
//!
//! [`StaticSiteBuilder`] performs one full rebuild of the output directory:
//! the previous contents are removed, the shared image is copied, every page
//! is rendered and written, then `robots.txt` and `sitemap.xml` are added.

mod builder;
mod fs;
mod manifest;

pub use builder::{BuildConfig, BuildError, BuildSummary, StaticSiteBuilder};
pub use manifest::SiteManifest;

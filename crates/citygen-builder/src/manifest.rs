//! Ordered list of site paths produced by a build.

use citygen_renderer::seo;

/// URL paths of every generated page, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteManifest {
    paths: Vec<String>,
}

impl SiteManifest {
    pub(crate) fn push(&mut self, path: impl Into<String>) {
        self.paths.push(path.into());
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Page paths, e.g. `/` and `/austin-tx/`.
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Public locations of every page, for the sitemap.
    #[must_use]
    pub fn locations(&self, base_url: Option<&str>) -> Vec<String> {
        self.paths
            .iter()
            .map(|path| seo::location(base_url, path))
            .collect()
    }
}

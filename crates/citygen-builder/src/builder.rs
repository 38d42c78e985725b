//! Static site builder.

use std::path::{Path, PathBuf};

use citygen_renderer::pages::{COST_PATH, HOW_TO_PATH};
use citygen_renderer::seo::{self, ROBOTS_FILENAME, SITEMAP_FILENAME};
use citygen_renderer::{City, RenderedPage, SiteProfile, pages};

use crate::fs::{copy_asset, page_file, reset_dir, write_file};
use crate::manifest::SiteManifest;

/// Configuration for static site building.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Business profile rendered into every page.
    pub profile: SiteProfile,
    /// Cities, one page each.
    pub cities: Vec<City>,
    /// Image copied into the output root as `profile.image_filename`.
    pub image_path: PathBuf,
    /// Public origin for sitemap locations; paths are used as is when unset.
    pub base_url: Option<String>,
}

/// Error returned by the static site builder.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Missing image asset: {}", .0.display())]
    MissingAsset(PathBuf),
    #[error(
        "Image asset {} is inside the output directory {}",
        asset.display(),
        output_dir.display()
    )]
    AssetInsideOutput { asset: PathBuf, output_dir: PathBuf },
}

/// Outcome of a successful build.
#[derive(Debug)]
pub struct BuildSummary {
    /// Paths of every page written.
    pub manifest: SiteManifest,
    /// Output directory, absolute when it could be resolved.
    pub output_dir: PathBuf,
}

/// Builds the static site from a [`BuildConfig`].
pub struct StaticSiteBuilder {
    config: BuildConfig,
}

impl StaticSiteBuilder {
    /// Create a new builder with the given configuration.
    #[must_use]
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Paths the next build will produce, without touching the filesystem.
    #[must_use]
    pub fn manifest(&self) -> SiteManifest {
        let mut manifest = SiteManifest::default();
        manifest.push("/");
        if self.config.profile.pages.cost {
            manifest.push(COST_PATH);
        }
        if self.config.profile.pages.how_to {
            manifest.push(HOW_TO_PATH);
        }
        for city in &self.config.cities {
            manifest.push(city.path());
        }
        manifest
    }

    /// Render every page in manifest order: home, guides, then cities.
    #[must_use]
    pub fn render_pages(&self) -> Vec<RenderedPage> {
        let profile = &self.config.profile;
        let mut rendered = Vec::with_capacity(self.config.cities.len() + 3);

        rendered.push(pages::home_page(profile, &self.config.cities));
        if profile.pages.cost {
            rendered.push(pages::cost_page(profile));
        }
        if profile.pages.how_to {
            rendered.push(pages::how_to_page(profile));
        }
        rendered.extend(
            self.config
                .cities
                .iter()
                .map(|city| pages::city_page(profile, city)),
        );
        rendered
    }

    /// Rebuild the site in `output_dir`.
    ///
    /// Everything previously in `output_dir` is deleted first, so an image
    /// stored inside it is refused before anything is removed. The first
    /// failure aborts the build and may leave the directory partially written.
    pub fn build(&self, output_dir: &Path) -> Result<BuildSummary, BuildError> {
        if let (Ok(asset), Ok(output)) = (
            self.config.image_path.canonicalize(),
            output_dir.canonicalize(),
        ) && asset.starts_with(&output)
        {
            return Err(BuildError::AssetInsideOutput {
                asset,
                output_dir: output,
            });
        }

        tracing::info!(output_dir = %output_dir.display(), "Resetting output directory");
        reset_dir(output_dir)?;

        let image = copy_asset(
            &self.config.image_path,
            output_dir,
            &self.config.profile.image_filename,
        )?;
        tracing::debug!(path = %image.display(), "Copied image asset");

        let mut manifest = SiteManifest::default();
        for page in self.render_pages() {
            let path = page_file(output_dir, &page.canonical_path);
            write_file(&path, &page.html)?;
            tracing::debug!(page = %page.canonical_path, file = %path.display(), "Wrote page");
            manifest.push(page.canonical_path);
        }
        tracing::info!(pages = manifest.len(), "Rendered pages");

        let base_url = self.config.base_url.as_deref();
        let sitemap_url = seo::location(base_url, &format!("/{SITEMAP_FILENAME}"));
        write_file(
            &output_dir.join(ROBOTS_FILENAME),
            &seo::robots_txt(&sitemap_url),
        )?;
        write_file(
            &output_dir.join(SITEMAP_FILENAME),
            &seo::sitemap_xml(&manifest.locations(base_url)),
        )?;
        tracing::debug!("Wrote robots.txt and sitemap.xml");

        let output_dir = output_dir
            .canonicalize()
            .unwrap_or_else(|_| output_dir.to_path_buf());

        Ok(BuildSummary {
            manifest,
            output_dir,
        })
    }
}

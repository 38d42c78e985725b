//! Configuration management for citygen.
//!
//! Parses `citygen.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Without a config
//! file the built-in profile is used: the wasp removal site and its twenty
//! cities.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Path Resolution
//!
//! - With a config file, `site.output_dir` and `site.image` resolve against
//!   the directory containing the file.
//! - Without one, the output directory resolves against the current directory
//!   and the image against the directory containing the executable.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use citygen_renderer::pages::{COST_PATH, HOW_TO_PATH};
use citygen_renderer::{City, PageToggles, SiteProfile, slugify};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output directory.
    pub output_dir: Option<PathBuf>,
    /// Override image asset path.
    pub image_path: Option<PathBuf>,
    /// Override public base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "citygen.toml";

/// Default output directory name.
const DEFAULT_OUTPUT_DIR: &str = "public";

/// Default image filename.
const DEFAULT_IMAGE: &str = "picture.png";

/// Cities served by the built-in profile.
const DEFAULT_CITIES: [(&str, &str); 20] = [
    ("Los Angeles", "CA"),
    ("New York", "NY"),
    ("Chicago", "IL"),
    ("Houston", "TX"),
    ("Phoenix", "AZ"),
    ("Philadelphia", "PA"),
    ("San Antonio", "TX"),
    ("San Diego", "CA"),
    ("Dallas", "TX"),
    ("San Jose", "CA"),
    ("Austin", "TX"),
    ("Jacksonville", "FL"),
    ("Fort Worth", "TX"),
    ("Columbus", "OH"),
    ("Charlotte", "NC"),
    ("San Francisco", "CA"),
    ("Indianapolis", "IN"),
    ("Seattle", "WA"),
    ("Denver", "CO"),
    ("Washington", "DC"),
];

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Business and site identity.
    pub site: SiteConfig,
    /// Typical price range.
    pub pricing: PricingConfig,
    /// Optional guide pages.
    pub pages: PagesConfig,
    /// Cities, one page each. Replaces the built-in list when present.
    pub cities: Vec<CityConfig>,

    /// Resolved filesystem paths (set after loading).
    #[serde(skip)]
    pub paths: PathsConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."), Path::new("."))
    }
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Service display name.
    pub service_name: String,
    /// Brand name.
    pub brand_name: String,
    /// Call-to-action label.
    pub cta_text: String,
    /// Call-to-action link target.
    pub cta_href: String,
    /// Public origin for sitemap locations, e.g. `https://example.com`.
    pub base_url: Option<String>,
    /// Output directory (relative to the config file).
    output_dir: Option<String>,
    /// Image asset (relative to the config file).
    image: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            service_name: "Wasp Nest/Wasp Hive Removal & Wasp Control Services".to_owned(),
            brand_name: "Wasp Nest Removal Company".to_owned(),
            cta_text: "Get Free Estimate".to_owned(),
            cta_href: "mailto:hello@example.com?subject=Free%20Quote%20Request".to_owned(),
            base_url: None,
            output_dir: None,
            image: None,
        }
    }
}

/// Price range configuration, in whole dollars.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Low end of the range.
    pub low: u32,
    /// High end of the range.
    pub high: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self { low: 150, high: 450 }
    }
}

/// Optional guide pages.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    /// Publish the cost guide at `/cost/`.
    pub cost: bool,
    /// Publish the how-to guide at `/how-to/`.
    pub how_to: bool,
}

/// A `[[cities]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityConfig {
    /// City name.
    pub name: String,
    /// State code.
    pub state: String,
}

/// Resolved filesystem paths.
#[derive(Debug, Default)]
pub struct PathsConfig {
    /// Directory the site is generated into.
    pub output_dir: PathBuf,
    /// Image copied into the output root.
    pub image_path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `citygen.toml` in current directory and parents,
    /// falling back to the built-in profile.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails, or
    /// the final configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(output_dir) = &settings.output_dir {
            self.paths.output_dir.clone_from(output_dir);
        }
        if let Some(image_path) = &settings.image_path {
            self.paths.image_path.clone_from(image_path);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
    }

    /// Business profile handed to the page templates.
    #[must_use]
    pub fn profile(&self) -> SiteProfile {
        SiteProfile {
            service_name: self.site.service_name.clone(),
            brand_name: self.site.brand_name.clone(),
            cta_text: self.site.cta_text.clone(),
            cta_href: self.site.cta_href.clone(),
            image_filename: self.image_filename(),
            cost_low: self.pricing.low,
            cost_high: self.pricing.high,
            pages: PageToggles {
                cost: self.pages.cost,
                how_to: self.pages.how_to,
            },
        }
    }

    /// Configured cities, in order.
    #[must_use]
    pub fn cities(&self) -> Vec<City> {
        self.cities
            .iter()
            .map(|c| City::new(c.name.trim(), c.state.trim()))
            .collect()
    }

    /// Filename the image is published under at the site root.
    #[must_use]
    pub fn image_filename(&self) -> String {
        self.paths
            .image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config: output under the current directory, image
    /// beside the executable.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        let program_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| cwd.clone());
        Self::default_with_base(&cwd, &program_dir)
    }

    /// Create default config with the given output and image base directories.
    fn default_with_base(output_base: &Path, image_base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            pricing: PricingConfig::default(),
            pages: PagesConfig::default(),
            cities: DEFAULT_CITIES
                .iter()
                .map(|(name, state)| CityConfig {
                    name: (*name).to_owned(),
                    state: (*state).to_owned(),
                })
                .collect(),
            paths: PathsConfig {
                output_dir: output_base.join(DEFAULT_OUTPUT_DIR),
                image_path: image_base.join(DEFAULT_IMAGE),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.paths = PathsConfig {
            output_dir: resolve(self.site.output_dir.as_deref(), DEFAULT_OUTPUT_DIR),
            image_path: resolve(self.site.image.as_deref(), DEFAULT_IMAGE),
        };
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically at the end of [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_pricing()?;
        self.validate_cities()?;
        self.validate_paths()?;
        Ok(())
    }

    /// Validate site identity and paths.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.service_name, "site.service_name")?;
        require_non_empty(&self.site.brand_name, "site.brand_name")?;
        require_non_empty(&self.site.cta_text, "site.cta_text")?;
        require_non_empty(&self.site.cta_href, "site.cta_href")?;

        if let Some(ref base_url) = self.site.base_url {
            require_non_empty(base_url, "site.base_url")?;
            require_http_url(base_url, "site.base_url")?;
        }

        if self.image_filename().is_empty() {
            return Err(ConfigError::Validation(
                "site.image must name a file".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate the price range.
    fn validate_pricing(&self) -> Result<(), ConfigError> {
        if self.pricing.low > self.pricing.high {
            return Err(ConfigError::Validation(format!(
                "pricing.low ({}) cannot exceed pricing.high ({})",
                self.pricing.low, self.pricing.high
            )));
        }
        Ok(())
    }

    /// Validate cities: at least one, each with a usable slug, no two sharing a page.
    fn validate_cities(&self) -> Result<(), ConfigError> {
        if self.cities.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[cities]] entry is required".to_owned(),
            ));
        }

        let mut seen: HashMap<String, &CityConfig> = HashMap::new();
        for city in &self.cities {
            if slugify(&city.name).is_empty() || slugify(&city.state).is_empty() {
                return Err(ConfigError::Validation(format!(
                    "city \"{}, {}\" needs a name and state with letters or digits",
                    city.name, city.state
                )));
            }
            let slug = citygen_renderer::city_state_slug(&city.name, &city.state);
            let path = format!("/{slug}/");
            if path == COST_PATH || path == HOW_TO_PATH {
                return Err(ConfigError::Validation(format!(
                    "city \"{}, {}\" would replace the guide page {path}",
                    city.name, city.state
                )));
            }
            if let Some(previous) = seen.insert(slug.clone(), city) {
                return Err(ConfigError::Validation(format!(
                    "cities \"{}, {}\" and \"{}, {}\" share the page /{slug}/",
                    previous.name, previous.state, city.name, city.state
                )));
            }
        }

        Ok(())
    }

    /// Validate that rebuilding the output directory cannot delete the
    /// project: the config file, the working directory or the image.
    fn validate_paths(&self) -> Result<(), ConfigError> {
        // A directory that doesn't exist yet holds nothing to lose.
        let Ok(output_dir) = self.paths.output_dir.canonicalize() else {
            return Ok(());
        };

        let mut protected = Vec::new();
        if let Some(config_dir) = self.config_path.as_deref().and_then(Path::parent) {
            let config_dir = if config_dir.as_os_str().is_empty() {
                Path::new(".")
            } else {
                config_dir
            };
            protected.push(("the config file directory", config_dir.to_path_buf()));
        }
        if let Ok(cwd) = std::env::current_dir() {
            protected.push(("the current directory", cwd));
        }
        protected.push(("the image", self.paths.image_path.clone()));

        for (what, path) in protected {
            if let Ok(path) = path.canonicalize()
                && path.starts_with(&output_dir)
            {
                return Err(ConfigError::Validation(format!(
                    "site.output_dir {} contains {what} ({}); it is deleted on every build",
                    output_dir.display(),
                    path.display()
                )));
            }
        }
        Ok(())
    }
}

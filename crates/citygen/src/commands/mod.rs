//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod routes;

pub(crate) use build::BuildArgs;
pub(crate) use routes::RoutesArgs;

use citygen_builder::BuildConfig;
use citygen_config::Config;

/// Builder configuration from the loaded config.
pub(crate) fn build_config(config: &Config) -> BuildConfig {
    BuildConfig {
        profile: config.profile(),
        cities: config.cities(),
        image_path: config.paths.image_path.clone(),
        base_url: config.site.base_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citygen_renderer::City;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_config_from_default_config() {
        let config = Config::default();
        let build = build_config(&config);

        assert_eq!(build.cities.len(), 20);
        assert_eq!(build.cities[0], City::new("Los Angeles", "CA"));
        assert_eq!(build.cities[19], City::new("Washington", "DC"));
        assert_eq!(build.image_path, config.paths.image_path);
        assert_eq!(build.profile.image_filename, "picture.png");
        assert_eq!(build.base_url, None);
    }
}

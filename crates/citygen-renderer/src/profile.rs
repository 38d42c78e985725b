//! Business profile and city data consumed by the page factories.

use crate::slug::city_state_slug;

/// Which optional guide pages a site publishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageToggles {
    /// Publish `/cost/`.
    pub cost: bool,
    /// Publish `/how-to/`.
    pub how_to: bool,
}

/// Everything the templates need to know about the business.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// Service display name, used as the home page heading.
    pub service_name: String,
    /// Brand shown in the top bar and footer.
    pub brand_name: String,
    /// Call-to-action label.
    pub cta_text: String,
    /// Call-to-action link target.
    pub cta_href: String,
    /// Shared image, served from the site root.
    pub image_filename: String,
    /// Low end of the typical price range, in dollars.
    pub cost_low: u32,
    /// High end of the typical price range, in dollars.
    pub cost_high: u32,
    /// Optional guide pages.
    pub pages: PageToggles,
}

impl SiteProfile {
    /// Price range as displayed on the page, e.g. `$150–$450`.
    #[must_use]
    pub fn price_range(&self) -> String {
        format!("${}–${}", self.cost_low, self.cost_high)
    }

    /// Single uppercase letter used as the brand mark.
    #[must_use]
    pub fn brand_mark(&self) -> String {
        self.brand_name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Navigation entries for this site, in display order.
    #[must_use]
    pub fn nav_keys(&self) -> Vec<NavKey> {
        let mut keys = vec![NavKey::Home];
        if self.pages.cost {
            keys.push(NavKey::Cost);
        }
        if self.pages.how_to {
            keys.push(NavKey::HowTo);
        }
        keys
    }
}

/// A city served by the business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// City name, e.g. "Los Angeles".
    pub name: String,
    /// State code, e.g. "CA".
    pub state: String,
}

impl City {
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: state.into(),
        }
    }

    /// URL slug, e.g. `los-angeles-ca`.
    #[must_use]
    pub fn slug(&self) -> String {
        city_state_slug(&self.name, &self.state)
    }

    /// Canonical path of the city page, e.g. `/los-angeles-ca/`.
    #[must_use]
    pub fn path(&self) -> String {
        format!("/{}/", self.slug())
    }

    /// Human-readable label, e.g. `Los Angeles, CA`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}, {}", self.name, self.state)
    }
}

/// Top-level navigation entry, also used to mark the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Home,
    Cost,
    HowTo,
}

impl NavKey {
    /// Site path the entry links to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Cost => "/cost/",
            Self::HowTo => "/how-to/",
        }
    }

    /// Link label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Cost => "Cost",
            Self::HowTo => "How-To",
        }
    }
}

//! HTML page rendering for citygen sites.
//!
//! This crate provides:
//! - [`slugify`] and [`city_state_slug`]: URL path segments from free text
//! - [`clamp`] and [`escape_html`]: text helpers shared by every page
//! - [`render_page`]: the document template wrapping page content
//! - [`pages`]: factories for the home, city, cost and how-to pages
//! - [`seo`]: `robots.txt` and `sitemap.xml` text
//!
//! # Quick Start
//!
//! ```
//! use citygen_renderer::{City, PageToggles, SiteProfile, pages};
//!
//! let profile = SiteProfile {
//!     service_name: "Wasp Nest Removal".to_owned(),
//!     brand_name: "Acme Pest".to_owned(),
//!     cta_text: "Get Free Estimate".to_owned(),
//!     cta_href: "mailto:hello@example.com".to_owned(),
//!     image_filename: "picture.png".to_owned(),
//!     cost_low: 150,
//!     cost_high: 450,
//!     pages: PageToggles::default(),
//! };
//! let austin = City::new("Austin", "TX");
//!
//! let page = pages::city_page(&profile, &austin);
//! assert_eq!(page.canonical_path, "/austin-tx/");
//! assert!(page.html.contains("Austin, TX"));
//! ```

pub mod content;
pub mod pages;
mod profile;
pub mod seo;
mod slug;
mod template;
mod util;

pub use profile::{City, NavKey, PageToggles, SiteProfile};
pub use slug::{city_state_slug, slugify};
pub use template::{PageData, RenderedPage, render_page};
pub use util::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, clamp, escape_html};

//! Page factories for each page type.

use crate::content::{city_grid, cost_callout, cost_sections, how_to_sections, shared_sections};
use crate::profile::{City, NavKey, SiteProfile};
use crate::template::{PageData, RenderedPage, render_page};
use crate::util::{TITLE_MAX_CHARS, clamp};

/// Canonical path of the cost guide.
pub const COST_PATH: &str = "/cost/";

/// Canonical path of the how-to guide.
pub const HOW_TO_PATH: &str = "/how-to/";

/// Heading of a city page: `{service} in {city}, {state}`, clamped.
pub fn city_heading(service_name: &str, city: &City) -> String {
    clamp(
        &format!("{service_name} in {}", city.label()),
        TITLE_MAX_CHARS,
    )
}

/// Home page at `/`: shared guide plus a grid of city links.
pub fn home_page(profile: &SiteProfile, cities: &[City]) -> RenderedPage {
    let mut content = shared_sections(None);
    content.push_str(&city_grid(cities));

    let page = PageData {
        h1: profile.service_name.clone(),
        subtitle: "How removal works, what prevents repeat activity, and when to call for help."
            .to_owned(),
        pill: "Main service page".to_owned(),
        canonical_path: NavKey::Home.path().to_owned(),
        description: "Straight answers on wasp nest removal and wasp control.".to_owned(),
        nav: NavKey::Home,
        content_html: content,
        show_actions: true,
    };
    render_page(&page, profile)
}

/// City page at `/{city}-{state}/`: shared guide with a local note and price callout.
pub fn city_page(profile: &SiteProfile, city: &City) -> RenderedPage {
    let label = city.label();
    let mut content = shared_sections(Some(&format!("Serving {label}.")));
    content.push_str(&cost_callout(profile, Some(city)));

    let page = PageData {
        h1: city_heading(&profile.service_name, city),
        subtitle: "Same core guide, plus a quick local note and a typical cost range.".to_owned(),
        pill: "City service page".to_owned(),
        canonical_path: city.path(),
        description: format!("{} guide with local context for {label}.", profile.service_name),
        nav: NavKey::Home,
        content_html: content,
        show_actions: false,
    };
    render_page(&page, profile)
}

/// Cost guide at `/cost/`.
pub fn cost_page(profile: &SiteProfile) -> RenderedPage {
    let mut content = cost_callout(profile, None);
    content.push_str(&cost_sections());

    let page = PageData {
        h1: format!("{} Cost", profile.service_name),
        subtitle: "What a typical job costs and what moves the price up or down.".to_owned(),
        pill: "Cost guide".to_owned(),
        canonical_path: COST_PATH.to_owned(),
        description: format!(
            "Typical wasp nest removal cost is {}. See what changes the price and when \
             professional removal pays off.",
            profile.price_range()
        ),
        nav: NavKey::Cost,
        content_html: content,
        show_actions: true,
    };
    render_page(&page, profile)
}

/// How-to guide at `/how-to/`.
pub fn how_to_page(profile: &SiteProfile) -> RenderedPage {
    let page = PageData {
        h1: "How to Get Rid of a Wasp Nest".to_owned(),
        subtitle: "Finding the nest, safe timing, simple methods, and where DIY stops.".to_owned(),
        pill: "How-to guide".to_owned(),
        canonical_path: HOW_TO_PATH.to_owned(),
        description: "How to find a wasp nest, remove it safely, and know when to call a wasp \
                      exterminator instead."
            .to_owned(),
        nav: NavKey::HowTo,
        content_html: how_to_sections(),
        show_actions: true,
    };
    render_page(&page, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{COST_HEADINGS, HOW_TO_HEADINGS, SHARED_HEADINGS};
    use crate::profile::PageToggles;
    use pretty_assertions::assert_eq;

    fn profile() -> SiteProfile {
        SiteProfile {
            service_name: "Wasp Nest/Wasp Hive Removal & Wasp Control Services".to_owned(),
            brand_name: "Wasp Nest Removal Company".to_owned(),
            cta_text: "Get Free Estimate".to_owned(),
            cta_href: "mailto:hello@example.com".to_owned(),
            image_filename: "picture.png".to_owned(),
            cost_low: 150,
            cost_high: 450,
            pages: PageToggles {
                cost: true,
                how_to: true,
            },
        }
    }

    /// Text of every `<h2>` in document order.
    fn h2_texts(html: &str) -> Vec<String> {
        html.split("<h2>")
            .skip(1)
            .filter_map(|rest| rest.split_once("</h2>").map(|(text, _)| text.to_owned()))
            .collect()
    }

    fn escaped(headings: &[&str]) -> Vec<String> {
        headings.iter().map(|h| crate::escape_html(h)).collect()
    }

    #[test]
    fn test_home_and_city_share_h2_sequence() {
        let p = profile();
        let cities = vec![City::new("Austin", "TX"), City::new("Denver", "CO")];
        let home = home_page(&p, &cities);
        let expected = escaped(&SHARED_HEADINGS);
        assert_eq!(h2_texts(&home.html), expected);
        for city in &cities {
            assert_eq!(h2_texts(&city_page(&p, city).html), expected);
        }
    }

    #[test]
    fn test_guides_use_their_own_h2_sequences() {
        let p = profile();
        assert_eq!(h2_texts(&cost_page(&p).html), escaped(&COST_HEADINGS));
        assert_eq!(h2_texts(&how_to_page(&p).html), escaped(&HOW_TO_HEADINGS));
    }

    #[test]
    fn test_home_page() {
        let home = home_page(&profile(), &[City::new("Austin", "TX")]);
        assert_eq!(home.canonical_path, "/");
        assert_eq!(
            home.title,
            "Wasp Nest/Wasp Hive Removal & Wasp Control Services"
        );
        assert!(home.html.contains("<a href=\"/austin-tx/\">Austin, TX</a>"));
        assert!(home.html.contains("id=\"cities\""));
    }

    #[test]
    fn test_city_page() {
        let page = city_page(&profile(), &City::new("Austin", "TX"));
        assert_eq!(page.canonical_path, "/austin-tx/");
        assert!(page.html.contains("Austin, TX"));
        assert!(page.html.contains("Serving Austin, TX."));
        assert!(page.html.contains("Typical cost range in Austin, TX"));
        assert!(!page.html.contains("<div class=\"hero-actions\">"));
    }

    #[test]
    fn test_city_description_names_service() {
        let mut p = profile();
        p.service_name = "Gutter Cleaning".to_owned();
        let page = city_page(&p, &City::new("Austin", "TX"));
        assert_eq!(
            page.description,
            "Gutter Cleaning guide with local context for Austin, TX."
        );
        assert!(!page.description.contains("Wasp"));
    }

    #[test]
    fn test_home_page_shows_actions() {
        let home = home_page(&profile(), &[City::new("Austin", "TX")]);
        assert!(home.html.contains("<div class=\"hero-actions\">"));
    }

    #[test]
    fn test_city_heading_is_clamped() {
        let city = City::new("San Francisco", "CA");
        let heading = city_heading(&profile().service_name, &city);
        assert!(heading.chars().count() <= TITLE_MAX_CHARS);
        assert!(heading.ends_with('…'));

        let short = city_heading("Wasp Removal", &city);
        assert_eq!(short, "Wasp Removal in San Francisco, CA");
    }

    #[test]
    fn test_title_equals_h1_on_every_page() {
        let p = profile();
        let cities = vec![City::new("Los Angeles", "CA"), City::new("Washington", "DC")];
        let mut pages = vec![home_page(&p, &cities), cost_page(&p), how_to_page(&p)];
        pages.extend(cities.iter().map(|c| city_page(&p, c)));

        for page in pages {
            let escaped_title = crate::escape_html(&page.title);
            assert!(page.title.chars().count() <= TITLE_MAX_CHARS);
            assert!(page.description.chars().count() <= crate::DESCRIPTION_MAX_CHARS);
            assert!(page.html.contains(&format!("<title>{escaped_title}</title>")));
            assert!(page.html.contains(&format!("<h1>{escaped_title}</h1>")));
            assert_eq!(page.html.matches("<h1>").count(), 1);
        }
    }

    #[test]
    fn test_cost_page() {
        let page = cost_page(&profile());
        assert_eq!(page.canonical_path, COST_PATH);
        assert!(page.html.contains("$150–$450"));
        assert!(
            page.html
                .contains("<a href=\"/cost/\" aria-current=\"page\">Cost</a>")
        );
    }

    #[test]
    fn test_how_to_page() {
        let page = how_to_page(&profile());
        assert_eq!(page.canonical_path, HOW_TO_PATH);
        assert_eq!(page.title, "How to Get Rid of a Wasp Nest");
    }
}

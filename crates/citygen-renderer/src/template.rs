//! HTML document template shared by every page.
//!
//! The template enforces the SEO rules for a page: the `<title>` and the one
//! `<h1>` carry the same clamped text, the description is clamped, and every
//! caller-supplied string is escaped before insertion.

use std::fmt::Write;

use crate::profile::{NavKey, SiteProfile};
use crate::util::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, clamp, escape_html};

/// Inline stylesheet.
const THEME_CSS: &str = include_str!("theme.css");

/// All data needed to render one page.
pub struct PageData {
    /// Top-level heading; also the page title.
    pub h1: String,
    /// Line under the heading.
    pub subtitle: String,
    /// Small label above the page image.
    pub pill: String,
    /// Canonical URL path, e.g. `/austin-tx/`.
    pub canonical_path: String,
    /// Meta description.
    pub description: String,
    /// Navigation entry marked as current.
    pub nav: NavKey,
    /// Pre-rendered section markup placed inside the main card.
    pub content_html: String,
    /// Show the call-to-action buttons under the heading.
    pub show_actions: bool,
}

/// A complete page ready to be written to disk.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Canonical URL path.
    pub canonical_path: String,
    /// Title text, identical to the `<h1>` text.
    pub title: String,
    /// Meta description after clamping.
    pub description: String,
    /// Full HTML document.
    pub html: String,
}

/// Render a complete HTML page.
pub fn render_page(page: &PageData, profile: &SiteProfile) -> RenderedPage {
    let title = clamp(&page.h1, TITLE_MAX_CHARS);
    let description = clamp(&page.description, DESCRIPTION_MAX_CHARS);

    let mut html = String::with_capacity(16384);

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\" />",
        escape_html(&description)
    );
    let _ = writeln!(
        html,
        "<link rel=\"canonical\" href=\"{}\" />",
        escape_html(&page.canonical_path)
    );
    html.push_str("<style>\n");
    html.push_str(THEME_CSS);
    html.push_str("</style>\n</head>\n<body>\n");

    render_topbar(&mut html, profile, page.nav);
    render_header(&mut html, profile, &title, &page.subtitle, page.show_actions);

    html.push_str("<main>\n<section class=\"card\">\n");
    let _ = writeln!(html, "<div class=\"pill\">{}</div>", escape_html(&page.pill));
    html.push_str("<div class=\"img\">\n");
    let _ = writeln!(
        html,
        "<img src=\"/{}\" alt=\"Service image\" loading=\"lazy\" />",
        escape_html(&profile.image_filename)
    );
    html.push_str("</div>\n");
    html.push_str(&page.content_html);
    html.push_str("</section>\n</main>\n");

    render_footer(&mut html, profile);

    html.push_str("</body>\n</html>\n");

    RenderedPage {
        canonical_path: page.canonical_path.clone(),
        title,
        description,
        html,
    }
}

/// Render the sticky top bar with brand and navigation.
fn render_topbar(html: &mut String, profile: &SiteProfile, current: NavKey) {
    html.push_str("<div class=\"topbar\">\n<div class=\"topbar-inner\">\n");
    html.push_str("<a class=\"brand\" href=\"/\">\n");
    let _ = writeln!(
        html,
        "<span class=\"brand-mark\" aria-hidden=\"true\">{}</span>",
        escape_html(&profile.brand_mark())
    );
    let _ = writeln!(html, "<span>{}</span>", escape_html(&profile.brand_name));
    html.push_str("</a>\n");

    html.push_str("<nav class=\"nav\" aria-label=\"Primary navigation\">\n");
    for key in profile.nav_keys() {
        let current_attr = if key == current {
            " aria-current=\"page\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a href=\"{}\"{}>{}</a>",
            key.path(),
            current_attr,
            key.label()
        );
    }
    let _ = writeln!(
        html,
        "<a class=\"btn btn-cta\" href=\"{}\">{}</a>",
        escape_html(&profile.cta_href),
        escape_html(&profile.cta_text)
    );
    html.push_str("</nav>\n");

    html.push_str("</div>\n</div>\n");
}

/// Render the hero header holding the page's only `<h1>`.
fn render_header(
    html: &mut String,
    profile: &SiteProfile,
    title: &str,
    subtitle: &str,
    show_actions: bool,
) {
    html.push_str("<header>\n<div class=\"hero\">\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));
    let _ = writeln!(html, "<p class=\"sub\">{}</p>", escape_html(subtitle));
    if show_actions {
        html.push_str("<div class=\"hero-actions\">\n");
        let _ = writeln!(
            html,
            "<a class=\"btn btn-primary\" href=\"{}\">{}</a>",
            escape_html(&profile.cta_href),
            escape_html(&profile.cta_text)
        );
        html.push_str("<a class=\"btn btn-ghost\" href=\"/#cities\">Browse cities</a>\n");
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</header>\n");
}

/// Render the footer call-to-action.
fn render_footer(html: &mut String, profile: &SiteProfile) {
    html.push_str("<footer>\n<div class=\"footer-inner\">\n");
    html.push_str("<div class=\"footer-title\">Next steps</div>\n");
    html.push_str("<p class=\"sub\">Ready to move forward? Request a free quote.</p>\n");
    let _ = writeln!(
        html,
        "<div><a class=\"btn btn-primary\" href=\"{}\">{}</a></div>",
        escape_html(&profile.cta_href),
        escape_html(&profile.cta_text)
    );
    let _ = writeln!(
        html,
        "<div class=\"small\">© {}. All rights reserved.</div>",
        escape_html(&profile.brand_name)
    );
    html.push_str("</div>\n</footer>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::PageToggles;

    fn profile() -> SiteProfile {
        SiteProfile {
            service_name: "Wasp Nest Removal".to_owned(),
            brand_name: "Wasp & Co".to_owned(),
            cta_text: "Get Free Estimate".to_owned(),
            cta_href: "mailto:hello@example.com?subject=Quote&x=1".to_owned(),
            image_filename: "picture.png".to_owned(),
            cost_low: 150,
            cost_high: 450,
            pages: PageToggles::default(),
        }
    }

    fn page(h1: &str) -> PageData {
        PageData {
            h1: h1.to_owned(),
            subtitle: "Sub".to_owned(),
            pill: "Main service page".to_owned(),
            canonical_path: "/".to_owned(),
            description: "Description".to_owned(),
            nav: NavKey::Home,
            content_html: "<h2>Section</h2>\n<p>Hello world</p>\n".to_owned(),
            show_actions: true,
        }
    }

    #[test]
    fn render_page_contains_content() {
        let rendered = render_page(&page("My Page"), &profile());
        assert!(rendered.html.contains("<p>Hello world</p>"));
        assert!(rendered.html.contains("<title>My Page</title>"));
        assert!(rendered.html.contains("<h1>My Page</h1>"));
        assert!(rendered.html.contains("<link rel=\"canonical\" href=\"/\" />"));
        assert!(rendered.html.contains("src=\"/picture.png\""));
    }

    #[test]
    fn render_page_title_matches_clamped_h1() {
        let long = "Wasp Nest Removal and Wasp Control Services in a Very Long City Name, ST";
        let rendered = render_page(&page(long), &profile());
        assert_eq!(rendered.title.chars().count(), TITLE_MAX_CHARS);
        assert!(rendered.html.contains(&format!("<title>{}</title>", rendered.title)));
        assert!(rendered.html.contains(&format!("<h1>{}</h1>", rendered.title)));
    }

    #[test]
    fn render_page_has_single_h1() {
        let rendered = render_page(&page("Home"), &profile());
        assert_eq!(rendered.html.matches("<h1").count(), 1);
    }

    #[test]
    fn render_page_clamps_description() {
        let mut data = page("Home");
        data.description = "d".repeat(400);
        let rendered = render_page(&data, &profile());
        assert_eq!(rendered.description.chars().count(), DESCRIPTION_MAX_CHARS);
        assert!(rendered.html.contains(&format!(
            "<meta name=\"description\" content=\"{}\" />",
            rendered.description
        )));
    }

    #[test]
    fn render_page_escapes_profile_text() {
        let rendered = render_page(&page("<Home>"), &profile());
        assert!(rendered.html.contains("<h1>&lt;Home&gt;</h1>"));
        assert!(rendered.html.contains("<span>Wasp &amp; Co</span>"));
        assert!(rendered.html.contains("subject=Quote&amp;x=1"));
        assert!(!rendered.html.contains("Wasp & Co"));
    }

    #[test]
    fn render_page_marks_current_nav_item() {
        let rendered = render_page(&page("Home"), &profile());
        assert!(
            rendered
                .html
                .contains("<a href=\"/\" aria-current=\"page\">Home</a>")
        );
        assert!(!rendered.html.contains("/cost/"));
    }

    #[test]
    fn render_page_nav_lists_enabled_guides() {
        let mut p = profile();
        p.pages = PageToggles {
            cost: true,
            how_to: true,
        };
        let mut data = page("Cost");
        data.nav = NavKey::Cost;
        let rendered = render_page(&data, &p);
        assert!(rendered.html.contains("<a href=\"/\">Home</a>"));
        assert!(
            rendered
                .html
                .contains("<a href=\"/cost/\" aria-current=\"page\">Cost</a>")
        );
        assert!(rendered.html.contains("<a href=\"/how-to/\">How-To</a>"));
    }

    #[test]
    fn render_page_hides_actions() {
        let mut data = page("City");
        data.show_actions = false;
        let rendered = render_page(&data, &profile());
        assert!(!rendered.html.contains("<div class=\"hero-actions\">"));
        assert!(!rendered.html.contains("href=\"/#cities\""));
    }

    #[test]
    fn render_page_footer_has_no_h2() {
        let mut data = page("Home");
        data.content_html = String::new();
        let rendered = render_page(&data, &profile());
        assert!(!rendered.html.contains("<h2"));
        assert!(rendered.html.contains("© Wasp &amp; Co. All rights reserved."));
    }
}

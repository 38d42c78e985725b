//! Crawler-facing text files: `robots.txt` and `sitemap.xml`.

use std::fmt::Write;

use crate::util::escape_html;

/// Sitemap protocol namespace.
const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Sitemap filename at the site root.
pub const SITEMAP_FILENAME: &str = "sitemap.xml";

/// Robots directive filename at the site root.
pub const ROBOTS_FILENAME: &str = "robots.txt";

/// Public location of a site path.
///
/// Without a base URL the path is used as is. Otherwise the base URL's
/// trailing slashes are dropped and the path appended.
///
/// # Examples
///
/// ```
/// use citygen_renderer::seo::location;
///
/// assert_eq!(location(None, "/austin-tx/"), "/austin-tx/");
/// assert_eq!(location(Some("https://example.com/"), "/austin-tx/"), "https://example.com/austin-tx/");
/// ```
pub fn location(base_url: Option<&str>, path: &str) -> String {
    match base_url {
        Some(base) => format!("{}{path}", base.trim_end_matches('/')),
        None => path.to_owned(),
    }
}

/// `robots.txt` allowing every crawler and pointing at the sitemap.
pub fn robots_txt(sitemap_url: &str) -> String {
    format!("User-agent: *\nAllow: /\nSitemap: {sitemap_url}\n")
}

/// `sitemap.xml` with one `<url>` entry per location, in order.
pub fn sitemap_xml<S: AsRef<str>>(locations: &[S]) -> String {
    let mut xml = String::with_capacity(128 + locations.len() * 64);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(xml, "<urlset xmlns=\"{SITEMAP_NAMESPACE}\">");
    for loc in locations {
        let _ = writeln!(xml, "  <url><loc>{}</loc></url>", escape_html(loc.as_ref()));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_robots_txt() {
        assert_eq!(
            robots_txt("/sitemap.xml"),
            "User-agent: *\nAllow: /\nSitemap: /sitemap.xml\n"
        );
    }

    #[test]
    fn test_sitemap_xml() {
        let xml = sitemap_xml(&["/", "/austin-tx/"]);
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\
             \x20 <url><loc>/</loc></url>\n\
             \x20 <url><loc>/austin-tx/</loc></url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn test_sitemap_xml_empty() {
        let xml = sitemap_xml::<&str>(&[]);
        assert!(!xml.contains("<url>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_sitemap_xml_escapes_locations() {
        let xml = sitemap_xml(&["https://example.com/?a=1&b=2"]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_location_joins_base_url() {
        assert_eq!(location(Some("https://example.com"), "/"), "https://example.com/");
        assert_eq!(
            location(Some("https://example.com//"), "/cost/"),
            "https://example.com/cost/"
        );
    }
}

//! Fixed page copy: heading sets and the sections built from them.
//!
//! Each page type owns one ordered `<h2>` set. The home page and every city
//! page render [`SHARED_HEADINGS`]; the cost and how-to guides render their
//! own sets, which share no heading with each other or with the shared set.

use std::fmt::Write;

use crate::profile::{City, SiteProfile};
use crate::util::escape_html;

/// Secondary headings shared by the home page and every city page.
pub const SHARED_HEADINGS: [&str; 6] = [
    "Wasp Nest Removal",
    "Wasp Control",
    "Wasp Exterminator",
    "Paper Wasp Nest Removal",
    "Ground Wasp Nest Removal",
    "Wasp Removal",
];

/// Secondary headings of the cost guide.
pub const COST_HEADINGS: [&str; 4] = [
    "Wasp Nest Removal Cost",
    "What Changes the Price",
    "Exterminator Cost vs. DIY",
    "Getting an Accurate Quote",
];

/// Secondary headings of the how-to guide.
pub const HOW_TO_HEADINGS: [&str; 4] = [
    "How to Find a Wasp Nest",
    "How to Get Rid of a Wasp Nest Safely",
    "Spray Bottle and Dish Soap Methods",
    "When to Call a Professional",
];

const SHARED_COPY: [&[&str]; 6] = [
    &[
        "We remove a wasp nest by finding where the wasps enter, treating the nest, and taking it \
         down once activity drops. Steady traffic to one spot usually marks the main entrance.",
        "If the nest is high up or you can't confirm where it sits, leave it alone. Disturbing an \
         active nest is the fastest way to get stung.",
    ],
    &[
        "Wasp control keeps the problem from coming back once the nest is gone. That means checking \
         common rebuild spots and closing small gaps, sheltered ledges and other easy starts.",
    ],
    &[
        "A wasp exterminator is the right call when access is risky or the nest sits in a tight \
         void. If wasp stings are a real concern in your household, professional removal is the \
         safer route.",
    ],
    &[
        "Paper wasps build under eaves and overhangs where the nest stays dry. A nest can look small \
         from the ground, so judge it by traffic: heavy activity means a bigger colony than it seems.",
    ],
    &[
        "Ground nests hide behind a small hole and can spread well under the soil. Treating the wrong \
         spot leaves the area full of defensive wasps, so approach and timing matter most here.",
    ],
    &[
        "Wasp removal is the hands-on work: locate the nest, treat it, and confirm activity drops. \
         Spraying random surfaces does nothing if wasps keep returning to the same entrance.",
    ],
];

const COST_COPY: [&[&str]; 4] = [
    &[
        "Most removals are a single visit: inspect, treat the nest, and return or follow up if \
         activity continues. The range above covers the typical visible nest.",
    ],
    &[
        "Height, access and nest location drive the price. A nest under an eave is quick work; one \
         inside a wall void, attic or soffit takes longer and may need follow-up treatment.",
        "Established late-season colonies are larger and more defensive, which adds time.",
    ],
    &[
        "Store-bought spray costs less up front but only reaches nests you can safely get close to. \
         A missed or partial treatment often means paying twice.",
    ],
    &[
        "Photos of the nest, its height, and where the wasps enter let a technician quote accurately \
         before the visit.",
    ],
];

const HOW_TO_COPY: [&[&str]; 4] = [
    &[
        "Watch from a distance around mid-morning. Wasps fly in straight lines to and from the nest, \
         so follow the traffic to eaves, shrubs, gaps in siding or holes in the ground.",
    ],
    &[
        "Treat at dusk or after dark when the colony is inside and less active. Wear long sleeves, \
         gloves and eye protection, and keep a clear path to retreat.",
        "Never seal an entrance before the nest is dead; trapped wasps look for another way out, \
         sometimes indoors.",
    ],
    &[
        "A spray bottle of water with a generous squirt of dish soap can knock down a small exposed \
         nest. It does not reach nests inside walls or underground.",
    ],
    &[
        "Call for help if the nest is above ladder height, inside a structure, in the ground near \
         where people walk, or if anyone in the household reacts badly to stings.",
    ],
];

/// Write `<h2>` sections pairing each heading with its paragraphs.
///
/// `first_note` is appended, muted, to the first paragraph of the first section.
fn render_sections(
    out: &mut String,
    headings: &[&str],
    copy: &[&[&str]],
    first_note: Option<&str>,
) {
    for (index, (heading, paragraphs)) in headings.iter().zip(copy).enumerate() {
        let _ = writeln!(out, "<h2>{}</h2>", escape_html(heading));
        for (p_index, paragraph) in paragraphs.iter().enumerate() {
            out.push_str("<p>");
            out.push_str(&escape_html(paragraph));
            if index == 0
                && p_index == 0
                && let Some(note) = first_note
            {
                let _ = write!(out, " <span class=\"muted\">{}</span>", escape_html(note));
            }
            out.push_str("</p>\n");
        }
    }
}

/// Sections for the home page and city pages.
///
/// City pages pass a local note such as "Serving Austin, TX."
pub fn shared_sections(local_note: Option<&str>) -> String {
    let mut out = String::with_capacity(4096);
    render_sections(&mut out, &SHARED_HEADINGS, &SHARED_COPY, local_note);
    out
}

/// Sections for the cost guide.
pub fn cost_sections() -> String {
    let mut out = String::with_capacity(2048);
    render_sections(&mut out, &COST_HEADINGS, &COST_COPY, None);
    out
}

/// Sections for the how-to guide.
pub fn how_to_sections() -> String {
    let mut out = String::with_capacity(2048);
    render_sections(&mut out, &HOW_TO_HEADINGS, &HOW_TO_COPY, None);
    out
}

/// Price range callout.
///
/// City pages name the city; the cost guide passes `None`. When the cost guide
/// is published, city callouts link to it.
pub fn cost_callout(profile: &SiteProfile, city: Option<&City>) -> String {
    let label = match city {
        Some(city) => format!("Typical cost range in {}", city.label()),
        None => "Typical cost range".to_owned(),
    };

    let mut out = String::with_capacity(1024);
    out.push_str(
        "<div class=\"callout\" role=\"note\" aria-label=\"Typical cost range\">\n\
         <div class=\"callout-row\">\n",
    );
    let _ = writeln!(out, "<strong>{}</strong>", escape_html(&label));
    let _ = writeln!(
        out,
        "<div class=\"range\">{}</div>",
        escape_html(&profile.price_range())
    );
    out.push_str("</div>\n");
    out.push_str(
        "<p class=\"muted\">Pricing depends on access and nest location: eaves or inside a \
         structure, height, and how established the colony is. For an exact quote, use the \
         estimate button.",
    );
    if city.is_some() && profile.pages.cost {
        out.push_str(" <a href=\"/cost/\">See what changes the price</a>.");
    }
    out.push_str("</p>\n</div>\n");
    out
}

/// City grid linking every city page, anchored at `#cities`.
pub fn city_grid(cities: &[City]) -> String {
    let mut out = String::with_capacity(256 + cities.len() * 96);
    out.push_str("<hr />\n");
    out.push_str("<h3 id=\"cities\">Choose your city</h3>\n");
    out.push_str(
        "<p class=\"muted\">Each city page has the same guide with a local note and a quick \
         pricing callout.</p>\n",
    );
    out.push_str("<ul class=\"city-grid\">\n");
    for city in cities {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&city.path()),
            escape_html(&city.label()),
        );
    }
    out.push_str("</ul>\n");
    out
}

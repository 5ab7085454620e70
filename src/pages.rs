//! Server-rendered HTML pages.
//!
//! Templates are compiled into the binary and rendered with Tera; `.html`
//! templates are auto-escaped.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{Lawyer, LawyerSummary};

const LAYOUT: &str = include_str!("../templates/layout.html");
const LANDING: &str = include_str!("../templates/landing.html");
const LAWYER: &str = include_str!("../templates/lawyer.html");
const MESSAGE: &str = include_str!("../templates/message.html");

/// Placeholder shown for profiles without an image.
pub const DEFAULT_IMAGE: &str = "/default-lawyer-image.jpg";
/// URL prefix under which relative image names are served.
pub const IMAGE_PREFIX: &str = "/lawyer-images/";

/// Resolves a stored image reference to something an `<img>` can load.
pub fn image_src(imageurl: Option<&str>) -> String {
    match imageurl.map(str::trim) {
        None | Some("") => DEFAULT_IMAGE.to_string(),
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        Some(name) => format!("{}{}", IMAGE_PREFIX, name),
    }
}

/// Stored website as a link target. Only `http` and `https` URLs are linked.
pub fn website_href(website: Option<&str>) -> Option<String> {
    let url = website.map(str::trim)?;
    let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
    match scheme.as_deref() {
        Some("http") | Some("https") => Some(url.to_string()),
        _ => None,
    }
}

/// One result card on the landing page.
#[derive(Debug, Serialize)]
struct ResultCard<'a> {
    id: i64,
    name: &'a str,
    specialty: &'a str,
    location: &'a str,
    image_src: String,
}

impl<'a> From<&'a LawyerSummary> for ResultCard<'a> {
    fn from(s: &'a LawyerSummary) -> Self {
        ResultCard {
            id: s.id,
            name: &s.name,
            specialty: &s.specialty,
            location: &s.location,
            image_src: image_src(s.imageurl.as_deref()),
        }
    }
}

/// Landing page inputs.
pub struct LandingView<'a> {
    pub query: &'a str,
    pub location: &'a str,
    pub results: &'a [LawyerSummary],
    pub min_suggestion_chars: usize,
}

pub struct Pages {
    tera: tera::Tera,
}

impl Pages {
    pub fn new() -> Result<Self> {
        let mut tera = tera::Tera::default();
        tera.add_raw_templates(vec![
            ("layout.html", LAYOUT),
            ("landing.html", LANDING),
            ("lawyer.html", LAWYER),
            ("message.html", MESSAGE),
        ])
        .context("Failed to compile page templates")?;
        Ok(Self { tera })
    }

    pub fn render_landing(&self, view: &LandingView<'_>) -> Result<String, tera::Error> {
        let cards: Vec<ResultCard<'_>> = view.results.iter().map(ResultCard::from).collect();

        let mut ctx = tera::Context::new();
        ctx.insert("query", view.query);
        ctx.insert("location", view.location);
        ctx.insert("results", &cards);
        ctx.insert("min_chars", &view.min_suggestion_chars);
        self.tera.render("landing.html", &ctx)
    }

    pub fn render_lawyer(&self, lawyer: &Lawyer) -> Result<String, tera::Error> {
        let mut ctx = tera::Context::new();
        ctx.insert("lawyer", lawyer);
        ctx.insert("image_src", &image_src(lawyer.imageurl.as_deref()));
        ctx.insert("website_href", &website_href(lawyer.website.as_deref()));
        self.tera.render("lawyer.html", &ctx)
    }

    pub fn render_message(&self, title: &str, message: &str) -> Result<String, tera::Error> {
        let mut ctx = tera::Context::new();
        ctx.insert("title", title);
        ctx.insert("message", message);
        self.tera.render("message.html", &ctx)
    }
}

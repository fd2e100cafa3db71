//! Metadata Synthesizer: (route, language, override) -> document.
//!
//! A pure function of its inputs and the compiled defaults. Documents are
//! built fresh for every render; nothing is cached.

use crate::i18n::Language;
use crate::routes::Route;
use crate::seo::defaults::{
    defaults, DEFAULT_IMAGE, ROBOTS_INDEX, ROBOTS_NOINDEX, SITE_ORIGIN, TITLE_SEPARATOR,
};
use crate::seo::metadata::{
    AlternateLink, MetadataDocument, MetadataOverride, OpenGraph, TwitterCard,
};
use crate::seo::structured_data;
use tracing::debug;

const AUTHOR: &str = "Alex Morgan";
const X_DEFAULT: &str = "x-default";

pub fn synthesize(
    route: Route,
    language: Language,
    page: Option<&MetadataOverride>,
) -> MetadataDocument {
    let defaults = defaults(language);
    let empty = MetadataOverride::default();
    let page = page.unwrap_or(&empty);

    let title = match &page.title {
        Some(title) => format!("{}{}{}", title, TITLE_SEPARATOR, defaults.site_name),
        None => defaults.title.to_string(),
    };
    let description = page
        .description
        .clone()
        .unwrap_or_else(|| defaults.description.to_string());
    let keywords = page
        .keywords
        .clone()
        .unwrap_or_else(|| defaults.keywords.to_string());

    let canonical = page
        .canonical
        .clone()
        .unwrap_or_else(|| format!("{}{}", SITE_ORIGIN, route.path()));

    // Paths are shared by both languages, so every alternate is the canonical URL.
    let alternates = Language::ALL
        .into_iter()
        .map(|lang| lang.code())
        .chain(std::iter::once(X_DEFAULT))
        .map(|hreflang| AlternateLink {
            hreflang: hreflang.to_string(),
            href: canonical.clone(),
        })
        .collect();

    let image = absolutize(
        page.image
            .as_deref()
            .filter(|image| !image.trim().is_empty())
            .unwrap_or(DEFAULT_IMAGE),
    );

    let open_graph = OpenGraph {
        og_type: if page.is_article { "article" } else { "website" },
        title: title.clone(),
        description: description.clone(),
        url: canonical.clone(),
        image: image.clone(),
        site_name: defaults.site_name,
        locale: language.og_locale(),
        alternate_locales: Language::ALL
            .into_iter()
            .filter(|lang| *lang != language)
            .map(|lang| lang.og_locale())
            .collect(),
    };

    let twitter = TwitterCard {
        card: "summary_large_image",
        title: title.clone(),
        description: description.clone(),
        image,
    };

    let mut payloads = vec![structured_data::person(&description)];
    if route == Route::Projects {
        payloads.push(structured_data::portfolio(language));
    }

    debug!(
        route = route.path(),
        language = language.code(),
        payloads = payloads.len(),
        "Synthesized metadata"
    );

    MetadataDocument {
        html_lang: language.code(),
        title,
        description,
        keywords,
        author: AUTHOR,
        robots: if page.no_index {
            ROBOTS_NOINDEX
        } else {
            ROBOTS_INDEX
        },
        canonical,
        alternates,
        open_graph,
        twitter,
        structured_data: payloads,
    }
}

/// Make an image reference absolute against the site origin.
fn absolutize(image: &str) -> String {
    if image.starts_with("https://") || image.starts_with("http://") {
        image.to_string()
    } else if let Some(rest) = image.strip_prefix("//") {
        format!("https://{}", rest)
    } else if image.starts_with('/') {
        format!("{}{}", SITE_ORIGIN, image)
    } else {
        format!("{}/{}", SITE_ORIGIN, image)
    }
}

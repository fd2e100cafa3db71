//! schema.org JSON-LD payloads.

use crate::i18n::Language;
use crate::routes::Route;
use crate::seo::defaults::SITE_ORIGIN;
use serde_json::{json, Value};

const PERSON_NAME: &str = "Alex Morgan";
const PERSON_JOB_TITLE: &str = "Full-Stack Developer";
const PERSON_EMAIL: &str = "mailto:hello@alexmorgan.dev";
const PERSON_IMAGE: &str = "/images/alex-morgan.jpg";
const SAME_AS: &[&str] = &[
    "https://github.com/alexmorgan-dev",
    "https://www.linkedin.com/in/alexmorgan-dev",
];
const KNOWS_ABOUT: &[&str] = &[
    "TypeScript",
    "React",
    "Node.js",
    "PostgreSQL",
    "Rust",
    "Web accessibility",
];

/// Featured works listed in the portfolio payload: (name, path or URL).
const FEATURED_WORKS: &[(&str, &str)] = &[
    ("TaskFlow", "https://taskflow.alexmorgan.dev"),
    ("FitTrack", "https://github.com/alexmorgan-dev/fittrack"),
    ("devkit", "https://github.com/alexmorgan-dev/devkit"),
];

/// The site owner. Identity fields are fixed; only the description varies.
pub fn person(description: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PERSON_NAME,
        "jobTitle": PERSON_JOB_TITLE,
        "url": SITE_ORIGIN,
        "image": format!("{}{}", SITE_ORIGIN, PERSON_IMAGE),
        "email": PERSON_EMAIL,
        "sameAs": SAME_AS,
        "knowsAbout": KNOWS_ABOUT,
        "description": description,
    })
}

/// The portfolio as a creative work, emitted on the projects listing.
pub fn portfolio(language: Language) -> Value {
    let works: Vec<Value> = FEATURED_WORKS
        .iter()
        .map(|(name, url)| {
            json!({
                "@type": "CreativeWork",
                "name": name,
                "url": url,
                "author": { "@type": "Person", "name": PERSON_NAME },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "CreativeWork",
        "name": format!("{} Portfolio", PERSON_NAME),
        "url": format!("{}{}", SITE_ORIGIN, Route::Projects.path()),
        "inLanguage": language.code(),
        "author": { "@type": "Person", "name": PERSON_NAME, "url": SITE_ORIGIN },
        "hasPart": works,
    })
}

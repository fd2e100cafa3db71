//! Search and social metadata.
//!
//! - `defaults`: per-language default title/description/keywords and page titles
//! - `metadata`: the override input and the synthesized document
//! - `synthesizer`: builds a document from route, language and override
//! - `structured_data`: schema.org JSON-LD payloads
//! - `head`: renders a document as head markup

mod defaults;
mod head;
mod metadata;
mod structured_data;
mod synthesizer;

pub use defaults::{
    defaults, page_override, PageSeo, SeoDefaults, DEFAULT_IMAGE, ROBOTS_INDEX, ROBOTS_NOINDEX,
    SITE_ORIGIN, TITLE_SEPARATOR,
};
pub use head::{escape_html, render_head, script_json};
pub use metadata::{AlternateLink, MetadataDocument, MetadataOverride, OpenGraph, TwitterCard};
pub use synthesizer::synthesize;

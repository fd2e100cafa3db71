//! Renders a [`MetadataDocument`] as document-head markup.

use crate::seo::metadata::MetadataDocument;
use serde_json::Value;
use std::fmt::Write;

/// Escape text for use inside an HTML attribute or element.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

/// Serialize a JSON payload for an inline script block.
///
/// `</` is escaped so the payload can never close the surrounding script.
pub fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{}" content="{}">"#,
        name,
        escape_html(content)
    );
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}">"#,
        property,
        escape_html(content)
    );
}

/// One element per document field; one JSON-LD script per payload.
pub fn render_head(doc: &MetadataDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<title>{}</title>", escape_html(&doc.title));
    meta_name(&mut out, "description", &doc.description);
    meta_name(&mut out, "keywords", &doc.keywords);
    meta_name(&mut out, "author", doc.author);
    meta_name(&mut out, "robots", doc.robots);
    let _ = writeln!(
        out,
        r#"<link rel="canonical" href="{}">"#,
        escape_html(&doc.canonical)
    );

    for alternate in &doc.alternates {
        let _ = writeln!(
            out,
            r#"<link rel="alternate" hreflang="{}" href="{}">"#,
            escape_html(&alternate.hreflang),
            escape_html(&alternate.href)
        );
    }

    let og = &doc.open_graph;
    meta_property(&mut out, "og:type", og.og_type);
    meta_property(&mut out, "og:title", &og.title);
    meta_property(&mut out, "og:description", &og.description);
    meta_property(&mut out, "og:url", &og.url);
    meta_property(&mut out, "og:image", &og.image);
    meta_property(&mut out, "og:site_name", og.site_name);
    meta_property(&mut out, "og:locale", og.locale);
    for locale in &og.alternate_locales {
        meta_property(&mut out, "og:locale:alternate", locale);
    }

    let twitter = &doc.twitter;
    meta_name(&mut out, "twitter:card", twitter.card);
    meta_name(&mut out, "twitter:title", &twitter.title);
    meta_name(&mut out, "twitter:description", &twitter.description);
    meta_name(&mut out, "twitter:image", &twitter.image);

    for payload in &doc.structured_data {
        let _ = writeln!(
            out,
            r#"<script type="application/ld+json">{}</script>"#,
            script_json(payload)
        );
    }

    out
}

//! Bilingual portfolio site.
//!
//! The library holds the stateful core of the site: the selected language
//! and its persistence (`i18n`), the compiled content table and its resolver
//! (`content`), and per-route search metadata (`seo`). `server` hosts the
//! client-rendered shell over HTTP.

pub mod config;
pub mod content;
pub mod i18n;
pub mod routes;
pub mod seo;
pub mod server;

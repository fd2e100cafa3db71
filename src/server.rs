//! HTTP host for the client-rendered site.
//!
//! Each known route is served as the application shell: a head built by the
//! metadata synthesizer for the visitor's language, plus the resolved content
//! tree embedded as JSON for the front end to render. Page markup itself is
//! never rendered here.
//!
//! The language preference belongs to the visitor. It lives in a cookie and a
//! [`LanguageState`] is restored from it for every request, so one visitor's
//! choice never reaches another.

use crate::content::{resolve, ContentTree};
use crate::i18n::{Language, LanguageState, PreferenceStore, StoreError};
use crate::routes::{Route, RouteMatch};
use crate::seo::{page_override, render_head, synthesize};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::path::Path as FsPath;
use std::sync::{Arc, Mutex, PoisonError};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, warn};

/// Preference store backed by one request's cookies.
///
/// Clones share the jar, so a handler can hand one clone to
/// [`LanguageState::initialize`] and read the updated cookies back from
/// another to attach them to the response.
#[derive(Debug, Clone)]
pub struct CookieStore {
    jar: Arc<Mutex<CookieJar>>,
}

impl CookieStore {
    pub fn new(jar: CookieJar) -> Self {
        Self {
            jar: Arc::new(Mutex::new(jar)),
        }
    }

    /// Current cookies, including anything saved since construction.
    pub fn jar(&self) -> CookieJar {
        self.jar
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PreferenceStore for CookieStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let jar = self.jar.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(jar.get(key).map(|cookie| cookie.value().to_string()))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut jar = self.jar.lock().map_err(|_| StoreError::Poisoned)?;
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .permanent()
            .build();
        *jar = jar.clone().add(cookie);
        Ok(())
    }
}

/// Restore the visitor's language from their cookies.
fn visitor_language(jar: CookieJar) -> Language {
    LanguageState::initialize(CookieStore::new(jar)).current()
}

/// Build the router. Static files are served from `public_dir`.
pub fn router(public_dir: &FsPath) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/language/:code", post(set_language))
        .nest_service("/assets", ServeDir::new(public_dir.join("assets")))
        .nest_service("/images", ServeDir::new(public_dir.join("images")))
        .route_service("/og-image.png", ServeFile::new(public_dir.join("og-image.png")))
        .route_service("/favicon.ico", ServeFile::new(public_dir.join("favicon.ico")));

    for route in Route::ALL {
        router = router.route(route.path(), get(page));
    }

    router
        .fallback(redirect_unmatched)
        .layer(TraceLayer::new_for_http())
}

/// Data handed to the front end alongside the shell.
#[derive(Debug, Serialize)]
struct PagePayload<'a> {
    route: Route,
    language: Language,
    copyright: String,
    content: &'a ContentTree,
}

/// Render the full application shell for `route` in `language`.
pub fn render_page(route: Route, language: Language, year: i32) -> Result<String> {
    let page = page_override(route, language);
    let metadata = synthesize(route, language, page.as_ref());
    let content = resolve(language);

    let payload = PagePayload {
        route,
        language,
        copyright: content.footer.copyright_for(year),
        content,
    };
    let payload_json = serde_json::to_string(&payload)
        .context("Failed to serialize page payload")?
        .replace("</", "<\\/");

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
{head}</head>
<body>
<div id="root" data-route="{path}"></div>
<script id="page-data" type="application/json">{payload}</script>
<script type="module" src="/assets/app.js"></script>
</body>
</html>
"#,
        lang = metadata.html_lang,
        head = render_head(&metadata),
        path = route.path(),
        payload = payload_json,
    ))
}

async fn page(jar: CookieJar, uri: Uri) -> Result<Html<String>, AppError> {
    let route = Route::from_path(uri.path());
    let language = visitor_language(jar);
    debug!(route = route.path(), language = language.code(), "Serving page");

    Ok(Html(render_page(route, language, Utc::now().year())?))
}

async fn redirect_unmatched(uri: Uri) -> Redirect {
    match Route::resolve(uri.path()) {
        RouteMatch::Page(route) | RouteMatch::Alias(route) => Redirect::permanent(route.path()),
        RouteMatch::CatchAll => {
            debug!("Unknown path {}, redirecting home", uri.path());
            Redirect::temporary(Route::Home.path())
        }
    }
}

#[derive(Debug, Deserialize)]
struct LanguageQuery {
    next: Option<String>,
}

async fn set_language(
    jar: CookieJar,
    Path(code): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<(CookieJar, Redirect), AppError> {
    let language = Language::from_code(&code).map_err(AppError::bad_request)?;

    let store = CookieStore::new(jar);
    LanguageState::initialize(store.clone()).set_language(language)?;

    // Only known routes are valid targets
    let target = Route::from_path(query.next.as_deref().unwrap_or("/"));
    Ok((store.jar(), Redirect::to(target.path())))
}

async fn health(jar: CookieJar) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "language": visitor_language(jar).code(),
    }))
}

/// Handler error carrying the status to respond with.
pub struct AppError {
    status: StatusCode,
    error: anyhow::Error,
}

impl AppError {
    fn bad_request(error: impl Into<anyhow::Error>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
        }
    }
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    fn from(error: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("Request failed: {:#}", self.error);
        } else {
            warn!("Rejected request: {}", self.error);
        }
        (self.status, self.error.to_string()).into_response()
    }
}

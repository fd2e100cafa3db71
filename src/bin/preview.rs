//! Preview binary - prints the document head for one route and language
//!
//! Usage:
//!   cargo run --bin preview                       # Home page, primary language
//!   cargo run --bin preview -- /projects es       # Projects page in Spanish
//!   cargo run --bin preview -- /about en --json   # Metadata document as JSON
//!   cargo run --bin preview -- --check            # Validate content parity only
//!
//! The selected language is remembered in PREFERENCES_FILE, the way a browser
//! keeps it in local storage: passing a language selects and saves it, and
//! later runs without one reuse the saved choice. An unknown code is rejected
//! and leaves the saved choice untouched.

use anyhow::{bail, Result};
use portfolio_site::config::Config;
use portfolio_site::content::{ContentTable, ParityChecker};
use portfolio_site::i18n::{FileStore, Language, LanguageState};
use portfolio_site::routes::{Route, RouteMatch};
use portfolio_site::seo::{page_override, render_head, synthesize};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let check_only = args.iter().any(|a| a == "--check");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(String::as_str)
        .collect();

    check_parity()?;
    if check_only {
        return Ok(());
    }

    let config = Config::from_env()?;
    let state = LanguageState::initialize(FileStore::new(&config.preferences_file));
    if let Some(code) = positional.get(1) {
        match Language::from_code(code) {
            Ok(language) => state.set_language(language)?,
            Err(e) => warn!("{}, keeping {}", e, state.current()),
        }
    }
    let language = state.current();

    let path = positional.first().copied().unwrap_or("/");

    let route = match Route::resolve(path) {
        RouteMatch::Page(route) => route,
        other => {
            info!("{} redirects to {}", path, other.target().path());
            other.target()
        }
    };

    let page = page_override(route, language);
    let metadata = synthesize(route, language, page.as_ref());

    println!("\n{}", "=".repeat(60));
    println!(
        "ROUTE: {}   LANGUAGE: {} ({})",
        route.path(),
        language.native_name(),
        language.code()
    );
    println!("{}\n", "=".repeat(60));

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        print!("{}", render_head(&metadata));
    }

    println!("\n{}", "=".repeat(60));
    Ok(())
}

/// Fail on structural defects in the compiled content table.
fn check_parity() -> Result<()> {
    let report = ParityChecker::check(&ContentTable::compiled());

    for warning in &report.warnings {
        warn!("Content parity: {}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            eprintln!("✗ {}", error);
        }
        bail!("Content table has {} parity errors", report.errors.len());
    }

    info!("✓ Content table parity check passed");
    Ok(())
}

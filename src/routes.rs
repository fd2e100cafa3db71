//! The closed set of site routes.
//!
//! Paths are not localized: both languages share one route tree, so a
//! route's path is the same whichever language is selected.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Home,
    About,
    Experience,
    Projects,
    Contact,
}

/// Outcome of matching a raw request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMatch {
    /// A known page
    Page(Route),
    /// Legacy path kept alive as a permanent redirect
    Alias(Route),
    /// Anything else; sent home
    CatchAll,
}

impl RouteMatch {
    /// The route the visitor ends up on.
    pub fn target(self) -> Route {
        match self {
            RouteMatch::Page(route) | RouteMatch::Alias(route) => route,
            RouteMatch::CatchAll => Route::Home,
        }
    }
}

/// Legacy paths and the route they now live at.
const ALIASES: &[(&str, Route)] = &[("/home", Route::Home)];

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Experience,
        Route::Projects,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Experience => "/experience",
            Route::Projects => "/projects",
            Route::Contact => "/contact",
        }
    }

    /// Match a raw path. Query string and fragment are ignored, as is a
    /// single trailing slash.
    pub fn resolve(raw: &str) -> RouteMatch {
        let path = raw.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        if path.is_empty() {
            return RouteMatch::Page(Route::Home);
        }

        if let Some(route) = Self::ALL.into_iter().find(|route| route.path() == path) {
            return RouteMatch::Page(route);
        }

        match ALIASES.iter().find(|(alias, _)| *alias == path) {
            Some((_, route)) => RouteMatch::Alias(*route),
            None => RouteMatch::CatchAll,
        }
    }

    /// The route a raw path ends up on after redirects.
    pub fn from_path(raw: &str) -> Route {
        Self::resolve(raw).target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_paths_resolve_to_pages() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), RouteMatch::Page(route));
        }
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(Route::resolve("/about/"), RouteMatch::Page(Route::About));
    }

    #[test]
    fn test_query_and_fragment_are_ignored() {
        assert_eq!(
            Route::resolve("/projects?filter=web"),
            RouteMatch::Page(Route::Projects)
        );
        assert_eq!(
            Route::resolve("/contact#form"),
            RouteMatch::Page(Route::Contact)
        );
        assert_eq!(Route::resolve("?lang=es"), RouteMatch::Page(Route::Home));
    }

    #[test]
    fn test_legacy_home_alias() {
        assert_eq!(Route::resolve("/home"), RouteMatch::Alias(Route::Home));
        assert_eq!(Route::from_path("/home"), Route::Home);
    }

    #[test]
    fn test_unknown_paths_fall_back_home() {
        for path in ["/blog", "/about/team", "/PROJECTS", "//", "/contact/"] {
            let expected = if path == "/contact/" {
                Route::Contact
            } else {
                Route::Home
            };
            assert_eq!(Route::from_path(path), expected, "path {:?}", path);
        }
        assert_eq!(Route::resolve("/blog"), RouteMatch::CatchAll);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Route::Experience).unwrap(),
            "\"experience\""
        );
    }

    proptest! {
        #[test]
        fn prop_from_path_always_yields_known_route(path in ".*") {
            let route = Route::from_path(&path);
            prop_assert!(Route::ALL.contains(&route));
        }

        #[test]
        fn prop_query_suffix_does_not_change_match(query in "[a-z=&]{0,20}") {
            for route in Route::ALL {
                let raw = format!("{}?{}", route.path(), query);
                prop_assert_eq!(Route::resolve(&raw), RouteMatch::Page(route));
            }
        }
    }
}

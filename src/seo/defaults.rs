//! Language-scoped metadata defaults and per-page titles.

use crate::i18n::Language;
use crate::routes::Route;
use crate::seo::metadata::MetadataOverride;

/// Origin every canonical and absolute URL is built on.
pub const SITE_ORIGIN: &str = "https://alexmorgan.dev";

/// Joins a page title and the site name.
pub const TITLE_SEPARATOR: &str = " | ";

/// Social preview image used when a page supplies none.
pub const DEFAULT_IMAGE: &str = "/og-image.png";

pub const ROBOTS_INDEX: &str = "index, follow";
pub const ROBOTS_NOINDEX: &str = "noindex, nofollow";

#[derive(Debug, Clone)]
pub struct PageSeo {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct SeoDefaults {
    pub site_name: &'static str,
    /// Complete title, used as-is when a page sets none
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static str,
    pub about: PageSeo,
    pub experience: PageSeo,
    pub projects: PageSeo,
    pub contact: PageSeo,
}

pub static ENGLISH_DEFAULTS: SeoDefaults = SeoDefaults {
    site_name: "Alex Morgan",
    title: "Alex Morgan | Full-Stack Developer",
    description: "Portfolio of Alex Morgan, a full-stack developer building fast, accessible \
                  web applications with React, TypeScript, Node.js and Rust.",
    keywords: "Alex Morgan, full-stack developer, web developer, React, TypeScript, Node.js, \
               Rust, portfolio",
    about: PageSeo {
        title: "About Me",
        description: "From warehouse operations to software engineering: the story and \
                      working principles of Alex Morgan.",
    },
    experience: PageSeo {
        title: "Experience",
        description: "Professional experience of Alex Morgan across healthcare, product \
                      studios and bootcamp training.",
    },
    projects: PageSeo {
        title: "Projects",
        description: "Web, mobile, backend and tooling projects built by Alex Morgan.",
    },
    contact: PageSeo {
        title: "Contact",
        description: "Get in touch with Alex Morgan for full-time roles or freelance projects.",
    },
};

pub static SPANISH_DEFAULTS: SeoDefaults = SeoDefaults {
    site_name: "Alex Morgan",
    title: "Alex Morgan | Desarrollador Full-Stack",
    description: "Portfolio de Alex Morgan, desarrollador full-stack que crea aplicaciones web \
                  rápidas y accesibles con React, TypeScript, Node.js y Rust.",
    keywords: "Alex Morgan, desarrollador full-stack, desarrollador web, React, TypeScript, \
               Node.js, Rust, portfolio",
    about: PageSeo {
        title: "Sobre mí",
        description: "De las operaciones de almacén a la ingeniería de software: la historia \
                      y forma de trabajar de Alex Morgan.",
    },
    experience: PageSeo {
        title: "Experiencia",
        description: "Experiencia profesional de Alex Morgan en sanidad, estudios de producto \
                      y formación en bootcamp.",
    },
    projects: PageSeo {
        title: "Proyectos",
        description: "Proyectos web, móviles, backend y herramientas creados por Alex Morgan.",
    },
    contact: PageSeo {
        title: "Contacto",
        description: "Contacta con Alex Morgan para puestos a tiempo completo o proyectos \
                      freelance.",
    },
};

pub fn defaults(language: Language) -> &'static SeoDefaults {
    match language {
        Language::English => &ENGLISH_DEFAULTS,
        Language::Spanish => &SPANISH_DEFAULTS,
    }
}

/// The override each page supplies; the home page uses the defaults.
pub fn page_override(route: Route, language: Language) -> Option<MetadataOverride> {
    let defaults = defaults(language);
    let page = match route {
        Route::Home => return None,
        Route::About => &defaults.about,
        Route::Experience => &defaults.experience,
        Route::Projects => &defaults.projects,
        Route::Contact => &defaults.contact,
    };

    Some(
        MetadataOverride::new()
            .title(page.title)
            .description(page.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_per_language() {
        assert!(defaults(Language::English).title.contains("Developer"));
        assert!(defaults(Language::Spanish).title.contains("Desarrollador"));
    }

    #[test]
    fn test_default_title_is_self_contained() {
        for language in Language::ALL {
            let d = defaults(language);
            assert!(d.title.starts_with(d.site_name));
            assert!(d.title.contains(TITLE_SEPARATOR));
        }
    }

    #[test]
    fn test_home_has_no_page_override() {
        for language in Language::ALL {
            assert!(page_override(Route::Home, language).is_none());
        }
    }

    #[test]
    fn test_page_override_uses_localized_title() {
        let about = page_override(Route::About, Language::Spanish).unwrap();
        assert_eq!(about.title.as_deref(), Some("Sobre mí"));
        assert!(about.keywords.is_none());
    }

    #[test]
    fn test_every_other_route_has_page_override() {
        for route in Route::ALL.into_iter().filter(|r| *r != Route::Home) {
            for language in Language::ALL {
                let page = page_override(route, language).unwrap();
                assert!(page.title.is_some());
                assert!(page.description.is_some());
            }
        }
    }

    #[test]
    fn test_origin_has_no_trailing_slash() {
        assert!(!SITE_ORIGIN.ends_with('/'));
    }
}

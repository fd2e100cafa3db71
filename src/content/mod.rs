//! Localized site content.
//!
//! - `model`: fixed shape of a content tree (sections, entries, semantic keys)
//! - `table`: the compiled-in English and Spanish trees
//! - `resolver`: language -> tree projection
//! - `parity`: structural parity checks across languages

mod model;
mod parity;
mod resolver;
mod table;

pub use model::{
    About, ApproachItem, ApproachKey, Contact, ContactForm, ContentTree, ExperienceEntry,
    ExperienceSection, FilterLabels, Footer, Hero, IconKey, Navigation, ProjectCategory,
    ProjectEntry, ProjectFilter, ProjectsSection, StoryItem, StoryKey,
};
pub use parity::{ParityChecker, ParityReport};
pub use resolver::{resolve, ContentTable};

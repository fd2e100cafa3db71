//! Shape of the localized content tree.
//!
//! Every language fills in the same structs, so section parity is enforced
//! by the type system. Ordered collections and semantic keys are checked by
//! [`crate::content::ParityChecker`].

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Symbolic icon identifier, resolved to an actual glyph by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKey {
    Briefcase,
    Code,
    Compass,
    GraduationCap,
    Heart,
    Layers,
    Lightbulb,
    Rocket,
    Server,
    Smartphone,
    Users,
    Wrench,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentTree {
    pub navigation: Navigation,
    pub hero: Hero,
    pub about: About,
    pub experience: ExperienceSection,
    pub projects: ProjectsSection,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub home: &'static str,
    pub about: &'static str,
    pub experience: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
    /// Label of the button that switches to the other language
    pub language_toggle: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub greeting: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

// ==================== About ====================

/// Language-invariant key of a story item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoryKey {
    Origins,
    Bootcamp,
    FirstRole,
    Today,
}

/// Language-invariant key of an approach item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApproachKey {
    UserFocus,
    CleanCode,
    Collaboration,
    Learning,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryItem {
    pub key: StoryKey,
    pub title: &'static str,
    pub body: &'static str,
    pub icon: IconKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApproachItem {
    pub key: ApproachKey,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct About {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub story_title: &'static str,
    pub story: &'static [StoryItem],
    pub approach_title: &'static str,
    pub approach: &'static [ApproachItem],
}

impl About {
    pub fn story_item(&self, key: StoryKey) -> Option<&StoryItem> {
        self.story.iter().find(|item| item.key == key)
    }

    pub fn approach_item(&self, key: ApproachKey) -> Option<&ApproachItem> {
        self.approach.iter().find(|item| item.key == key)
    }
}

// ==================== Experience ====================

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceEntry {
    /// Unique within the section, identical across languages
    pub id: &'static str,
    pub organization: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub duration: &'static str,
    pub location: &'static str,
    /// Classification tag, e.g. "Full-time"
    pub tag: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub icon: IconKey,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights_label: &'static str,
    pub technologies_label: &'static str,
    pub entries: &'static [ExperienceEntry],
}

impl ExperienceSection {
    pub fn entry(&self, id: &str) -> Option<&ExperienceEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }
}

// ==================== Projects ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Backend,
    Tooling,
}

/// Filter applied on the projects page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 5] = [
        ProjectFilter::All,
        ProjectFilter::Category(ProjectCategory::Web),
        ProjectFilter::Category(ProjectCategory::Mobile),
        ProjectFilter::Category(ProjectCategory::Backend),
        ProjectFilter::Category(ProjectCategory::Tooling),
    ];

    pub fn matches(self, project: &ProjectEntry) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == category,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectEntry {
    /// Unique within the section, identical across languages
    pub id: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
    pub category: ProjectCategory,
    /// Free text, conventionally one of a few recurring labels
    pub status: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub source_url: Option<&'static str>,
    pub image: Option<&'static str>,
    /// Hides the demo link and marks the card as restricted
    pub confidential: bool,
}

impl ProjectEntry {
    /// Demo link to show, never present for confidential work.
    pub fn demo_link(&self) -> Option<&'static str> {
        if self.confidential {
            None
        } else {
            self.demo_url
        }
    }
}

// Hand-written so the demo URL of confidential work never leaves the server.
impl Serialize for ProjectEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProjectEntry", 12)?;
        state.serialize_field("id", self.id)?;
        state.serialize_field("title", self.title)?;
        state.serialize_field("short_description", self.short_description)?;
        state.serialize_field("long_description", self.long_description)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("status", self.status)?;
        state.serialize_field("technologies", self.technologies)?;
        state.serialize_field("features", self.features)?;
        state.serialize_field("demo_url", &self.demo_link())?;
        state.serialize_field("source_url", &self.source_url)?;
        state.serialize_field("image", &self.image)?;
        state.serialize_field("confidential", &self.confidential)?;
        state.end()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FilterLabels {
    pub all: &'static str,
    pub web: &'static str,
    pub mobile: &'static str,
    pub backend: &'static str,
    pub tooling: &'static str,
}

impl FilterLabels {
    pub fn label(&self, filter: ProjectFilter) -> &'static str {
        match filter {
            ProjectFilter::All => self.all,
            ProjectFilter::Category(ProjectCategory::Web) => self.web,
            ProjectFilter::Category(ProjectCategory::Mobile) => self.mobile,
            ProjectFilter::Category(ProjectCategory::Backend) => self.backend,
            ProjectFilter::Category(ProjectCategory::Tooling) => self.tooling,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub filters: FilterLabels,
    pub demo_label: &'static str,
    pub source_label: &'static str,
    pub features_label: &'static str,
    pub confidential_notice: &'static str,
    pub entries: &'static [ProjectEntry],
}

impl ProjectsSection {
    pub fn entry(&self, id: &str) -> Option<&ProjectEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Projects matching `filter`, in table order.
    pub fn filtered(&self, filter: ProjectFilter) -> impl Iterator<Item = &ProjectEntry> + '_ {
        self.entries.iter().filter(move |entry| filter.matches(entry))
    }
}

// ==================== Contact / Footer ====================

#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub subject_label: &'static str,
    pub message_label: &'static str,
    pub submit_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub form: ContactForm,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub tagline: &'static str,
    /// Placeholders: {year}
    pub copyright: &'static str,
    pub built_with: &'static str,
}

impl Footer {
    pub fn copyright_for(&self, year: i32) -> String {
        self.copyright.replace("{year}", &year.to_string())
    }
}

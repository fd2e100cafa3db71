//! Structural parity validation for the content table.
//!
//! Every language must publish the same shape: identical key sets, the same
//! number of items in every list, experience and project ids in the same
//! order, and untranslatable values (ids, icons, URLs, placeholders) left
//! untouched.

use crate::content::model::ContentTree;
use crate::content::resolver::ContentTable;
use crate::i18n::Language;
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Result of a parity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    /// Structural defects; the table must not ship with any
    pub errors: Vec<String>,

    /// Suspicious differences worth a look
    pub warnings: Vec<String>,
}

impl ParityReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ParityReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Fields whose values are identifiers or links, never translated.
const INVARIANT_FIELDS: &[&str] = &[
    "id",
    "key",
    "icon",
    "category",
    "confidential",
    "demo_url",
    "source_url",
    "image",
    "email",
];

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

pub struct ParityChecker;

impl ParityChecker {
    /// Compare every language in `table` against the primary language.
    pub fn check(table: &ContentTable<'_>) -> ParityReport {
        let mut report = ParityReport::new();

        for language in Language::ALL {
            if table.get(language).is_none() {
                report
                    .errors
                    .push(format!("Missing content tree for '{}'", language.code()));
            }
        }

        let primary = Language::primary();
        let Some(baseline) = table.get(primary) else {
            return report;
        };
        Self::check_unique_ids(primary, baseline, &mut report);

        let baseline_json = match serde_json::to_value(baseline) {
            Ok(value) => value,
            Err(e) => {
                report
                    .errors
                    .push(format!("Failed to serialize '{}' content: {}", primary.code(), e));
                return report;
            }
        };

        for language in table.languages().filter(|lang| *lang != primary) {
            let Some(tree) = table.get(language) else {
                continue;
            };

            Self::check_unique_ids(language, tree, &mut report);
            Self::check_order(language, baseline, tree, &mut report);

            match serde_json::to_value(tree) {
                Ok(json) => {
                    Self::compare_values(language, "$", None, &baseline_json, &json, &mut report)
                }
                Err(e) => report
                    .errors
                    .push(format!("Failed to serialize '{}' content: {}", language.code(), e)),
            }
        }

        report
    }

    /// Ids and semantic keys must be unique within their list.
    fn check_unique_ids(language: Language, tree: &ContentTree, report: &mut ParityReport) {
        let lists: [(&str, Vec<String>); 4] = [
            ("experience", tree.experience.entries.iter().map(|e| e.id.to_string()).collect()),
            ("projects", tree.projects.entries.iter().map(|p| p.id.to_string()).collect()),
            ("story", tree.about.story.iter().map(|s| format!("{:?}", s.key)).collect()),
            ("approach", tree.about.approach.iter().map(|a| format!("{:?}", a.key)).collect()),
        ];

        for (section, ids) in lists {
            let mut seen = HashSet::new();
            for id in &ids {
                if !seen.insert(id) {
                    report.errors.push(format!(
                        "'{}': duplicate {} id {}",
                        language.code(),
                        section,
                        id
                    ));
                }
            }
        }
    }

    /// Ordered collections must list the same ids in the same order.
    fn check_order(
        language: Language,
        baseline: &ContentTree,
        tree: &ContentTree,
        report: &mut ParityReport,
    ) {
        let pairs: [(&str, Vec<String>, Vec<String>); 4] = [
            (
                "experience",
                baseline.experience.entries.iter().map(|e| e.id.to_string()).collect(),
                tree.experience.entries.iter().map(|e| e.id.to_string()).collect(),
            ),
            (
                "projects",
                baseline.projects.entries.iter().map(|p| p.id.to_string()).collect(),
                tree.projects.entries.iter().map(|p| p.id.to_string()).collect(),
            ),
            (
                "story",
                baseline.about.story.iter().map(|s| format!("{:?}", s.key)).collect(),
                tree.about.story.iter().map(|s| format!("{:?}", s.key)).collect(),
            ),
            (
                "approach",
                baseline.about.approach.iter().map(|a| format!("{:?}", a.key)).collect(),
                tree.about.approach.iter().map(|a| format!("{:?}", a.key)).collect(),
            ),
        ];

        for (section, expected, found) in pairs {
            if expected != found {
                report.errors.push(format!(
                    "'{}': {} order mismatch: expected {:?}, found {:?}",
                    language.code(),
                    section,
                    expected,
                    found
                ));
            }
        }
    }

    fn compare_values(
        language: Language,
        path: &str,
        field: Option<&str>,
        baseline: &Value,
        other: &Value,
        report: &mut ParityReport,
    ) {
        let code = language.code();

        if field.is_some_and(|f| INVARIANT_FIELDS.contains(&f)) && baseline != other {
            report.errors.push(format!(
                "'{}': {} must not be translated (expected {}, found {})",
                code, path, baseline, other
            ));
            return;
        }

        match (baseline, other) {
            (Value::Object(expected), Value::Object(found)) => {
                for key in expected.keys().filter(|k| !found.contains_key(*k)) {
                    report
                        .errors
                        .push(format!("'{}': missing key {}.{}", code, path, key));
                }
                for key in found.keys().filter(|k| !expected.contains_key(*k)) {
                    report
                        .errors
                        .push(format!("'{}': unexpected key {}.{}", code, path, key));
                }
                for (key, value) in expected {
                    if let Some(other_value) = found.get(key) {
                        let child = format!("{}.{}", path, key);
                        Self::compare_values(
                            language,
                            &child,
                            Some(key.as_str()),
                            value,
                            other_value,
                            report,
                        );
                    }
                }
            }
            (Value::Array(expected), Value::Array(found)) => {
                if expected.len() != found.len() {
                    report.errors.push(format!(
                        "'{}': {} has {} items, expected {}",
                        code,
                        path,
                        found.len(),
                        expected.len()
                    ));
                }
                for (index, (value, other_value)) in expected.iter().zip(found).enumerate() {
                    let child = format!("{}[{}]", path, index);
                    Self::compare_values(language, &child, field, value, other_value, report);
                }
            }
            (Value::String(expected), Value::String(found)) => {
                Self::compare_text(language, path, expected, found, report);
            }
            (Value::Null, Value::Null) | (Value::Bool(_), Value::Bool(_)) => {}
            (Value::Number(_), Value::Number(_)) => {}
            _ => report.errors.push(format!(
                "'{}': type mismatch at {} (expected {}, found {})",
                code, path, baseline, other
            )),
        }
    }

    /// Placeholders must survive translation; URLs and emptiness are warnings.
    fn compare_text(
        language: Language,
        path: &str,
        expected: &str,
        found: &str,
        report: &mut ParityReport,
    ) {
        let code = language.code();

        if !expected.is_empty() && found.trim().is_empty() {
            report
                .warnings
                .push(format!("'{}': {} is empty", code, path));
            return;
        }

        let expected_placeholders = Self::extract_placeholders(expected);
        let found_placeholders = Self::extract_placeholders(found);
        if expected_placeholders != found_placeholders {
            report.errors.push(format!(
                "'{}': placeholder mismatch at {}: expected {:?}, found {:?}",
                code, path, expected_placeholders, found_placeholders
            ));
        }

        let expected_urls = Self::extract_urls(expected);
        let found_urls = Self::extract_urls(found);
        if expected_urls != found_urls {
            report.warnings.push(format!(
                "'{}': URL mismatch at {}: expected {} URLs, found {}",
                code,
                path,
                expected_urls.len(),
                found_urls.len()
            ));
        }
    }

    /// Extract all {placeholders} from text, sorted
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{[a-z_]+\}").unwrap());

        let mut found: Vec<String> = regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        found.sort();
        found
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{ExperienceEntry, Footer, IconKey, StoryItem, StoryKey};
    use crate::content::resolver::resolve;

    fn spanish_with(modify: impl FnOnce(&mut ContentTree)) -> ContentTree {
        let mut tree = resolve(Language::Spanish).clone();
        modify(&mut tree);
        tree
    }

    fn check_against_english(spanish: &ContentTree) -> ParityReport {
        let table = ContentTable::new(vec![
            (Language::English, resolve(Language::English)),
            (Language::Spanish, spanish),
        ]);
        ParityChecker::check(&table)
    }

    // ==================== Compiled Table Tests ====================

    #[test]
    fn test_compiled_table_is_clean() {
        let report = ParityChecker::check(&ContentTable::compiled());
        assert!(report.is_clean(), "parity report: {:?}", report);
    }

    // ==================== Structural Defect Tests ====================

    #[test]
    fn test_missing_language_is_error() {
        let table = ContentTable::new(vec![(Language::English, resolve(Language::English))]);
        let report = ParityChecker::check(&table);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("'es'"));
    }

    #[test]
    fn test_shorter_experience_list_is_error() {
        static SHORT: &[ExperienceEntry] = &[];
        let tree = spanish_with(|t| t.experience.entries = SHORT);

        let report = check_against_english(&tree);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("experience order mismatch")));
        assert!(report.errors.iter().any(|e| e.contains("$.experience.entries has 0 items")));
    }

    #[test]
    fn test_reordered_projects_is_error() {
        let english = resolve(Language::English);
        let mut reordered: Vec<_> = resolve(Language::Spanish).projects.entries.to_vec();
        reordered.reverse();
        let leaked: &'static [_] = Box::leak(reordered.into_boxed_slice());
        let tree = spanish_with(|t| t.projects.entries = leaked);

        let report = check_against_english(&tree);
        assert!(report.errors.iter().any(|e| e.contains("projects order mismatch")));
        assert_eq!(english.projects.entries.len(), tree.projects.entries.len());
    }

    #[test]
    fn test_translated_identifier_is_error() {
        static STORY: &[StoryItem] = &[
            StoryItem {
                key: StoryKey::Origins,
                title: "Los inicios",
                body: "Texto",
                icon: IconKey::Rocket,
            },
            StoryItem {
                key: StoryKey::Bootcamp,
                title: "El bootcamp",
                body: "Texto",
                icon: IconKey::GraduationCap,
            },
            StoryItem {
                key: StoryKey::FirstRole,
                title: "Primer empleo",
                body: "Texto",
                icon: IconKey::Rocket,
            },
            StoryItem {
                key: StoryKey::Today,
                title: "Hoy",
                body: "Texto",
                icon: IconKey::Heart,
            },
        ];
        let tree = spanish_with(|t| t.about.story = STORY);

        let report = check_against_english(&tree);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("$.about.story[0].icon must not be translated")));
    }

    #[test]
    fn test_lost_placeholder_is_error() {
        let tree = spanish_with(|t| {
            t.footer = Footer {
                copyright: "© Alex Morgan",
                ..t.footer.clone()
            }
        });

        let report = check_against_english(&tree);
        assert!(report.errors.iter().any(|e| e.contains("placeholder mismatch")));
    }

    #[test]
    fn test_empty_translation_is_warning() {
        let tree = spanish_with(|t| t.hero.tagline = "");

        let report = check_against_english(&tree);
        assert!(!report.has_errors());
        assert!(report.warnings.iter().any(|w| w.contains("$.hero.tagline is empty")));
    }

    #[test]
    fn test_duplicate_ids_are_errors() {
        let mut entries: Vec<_> = resolve(Language::Spanish).experience.entries.to_vec();
        entries[1].id = entries[0].id;
        let leaked: &'static [_] = Box::leak(entries.into_boxed_slice());
        let tree = spanish_with(|t| t.experience.entries = leaked);

        let report = check_against_english(&tree);
        assert!(report.errors.iter().any(|e| e.contains("duplicate experience id")));
    }

    // ==================== Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_sorted() {
        let found = ParityChecker::extract_placeholders("{year} and {name} {year}");
        assert_eq!(found, vec!["{name}", "{year}", "{year}"]);
    }

    #[test]
    fn test_extract_urls() {
        let found = ParityChecker::extract_urls("See https://alexmorgan.dev (or http://x.y)");
        assert_eq!(found, vec!["https://alexmorgan.dev", "http://x.y"]);
    }

    #[test]
    fn test_report_default_is_clean() {
        assert!(ParityReport::default().is_clean());
    }
}

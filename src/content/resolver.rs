//! Content Resolver: projects the content table onto one language.

use crate::content::model::ContentTree;
use crate::content::table::{ENGLISH_CONTENT, SPANISH_CONTENT};
use crate::i18n::Language;

/// Language-keyed set of content trees.
///
/// The compiled table covers every language; tables built with [`ContentTable::new`]
/// may be incomplete and are meant for validation.
#[derive(Debug, Clone)]
pub struct ContentTable<'a> {
    trees: Vec<(Language, &'a ContentTree)>,
}

impl ContentTable<'static> {
    /// The table compiled into the binary.
    pub fn compiled() -> Self {
        Self {
            trees: Language::ALL
                .into_iter()
                .map(|language| (language, resolve(language)))
                .collect(),
        }
    }
}

impl<'a> ContentTable<'a> {
    pub fn new(trees: Vec<(Language, &'a ContentTree)>) -> Self {
        Self { trees }
    }

    /// The tree for `language`, `None` if the table lacks it.
    pub fn get(&self, language: Language) -> Option<&'a ContentTree> {
        self.trees
            .iter()
            .find(|(lang, _)| *lang == language)
            .map(|(_, tree)| *tree)
    }

    /// Languages present in the table, in insertion order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.trees.iter().map(|(lang, _)| *lang)
    }
}

/// The compiled content tree for `language`.
pub fn resolve(language: Language) -> &'static ContentTree {
    match language {
        Language::English => &ENGLISH_CONTENT,
        Language::Spanish => &SPANISH_CONTENT,
    }
}

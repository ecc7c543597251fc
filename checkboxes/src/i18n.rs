//! Label translation.

use std::collections::HashMap;

use log::debug;

use crate::field::Options;

/// Language used when the active language has no entry for a key.
pub const FALLBACK_LANGUAGE: &str = "en";

/// Maps a label key to display text. Must not fail.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Translate for Identity {
    fn translate(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Per-language string tables.
///
/// Lookup order is the active language, then [`FALLBACK_LANGUAGE`], then the
/// key itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(FALLBACK_LANGUAGE)
    }
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            tables: HashMap::new(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// Add or replace one entry.
    pub fn insert(
        &mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) {
        self.tables
            .entry(language.into())
            .or_default()
            .insert(key.into(), text.into());
    }

    /// Add a builder-style entry.
    pub fn with(
        mut self,
        language: impl Into<String>,
        key: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(language, key, text);
        self
    }

    /// Collect localized choice labels from field options.
    ///
    /// Each `choice_labels[<lang>]` row is zipped against the default
    /// `choice_labels` row (or `choices` when there is none): the default
    /// label is the key, the localized label the text. Rows shorter than the
    /// default are fine; the missing entries fall back as usual.
    pub fn from_choice_labels(language: impl Into<String>, options: &Options) -> Self {
        let mut catalog = Self::new(language);
        let Some(keys) = options
            .get_list("choice_labels")
            .or_else(|| options.get_list("choices"))
        else {
            return catalog;
        };

        for (option, value) in options.iter() {
            let Some(lang) = option
                .strip_prefix("choice_labels[")
                .and_then(|rest| rest.strip_suffix(']'))
            else {
                continue;
            };
            let texts = crate::codec::split_tokens(value);
            debug!("loaded {} choice label(s) for language {lang}", texts.len());
            for (key, text) in keys.iter().zip(texts) {
                catalog.insert(lang, key.clone(), text);
            }
        }
        catalog
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}

impl Translate for Catalog {
    fn translate(&self, key: &str) -> String {
        self.lookup(&self.language, key)
            .or_else(|| self.lookup(FALLBACK_LANGUAGE, key))
            .unwrap_or(key)
            .to_string()
    }
}

//! Field descriptors for checkbox fields.
//!
//! A field is configured with a block of `key = value` options, the same way
//! content models declare their fields:
//!
//! ```text
//! [fields.tags]
//! type = checkboxes
//! label = Tags
//! choices = news, blog, release
//! choice_labels = News, Blog, Release
//! choice_labels[de] = Neuigkeiten, Blog, Veröffentlichung
//! default = news
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec;
use crate::selection::Selection;

/// Value of the `type` option this descriptor accepts.
pub const FIELD_TYPE: &str = "checkboxes";

/// Errors raised while building a [`FieldType`] from options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldTypeError {
    #[error("field {field}: unsupported type {found:?}, expected \"checkboxes\"")]
    UnsupportedType { field: String, found: String },
    #[error("field {field}: no choices configured")]
    MissingChoices { field: String },
    #[error("field {field}: {labels} choice label(s) for {choices} choice(s)")]
    LabelCountMismatch {
        field: String,
        choices: usize,
        labels: usize,
    },
    #[error("line {line}: expected `key = value`")]
    Syntax { line: usize },
    #[error("line {line}: a field file holds a single `[section]`")]
    MultipleSections { line: usize },
}

/// Ordered `key = value` options for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    entries: Vec<(String, String)>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an option block.
    ///
    /// Blank lines and `#`/`;` comments are skipped. One `[section]` header
    /// is allowed and ignored; a second one is an error. Later keys replace
    /// earlier ones.
    pub fn parse(text: &str) -> Result<Self, FieldTypeError> {
        let mut options = Self::new();
        let mut seen_section = false;
        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                if seen_section {
                    return Err(FieldTypeError::MultipleSections { line: index + 1 });
                }
                seen_section = true;
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(FieldTypeError::Syntax { line: index + 1 });
            };
            options.set(key.trim(), value.trim());
        }
        Ok(options)
    }

    /// Set or replace an option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A comma separated option as trimmed tokens. `None` when missing or blank.
    pub fn get_list(&self, key: &str) -> Option<Vec<String>> {
        let value = self.get(key)?;
        if value.trim().is_empty() {
            return None;
        }
        Some(codec::split_tokens(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Identifier stored in the field value.
    pub id: String,
    /// Key passed to the translator to produce the visible label.
    pub label_key: String,
}

impl Choice {
    pub fn new(id: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label_key: label_key.into(),
        }
    }
}

/// Type descriptor of a checkbox field: its name, label and choice list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldType {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    pub choices: Vec<Choice>,
    /// Shown checked while the field has no value of its own.
    #[serde(default)]
    pub placeholder: Selection,
}

impl FieldType {
    /// A descriptor with the given choices and no placeholder.
    pub fn new(name: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            name: name.into(),
            label: None,
            choices,
            placeholder: Selection::Absent,
        }
    }

    /// Build a descriptor from field options.
    ///
    /// `type`, when given, must be `checkboxes`. `choices` is required.
    /// Without `choice_labels` every choice is labelled with its id.
    pub fn from_options(
        name: impl Into<String>,
        options: &Options,
    ) -> Result<Self, FieldTypeError> {
        let name = name.into();

        if let Some(found) = options.get("type")
            && found != FIELD_TYPE
        {
            return Err(FieldTypeError::UnsupportedType {
                field: name,
                found: found.to_string(),
            });
        }

        let Some(ids) = options.get_list("choices") else {
            return Err(FieldTypeError::MissingChoices { field: name });
        };

        let labels = match options.get_list("choice_labels") {
            Some(labels) if labels.len() != ids.len() => {
                return Err(FieldTypeError::LabelCountMismatch {
                    field: name,
                    choices: ids.len(),
                    labels: labels.len(),
                });
            }
            Some(labels) => labels,
            None => ids.clone(),
        };

        let choices = ids
            .into_iter()
            .zip(labels)
            .map(|(id, label_key)| Choice { id, label_key })
            .collect::<Vec<_>>();

        let placeholder = options
            .get("default")
            .map(codec::deserialize)
            .unwrap_or_default();

        debug!(
            "field {name}: {} choice(s), placeholder {placeholder:?}",
            choices.len()
        );

        Ok(Self {
            name,
            label: options.get("label").map(str::to_string),
            choices,
            placeholder,
        })
    }

    pub fn choice(&self, id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Label of the field itself, falling back to its name.
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

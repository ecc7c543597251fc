//! Selection values and the operations the widget performs on them.
//!
//! A multi-valued field can be in one of three states: never touched,
//! explicitly cleared, or holding one or more identifiers. The flat storage
//! format squeezes these into a single string (see [`crate::codec`]), so the
//! in-memory form keeps them apart explicitly.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec;

/// The value of a multi-valued checkbox field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    /// No selection has been made yet.
    #[default]
    Absent,
    /// The user deselected everything.
    Empty,
    /// One or more identifiers, in insertion order. Never empty.
    Selected(Vec<String>),
}

impl Selection {
    /// Build a present selection from a list, normalizing `[]` to `Empty`.
    pub fn from_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Selected(items)
        }
    }

    /// The identifiers, or `None` when absent.
    ///
    /// `Empty` yields an empty slice, which is what lets a cleared value
    /// override a placeholder.
    pub fn as_slice(&self) -> Option<&[String]> {
        match self {
            Self::Absent => None,
            Self::Empty => Some(&[]),
            Self::Selected(items) => Some(items),
        }
    }

    /// The identifiers, treating `Absent` as empty.
    pub fn items(&self) -> &[String] {
        self.as_slice().unwrap_or_default()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Exact-match membership test. Always false for `Absent` and `Empty`.
    pub fn contains(&self, id: &str) -> bool {
        self.items().iter().any(|item| item == id)
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_list(iter)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::serialize(self))
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&codec::serialize(self))
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SelectionVisitor;

        impl<'de> Visitor<'de> for SelectionVisitor {
            type Value = Selection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a comma separated list of identifiers")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Selection, E> {
                Ok(codec::deserialize(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Selection, E> {
                Ok(Selection::Absent)
            }

            fn visit_none<E: de::Error>(self) -> Result<Selection, E> {
                Ok(Selection::Absent)
            }

            fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Selection, D::Error> {
                d.deserialize_str(self)
            }
        }

        deserializer.deserialize_any(SelectionVisitor)
    }
}

/// Whether `id` is checked given the current value and the form's placeholder.
///
/// The value always wins when present, including `Empty`. The placeholder is
/// only consulted when the value is `Absent`; when both are absent nothing is
/// checked.
pub fn is_checked(value: &Selection, placeholder: &Selection, id: &str) -> bool {
    let source = match value {
        Selection::Absent => placeholder,
        present => present,
    };
    match source.as_slice() {
        Some(items) => items.iter().any(|item| item == id),
        None => false,
    }
}

/// Flip membership of `id` in `current`, returning the full replacement value.
///
/// Including an id that is already present leaves the list unchanged; new ids
/// are appended. Excluding removes every occurrence and keeps the order of the
/// rest. `Absent` is treated as an empty list, and removing the last id yields
/// `Empty` rather than `Absent`.
pub fn toggle(current: &Selection, id: &str, include: bool) -> Selection {
    let items = current.items();
    if include {
        if items.iter().any(|item| item == id) {
            return Selection::from_list(items.iter().cloned());
        }
        let mut next = items.to_vec();
        next.push(id.to_string());
        Selection::Selected(next)
    } else {
        Selection::from_list(items.iter().filter(|item| *item != id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_list_normalizes_empty() {
        assert_eq!(Selection::from_list(Vec::<String>::new()), Selection::Empty);
        assert_eq!(
            Selection::from_list(["a"]),
            Selection::Selected(vec!["a".into()])
        );
    }

    #[test]
    fn absent_and_empty_have_no_items() {
        assert!(Selection::Absent.items().is_empty());
        assert!(Selection::Empty.items().is_empty());
        assert_eq!(Selection::Absent.as_slice(), None);
        assert_eq!(Selection::Empty.as_slice(), Some(&[][..]));
    }

    #[test]
    fn toggle_include_existing_keeps_list() {
        let current = Selection::from_list(["a", "b"]);
        assert_eq!(toggle(&current, "a", true), current);
    }
}

//! Flat string form of a [`Selection`].
//!
//! Values are stored as `a, b, c`. Identifiers are not escaped, so an id
//! containing a comma does not survive a round trip. Changing that would
//! change the on-disk format.

use log::trace;

use crate::selection::Selection;

/// Separator written between identifiers.
pub const SEPARATOR: &str = ", ";

/// Join the identifiers with [`SEPARATOR`]. `Absent` and `Empty` become `""`.
pub fn serialize(value: &Selection) -> String {
    value.items().join(SEPARATOR)
}

/// Parse the flat form back into a selection.
///
/// - `""` is `Absent` (never touched).
/// - Whitespace-only input is `Empty` (explicitly cleared).
/// - Anything else is split on `,` with each token trimmed. Empty tokens
///   between separators are kept as they are.
pub fn deserialize(raw: &str) -> Selection {
    if raw.is_empty() {
        return Selection::Absent;
    }

    let tokens = split_tokens(raw);
    trace!("deserialized {raw:?} into {} token(s)", tokens.len());

    if let [only] = tokens.as_slice()
        && only.is_empty()
    {
        return Selection::Empty;
    }
    Selection::Selected(tokens)
}

/// Split on `,` and trim every token.
pub(crate) fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',').map(|token| token.trim().to_string()).collect()
}

pub mod codec;
pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod i18n;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod state;
pub mod terminal;
pub mod text;
pub mod widget;

pub use error::{Error, Result};
pub use field::{Choice, FieldType, FieldTypeError, Options};
pub use form::{Form, FormAction};
pub use i18n::{Catalog, Translate};
pub use runtime::Runtime;
pub use selection::{Selection, is_checked, toggle};
pub use state::State;
pub use widget::{CheckboxRow, CheckboxVariant, Checkboxes};

pub mod prelude {
    pub use crate::codec::{deserialize, serialize};
    pub use crate::field::{Choice, FieldType, Options};
    pub use crate::form::Form;
    pub use crate::i18n::{Catalog, Translate};
    pub use crate::runtime::Runtime;
    pub use crate::selection::Selection;
    pub use crate::state::State;
    pub use crate::widget::{CheckboxVariant, Checkboxes};
}

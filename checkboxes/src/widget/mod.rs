//! Checkboxes widget - one checkbox per choice of a multi-valued field.
//!
//! The widget reads its value, placeholder and disabled flag from the form
//! on every build and never stores a selection of its own. A toggle computes
//! the next full value and hands it to `on_change` exactly once; the form
//! decides what to do with it.

mod events;

use log::debug;

use crate::event::EventResult;
use crate::field::FieldType;
use crate::i18n::Translate;
use crate::render::{self, Buffer, Rect};
use crate::selection::{self, Selection};

static ABSENT: Selection = Selection::Absent;

/// Checkbox display variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxVariant {
    /// Large checkbox: [x] or [ ]
    #[default]
    Big,
    /// Small checkbox: ◼ or ◻
    Small,
}

/// Render state of a single choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxRow {
    pub id: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
}

type ChangeHandler<'a> = Box<dyn FnMut(Selection) + 'a>;

/// A checkboxes widget builder.
///
/// # Example
///
/// ```
/// use checkboxes::{Checkboxes, Choice, FieldType, Selection, i18n::Identity};
///
/// let field = FieldType::new("tags", vec![Choice::new("a", "A"), Choice::new("b", "B")]);
/// let value = Selection::from_list(["a"]);
/// let mut proposed = None;
///
/// let mut widget = Checkboxes::new(&field)
///     .value(&value)
///     .on_change(|next| proposed = Some(next));
///
/// assert!(widget.rows(&Identity)[0].checked);
/// widget.on_toggle("b", true);
/// drop(widget);
///
/// assert_eq!(proposed, Some(Selection::from_list(["a", "b"])));
/// ```
pub struct Checkboxes<'a> {
    field_type: &'a FieldType,
    value: &'a Selection,
    placeholder: &'a Selection,
    disabled: bool,
    variant: CheckboxVariant,
    on_change: Option<ChangeHandler<'a>>,
}

impl<'a> Checkboxes<'a> {
    /// Create a builder over the field's choice list.
    pub fn new(field_type: &'a FieldType) -> Self {
        Self {
            field_type,
            value: &ABSENT,
            placeholder: &ABSENT,
            disabled: false,
            variant: CheckboxVariant::default(),
            on_change: None,
        }
    }

    /// Set the current value.
    pub fn value(mut self, value: &'a Selection) -> Self {
        self.value = value;
        self
    }

    /// Set the fallback shown while the value is absent.
    pub fn placeholder(mut self, placeholder: &'a Selection) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Disable every checkbox.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn variant(mut self, v: CheckboxVariant) -> Self {
        self.variant = v;
        self
    }

    /// Use small variant (◼/◻).
    pub fn small(mut self) -> Self {
        self.variant = CheckboxVariant::Small;
        self
    }

    /// Set the callback receiving each proposed value.
    pub fn on_change(mut self, f: impl FnMut(Selection) + 'a) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    pub fn field_type(&self) -> &FieldType {
        self.field_type
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the choice `id` is shown checked.
    pub fn is_checked(&self, id: &str) -> bool {
        selection::is_checked(self.value, self.placeholder, id)
    }

    /// One row per choice, in choice-list order, labels translated.
    pub fn rows(&self, translator: &dyn Translate) -> Vec<CheckboxRow> {
        self.field_type
            .choices
            .iter()
            .map(|choice| CheckboxRow {
                id: choice.id.clone(),
                label: translator.translate(&choice.label_key),
                checked: self.is_checked(&choice.id),
                disabled: self.disabled,
            })
            .collect()
    }

    /// Handle a checkbox changing to `checked`.
    ///
    /// Computes the next value from the current one and calls `on_change`
    /// once with it. Ignored while disabled.
    pub fn on_toggle(&mut self, id: &str, checked: bool) -> EventResult {
        if self.disabled {
            return EventResult::Ignored;
        }
        let next = selection::toggle(self.value, id, checked);
        debug!(
            "{}: {id} -> {checked}, proposing {next:?}",
            self.field_type.name
        );
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(next);
        }
        EventResult::Consumed
    }

    /// Draw the rows into `area`.
    pub fn render(
        &self,
        buf: &mut Buffer,
        area: Rect,
        focused: Option<usize>,
        translator: &dyn Translate,
    ) {
        let rows = self.rows(translator);
        render::render_rows(buf, area, &rows, self.variant, focused);
    }

    pub fn intrinsic_height(&self) -> u16 {
        u16::try_from(self.field_type.choices.len()).unwrap_or(u16::MAX)
    }

    pub fn intrinsic_width(&self, translator: &dyn Translate) -> u16 {
        render::rows_width(&self.rows(translator), self.variant)
    }
}

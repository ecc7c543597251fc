//! A single-field form hosting the checkboxes widget.
//!
//! The form owns the field value and the keyboard focus. Every event builds
//! a fresh widget from the current value, so each toggle is computed from
//! what the form holds at that moment.

use log::debug;

use crate::codec;
use crate::event::{Event, EventResult, Key, Modifiers, MouseButton};
use crate::field::FieldType;
use crate::i18n::Translate;
use crate::render::{Buffer, CellStyle, Rect};
use crate::selection::Selection;
use crate::state::State;
use crate::widget::{CheckboxVariant, Checkboxes};

/// Rows above the checkbox list: field label and a blank line.
const HEADER_ROWS: u16 = 2;
/// Columns the checkbox list is indented by.
const INDENT: u16 = 2;

/// What the runtime should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing visible changed.
    Continue,
    /// Draw again.
    Redraw,
    /// Leave the form.
    Quit,
}

pub struct Form {
    field: FieldType,
    value: State<Selection>,
    disabled: bool,
    variant: CheckboxVariant,
    focus: usize,
}

impl Form {
    pub fn new(field: FieldType, value: State<Selection>) -> Self {
        Self {
            field,
            value,
            disabled: false,
            variant: CheckboxVariant::default(),
            focus: 0,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn variant(mut self, variant: CheckboxVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn field(&self) -> &FieldType {
        &self.field
    }

    pub fn value(&self) -> &State<Selection> {
        &self.value
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Region the checkbox rows occupy inside `area`.
    pub fn rows_area(&self, area: Rect) -> Rect {
        let height = area
            .height
            .saturating_sub(HEADER_ROWS + 2)
            .min(u16::try_from(self.field.choices.len()).unwrap_or(u16::MAX));
        Rect::new(
            area.x + INDENT,
            area.y + HEADER_ROWS,
            area.width.saturating_sub(INDENT),
            height,
        )
    }

    /// Handle one event against the current value.
    pub fn handle(&mut self, event: &Event, area: Rect) -> FormAction {
        match *event {
            Event::Key { key, modifiers } => self.handle_key(key, modifiers),
            Event::Click {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let rows = self.rows_area(area);
                if !rows.contains(x, y) {
                    return FormAction::Continue;
                }
                let row = y - rows.y;
                self.focus = row as usize;
                self.with_widget(|widget| widget.dispatch_click(row));
                FormAction::Redraw
            }
            Event::Click { .. } => FormAction::Continue,
            Event::Resize { .. } => FormAction::Redraw,
        }
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> FormAction {
        if modifiers == Modifiers::ctrl() && key == Key::Char('c') {
            return FormAction::Quit;
        }
        if !modifiers.none() {
            return FormAction::Continue;
        }

        let last = self.field.choices.len().saturating_sub(1);
        let focus = match key {
            Key::Escape | Key::Char('q') => return FormAction::Quit,
            Key::Up | Key::Char('k') | Key::BackTab => self.focus.saturating_sub(1),
            Key::Down | Key::Char('j') | Key::Tab => (self.focus + 1).min(last),
            Key::Home => 0,
            Key::End => last,
            _ => {
                let focus = self.focus;
                let result = self.with_widget(|widget| widget.on_key(key, modifiers, focus));
                return if result.is_consumed() {
                    FormAction::Redraw
                } else {
                    FormAction::Continue
                };
            }
        };

        if focus == self.focus {
            return FormAction::Continue;
        }
        self.focus = focus;
        FormAction::Redraw
    }

    /// Build the widget from the current value and run `f` on it.
    ///
    /// Proposed values are written straight back to the form state.
    fn with_widget(&self, f: impl FnOnce(&mut Checkboxes<'_>) -> EventResult) -> EventResult {
        let current = self.value.get();
        let state = self.value.clone();
        let mut widget = Checkboxes::new(&self.field)
            .value(&current)
            .placeholder(&self.field.placeholder)
            .disabled(self.disabled)
            .variant(self.variant)
            .on_change(move |next| {
                debug!("form accepted {next:?}");
                state.set(next);
            });
        f(&mut widget)
    }

    /// Draw the field label, the checkbox rows and the stored value.
    pub fn render(&self, buf: &mut Buffer, area: Rect, translator: &dyn Translate) {
        buf.put_str(
            area.x,
            area.y,
            &translator.translate(self.field.display_label()),
            CellStyle::new().bold(),
            area.right(),
        );

        let current = self.value.get();
        let widget = Checkboxes::new(&self.field)
            .value(&current)
            .placeholder(&self.field.placeholder)
            .disabled(self.disabled)
            .variant(self.variant);
        let rows = self.rows_area(area);
        widget.render(buf, rows, Some(self.focus), translator);

        if area.height > 0 {
            let footer = format!("= {}", codec::serialize(&current));
            buf.put_str(
                area.x,
                area.bottom() - 1,
                &footer,
                CellStyle::new().dim(),
                area.right(),
            );
        }
    }
}

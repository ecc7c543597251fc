//! Event handling for the Checkboxes widget.

use crate::event::{EventResult, Key, Modifiers};

use super::Checkboxes;

impl Checkboxes<'_> {
    /// Toggle the choice at `index`, flipping its displayed state.
    pub fn toggle_at(&mut self, index: usize) -> EventResult {
        let Some(id) = self
            .field_type
            .choices
            .get(index)
            .map(|choice| choice.id.clone())
        else {
            return EventResult::Ignored;
        };
        let checked = !self.is_checked(&id);
        self.on_toggle(&id, checked)
    }

    /// Handle a key while the row at `focused` has focus.
    ///
    /// Space and Enter toggle the focused row. Focus movement is the
    /// form's concern and is left alone here.
    pub fn on_key(&mut self, key: Key, modifiers: Modifiers, focused: usize) -> EventResult {
        if !modifiers.none() {
            return EventResult::Ignored;
        }

        match key {
            Key::Char(' ') | Key::Enter => self.toggle_at(focused),
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on row `row` (relative to the widget's top).
    pub fn dispatch_click(&mut self, row: u16) -> EventResult {
        self.toggle_at(row as usize)
    }
}

//! Runtime - runs a [`Form`] in the terminal until the user leaves.

use crossterm::event::EventStream;
use futures::StreamExt;
use log::{debug, info, trace};

use crate::error::Result;
use crate::event::Event;
use crate::form::{Form, FormAction};
use crate::i18n::Translate;
use crate::selection::Selection;
use crate::terminal::Terminal;

/// Drives a form: draw, wait for input, dispatch, repeat.
///
/// Events are handled one at a time; a toggle always sees the value
/// produced by the previous one.
pub struct Runtime<T: Translate> {
    translator: T,
}

impl<T: Translate> Runtime<T> {
    pub fn new(translator: T) -> Self {
        Self { translator }
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Run `form` until Escape, `q` or Ctrl+C and return its final value.
    pub async fn run(&self, mut form: Form) -> Result<Selection> {
        let mut terminal = Terminal::new()?;
        let mut events = EventStream::new();
        let mut needs_draw = true;

        info!(
            "running field {} with {} choice(s)",
            form.field().name,
            form.field().choices.len()
        );

        loop {
            let dirty = form.value().take_dirty();
            if needs_draw || dirty {
                terminal.draw(|buf, area| form.render(buf, area, &self.translator))?;
                needs_draw = false;
            }

            let Some(received) = events.next().await else {
                debug!("event stream closed");
                break;
            };
            let received = received?;
            trace!("crossterm event: {received:?}");

            let Some(event) = Event::from_crossterm(received) else {
                continue;
            };

            match form.handle(&event, terminal.area()) {
                FormAction::Quit => break,
                FormAction::Redraw => needs_draw = true,
                FormAction::Continue => {}
            }
        }

        terminal.restore()?;
        let value = form.value().get();
        info!("form closed with {value:?}");
        Ok(value)
    }
}

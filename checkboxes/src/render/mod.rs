//! Drawing checkbox rows into a cell buffer.

mod buffer;

pub use buffer::{Buffer, Cell, CellStyle};

use crate::text::{display_width, truncate_to_width};
use crate::widget::{CheckboxRow, CheckboxVariant};

/// A rectangular region of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

impl CheckboxVariant {
    pub fn indicator(self, checked: bool) -> &'static str {
        match (self, checked) {
            (CheckboxVariant::Big, true) => "[x]",
            (CheckboxVariant::Big, false) => "[ ]",
            (CheckboxVariant::Small, true) => "◼",
            (CheckboxVariant::Small, false) => "◻",
        }
    }
}

/// Draw one row per checkbox, top to bottom, clipped to `area`.
///
/// Each row is the indicator, a space, then the label truncated to fit.
/// Disabled rows are dimmed; the focused row is drawn in reverse video
/// across the full width of `area`, keeping its other attributes.
pub fn render_rows(
    buf: &mut Buffer,
    area: Rect,
    rows: &[CheckboxRow],
    variant: CheckboxVariant,
    focused: Option<usize>,
) {
    for (index, row) in rows.iter().enumerate().take(area.height as usize) {
        let y = area.y + index as u16;
        let mut base = CellStyle::new();
        if row.disabled {
            base = base.dim();
        }

        let indicator_style = if row.checked { base.bold() } else { base };
        let mut x = area.x;
        x += buf.put_str(x, y, variant.indicator(row.checked), indicator_style, area.right());
        x += buf.put_str(x, y, " ", base, area.right());

        let room = area.right().saturating_sub(x) as usize;
        let label = truncate_to_width(&row.label, room);
        buf.put_str(x, y, &label, base, area.right());

        if focused == Some(index) {
            buf.map_style(area.x, y, area.right(), CellStyle::reverse);
        }
    }
}

/// Columns needed to draw `rows` without truncation.
pub fn rows_width(rows: &[CheckboxRow], variant: CheckboxVariant) -> u16 {
    let indicator = display_width(variant.indicator(false));
    let width = rows
        .iter()
        .map(|row| indicator + 1 + display_width(&row.label))
        .max()
        .unwrap_or(indicator);
    u16::try_from(width).unwrap_or(u16::MAX)
}

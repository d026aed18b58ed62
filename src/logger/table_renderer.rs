use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Attribute, Cell, ContentArrangement, Table,
};
use crate::helpers::status_badge::badge_for;

/// Consistently styled tables for list views.
#[derive(Debug, Clone, Copy)]
pub struct TableRenderer {
    color: bool,
    width: Option<u16>,
}

impl TableRenderer {
    pub fn new(color: bool) -> Self {
        let width = terminal_size::terminal_size().map(|(terminal_size::Width(w), _)| w);
        Self { color, width }
    }

    pub fn with_width(color: bool, width: Option<u16>) -> Self {
        Self { color, width }
    }

    pub fn table<I, S>(&self, headers: I) -> Table
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.width {
            table.set_width(width);
        }
        if !self.color {
            table.force_no_tty();
        }

        let header_cells: Vec<Cell> = headers
            .into_iter()
            .map(|h| {
                let cell = Cell::new(h.into());
                if self.color {
                    cell.add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.set_header(header_cells);
        table
    }

    /// Status label coloured the way the web client colours its badges.
    pub fn badge(&self, status: Option<&str>) -> Cell {
        match status.filter(|s| !s.trim().is_empty()) {
            Some(status) if self.color => Cell::new(status).fg(badge_for(status).color()),
            Some(status) => Cell::new(status),
            None => Cell::new("-"),
        }
    }
}

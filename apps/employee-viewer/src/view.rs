//! Terminal rendition of the employee list.
//!
//! The view pulls rows on demand through [`RowSource`]; it never holds on to
//! roster data between draws.

use std::{io::Write, ops::Range};

use anyhow::Result;
use products_hr::{EmployeeRow, Roster, RosterChange, RosterState, RowIndexError};

const COLUMN_GAP: usize = 2;

/// Pull-based contract between the list and whatever owns the rows.
pub trait RowSource {
    fn count(&self) -> usize;
    fn row_at(&self, index: usize) -> Result<EmployeeRow<'_>, RowIndexError>;
}

impl RowSource for Roster {
    fn count(&self) -> usize {
        Roster::count(self)
    }

    fn row_at(&self, index: usize) -> Result<EmployeeRow<'_>, RowIndexError> {
        Roster::row_at(self, index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Scroll window over a [`RowSource`]. `height: None` shows every row from
/// `offset` on.
#[derive(Clone, Debug, Default)]
pub struct ListView {
    offset: usize,
    height: Option<usize>,
}

impl ListView {
    pub fn new(height: Option<usize>) -> Self {
        Self {
            offset: 0,
            height: height.map(|h| h.max(1)),
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Positions refer to the old rows after a replacement.
    pub fn on_change(&mut self, _change: RosterChange) {
        self.reset();
    }

    pub fn scroll_to(&mut self, offset: usize, source: &impl RowSource) {
        self.offset = offset.min(self.max_offset(source.count()));
    }

    pub fn scroll_by(&mut self, delta: isize, source: &impl RowSource) {
        let target = self.offset.saturating_add_signed(delta);
        self.scroll_to(target, source);
    }

    fn max_offset(&self, count: usize) -> usize {
        match self.height {
            Some(height) => count.saturating_sub(height),
            None => count.saturating_sub(1),
        }
    }

    pub fn visible_range(&self, source: &impl RowSource) -> Range<usize> {
        let count = source.count();
        let start = self.offset.min(count);
        let end = match self.height {
            Some(height) => start.saturating_add(height).min(count),
            None => count,
        };
        start..end
    }

    pub fn visible_rows<'a, R: RowSource>(
        &self,
        source: &'a R,
    ) -> Result<Vec<EmployeeRow<'a>>, RowIndexError> {
        self.visible_range(source)
            .map(|index| source.row_at(index))
            .collect()
    }

    /// Two columns: name padded to the widest visible name, then profile.
    /// Width is counted in chars, so double-width glyphs (CJK, emoji) push
    /// their profile one column right per glyph.
    pub fn render_rows(&self, source: &impl RowSource, out: &mut impl Write) -> Result<()> {
        let rows = self.visible_rows(source)?;
        let width = rows
            .iter()
            .map(|row| row.name.chars().count())
            .max()
            .unwrap_or(0);
        for row in rows {
            let pad = width - row.name.chars().count() + COLUMN_GAP;
            writeln!(out, "{}{:pad$}{}", row.name, "", row.profile)?;
        }
        Ok(())
    }

    pub fn render_table(&self, roster: &Roster, out: &mut impl Write) -> Result<()> {
        self.render_rows(roster, out)?;
        writeln!(out, "{}", status_line(roster, self.visible_range(roster)))?;
        Ok(())
    }

    pub fn render_json(&self, source: &impl RowSource, out: &mut impl Write) -> Result<()> {
        let rows = self.visible_rows(source)?;
        serde_json::to_writer_pretty(&mut *out, &rows)?;
        writeln!(out)?;
        Ok(())
    }

    pub fn render(&self, format: OutputFormat, roster: &Roster, out: &mut impl Write) -> Result<()> {
        match format {
            OutputFormat::Table => self.render_table(roster, out),
            OutputFormat::Json => self.render_json(roster, out),
        }
    }
}

pub fn status_line(roster: &Roster, visible: Range<usize>) -> String {
    if roster.state() == RosterState::Empty {
        return "no employees loaded".to_string();
    }
    let mut line = if visible.is_empty() {
        format!("0 of {} employees", roster.count())
    } else {
        format!(
            "{}-{} of {} employees",
            visible.start + 1,
            visible.end,
            roster.count()
        )
    };
    if let Some(message) = roster.message().filter(|m| !m.is_empty()) {
        line.push_str(" | ");
        line.push_str(message);
    }
    if let Some(at) = roster.loaded_at() {
        line.push_str(&format!(" | loaded {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    line
}

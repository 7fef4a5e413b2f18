//! Minimal fixed-width table rendering for listings.

use crate::cli::output::current_preferences;

/// How a column aligns its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: String,
    pub alignment: Alignment,
    pub max_width: Option<usize>,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
            max_width: None,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Right,
            max_width: None,
        }
    }

    pub fn capped(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A table with column metadata and rows of plain-text cells.
pub struct Table {
    columns: Vec<TableColumn>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = column.header.chars().count();
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(cell.chars().count());
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = row.get(idx).map(String::as_str).unwrap_or("");
                render_cell(cell, widths[idx], column.alignment)
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    /// Renders headers, a rule, and every row. When a terminal is
    /// attached, the widest column is shrunk until the table fits.
    pub fn render(&self) -> String {
        let mut widths = self.compute_widths();
        if let Some(limit) = terminal_width() {
            fit_to_terminal(&mut widths, limit);
        }
        let headers: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();

        let mut out = String::new();
        out.push_str(&self.render_row(&headers, &widths));
        out.push('\n');
        out.push_str(&horizontal_rule(&widths));
        for row in &self.rows {
            out.push('\n');
            out.push_str(&self.render_row(row, &widths));
        }
        out
    }
}

fn terminal_width() -> Option<usize> {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| cols as usize)
}

const MIN_COLUMN_WIDTH: usize = 8;

fn fit_to_terminal(widths: &mut [usize], limit: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    loop {
        let total: usize = widths.iter().sum::<usize>() + separators;
        if total <= limit {
            return;
        }
        let Some(widest) = widths
            .iter_mut()
            .max_by_key(|width| **width)
            .filter(|width| **width > MIN_COLUMN_WIDTH)
        else {
            return;
        };
        *widest -= 1;
    }
}

fn truncate(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length <= width {
        return text.to_string();
    }
    if width <= 1 {
        return "…".repeat(width.min(1));
    }
    let kept: String = text.chars().take(width - 1).collect();
    format!("{kept}…")
}

fn render_cell(text: &str, width: usize, alignment: Alignment) -> String {
    let fitted = truncate(text, width);
    let padding = width.saturating_sub(fitted.chars().count());
    match alignment {
        Alignment::Left => format!("{fitted}{}", " ".repeat(padding)),
        Alignment::Right => format!("{}{fitted}", " ".repeat(padding)),
    }
}

fn horizontal_rule(widths: &[usize]) -> String {
    let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 2;
    let ch = if current_preferences().plain_mode {
        '-'
    } else {
        '─'
    };
    ch.to_string().repeat(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_columns() {
        let mut table = Table::new(vec![
            TableColumn::left("Name"),
            TableColumn::right("Price"),
        ]);
        table.push_row(vec!["Massage".into(), "120".into()]);
        table.push_row(vec!["Cut".into(), "85".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name     Price");
        assert_eq!(lines[2], "Massage    120");
        assert_eq!(lines[3], "Cut         85");
    }

    #[test]
    fn caps_and_truncates_wide_cells() {
        let mut table = Table::new(vec![TableColumn::left("Notes").capped(6)]);
        table.push_row(vec!["a very long note".into()]);
        let rendered = table.render();
        assert!(rendered.lines().last().unwrap().starts_with("a ver…"));
    }
}

//! Tabular view of the agency snapshot.
//!
//! Shared by the dashboard's "Data Table" tab and the `fetch` command.

use super::format::format_grouped;
use crate::model::AgencyTable;
use unicode_width::UnicodeWidthStr;

/// Hard cap on rendered rows.
pub const DEFAULT_ROW_LIMIT: usize = 15;

/// Sole row rendered before any data is loaded.
pub const EMPTY_TABLE_MESSAGE: &str = "Click 'Fetch Latest Data' to begin.";

/// Columns shown for a loaded table, in order.
pub const AGENCY_COLUMNS: [&str; 4] = [
    "agency_name",
    "abbreviation",
    "budget_authority_amount",
    "outlay_amount",
];

/// A rendered table: column headers plus rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    /// Render the first `limit` records, or the placeholder when empty.
    #[must_use]
    pub fn from_table(table: &AgencyTable, limit: usize) -> Self {
        if table.is_empty() {
            return Self::placeholder();
        }

        let rows = table
            .head(limit)
            .iter()
            .map(|record| {
                vec![
                    record.agency_name.clone(),
                    record.abbreviation.clone(),
                    format_grouped(record.budget_authority_amount, 2),
                    format_grouped(record.outlay_amount, 2),
                ]
            })
            .collect();

        Self {
            columns: AGENCY_COLUMNS.to_vec(),
            rows,
        }
    }

    /// Single-cell table carrying the "fetch first" message.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            columns: vec!["Message"],
            rows: vec![vec![EMPTY_TABLE_MESSAGE.to_string()]],
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.columns == ["Message"]
    }

    /// Display width of each column (header included).
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.width())
                    .chain(std::iter::once(header.width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Plain-text rendering with aligned columns. Amount columns are
    /// right-aligned.
    #[must_use]
    pub fn to_text(&self) -> String {
        let widths = self.column_widths();
        let numeric = |i: usize| !self.is_placeholder() && i >= 2;

        let format_row = |cells: &mut dyn Iterator<Item = &str>| -> String {
            let mut line = String::new();
            for (i, cell) in cells.enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                let pad = widths[i].saturating_sub(cell.width());
                if numeric(i) {
                    line.push_str(&" ".repeat(pad));
                    line.push_str(cell);
                } else {
                    line.push_str(cell);
                    line.push_str(&" ".repeat(pad));
                }
            }
            line.trim_end().to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(&mut self.columns.iter().copied()));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("  "),
        );
        for row in &self.rows {
            lines.push(format_row(&mut row.iter().map(String::as_str)));
        }
        lines.join("\n")
    }
}

//! # Layout Engine
//!
//! Column widths are derived from content, then shrunk greedily until they
//! fit the screen. Widths are measured in terminal columns, not bytes.

use unicode_width::UnicodeWidthChar;

use crate::core::projection::Table;

/// Suffix appended to text cut short by a narrow column.
pub const ELLIPSIS: &str = "..";

/// Display width of `text` in terminal columns.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    if c.is_control() {
        1
    } else {
        c.width().unwrap_or(0)
    }
}

/// Per-column widths for a screen `max_width` columns wide.
///
/// Each column starts at `max(title, longest cell) + 1`. While the total is
/// too wide the first widest column loses one column. A column can reach
/// zero but never goes below it.
pub fn column_widths(table: &Table, max_width: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = table
        .columns
        .iter()
        .map(|column| {
            let longest = column
                .cells
                .iter()
                .map(|cell| display_width(&cell.text()))
                .max()
                .unwrap_or(0);
            display_width(&column.title).max(longest) + 1
        })
        .collect();

    let mut total: usize = widths.iter().sum();
    while total > max_width {
        let Some(&widest) = widths.iter().max() else {
            break;
        };
        if widest == 0 {
            break;
        }
        if let Some(index) = widths.iter().position(|&w| w == widest) {
            widths[index] -= 1;
            total -= 1;
        }
    }

    widths
}

/// Text fitted to a column, and whether anything was cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fitted {
    pub text: String,
    pub truncated: bool,
}

/// Fit `text` into a column `width` wide.
///
/// Text that leaves at least one column of padding is kept whole. Anything
/// longer is cut to `width - 2` and gets the `..` suffix. Control characters
/// become spaces so a cell always stays on one line.
pub fn fit_cell(text: &str, width: usize) -> Fitted {
    let clean: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    if display_width(&clean) < width {
        return Fitted {
            text: clean,
            truncated: false,
        };
    }

    if width <= ELLIPSIS.len() {
        return Fitted {
            text: ".".repeat(width),
            truncated: true,
        };
    }

    let budget = width - ELLIPSIS.len();
    let mut used = 0;
    let mut cut = String::new();
    for c in clean.chars() {
        let w = char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        cut.push(c);
    }
    cut.push_str(ELLIPSIS);

    Fitted {
        text: cut,
        truncated: true,
    }
}

/// Right-pad `text` with spaces to exactly `width` display columns.
/// `text` must already fit.
pub fn pad_to(text: &str, width: usize) -> String {
    let used = display_width(text);
    let mut padded = text.to_string();
    padded.push_str(&" ".repeat(width.saturating_sub(used)));
    padded
}

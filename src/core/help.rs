//! Keybinding reference shown by the help overlay.

/// Key combo label → what it does, in display order.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("j, n, Down", "Move down one row"),
    ("k, p, Up", "Move up one row"),
    ("f, d, PgDn", "Move down one page"),
    ("b, u, PgUp", "Move up one page"),
    ("g, <, Home", "Jump to first row"),
    ("G, >, End", "Jump to last row"),
    ("z, Ctrl+L", "Center the selected row"),
    ("Enter", "Show record details / select record"),
    ("?, F1", "Toggle this help"),
    ("q, Esc", "Back / quit"),
];

/// Width of the widest key label, for aligning the description column.
pub fn key_column_width() -> usize {
    HELP_ENTRIES
        .iter()
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0)
}

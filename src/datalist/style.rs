//! Styling for the datalist component.
//!
//! Built on lipgloss adaptive colors so the defaults stay readable in both
//! light and dark terminals. All fields are public; applications customize
//! individual elements and leave the rest at their defaults.
//!
//! ```rust
//! use bubbletea_datalist::datalist::DataListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = DataListStyles::default();
//! styles.title = Style::new()
//!     .background(Color::from("#7D56F4"))
//!     .foreground(Color::from("#FFFFFF"))
//!     .padding(0, 1, 0, 1);
//! ```

use lipgloss_extras::prelude::*;

/// Marker rendered in front of selected rows.
pub const SELECTED_MARKER: &str = "◉";

/// Marker rendered in front of unselected rows.
pub const UNSELECTED_MARKER: &str = "○";

/// Unicode ellipsis used when a row is truncated to the component width.
pub const ELLIPSIS: &str = "…";

/// Styles for every visual element of the datalist.
#[derive(Debug, Clone)]
pub struct DataListStyles {
    /// Style for the title bar container.
    pub title_bar: Style,
    /// Style for the title text.
    pub title: Style,
    /// Style for the loading indicator next to the title.
    pub loading: Style,
    /// Style applied to a normal row.
    pub row: Style,
    /// Style applied to a selected row.
    pub selected_row: Style,
    /// Style for the selection marker column.
    pub selection_marker: Style,
    /// Style for the "No records" message.
    pub no_records: Style,
    /// Style for the pagination line.
    pub pagination: Style,
    /// Style for the status bar (selection and total counts).
    pub status_bar: Style,
}

impl Default for DataListStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let normal_color = AdaptiveColor {
            Light: "#1a1a1a",
            Dark: "#dddddd",
        };
        let accent_color = AdaptiveColor {
            Light: "#04B575",
            Dark: "#ECFD65",
        };

        Self {
            title_bar: Style::new().padding(0, 0, 1, 2),
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            loading: Style::new().foreground(subdued_color.clone()),
            row: Style::new().foreground(normal_color).padding_left(2),
            selected_row: Style::new()
                .foreground(accent_color.clone())
                .padding_left(2),
            selection_marker: Style::new().foreground(accent_color),
            no_records: Style::new().foreground(subdued_color.clone()).padding_left(2),
            pagination: Style::new().foreground(subdued_color.clone()).padding_left(2),
            status_bar: Style::new().foreground(subdued_color).padding(1, 0, 0, 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_render_text() {
        let styles = DataListStyles::default();
        let rendered = styles.no_records.render("No records");
        assert!(rendered.contains("No records"));
    }
}

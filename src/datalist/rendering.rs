//! View rendering for the datalist component.
//!
//! The view is composed from four parts: a title header (with a loading
//! indicator while a fetch is in flight), the delegate-rendered rows of the
//! visible page, a pagination line, and a status bar with selection counts.
//! Row appearance is fully customizable through [`RowDelegate`].

use super::model::Model;
use super::style::{ELLIPSIS, SELECTED_MARKER, UNSELECTED_MARKER};
use super::types::Record;
use unicode_width::UnicodeWidthChar;

/// Trait for customizing how rows are rendered.
///
/// The delegate receives the complete model state, the record's index in
/// the full loaded set, the record itself, and its selection state, and
/// returns the styled line(s) for that row.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::{Model, Record, RowDelegate};
/// use std::fmt;
///
/// #[derive(Clone)]
/// struct Tag(String);
///
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.0)
///     }
/// }
///
/// impl Record for Tag {
///     type Id = String;
///     fn id(&self) -> String {
///         self.0.clone()
///     }
/// }
///
/// struct NumberedDelegate;
///
/// impl RowDelegate<Tag> for NumberedDelegate {
///     fn render(&self, _m: &Model<Tag>, index: usize, record: &Tag, selected: bool) -> String {
///         let mark = if selected { "*" } else { " " };
///         format!("{} {:>3}. {}", mark, index + 1, record)
///     }
/// }
/// ```
pub trait RowDelegate<R: Record>: Send + Sync {
    /// Renders one row for display.
    fn render(&self, m: &Model<R>, index: usize, record: &R, selected: bool) -> String;
}

/// The default row delegate: selection marker plus the record's `Display`
/// output, truncated to the component width.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRowDelegate;

impl DefaultRowDelegate {
    /// Creates the default delegate.
    pub fn new() -> Self {
        Self
    }
}

impl<R: Record> RowDelegate<R> for DefaultRowDelegate {
    fn render(&self, m: &Model<R>, _index: usize, record: &R, selected: bool) -> String {
        let marker = if selected {
            SELECTED_MARKER
        } else {
            UNSELECTED_MARKER
        };
        let marker = m.styles.selection_marker.clone().render(marker);
        // Marker column plus row padding take four cells.
        let text = truncate(&record.to_string(), m.width().saturating_sub(4));
        let style = if selected {
            m.styles.selected_row.clone()
        } else {
            m.styles.row.clone()
        };
        format!("{}{}", marker, style.render(&text))
    }
}

/// Truncates to at most `max_width` terminal cells. When anything is cut,
/// the last cell of the budget goes to an ellipsis.
fn truncate(s: &str, max_width: usize) -> String {
    let total: usize = s
        .chars()
        .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
        .sum();
    if total <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + char_width > budget {
            break;
        }
        width += char_width;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

impl<R: Record> Model<R> {
    /// Renders the title bar, with a loading indicator while a fetch is in
    /// flight.
    pub(super) fn view_header(&self) -> String {
        let mut header = self.styles.title.clone().render(&self.title);
        if self.is_loading {
            header.push(' ');
            header.push_str(&self.styles.loading.clone().render("loading…"));
        }
        self.styles.title_bar.clone().render(&header)
    }

    /// Renders the rows of the visible page via the delegate, clipped to
    /// the lines left over after the header and footer chrome.
    pub(super) fn view_rows(&self) -> String {
        if self.rows.is_empty() {
            return self.styles.no_records.clone().render("No records.");
        }

        // Title bar (2 lines) plus pagination and status bar (2 lines).
        let available = self.height.saturating_sub(4).max(1);
        let (start, end) = self.pager.slice_bounds(self.rows.len());
        let end = end.min(start + available);
        let mut lines = Vec::with_capacity(end - start);
        for (offset, row) in self.rows[start..end].iter().enumerate() {
            lines.push(
                self.delegate
                    .render(self, start + offset, &row.record, row.selected),
            );
        }
        lines.join("\n")
    }

    /// Renders the pagination line and the selection status bar.
    pub(super) fn view_footer(&self) -> String {
        let pagination = self.styles.pagination.clone().render(&self.pager.view());
        let noun = if self.len() == 1 { "record" } else { "records" };
        let status = self
            .styles
            .status_bar
            .clone()
            .render(&format!("{}/{} {} selected", self.selected_count(), self.len(), noun));
        format!("{}\n{}", pagination, status)
    }

    /// Renders the complete datalist view.
    pub fn view(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.view_header(),
            self.view_rows(),
            self.view_footer()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datalist::source::MemorySource;
    use std::fmt;
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(u32);

    impl fmt::Display for Item {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "item-{:03}", self.0)
        }
    }

    impl Record for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    fn model_with(n: u32) -> Model<Item> {
        let mut model = Model::new(Arc::new(MemorySource::new(vec![])))
            .with_title("Items")
            .with_page_size(10);
        model.replace_records((0..n).map(Item).collect());
        model
    }

    #[test]
    fn test_truncate_respects_cell_width() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
        // The cut keeps a cell free for the ellipsis: five cells total.
        assert_eq!(truncate("hello world", 5), "hell…");
        // Wide characters count as two cells.
        assert_eq!(truncate("日本語", 4), "日…");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_view_rows_clipped_to_height() {
        let mut model = model_with(10);
        // Four lines of chrome leave three lines for rows.
        model.set_size(80, 7);

        let rows = model.view_rows();
        assert_eq!(rows.lines().count(), 3);
        assert!(rows.contains("item-002"));
        assert!(!rows.contains("item-003"));
    }

    #[test]
    fn test_view_shows_only_current_page() {
        let mut model = model_with(25);
        model.set_page(3);

        let view = model.view();
        assert!(view.contains("item-020"));
        assert!(view.contains("item-024"));
        assert!(!view.contains("item-019"));
        assert!(view.contains("3/3"));
    }

    #[test]
    fn test_view_empty_list() {
        let model = model_with(0);
        assert!(model.view().contains("No records."));
    }

    #[test]
    fn test_view_status_counts_selection() {
        let mut model = model_with(5);
        model.set_row_selected(&1, true);
        model.set_row_selected(&2, true);

        assert!(model.view().contains("2/5 records selected"));
    }

    #[test]
    fn test_header_shows_loading_indicator() {
        let mut model = model_with(1);
        let _ = model.load();
        assert!(model.view_header().contains("loading…"));
    }
}

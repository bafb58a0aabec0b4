//! A pagination cursor for client-side paging over an in-memory result set.
//!
//! [`Pager`] tracks a 1-based page number, a page size, and the total number
//! of items, and derives everything else: the total page count, the slice
//! bounds of the visible page, and whether the cursor sits on the first or
//! last page. It renders pagination info either as Arabic numerals
//! (`"2/5"`) or as dots (`"○ • ○ ○ ○"`).
//!
//! The pager never fetches anything; it is pure bookkeeping over a result
//! set that something else owns. [`crate::datalist::Model`] embeds one and
//! keeps it synchronized with its loaded rows, but the pager is also usable
//! standalone for any slice-based paging.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_datalist::pager::Pager;
//!
//! let mut pager = Pager::new().with_page_size(50).with_total_items(120);
//! assert_eq!(pager.total_pages(), 3);
//!
//! assert!(pager.set_page(3));
//! let (start, end) = pager.slice_bounds(120);
//! assert_eq!((start, end), (100, 120)); // last, partial page
//!
//! assert!(!pager.set_page(4)); // out of range, no-op
//! assert_eq!(pager.page(), 3);
//! ```

use crate::key::Binding;
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;
use thiserror::Error;

/// Error returned when a caller asks for a page size of zero.
///
/// Page-size validation is synchronous; an invalid size is rejected before
/// any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("page size must be greater than zero")]
pub struct InvalidPageSize;

/// How pagination info is rendered by [`Pager::view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PagerType {
    /// Render as Arabic numerals, e.g. `"2/5"`.
    #[default]
    Arabic,
    /// Render as dots with the active page highlighted, e.g. `"○ • ○"`.
    Dots,
}

/// Key bindings for pager navigation.
#[derive(Debug, Clone)]
pub struct PagerKeyMap {
    /// Go to the previous page.
    pub prev_page: Binding,
    /// Go to the next page.
    pub next_page: Binding,
}

impl Default for PagerKeyMap {
    fn default() -> Self {
        Self {
            prev_page: Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: Binding::new(vec![KeyCode::PageDown, KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "next page"),
        }
    }
}

/// Pagination state: 1-based page number, page size, and total item count.
///
/// Invariants maintained by every mutator:
///
/// - `page_size >= 1`
/// - `page >= 1`, and when `total > 0`, `(page - 1) * page_size < total`
///
/// Whenever the total shrinks underneath the cursor (for example after rows
/// are deleted), the page is clamped back into range rather than left
/// dangling past the end.
#[derive(Debug, Clone)]
pub struct Pager {
    /// How pagination is rendered (Arabic numerals or dots).
    pub pager_type: PagerType,
    /// Character used for the active page in dots mode.
    pub active_dot: String,
    /// Character used for inactive pages in dots mode.
    pub inactive_dot: String,
    /// Key bindings.
    pub keymap: PagerKeyMap,

    page: usize,
    page_size: usize,
    total: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            pager_type: PagerType::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            keymap: PagerKeyMap::default(),
            page: 1,
            page_size: 10,
            total: 0,
        }
    }
}

impl Pager {
    /// Creates a pager on page 1 with a page size of 10 and no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size (builder pattern). Sizes below 1 are clamped to 1.
    ///
    /// For fallible validation use [`Pager::set_page_size`].
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    /// Sets the total item count (builder pattern), clamping the page.
    pub fn with_total_items(mut self, total: usize) -> Self {
        self.set_total_items(total);
        self
    }

    /// Returns the current 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the current page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the total number of items being paged.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the total number of pages, always at least 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::Pager;
    ///
    /// let pager = Pager::new().with_page_size(50).with_total_items(120);
    /// assert_eq!(pager.total_pages(), 3);
    ///
    /// let empty = Pager::new().with_page_size(50);
    /// assert_eq!(empty.total_pages(), 1);
    /// ```
    pub fn total_pages(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Sets the page size and resets the cursor to page 1.
    ///
    /// A size of zero is rejected with [`InvalidPageSize`] and leaves the
    /// pager untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::Pager;
    ///
    /// let mut pager = Pager::new().with_page_size(10).with_total_items(100);
    /// pager.set_page(5);
    ///
    /// pager.set_page_size(25).unwrap();
    /// assert_eq!(pager.page(), 1);
    /// assert_eq!(pager.total_pages(), 4);
    ///
    /// assert!(pager.set_page_size(0).is_err());
    /// assert_eq!(pager.page_size(), 25);
    /// ```
    pub fn set_page_size(&mut self, size: usize) -> Result<(), InvalidPageSize> {
        if size == 0 {
            return Err(InvalidPageSize);
        }
        self.page_size = size;
        self.page = 1;
        Ok(())
    }

    /// Sets the total item count and clamps the page back into range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::Pager;
    ///
    /// let mut pager = Pager::new().with_page_size(10).with_total_items(100);
    /// pager.set_page(10);
    ///
    /// // Items were deleted; the cursor is pulled back to the new last page.
    /// pager.set_total_items(45);
    /// assert_eq!(pager.page(), 5);
    /// ```
    pub fn set_total_items(&mut self, total: usize) {
        self.total = total;
        let last = self.total_pages();
        if self.page > last {
            self.page = last;
        }
    }

    /// Moves the cursor to page `n` if `n` is in `1..=total_pages()`.
    ///
    /// Out-of-range requests (including any request while there are no
    /// items) are a no-op. Returns whether the page changed state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::Pager;
    ///
    /// let mut pager = Pager::new().with_page_size(50).with_total_items(120);
    /// assert!(pager.set_page(3));
    /// assert!(!pager.set_page(4)); // ceil(120 / 50) == 3
    /// assert!(!pager.set_page(0));
    /// assert_eq!(pager.page(), 3);
    /// ```
    pub fn set_page(&mut self, n: usize) -> bool {
        if self.total == 0 || n == 0 || n > self.total_pages() {
            return false;
        }
        self.page = n;
        true
    }

    /// Moves to the previous page, stopping at page 1.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Moves to the next page, stopping at the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Returns true if the cursor is on page 1.
    pub fn on_first_page(&self) -> bool {
        self.page == 1
    }

    /// Returns true if the cursor is on the last page.
    pub fn on_last_page(&self) -> bool {
        self.page == self.total_pages()
    }

    /// Returns the slice bounds of the visible page for a collection of
    /// `len` items.
    ///
    /// The returned `(start, end)` pair can be used directly with slice
    /// notation; `end` is clamped to `len` so the last page may be partial.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::Pager;
    ///
    /// let items: Vec<u32> = (0..120).collect();
    /// let mut pager = Pager::new().with_page_size(50).with_total_items(items.len());
    /// pager.set_page(3);
    ///
    /// let (start, end) = pager.slice_bounds(items.len());
    /// assert_eq!(&items[start..end], &items[100..120]);
    /// ```
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    /// Returns the number of items on the current page.
    pub fn items_on_page(&self, len: usize) -> usize {
        let (start, end) = self.slice_bounds(len);
        end - start
    }

    /// Handles pager key presses (previous/next page).
    pub fn update(&mut self, msg: &Msg) {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.next_page.matches(key_msg) {
                self.next_page();
            } else if self.keymap.prev_page.matches(key_msg) {
                self.prev_page();
            }
        }
    }

    /// Renders the pagination indicator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datalist::pager::{Pager, PagerType};
    ///
    /// let mut pager = Pager::new().with_page_size(10).with_total_items(50);
    /// assert_eq!(pager.view(), "1/5");
    ///
    /// pager.pager_type = PagerType::Dots;
    /// assert_eq!(pager.view(), "• ○ ○ ○ ○");
    /// ```
    pub fn view(&self) -> String {
        match self.pager_type {
            PagerType::Arabic => format!("{}/{}", self.page, self.total_pages()),
            PagerType::Dots => self.dots_view(),
        }
    }

    fn dots_view(&self) -> String {
        let total = self.total_pages();
        let mut s = String::new();
        for i in 1..=total {
            if i == self.page {
                s.push_str(&self.active_dot);
            } else {
                s.push_str(&self.inactive_dot);
            }
            if i < total {
                s.push(' ');
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_defaults() {
        let pager = Pager::new();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.total(), 0);
        assert_eq!(pager.total_pages(), 1);
        assert!(pager.on_first_page());
        assert!(pager.on_last_page());
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let pager = Pager::new().with_page_size(10).with_total_items(95);
        assert_eq!(pager.total_pages(), 10);

        let exact = Pager::new().with_page_size(10).with_total_items(100);
        assert_eq!(exact.total_pages(), 10);
    }

    #[test]
    fn test_set_page_in_and_out_of_range() {
        // 120 items at 50 per page: pages 1..=3, page 3 holds 20 items.
        let mut pager = Pager::new().with_page_size(50).with_total_items(120);

        assert!(pager.set_page(3));
        assert_eq!(pager.items_on_page(120), 20);
        assert_eq!(pager.slice_bounds(120), (100, 120));

        assert!(!pager.set_page(4));
        assert_eq!(pager.page(), 3);
        assert!(!pager.set_page(0));
    }

    #[test]
    fn test_set_page_noop_when_empty() {
        let mut pager = Pager::new().with_page_size(10);
        assert!(!pager.set_page(1));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(100);
        pager.set_page(7);

        pager.set_page_size(20).unwrap();
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.total_pages(), 5);
    }

    #[test]
    fn test_set_page_size_zero_rejected() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(100);
        pager.set_page(3);

        assert_eq!(pager.set_page_size(0), Err(InvalidPageSize));
        // Rejected sizes leave everything untouched.
        assert_eq!(pager.page_size(), 10);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(100);
        pager.set_page(10);

        pager.set_total_items(31);
        assert_eq!(pager.page(), 4);

        pager.set_total_items(0);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_prev_next_saturate() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(30);

        pager.prev_page();
        assert_eq!(pager.page(), 1);

        pager.next_page();
        pager.next_page();
        assert_eq!(pager.page(), 3);
        assert!(pager.on_last_page());

        pager.next_page();
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_key_update_navigates() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(30);

        let next: Msg = Box::new(KeyMsg {
            key: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
        });
        pager.update(&next);
        assert_eq!(pager.page(), 2);

        let prev: Msg = Box::new(KeyMsg {
            key: KeyCode::Char('h'),
            modifiers: KeyModifiers::NONE,
        });
        pager.update(&prev);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_views() {
        let mut pager = Pager::new().with_page_size(10).with_total_items(30);
        pager.set_page(2);
        assert_eq!(pager.view(), "2/3");

        pager.pager_type = PagerType::Dots;
        assert_eq!(pager.view(), "○ • ○");
    }
}

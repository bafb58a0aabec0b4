//! The datalist model: state, constructors, and synchronous operations.
//!
//! [`Model`] owns the full loaded record set and derives the visible page
//! from it; pagination is pure client-side slicing. Selection is tracked as
//! a per-row flag kept beside each record, spans every page, and is always
//! computed from the rows rather than cached. Everything that touches a
//! collaborator lives in the command constructors (see the methods defined
//! in `commands.rs`); the operations here mutate state synchronously and
//! never block.

use super::keys::DataListKeyMap;
use super::rendering::{DefaultRowDelegate, RowDelegate};
use super::source::{AutoConfirm, Confirmer, DataSource, Notifier, SilentNotifier};
use super::style::DataListStyles;
use super::types::{next_id, Filter, Record, Row};
use crate::pager::{InvalidPageSize, Pager};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_PAGE_SIZE: usize = 50;
const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// A data-backed list component with client-side pagination, cross-page
/// selection, debounced re-querying, and confirmation-gated deletion.
///
/// The model follows the Elm architecture used throughout this crate:
/// synchronous operations mutate state directly, network-touching operations
/// return `Cmd`s that settle as typed messages, and
/// [`update`](Model::update) folds those messages back into the state.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::{MemorySource, Model, Record};
/// use std::fmt;
/// use std::sync::Arc;
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
/// let source = Arc::new(MemorySource::new(vec![Tag("alpha".into())]));
/// let mut list: Model<Tag> = Model::new(source).with_title("Tags");
/// let load_cmd = list.load();
/// // Hand load_cmd to the bubbletea-rs runtime; rows arrive as a LoadedMsg.
/// ```
pub struct Model<R: Record> {
    pub(super) rows: Vec<Row<R>>,
    pub(super) pager: Pager,
    pub(super) filter: Filter,
    pub(super) is_loading: bool,

    pub(super) source: Arc<dyn DataSource<R>>,
    pub(super) confirmer: Arc<dyn Confirmer>,
    pub(super) notifier: Arc<dyn Notifier>,

    pub(super) id: i64,
    pub(super) debounce_tag: i64,
    pub(super) debounce: Duration,

    /// Title shown in the header.
    pub title: String,
    /// Confirmation prompt for deleting a single record.
    pub confirm_delete_one: String,
    /// Confirmation prompt for deleting the selected records.
    pub confirm_delete_selected: String,
    /// Confirmation prompt for deleting everything currently loaded.
    pub confirm_purge: String,
    /// Key bindings.
    pub keymap: DataListKeyMap,
    /// Styles applied by the view.
    pub styles: DataListStyles,

    pub(super) delegate: Box<dyn RowDelegate<R>>,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl<R: Record> Model<R> {
    /// Creates a datalist backed by the given source.
    ///
    /// Starts empty with a page size of 50, a 500 ms debounce interval, an
    /// [`AutoConfirm`] confirmer, and a [`SilentNotifier`]. Call
    /// [`load`](Model::load) to fetch the initial record set.
    pub fn new(source: Arc<dyn DataSource<R>>) -> Self {
        Self {
            rows: Vec::new(),
            pager: Pager::new().with_page_size(DEFAULT_PAGE_SIZE),
            filter: Filter::new(),
            is_loading: false,
            source,
            confirmer: Arc::new(AutoConfirm),
            notifier: Arc::new(SilentNotifier),
            id: next_id(),
            debounce_tag: 0,
            debounce: DEFAULT_DEBOUNCE,
            title: String::new(),
            confirm_delete_one: "Delete this record?".to_string(),
            confirm_delete_selected: "Delete the selected records?".to_string(),
            confirm_purge: "Delete ALL records? This cannot be undone.".to_string(),
            keymap: DataListKeyMap::default(),
            styles: DataListStyles::default(),
            delegate: Box::new(DefaultRowDelegate::new()),
            width: 80,
            height: 24,
        }
    }

    /// Sets the confirmer used to gate destructive operations (builder).
    pub fn with_confirmer(mut self, confirmer: Arc<dyn Confirmer>) -> Self {
        self.confirmer = confirmer;
        self
    }

    /// Sets the notifier that receives operation outcomes (builder).
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Sets the page size (builder). Sizes below 1 are clamped to 1; for
    /// fallible validation use [`set_page_size`](Model::set_page_size).
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.pager = self.pager.with_page_size(size);
        self
    }

    /// Sets the header title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the quiet interval for [`query_debounced`](Model::query_debounced)
    /// (builder).
    pub fn with_debounce(mut self, interval: Duration) -> Self {
        self.debounce = interval;
        self
    }

    /// Sets the row delegate used to render records (builder).
    pub fn with_delegate(mut self, delegate: Box<dyn RowDelegate<R>>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Sets the view dimensions (builder).
    pub fn with_dimensions(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the unique identifier of this datalist instance.
    ///
    /// Every message produced by this component carries this id, so several
    /// datalists can coexist in one program without crosstalk.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns true while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Returns the current query criteria.
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Returns the total number of loaded records (across all pages).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the full loaded record set, in load order.
    pub fn records(&self) -> Vec<R> {
        self.rows.iter().map(|row| row.record.clone()).collect()
    }

    /// Returns the records on the current page.
    ///
    /// The visible page is a pure function of the loaded rows and the pager:
    /// records `(page - 1) * page_size .. page * page_size`, with the last
    /// page possibly partial.
    pub fn visible_records(&self) -> Vec<R> {
        let (start, end) = self.pager.slice_bounds(self.rows.len());
        self.rows[start..end]
            .iter()
            .map(|row| row.record.clone())
            .collect()
    }

    /// Returns the pagination state.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Returns the current 1-based page number.
    pub fn page(&self) -> usize {
        self.pager.page()
    }

    /// Returns the current page size.
    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Moves to page `n` if it is in range; out-of-range requests are a
    /// no-op. Returns whether the page changed. Purely client-side.
    pub fn set_page(&mut self, n: usize) -> bool {
        self.pager.set_page(n)
    }

    /// Changes the page size and resets to page 1. Purely client-side: the
    /// loaded rows are re-sliced, nothing is fetched.
    ///
    /// A size of zero is rejected with [`InvalidPageSize`] before any state
    /// changes.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), InvalidPageSize> {
        self.pager.set_page_size(size)
    }

    /// Selects or deselects every loaded record, across all pages.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbletea_datalist::datalist::{MemorySource, Model, Record};
    /// # use std::sync::Arc;
    /// # #[derive(Clone)]
    /// # struct T(u32);
    /// # impl std::fmt::Display for T {
    /// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    /// #         write!(f, "{}", self.0)
    /// #     }
    /// # }
    /// # impl Record for T {
    /// #     type Id = u32;
    /// #     fn id(&self) -> u32 { self.0 }
    /// # }
    /// # let mut list: Model<T> = Model::new(Arc::new(MemorySource::new(vec![])));
    /// list.toggle_select_all(true);
    /// assert_eq!(list.selected_count(), list.len());
    /// ```
    pub fn toggle_select_all(&mut self, selected: bool) {
        for row in &mut self.rows {
            row.selected = selected;
        }
    }

    /// Deselects every record.
    pub fn clear_selection(&mut self) {
        self.toggle_select_all(false);
    }

    /// Sets the selection flag of a single record. Returns false if no
    /// loaded record has the given id.
    pub fn set_row_selected(&mut self, id: &R::Id, selected: bool) -> bool {
        match self.rows.iter_mut().find(|row| row.record.id() == *id) {
            Some(row) => {
                row.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Returns whether the record with the given id is selected.
    pub fn is_row_selected(&self, id: &R::Id) -> bool {
        self.rows
            .iter()
            .any(|row| row.selected && row.record.id() == *id)
    }

    /// Returns the selected records in load order, from every page.
    ///
    /// The selection flag is internal bookkeeping; callers get plain
    /// records.
    pub fn selected_records(&self) -> Vec<R> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.record.clone())
            .collect()
    }

    /// Returns the number of selected records.
    pub fn selected_count(&self) -> usize {
        self.rows.iter().filter(|row| row.selected).count()
    }

    /// Returns true if every loaded record is selected.
    ///
    /// Computed from the rows on every call, never cached. An empty list
    /// reports false.
    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(|row| row.selected)
    }

    /// Returns the view width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the view height in lines.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Updates the view dimensions.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Replaces the loaded rows with a freshly fetched record set.
    ///
    /// Selection is reset (the new rows may have nothing in common with the
    /// old ones), the pager total is updated, and the page is clamped back
    /// into range.
    pub(super) fn replace_records(&mut self, records: Vec<R>) {
        self.rows = records
            .into_iter()
            .map(|record| Row {
                record,
                selected: false,
            })
            .collect();
        self.pager.set_total_items(self.rows.len());
    }

    /// Removes the given ids from the loaded rows and re-clamps the pager.
    pub(super) fn remove_records(&mut self, ids: &[R::Id]) {
        self.rows.retain(|row| !ids.contains(&row.record.id()));
        self.pager.set_total_items(self.rows.len());
    }

    /// Ids of the selected records, in load order.
    pub(super) fn selected_ids(&self) -> Vec<R::Id> {
        self.rows
            .iter()
            .filter(|row| row.selected)
            .map(|row| row.record.id())
            .collect()
    }

    /// Ids of every loaded record, in load order.
    pub(super) fn all_ids(&self) -> Vec<R::Id> {
        self.rows.iter().map(|row| row.record.id()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datalist::source::MemorySource;

    #[derive(Clone, Debug, PartialEq)]
    struct Item(u32);

    impl std::fmt::Display for Item {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "item-{}", self.0)
        }
    }

    impl Record for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.0
        }
    }

    fn loaded(n: u32) -> Model<Item> {
        let mut model = Model::new(Arc::new(MemorySource::new(vec![])));
        model.replace_records((0..n).map(Item).collect());
        model
    }

    #[test]
    fn test_visible_page_is_a_slice() {
        let mut model = loaded(120);
        model.set_page_size(50).unwrap();

        assert!(model.set_page(3));
        let visible = model.visible_records();
        assert_eq!(visible.len(), 20);
        assert_eq!(visible.first(), Some(&Item(100)));
        assert_eq!(visible.last(), Some(&Item(119)));

        assert!(!model.set_page(4));
        assert_eq!(model.page(), 3);
    }

    #[test]
    fn test_set_page_size_resets_to_first_page() {
        let mut model = loaded(120);
        model.set_page_size(50).unwrap();
        model.set_page(2);

        model.set_page_size(30).unwrap();
        assert_eq!(model.page(), 1);
        assert_eq!(model.visible_records().len(), 30);
        assert_eq!(model.visible_records()[0], Item(0));
    }

    #[test]
    fn test_set_page_size_zero_rejected_without_side_effects() {
        let mut model = loaded(10);
        model.set_page_size(5).unwrap();
        model.set_page(2);

        assert!(model.set_page_size(0).is_err());
        assert_eq!(model.page_size(), 5);
        assert_eq!(model.page(), 2);
    }

    #[test]
    fn test_select_all_spans_every_page() {
        let mut model = loaded(120);
        model.set_page_size(50).unwrap();
        model.set_page(2);

        model.toggle_select_all(true);
        assert_eq!(model.selected_count(), 120);
        assert!(model.all_selected());

        // Deselecting one record breaks the all-selected state.
        model.set_row_selected(&7, false);
        assert!(!model.all_selected());
        assert_eq!(model.selected_count(), 119);
    }

    #[test]
    fn test_selected_records_in_load_order_without_flags() {
        let mut model = loaded(5);
        model.set_row_selected(&3, true);
        model.set_row_selected(&1, true);

        assert_eq!(model.selected_records(), vec![Item(1), Item(3)]);
        assert!(model.is_row_selected(&3));
        assert!(!model.is_row_selected(&0));
    }

    #[test]
    fn test_set_row_selected_unknown_id() {
        let mut model = loaded(3);
        assert!(!model.set_row_selected(&99, true));
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn test_all_selected_empty_list() {
        let model = loaded(0);
        assert!(!model.all_selected());
    }

    #[test]
    fn test_replace_records_resets_selection_and_clamps_page() {
        let mut model = loaded(100);
        model.set_page_size(10).unwrap();
        model.set_page(10);
        model.toggle_select_all(true);

        model.replace_records((0..25).map(Item).collect());
        assert_eq!(model.selected_count(), 0);
        assert_eq!(model.page(), 3);
        assert_eq!(model.len(), 25);
    }

    #[test]
    fn test_remove_records_clamps_page() {
        let mut model = loaded(11);
        model.set_page_size(10).unwrap();
        model.set_page(2);

        model.remove_records(&[10]);
        assert_eq!(model.len(), 10);
        assert_eq!(model.page(), 1);
    }
}

//! Core types and messages for the datalist component.
//!
//! This module contains the fundamental types the datalist is built from:
//! - [`Record`] trait for rows with a stable identity
//! - [`Filter`] for opaque query criteria passed through to the data source
//! - `Row` internal shadow struct carrying the per-row `selected` flag
//! - The typed messages the component's commands settle as

use super::source::{DeleteError, SourceError};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::atomic::{AtomicI64, Ordering};

// Internal ID management for datalist instances.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generates unique identifiers for datalist instances.
///
/// Every component instance gets its own id so several datalists can coexist
/// in one program; each instance ignores messages carrying another id. IDs
/// are generated atomically and start from 1.
pub(super) fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Trait for records that can be managed by a datalist.
///
/// The component treats record content as opaque; all it requires is a
/// stable identifier, used for selection bookkeeping and for addressing rows
/// in delete requests, plus a `Display` impl the default delegate renders.
/// The identifier must remain stable for the lifetime of the record on the
/// backend.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::Record;
/// use std::fmt;
///
/// #[derive(Clone)]
/// struct Tag {
///     name: String,
///     note: String,
/// }
///
/// impl fmt::Display for Tag {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{} ({})", self.name, self.note)
///     }
/// }
///
/// impl Record for Tag {
///     type Id = String;
///
///     fn id(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait Record: Display + Clone + Send + 'static {
    /// Stable identifier type for this record.
    type Id: Clone + PartialEq + Send + std::fmt::Debug + 'static;

    /// Returns the stable identifier of this record.
    fn id(&self) -> Self::Id;
}

/// Opaque query criteria forwarded verbatim to the data source.
///
/// The datalist never interprets filter contents; it only stores the current
/// filter and passes it to [`DataSource::fetch_all`](super::DataSource::fetch_all)
/// on every load. Keys are kept in sorted order so logs and tests are
/// deterministic.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::Filter;
///
/// let filter = Filter::new()
///     .with("name", "sensor")
///     .with("site", "lab-3");
/// assert_eq!(filter.get("site"), Some("lab-3"));
/// assert_eq!(filter.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter(BTreeMap<String, String>);

impl Filter {
    /// Creates an empty filter (matches everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a criterion (builder pattern).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Sets a criterion, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Removes a criterion, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns true if no criteria are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the criteria in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Internal representation of a loaded record plus its selection flag.
///
/// Selection is tracked beside the record, never inside it; accessors strip
/// the flag so callers only ever see their own record type.
#[derive(Debug, Clone)]
pub(super) struct Row<R: Record> {
    /// The record as returned by the data source.
    pub record: R,
    /// Whether this row is currently selected.
    pub selected: bool,
}

/// Which rows a delete operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteScope {
    /// A single record, addressed by id.
    One,
    /// All currently selected records, across every page.
    Selected,
    /// Every record currently loaded.
    All,
}

/// Message sent when a fetch completes successfully.
///
/// Processing this message replaces the full record set: rows are rebuilt
/// with selection cleared, the total is updated, and the page is clamped
/// back into range. If several loads overlap, each produces its own
/// `LoadedMsg` and the last one processed wins.
#[derive(Debug, Clone)]
pub struct LoadedMsg<R: Record> {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// The complete record set matching the filter at fetch time.
    pub records: Vec<R>,
}

/// Message sent when a fetch fails.
///
/// The previously loaded rows are kept untouched; only the loading flag is
/// cleared and the failure is reported through the notifier.
#[derive(Debug)]
pub struct LoadFailedMsg {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// What went wrong.
    pub error: SourceError,
}

/// Message sent when a delete operation was confirmed and acknowledged by
/// the data source.
///
/// Processing this message removes the deleted ids from the loaded rows
/// immediately, then resets to page 1 and chains a fresh load to reconcile
/// with the backend.
#[derive(Debug, Clone)]
pub struct DeletedMsg<R: Record> {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// Which rows the operation targeted.
    pub scope: DeleteScope,
    /// The ids the data source acknowledged deleting.
    pub record_ids: Vec<R::Id>,
}

/// Message sent when the user declined the confirmation prompt.
///
/// Declining is a normal outcome, not an error: no delete is issued, the
/// rows are untouched, and no failure is reported.
#[derive(Debug, Clone)]
pub struct DeleteCancelledMsg {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// Which rows the operation would have targeted.
    pub scope: DeleteScope,
}

/// Message sent when a confirmed delete fails at the data source.
///
/// The loaded rows are left as they were and no follow-up load is chained;
/// the failure is reported through the notifier.
#[derive(Debug)]
pub struct DeleteFailedMsg {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// Which rows the operation targeted.
    pub scope: DeleteScope,
    /// What went wrong.
    pub error: DeleteError,
}

/// Message sent when the debounce interval elapses after
/// [`query_debounced`](super::Model::query_debounced).
///
/// Carries the debounce `tag` current at scheduling time; the component
/// discards the message unless the tag still matches, so only the last of a
/// burst of query updates triggers a load.
#[derive(Debug, Clone)]
pub struct RequeryMsg {
    /// The id of the datalist this message targets.
    pub id: i64,
    /// Debounce generation this message belongs to.
    pub(super) tag: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_unique_and_positive() {
        let a = next_id();
        let b = next_id();
        assert!(a > 0);
        assert!(b > a);
    }

    #[test]
    fn test_filter_accessors() {
        let mut filter = Filter::new().with("name", "pump");
        assert!(!filter.is_empty());
        assert_eq!(filter.get("name"), Some("pump"));
        assert_eq!(filter.get("site"), None);

        filter.set("name", "valve");
        assert_eq!(filter.get("name"), Some("valve"));
        assert_eq!(filter.len(), 1);

        assert_eq!(filter.remove("name"), Some("valve".to_string()));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_filter_iterates_in_key_order() {
        let filter = Filter::new().with("b", "2").with("a", "1").with("c", "3");
        let keys: Vec<&str> = filter.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}

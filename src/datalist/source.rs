//! Collaborator contracts for the datalist component.
//!
//! The datalist never talks to a backend, a dialog, or a toast system
//! directly. It works against three small traits:
//! - [`DataSource`] — wholesale fetch and bulk delete of records
//! - [`Confirmer`] — asks the user to approve a destructive operation
//! - [`Notifier`] — fire-and-forget success/error reporting
//!
//! All async contract methods return boxed futures so implementations can be
//! stored behind `Arc<dyn ...>` trait objects and moved into commands.
//!
//! Ready-to-use implementations ship beside the traits: [`MemorySource`]
//! serves records from memory (demos and tests), [`AutoConfirm`] approves
//! everything, and [`SilentNotifier`] drops notifications.

use super::types::{Filter, Record};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Boxed future type returned by the async collaborator methods.
///
/// Implementations typically build these with `Box::pin(async move { .. })`.
pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Error produced by a [`DataSource`] operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),
    /// The backend was reached but refused the request.
    #[error("server error ({status}): {message}")]
    Server {
        /// Status code reported by the backend.
        status: u16,
        /// Human-readable message reported by the backend.
        message: String,
    },
}

/// Error produced when a [`Confirmer`] fails to obtain an answer.
///
/// This is distinct from the user declining, which is a normal outcome and
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("confirmation failed: {0}")]
pub struct ConfirmError(
    /// Reason the prompt failed to produce an answer.
    pub String,
);

/// Error produced by a delete operation, from either collaborator involved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeleteError {
    /// The data source rejected or failed the delete.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The confirmation prompt itself failed.
    #[error(transparent)]
    Confirm(#[from] ConfirmError),
}

/// Abstract record store the datalist loads from and deletes against.
///
/// `fetch_all` is wholesale: it returns every record matching the filter, and
/// the component pages through the result client-side. `delete` removes the
/// addressed records in one request; partial failures are reported as a
/// single error for the whole batch.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::{BoxFuture, DataSource, Filter, Record, SourceError};
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
/// struct StaticSource;
///
/// impl DataSource<Tag> for StaticSource {
///     fn fetch_all(&self, _filter: &Filter) -> BoxFuture<Result<Vec<Tag>, SourceError>> {
///         Box::pin(async { Ok(vec![Tag("alpha".into()), Tag("beta".into())]) })
///     }
///
///     fn delete(&self, _ids: Vec<String>) -> BoxFuture<Result<(), SourceError>> {
///         Box::pin(async { Ok(()) })
///     }
/// }
/// ```
pub trait DataSource<R: Record>: Send + Sync {
    /// Fetches every record matching the filter.
    fn fetch_all(&self, filter: &Filter) -> BoxFuture<Result<Vec<R>, SourceError>>;

    /// Deletes the records with the given ids.
    ///
    /// Succeeds only if the whole batch was deleted; the error covers the
    /// batch as a unit.
    fn delete(&self, ids: Vec<R::Id>) -> BoxFuture<Result<(), SourceError>>;
}

/// Asks the user to approve a destructive operation.
///
/// Returns `Ok(true)` when the user approves and `Ok(false)` when they
/// decline. Declining is a normal outcome; `Err` is reserved for the prompt
/// itself failing (dialog dismissed by the runtime, channel closed, and so
/// on).
pub trait Confirmer: Send + Sync {
    /// Presents `message` and resolves with the user's answer.
    fn confirm(&self, message: &str) -> BoxFuture<Result<bool, ConfirmError>>;
}

/// Fire-and-forget reporting of operation outcomes.
///
/// The datalist calls these after loads and deletes settle; implementations
/// typically surface them as status-bar text or toasts. Failures here must
/// not affect component state, so the methods are infallible by contract.
pub trait Notifier: Send + Sync {
    /// Reports a successful operation.
    fn success(&self, message: &str);

    /// Reports a failed operation.
    fn error(&self, message: &str);
}

/// An in-memory [`DataSource`] for demos and tests.
///
/// Serves a snapshot of its current records on every fetch and deletes by
/// id. The filter is accepted but ignored; this source has no query
/// semantics of its own.
///
/// # Examples
///
/// ```
/// use bubbletea_datalist::datalist::{MemorySource, Record};
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
/// let source = MemorySource::new(vec![Tag("alpha".into()), Tag("beta".into())]);
/// assert_eq!(source.len(), 2);
/// ```
pub struct MemorySource<R: Record> {
    records: Arc<Mutex<Vec<R>>>,
}

impl<R: Record> MemorySource<R> {
    /// Creates a source serving the given records.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Returns the number of records currently stored.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<R>> {
        // A poisoned lock only means another thread panicked mid-access;
        // the Vec itself is still usable.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<R: Record> DataSource<R> for MemorySource<R> {
    fn fetch_all(&self, _filter: &Filter) -> BoxFuture<Result<Vec<R>, SourceError>> {
        let snapshot = self.lock().clone();
        Box::pin(async move { Ok(snapshot) })
    }

    fn delete(&self, ids: Vec<R::Id>) -> BoxFuture<Result<(), SourceError>> {
        // Mutate when the command runs, not when it is built; a dropped
        // command must leave the store untouched.
        let records = Arc::clone(&self.records);
        Box::pin(async move {
            records
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .retain(|r| !ids.contains(&r.id()));
            Ok(())
        })
    }
}

/// A [`Confirmer`] that approves every request without prompting.
///
/// Useful in demos and tests, or when an application wants deletes to be
/// immediate.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmer for AutoConfirm {
    fn confirm(&self, _message: &str) -> BoxFuture<Result<bool, ConfirmError>> {
        Box::pin(async { Ok(true) })
    }
}

/// A [`Notifier`] that discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[tokio::test]
    async fn test_memory_source_fetch_snapshot() {
        let source = MemorySource::new(vec![Item(1), Item(2), Item(3)]);
        let records = source.fetch_all(&Filter::new()).await.unwrap();
        assert_eq!(records, vec![Item(1), Item(2), Item(3)]);
    }

    #[tokio::test]
    async fn test_memory_source_delete_by_id() {
        let source = MemorySource::new(vec![Item(1), Item(2), Item(3)]);
        source.delete(vec![1, 3]).await.unwrap();

        let records = source.fetch_all(&Filter::new()).await.unwrap();
        assert_eq!(records, vec![Item(2)]);
        assert_eq!(source.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_source_delete_only_mutates_when_awaited() {
        let source = MemorySource::new(vec![Item(1), Item(2)]);

        let pending = source.delete(vec![1]);
        assert_eq!(source.len(), 2);
        drop(pending);
        assert_eq!(source.len(), 2);

        source.delete(vec![1]).await.unwrap();
        assert_eq!(source.len(), 1);
    }

    #[tokio::test]
    async fn test_auto_confirm_approves() {
        assert_eq!(AutoConfirm.confirm("sure?").await, Ok(true));
    }

    #[test]
    fn test_delete_error_from_source() {
        let err: DeleteError = SourceError::Network("timeout".into()).into();
        assert_eq!(err.to_string(), "network error: timeout");
    }
}

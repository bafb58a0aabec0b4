//! A data-backed list component with client-side pagination, cross-page
//! selection, debounced re-querying, and confirmation-gated deletion.
//!
//! The datalist loads its entire record set from a [`DataSource`] in one
//! fetch and pages through it locally; changing the page or the page size
//! never hits the network. Rows can be selected individually or all at once,
//! across every page, and the selection feeds the batch delete operations.
//! Destructive operations are gated on a [`Confirmer`], and outcomes are
//! reported through a [`Notifier`].
//!
//! # Architecture
//!
//! The component follows the Elm architecture used by `bubbletea-rs`:
//! operations that touch a collaborator return a `Cmd` which settles as a
//! typed message ([`LoadedMsg`], [`DeletedMsg`], ...), and
//! [`Model::update`] folds those messages back into the state. All state
//! mutation is synchronous inside `update`; there are no locks and no
//! background mutation.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_datalist::datalist::{MemorySource, Model, Record};
//! use std::fmt;
//! use std::sync::Arc;
//!
//! #[derive(Clone)]
//! struct Tag {
//!     name: String,
//! }
//!
//! impl fmt::Display for Tag {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "{}", self.name)
//!     }
//! }
//!
//! impl Record for Tag {
//!     type Id = String;
//!     fn id(&self) -> String {
//!         self.name.clone()
//!     }
//! }
//!
//! let source = Arc::new(MemorySource::new(vec![
//!     Tag { name: "alpha".into() },
//!     Tag { name: "beta".into() },
//! ]));
//!
//! let mut list: Model<Tag> = Model::new(source)
//!     .with_title("Tags")
//!     .with_page_size(50);
//!
//! // Kick off the initial fetch; rows arrive as a LoadedMsg through update.
//! let load_cmd = list.load();
//! ```
//!
//! # Message Routing
//!
//! Every message carries the id of the datalist that issued the command, and
//! `update` ignores messages addressed to other instances, so several
//! datalists can live in one program. Forward all messages to each
//! instance's `update`; each picks out its own.

mod commands;
mod keys;
mod model;
mod rendering;
mod source;
mod style;
mod types;

pub use keys::DataListKeyMap;
pub use model::Model;
pub use rendering::{DefaultRowDelegate, RowDelegate};
pub use source::{
    AutoConfirm, BoxFuture, ConfirmError, Confirmer, DataSource, DeleteError, MemorySource,
    Notifier, SilentNotifier, SourceError,
};
pub use style::{DataListStyles, ELLIPSIS, SELECTED_MARKER, UNSELECTED_MARKER};
pub use types::{
    DeleteCancelledMsg, DeleteFailedMsg, DeleteScope, DeletedMsg, Filter, LoadFailedMsg, LoadedMsg,
    Record, RequeryMsg,
};

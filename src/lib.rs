#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datalist/")]

//! # bubbletea-datalist
//!
//! A data-backed list controller component for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! terminal applications: load a record set from an abstract async data
//! source, page through it client-side, select rows across pages, re-query
//! with debouncing, and delete records behind a confirmation prompt.
//!
//! ## Overview
//!
//! The crate follows the Elm Architecture pattern used throughout the
//! bubbletea ecosystem. The [`datalist::Model`] owns the loaded records and
//! all UI state; operations that touch the backend return `Cmd`s that settle
//! as typed messages, and `update()` folds those messages back into the
//! state. Backend, confirmation dialog, and notifications are abstract
//! collaborators ([`datalist::DataSource`], [`datalist::Confirmer`],
//! [`datalist::Notifier`]), so the component is UI-framework-complete but
//! backend-agnostic.
//!
//! ## Features
//!
//! - **Wholesale loading** with pure client-side pagination: page and
//!   page-size changes re-slice the loaded rows, no network round-trips
//! - **Cross-page selection** with select-all, tracked beside the records
//!   and stripped before records are handed back to callers
//! - **Debounced re-query**: rapid filter updates collapse into a single
//!   fetch after a quiet interval (500 ms by default)
//! - **Confirmation-gated deletion** of one record, the selection, or the
//!   whole list; declining is a normal outcome that never touches the source
//! - **Type-safe key bindings** via the [`key`] module, rebindable per
//!   instance
//! - **Adaptive styling** through lipgloss, readable on light and dark
//!   terminals
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! bubbletea-datalist = "0.1.0"
//! bubbletea-rs = "0.0.7"
//! crossterm = "0.29"
//! ```
//!
//! ```rust
//! use bubbletea_datalist::prelude::*;
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
//! let source = Arc::new(MemorySource::new(vec![Tag { name: "alpha".into() }]));
//! let mut list: DataList<Tag> = DataList::new(source).with_title("Tags");
//!
//! // In your bubbletea-rs model:
//! //   init:   return list.load()
//! //   update: forward every Msg to list.update(msg)
//! //   view:   render list.view()
//! let _cmd = list.load();
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`datalist`] | The list controller component and its collaborators |
//! | [`pager`] | Standalone 1-based pagination cursor |
//! | [`key`] | Minimal key-binding support for keymaps |

pub mod datalist;
pub mod key;
pub mod pager;

/// Convenience re-exports of the most commonly used types.
///
/// ```rust
/// use bubbletea_datalist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::datalist::{
        AutoConfirm, Confirmer, DataListKeyMap, DataListStyles, DataSource, DefaultRowDelegate,
        DeleteScope, Filter, MemorySource, Model as DataList, Notifier, Record, RowDelegate,
        SilentNotifier,
    };
    pub use crate::datalist::{
        DeleteCancelledMsg, DeleteFailedMsg, DeletedMsg, LoadFailedMsg, LoadedMsg, RequeryMsg,
    };
    pub use crate::key::Binding;
    pub use crate::pager::{InvalidPageSize, Pager, PagerKeyMap, PagerType};
}

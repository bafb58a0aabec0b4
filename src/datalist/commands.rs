//! Async command constructors and message handling for the datalist.
//!
//! Everything that touches a collaborator goes through here. Each operation
//! returns a `Cmd` that performs the async work and settles as one of the
//! typed messages in `types.rs`; [`Model::update`] folds those messages back
//! into the state and chains follow-up commands where needed.
//!
//! Delete operations are gated on the confirmer inside the command itself:
//! the data source is only contacted after an approval, and a decline
//! settles as [`DeleteCancelledMsg`] without any source traffic.

use super::model::Model;
use super::types::{
    DeleteCancelledMsg, DeleteFailedMsg, DeleteScope, DeletedMsg, Filter, LoadFailedMsg, LoadedMsg,
    Record, RequeryMsg,
};
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use std::sync::Arc;
use tracing::{debug, warn};

impl<R: Record> Model<R> {
    /// Fetches the full record set matching the current filter.
    ///
    /// Marks the model as loading and returns a command that resolves to
    /// [`LoadedMsg`] on success or [`LoadFailedMsg`] on failure. The loaded
    /// rows are not touched until the success message is processed, so a
    /// failed fetch leaves the previous records visible.
    ///
    /// If several loads overlap, every command settles and the last message
    /// processed wins. The component does not cancel or serialize in-flight
    /// fetches; debounce query updates with
    /// [`query_debounced`](Model::query_debounced) to avoid races.
    pub fn load(&mut self) -> Cmd {
        self.is_loading = true;
        let id = self.id;
        debug!(id, "fetching records");
        let fut = self.source.fetch_all(&self.filter);
        Box::pin(async move {
            match fut.await {
                Ok(records) => Some(Box::new(LoadedMsg { id, records }) as Msg),
                Err(error) => Some(Box::new(LoadFailedMsg { id, error }) as Msg),
            }
        })
    }

    /// Resets to page 1 and fetches the full record set.
    ///
    /// Use this when the query context changed and the old page position is
    /// meaningless; use [`load`](Model::load) to refresh in place.
    pub fn reload(&mut self) -> Cmd {
        self.pager.set_page(1);
        self.load()
    }

    /// Replaces the filter and schedules a debounced reload.
    ///
    /// Each call bumps the debounce generation and returns a timer command;
    /// when it fires, [`Model::update`] discards it unless its generation is
    /// still current. A burst of calls within the quiet interval (500 ms by
    /// default, see [`with_debounce`](Model::with_debounce)) therefore
    /// triggers exactly one fetch, carrying the last filter.
    pub fn query_debounced(&mut self, filter: Filter) -> Cmd {
        self.filter = filter;
        self.debounce_tag += 1;
        let id = self.id;
        let tag = self.debounce_tag;
        tick(self.debounce, move |_| {
            Box::new(RequeryMsg { id, tag }) as Msg
        })
    }

    /// Deletes a single record, gated on confirmation.
    ///
    /// Returns a command that prompts with
    /// [`confirm_delete_one`](Model::confirm_delete_one) and, if approved,
    /// asks the source to delete the record. Settles as [`DeletedMsg`],
    /// [`DeleteCancelledMsg`], or [`DeleteFailedMsg`]. A successful delete
    /// chains [`reload`](Model::reload), so the list lands on page 1.
    pub fn delete_one(&self, record: &R) -> Cmd {
        self.confirm_then_delete(
            DeleteScope::One,
            vec![record.id()],
            self.confirm_delete_one.clone(),
        )
    }

    /// Deletes every selected record, gated on confirmation.
    ///
    /// Returns `None` when nothing is selected; in that case no collaborator
    /// is contacted at all. The selection snapshot is taken now, so rows
    /// selected or deselected after this call are unaffected.
    pub fn delete_selected(&self) -> Option<Cmd> {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return None;
        }
        Some(self.confirm_then_delete(
            DeleteScope::Selected,
            ids,
            self.confirm_delete_selected.clone(),
        ))
    }

    /// Deletes every record currently loaded, gated on confirmation.
    ///
    /// Returns `None` when the list is empty. The prompt is
    /// [`confirm_purge`](Model::confirm_purge), which should make the blast
    /// radius unmistakable.
    pub fn purge_all(&self) -> Option<Cmd> {
        let ids = self.all_ids();
        if ids.is_empty() {
            return None;
        }
        Some(self.confirm_then_delete(DeleteScope::All, ids, self.confirm_purge.clone()))
    }

    fn confirm_then_delete(&self, scope: DeleteScope, ids: Vec<R::Id>, message: String) -> Cmd {
        let id = self.id;
        let confirmer = Arc::clone(&self.confirmer);
        let source = Arc::clone(&self.source);
        Box::pin(async move {
            match confirmer.confirm(&message).await {
                Ok(false) => Some(Box::new(DeleteCancelledMsg { id, scope }) as Msg),
                Err(error) => Some(Box::new(DeleteFailedMsg {
                    id,
                    scope,
                    error: error.into(),
                }) as Msg),
                Ok(true) => match source.delete(ids.clone()).await {
                    Ok(()) => Some(Box::new(DeletedMsg::<R> {
                        id,
                        scope,
                        record_ids: ids,
                    }) as Msg),
                    Err(error) => Some(Box::new(DeleteFailedMsg {
                        id,
                        scope,
                        error: error.into(),
                    }) as Msg),
                },
            }
        })
    }

    /// Processes messages and updates the datalist state.
    ///
    /// Handles this component's own messages (identified by id) and key
    /// presses matching the keymap; everything else is ignored. Returns a
    /// follow-up command when one is needed, for example the reconciling
    /// fetch after a successful delete.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(loaded) = msg.downcast_ref::<LoadedMsg<R>>() {
            if loaded.id != self.id {
                return None;
            }
            debug!(id = self.id, count = loaded.records.len(), "records loaded");
            self.replace_records(loaded.records.clone());
            self.is_loading = false;
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<LoadFailedMsg>() {
            if failed.id != self.id {
                return None;
            }
            warn!(id = self.id, error = %failed.error, "fetch failed");
            self.is_loading = false;
            self.notifier.error(&format!("load failed: {}", failed.error));
            return None;
        }

        if let Some(deleted) = msg.downcast_ref::<DeletedMsg<R>>() {
            if deleted.id != self.id {
                return None;
            }
            debug!(
                id = self.id,
                count = deleted.record_ids.len(),
                scope = ?deleted.scope,
                "records deleted"
            );
            self.remove_records(&deleted.record_ids);
            let n = deleted.record_ids.len();
            if n == 1 {
                self.notifier.success("1 record deleted");
            } else {
                self.notifier.success(&format!("{} records deleted", n));
            }
            // Reconcile with the backend, back on the first page.
            return Some(self.reload());
        }

        if let Some(cancelled) = msg.downcast_ref::<DeleteCancelledMsg>() {
            if cancelled.id != self.id {
                return None;
            }
            debug!(id = self.id, scope = ?cancelled.scope, "delete declined");
            return None;
        }

        if let Some(failed) = msg.downcast_ref::<DeleteFailedMsg>() {
            if failed.id != self.id {
                return None;
            }
            warn!(id = self.id, error = %failed.error, "delete failed");
            self.notifier
                .error(&format!("delete failed: {}", failed.error));
            return None;
        }

        if let Some(requery) = msg.downcast_ref::<RequeryMsg>() {
            if requery.id != self.id || requery.tag != self.debounce_tag {
                // Stale generation: a newer query update superseded this one.
                return None;
            }
            return Some(self.reload());
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.next_page.matches(key_msg) {
            self.pager.next_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            self.pager.prev_page();
        } else if self.keymap.toggle_select_all.matches(key_msg) {
            let select = !self.all_selected();
            self.toggle_select_all(select);
        } else if self.keymap.clear_selection.matches(key_msg) {
            self.clear_selection();
        } else if self.keymap.refresh.matches(key_msg) {
            return Some(self.reload());
        } else if self.keymap.delete_selection.matches(key_msg) {
            return self.delete_selected();
        }
        None
    }
}

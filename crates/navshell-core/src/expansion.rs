//! Persisted expansion state
//!
//! Single owner of the "pinned/expanded" flag and the open-group set. Every
//! mutation writes through to storage immediately and, for the expanded
//! flag, re-applies the document style flag read by the surrounding layout.
//! Persistence is best-effort: failures are logged and the in-memory state
//! stays authoritative for the session.

use crate::config::ShellConfig;
use crate::nav::GroupId;
use crate::storage::KeyValueStore;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Durable sidebar state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpansionState {
    pub sidebar_expanded: bool,
    pub open_groups: BTreeSet<GroupId>,
}

impl ExpansionState {
    pub fn is_group_open(&self, id: &GroupId) -> bool {
        self.open_groups.contains(id)
    }
}

/// Sink for the document-level style flag (a body class in browsers)
pub trait StyleFlag {
    fn apply(&self, name: &str, enabled: bool);
}

impl<T: StyleFlag + ?Sized> StyleFlag for Arc<T> {
    fn apply(&self, name: &str, enabled: bool) {
        (**self).apply(name, enabled)
    }
}

/// Style flag for hosts without a document
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStyleFlag;

impl StyleFlag for NoopStyleFlag {
    fn apply(&self, _name: &str, _enabled: bool) {}
}

/// Style flag that records every application
#[derive(Debug, Clone, Default)]
pub struct RecordingStyleFlag {
    applied: Arc<Mutex<Vec<(String, bool)>>>,
}

impl RecordingStyleFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value applied for `name`
    pub fn current(&self, name: &str) -> Option<bool> {
        self.applied
            .lock()
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, enabled)| *enabled)
    }

    pub fn history(&self) -> Vec<(String, bool)> {
        self.applied.lock().clone()
    }
}

impl StyleFlag for RecordingStyleFlag {
    fn apply(&self, name: &str, enabled: bool) {
        self.applied.lock().push((name.to_string(), enabled));
    }
}

/// Owner of [`ExpansionState`] and its persistence
pub struct ExpansionStore<S, F = NoopStyleFlag> {
    storage: S,
    flag: F,
    expanded_key: String,
    open_groups_key: String,
    expanded_class: String,
    persist_open_groups: bool,
    state: ExpansionState,
    last_write_failed: bool,
}

impl<S: KeyValueStore, F: StyleFlag> ExpansionStore<S, F> {
    /// Create the store, load persisted state and apply the style flag
    pub fn open(storage: S, flag: F, config: &ShellConfig) -> Self {
        let mut store = Self {
            storage,
            flag,
            expanded_key: config.storage_key.clone(),
            open_groups_key: config.open_groups_key.clone(),
            expanded_class: config.expanded_class.clone(),
            persist_open_groups: config.persist_open_groups,
            state: ExpansionState::default(),
            last_write_failed: false,
        };
        store.state = store.load();
        store.apply_flag();
        store
    }

    /// Read persisted state; missing, unreadable or corrupt data yields defaults
    pub fn load(&self) -> ExpansionState {
        let sidebar_expanded = match self.storage.get(&self.expanded_key) {
            Ok(Some(raw)) => match raw.as_str() {
                "true" => true,
                "false" => false,
                other => {
                    warn!(key = %self.expanded_key, value = other, "Corrupt expanded flag, using default");
                    false
                }
            },
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "Storage unavailable, sidebar starts collapsed");
                false
            }
        };

        let open_groups = if self.persist_open_groups {
            self.load_open_groups()
        } else {
            BTreeSet::new()
        };

        ExpansionState {
            sidebar_expanded,
            open_groups,
        }
    }

    fn load_open_groups(&self) -> BTreeSet<GroupId> {
        match self.storage.get(&self.open_groups_key) {
            Ok(Some(raw)) => serde_json::from_str::<Vec<GroupId>>(&raw)
                .map(|ids| ids.into_iter().collect())
                .unwrap_or_else(|e| {
                    warn!(key = %self.open_groups_key, error = %e, "Corrupt open-group set, using default");
                    BTreeSet::new()
                }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!(error = %e, "Storage unavailable, all groups start closed");
                BTreeSet::new()
            }
        }
    }

    pub fn state(&self) -> &ExpansionState {
        &self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.sidebar_expanded
    }

    pub fn is_group_open(&self, id: &GroupId) -> bool {
        self.state.is_group_open(id)
    }

    /// Whether the most recent write to storage failed
    pub fn last_write_failed(&self) -> bool {
        self.last_write_failed
    }

    pub fn set_expanded(&mut self, expanded: bool) -> &ExpansionState {
        self.state.sidebar_expanded = expanded;
        debug!(expanded, "Sidebar expanded mode changed");
        let value = if expanded { "true" } else { "false" };
        let result = self.storage.set(&self.expanded_key, value);
        self.record_write(result);
        self.apply_flag();
        &self.state
    }

    /// Flip membership of `id` in the open-group set
    pub fn toggle_group(&mut self, id: &GroupId) -> &ExpansionState {
        let open = !self.state.is_group_open(id);
        self.set_group_open(id, open)
    }

    pub fn set_group_open(&mut self, id: &GroupId, open: bool) -> &ExpansionState {
        let changed = if open {
            self.state.open_groups.insert(id.clone())
        } else {
            self.state.open_groups.remove(id)
        };
        if changed {
            debug!(group = %id, open, "Group open state changed");
            self.persist_open_groups();
        }
        &self.state
    }

    /// Forget persisted state and return to defaults
    pub fn reset(&mut self) -> &ExpansionState {
        // Both keys, whatever persist_open_groups says now
        let result = self
            .storage
            .remove(&self.expanded_key)
            .and_then(|_| self.storage.remove(&self.open_groups_key));
        self.record_write(result);
        self.state = ExpansionState::default();
        self.apply_flag();
        &self.state
    }

    fn persist_open_groups(&mut self) {
        if !self.persist_open_groups {
            return;
        }
        let ids: Vec<&GroupId> = self.state.open_groups.iter().collect();
        let result = match serde_json::to_string(&ids) {
            Ok(raw) => self.storage.set(&self.open_groups_key, &raw),
            Err(source) => Err(crate::error::NavError::Serialize {
                message: "open groups".to_string(),
                source,
            }),
        };
        self.record_write(result);
    }

    fn record_write(&mut self, result: crate::error::Result<()>) {
        self.last_write_failed = match result {
            Ok(()) => false,
            Err(e) => {
                warn!(error = %e, "Failed to persist sidebar state, keeping in-memory value");
                true
            }
        };
    }

    fn apply_flag(&self) {
        self.flag
            .apply(&self.expanded_class, self.state.sidebar_expanded);
    }
}

//! Advisory in-flight markers keyed by record id.
//!
//! A view claims an id before sending a mutation and the claim is released when it is dropped,
//! including when the action future itself is cancelled. The marker set lives behind a shared
//! handle, so other tasks can observe it while the owning view is busy.

use crate::error::{ConsoleError, ConsoleResult};
use memoraid_types::RecordId;
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::watch;

#[derive(Clone)]
pub struct InFlight {
    ids: Arc<watch::Sender<BTreeSet<RecordId>>>,
}

impl Default for InFlight {
    fn default() -> Self {
        let (ids, _) = watch::channel(BTreeSet::new());
        Self { ids: Arc::new(ids) }
    }
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.borrow().contains(&id)
    }

    pub fn ids(&self) -> BTreeSet<RecordId> {
        self.ids.borrow().clone()
    }

    /// Mark `id` as in flight, or fail with [`ConsoleError::Busy`] if it already is.
    pub(crate) fn claim(&self, id: RecordId) -> ConsoleResult<Claim> {
        if self.ids.send_if_modified(|ids| ids.insert(id)) {
            Ok(Claim {
                ids: self.ids.clone(),
                id,
            })
        } else {
            Err(ConsoleError::Busy(id))
        }
    }
}

/// Releases its id on drop.
pub(crate) struct Claim {
    ids: Arc<watch::Sender<BTreeSet<RecordId>>>,
    id: RecordId,
}

impl Drop for Claim {
    fn drop(&mut self) {
        let id = self.id;
        self.ids.send_modify(|ids| {
            ids.remove(&id);
        });
    }
}

//! Link request approvals.
//!
//! Holds two snapshots, the pending queue and the processed history. After the backend accepts
//! an action both are refetched together and replaced only if both calls succeed. When either
//! fails the view is marked stale: [`ApprovalsView::classify`] and [`ApprovalsView::apply`]
//! refuse to answer until [`ApprovalsView::refresh`] succeeds, so a request is never offered
//! actions for a state the backend has already moved it out of.

use crate::error::{ConsoleError, ConsoleResult};
use crate::in_flight::InFlight;
use crate::notice::Notice;
use memoraid_client::{AdminApi, ClientResult};
use memoraid_core::constants::{NOTICE_APPROVAL_FAILED, NOTICE_REFRESH_FAILED};
use memoraid_core::{classify, ApprovalAction, Classification};
use memoraid_types::{LinkRequest, RecordId};
use std::sync::Arc;

pub struct ApprovalsView<A> {
    api: Arc<A>,
    pending: Vec<LinkRequest>,
    history: Vec<LinkRequest>,
    loading: bool,
    stale: bool,
    processing: InFlight,
    notice: Option<Notice>,
}

impl<A: AdminApi> ApprovalsView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_in_flight(api, InFlight::new())
    }

    /// Like [`ApprovalsView::new`], sharing `processing` markers with other views.
    pub fn with_in_flight(api: Arc<A>, processing: InFlight) -> Self {
        Self {
            api,
            pending: Vec::new(),
            history: Vec::new(),
            loading: true,
            stale: false,
            processing,
            notice: None,
        }
    }

    pub fn pending(&self) -> &[LinkRequest] {
        &self.pending
    }

    pub fn history(&self) -> &[LinkRequest] {
        &self.history
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True after an accepted action whose follow-up refetch failed.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn is_processing(&self, id: RecordId) -> bool {
        self.processing.contains(id)
    }

    /// Handle to the markers of requests with an action in flight, readable while this view
    /// is busy.
    pub fn in_flight(&self) -> InFlight {
        self.processing.clone()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn find(&self, id: RecordId) -> Option<&LinkRequest> {
        self.pending
            .iter()
            .chain(self.history.iter())
            .find(|r| r.id == id)
    }

    /// Classify a request from the current snapshot.
    ///
    /// Fails with [`ConsoleError::StaleSnapshot`] while the lists are stale.
    pub fn classify(&self, id: RecordId) -> ConsoleResult<Classification> {
        if self.stale {
            return Err(ConsoleError::StaleSnapshot);
        }
        self.find(id)
            .map(classify)
            .ok_or(ConsoleError::NotFound(id))
    }

    async fn fetch_both(&self) -> ClientResult<(Vec<LinkRequest>, Vec<LinkRequest>)> {
        let (pending, history) = tokio::join!(
            self.api.list_pending_approvals(),
            self.api.list_approval_history()
        );
        Ok((pending?, history?))
    }

    /// Fetch both lists. On failure the previous snapshots are kept.
    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.fetch_both().await;
        self.loading = false;
        match result {
            Ok((pending, history)) => {
                self.pending = pending;
                self.history = history;
                self.stale = false;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching link requests");
                Err(err.into())
            }
        }
    }

    /// Send `action` for request `id` and refetch both lists.
    ///
    /// Actions the current state does not offer are refused without a backend call. Requests
    /// missing from the snapshot are passed through; the backend has the final say on them.
    pub async fn apply(&mut self, id: RecordId, action: ApprovalAction) -> ConsoleResult<()> {
        if self.stale {
            return Err(ConsoleError::StaleSnapshot);
        }
        if let Some(request) = self.find(id) {
            classify(request).ensure_allows(action)?;
        }

        let claim = self.processing.claim(id)?;
        self.notice = None;
        let sent = self.api.process_approval(id, action).await;
        drop(claim);

        if let Err(err) = sent {
            tracing::error!(request_id = id, %action, error = %err, "error processing link request");
            self.notice = Some(Notice::error(NOTICE_APPROVAL_FAILED));
            return Err(err.into());
        }

        match self.fetch_both().await {
            Ok((pending, history)) => {
                self.pending = pending;
                self.history = history;
            }
            Err(err) => {
                tracing::warn!(request_id = id, error = %err, "link request lists are stale after {action}");
                self.stale = true;
                self.notice = Some(Notice::error(NOTICE_REFRESH_FAILED));
            }
        }
        Ok(())
    }
}

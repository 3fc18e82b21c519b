//! User directory with the account status toggle.

use crate::error::{ConsoleError, ConsoleResult};
use crate::in_flight::InFlight;
use crate::notice::Notice;
use memoraid_client::AdminApi;
use memoraid_core::constants::NOTICE_STATUS_FAILED;
use memoraid_core::{plan_toggle, StatusChange, UserFilter};
use memoraid_types::{RecordId, User};
use std::sync::Arc;

pub struct UsersView<A> {
    api: Arc<A>,
    users: Vec<User>,
    loading: bool,
    processing: InFlight,
    notice: Option<Notice>,
}

impl<A: AdminApi> UsersView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_in_flight(api, InFlight::new())
    }

    pub fn with_in_flight(api: Arc<A>, processing: InFlight) -> Self {
        Self {
            api,
            users: Vec::new(),
            loading: true,
            processing,
            notice: None,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn filtered<'a>(&'a self, filter: &'a UserFilter) -> Vec<&'a User> {
        filter.apply(&self.users).collect()
    }

    pub fn find(&self, id: RecordId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_processing(&self, id: RecordId) -> bool {
        self.processing.contains(id)
    }

    /// Handle to the users with a status change in flight.
    pub fn in_flight(&self) -> InFlight {
        self.processing.clone()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.api.list_users().await;
        self.loading = false;
        match result {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching users");
                Err(err.into())
            }
        }
    }

    /// Advance or flip the account status of user `id`.
    ///
    /// The full list is refetched whether or not the backend accepted the change, so the view
    /// always shows the backend's record. Returns the change that was sent. Pending accounts
    /// have no toggle.
    pub async fn toggle_status(&mut self, id: RecordId) -> ConsoleResult<StatusChange> {
        let current = self.find(id).ok_or(ConsoleError::NotFound(id))?.status;
        let change = plan_toggle(current)?;

        let claim = self.processing.claim(id)?;
        self.notice = None;
        let sent = self.api.apply_status_change(id, change).await;
        drop(claim);

        if let Err(err) = &sent {
            tracing::error!(user_id = id, error = %err, "error updating user status");
            self.notice = Some(Notice::error(NOTICE_STATUS_FAILED));
        }

        let refreshed = self.refresh().await;
        sent?;
        refreshed?;
        Ok(change)
    }
}

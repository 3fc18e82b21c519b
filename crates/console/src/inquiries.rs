//! Caregiver support inquiries.

use crate::error::ConsoleResult;
use crate::notice::Notice;
use memoraid_client::AdminApi;
use memoraid_core::constants::{NOTICE_INQUIRY_FAILED, NOTICE_INQUIRY_UPDATED};
use memoraid_types::{Inquiry, InquiryStatus, InquiryUpdate, RecordId};
use std::sync::Arc;

pub struct InquiriesView<A> {
    api: Arc<A>,
    inquiries: Vec<Inquiry>,
    loading: bool,
    notice: Option<Notice>,
}

impl<A: AdminApi> InquiriesView<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            inquiries: Vec::new(),
            loading: true,
            notice: None,
        }
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self) -> ConsoleResult<()> {
        let result = self.api.list_inquiries().await;
        self.loading = false;
        match result {
            Ok(inquiries) => {
                self.inquiries = inquiries;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "error fetching inquiries");
                Err(err.into())
            }
        }
    }

    /// Record a status and admin response for inquiry `id`, then refetch.
    pub async fn respond(
        &mut self,
        id: RecordId,
        status: InquiryStatus,
        response: impl Into<String>,
    ) -> ConsoleResult<()> {
        let update = InquiryUpdate {
            status,
            admin_response: response.into(),
        };

        if let Err(err) = self.api.update_inquiry(id, &update).await {
            tracing::error!(inquiry_id = id, error = %err, "error updating inquiry");
            self.notice = Some(Notice::error(NOTICE_INQUIRY_FAILED));
            return Err(err.into());
        }

        self.notice = Some(Notice::success(NOTICE_INQUIRY_UPDATED));
        self.refresh().await
    }
}

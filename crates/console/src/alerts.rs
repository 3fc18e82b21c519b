//! System alerts with periodic polling.
//!
//! Mounting the view spawns a task that fetches immediately and then once per poll interval.
//! The task is aborted when the view is unmounted or dropped, so no fetch starts afterwards.
//! The latest snapshot is published through a [`tokio::sync::watch`] channel that both the
//! poller and operator actions write to.

use crate::error::{ConsoleError, ConsoleResult};
use crate::in_flight::InFlight;
use crate::notice::Notice;
use memoraid_client::AdminApi;
use memoraid_core::alerts::count_active;
use memoraid_core::constants::NOTICE_ACK_FAILED;
use memoraid_core::AlertTab;
use memoraid_types::{Alert, RecordId};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Everything the alerts view shows.
#[derive(Clone, Debug, Default)]
pub struct AlertsSnapshot {
    pub alerts: Vec<Alert>,
    pub loading: bool,
    pub notice: Option<Notice>,
    /// Bumped on every successful fetch.
    pub revision: u64,
}

impl AlertsSnapshot {
    pub fn select(&self, tab: AlertTab) -> Vec<&Alert> {
        tab.select(&self.alerts)
    }

    pub fn active_count(&self) -> usize {
        count_active(&self.alerts)
    }
}

pub struct AlertsView<A> {
    api: Arc<A>,
    board: Arc<watch::Sender<AlertsSnapshot>>,
    updates: watch::Receiver<AlertsSnapshot>,
    seen_revision: u64,
    acknowledging: InFlight,
    poller: Option<JoinHandle<()>>,
}

async fn fetch_into<A: AdminApi>(
    api: &A,
    board: &watch::Sender<AlertsSnapshot>,
) -> ConsoleResult<()> {
    match api.list_alerts().await {
        Ok(alerts) => {
            board.send_modify(|snapshot| {
                snapshot.alerts = alerts;
                snapshot.loading = false;
                snapshot.revision += 1;
            });
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "error fetching system alerts");
            board.send_modify(|snapshot| snapshot.loading = false);
            Err(err.into())
        }
    }
}

fn spawn_poller<A: AdminApi + 'static>(
    api: Arc<A>,
    board: Arc<watch::Sender<AlertsSnapshot>>,
    period: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            // Failures are logged by fetch_into; the next tick retries.
            let _ = fetch_into(api.as_ref(), &board).await;
        }
    })
}

impl<A: AdminApi + 'static> AlertsView<A> {
    /// Create the view without polling. Use [`AlertsView::refresh`] to load it.
    pub fn new(api: Arc<A>) -> Self {
        let (board, updates) = watch::channel(AlertsSnapshot {
            loading: true,
            ..Default::default()
        });
        Self {
            api,
            board: Arc::new(board),
            updates,
            seen_revision: 0,
            acknowledging: InFlight::new(),
            poller: None,
        }
    }

    /// Mount the view and start polling every `period`.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero. [`ConsoleConfig`](memoraid_core::ConsoleConfig) never
    /// resolves a zero interval.
    pub fn mount(api: Arc<A>, period: Duration) -> Self {
        let mut view = Self::new(api);
        view.poller = Some(spawn_poller(view.api.clone(), view.board.clone(), period));
        tracing::debug!(period_secs = period.as_secs(), "alerts poller started");
        view
    }

    pub fn snapshot(&self) -> AlertsSnapshot {
        self.updates.borrow().clone()
    }

    pub fn alerts(&self, tab: AlertTab) -> Vec<Alert> {
        self.updates
            .borrow()
            .select(tab)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.updates.borrow().active_count()
    }

    pub fn is_acknowledging(&self, id: RecordId) -> bool {
        self.acknowledging.contains(id)
    }

    /// Handle to the alerts with an acknowledgment in flight.
    pub fn in_flight(&self) -> InFlight {
        self.acknowledging.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.poller.is_some()
    }

    /// Wait for the next successful fetch since the last call returned.
    ///
    /// Returns immediately if a fetch has landed in the meantime. Failed fetches and marker
    /// updates do not count.
    pub async fn changed(&mut self) -> ConsoleResult<()> {
        loop {
            let revision = self.updates.borrow_and_update().revision;
            if revision != self.seen_revision {
                self.seen_revision = revision;
                return Ok(());
            }
            self.updates
                .changed()
                .await
                .map_err(|_| ConsoleError::Unmounted)?;
        }
    }

    /// Fetch now, outside the polling schedule.
    pub async fn refresh(&self) -> ConsoleResult<()> {
        fetch_into(self.api.as_ref(), &self.board).await
    }

    /// Mark alert `id` handled, then refetch.
    pub async fn acknowledge(&self, id: RecordId) -> ConsoleResult<()> {
        let claim = self.acknowledging.claim(id)?;
        self.board.send_modify(|snapshot| snapshot.notice = None);

        let sent = self.api.mark_alert_handled(id).await;
        drop(claim);
        if sent.is_err() {
            self.board
                .send_modify(|snapshot| snapshot.notice = Some(Notice::error(NOTICE_ACK_FAILED)));
        }

        match sent {
            Ok(()) => self.refresh().await,
            Err(err) => {
                tracing::error!(alert_id = id, error = %err, "error acknowledging alert");
                Err(err.into())
            }
        }
    }

    /// Stop polling. A fetch already in flight is abandoned.
    pub fn unmount(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
            tracing::debug!("alerts poller stopped");
        }
    }
}

impl<A> Drop for AlertsView<A> {
    fn drop(&mut self) {
        if let Some(poller) = self.poller.take() {
            poller.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{alert, FakeApi};
    use memoraid_types::AlertStatus;

    fn api() -> Arc<FakeApi> {
        let api = FakeApi::default();
        *api.alerts.lock().unwrap() = vec![
            alert(1, AlertStatus::Active),
            alert(2, AlertStatus::Handled),
            alert(3, AlertStatus::Active),
        ];
        Arc::new(api)
    }

    #[tokio::test(start_paused = true)]
    async fn polls_on_mount_and_every_period() {
        let api = api();
        let view = AlertsView::mount(api.clone(), Duration::from_secs(30));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(api.calls("list_alerts"), 1);
        assert_eq!(view.active_count(), 2);
        assert!(!view.snapshot().loading);

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(api.calls("list_alerts"), 2);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(api.calls("list_alerts"), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn no_fetch_after_unmount() {
        let api = api();
        let mut view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(api.calls("list_alerts"), 1);

        view.unmount();
        assert!(!view.is_mounted());
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(api.calls("list_alerts"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drop_stops_polling() {
        let api = api();
        let view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(api.calls("list_alerts"), 2);

        drop(view);
        tokio::time::sleep(Duration::from_secs(300)).await;
        assert_eq!(api.calls("list_alerts"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_failure_keeps_previous_alerts() {
        let api = api();
        let mut view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        view.changed().await.expect("first fetch lands");
        let revision = view.snapshot().revision;
        assert_eq!(view.alerts(AlertTab::History).len(), 3);

        api.fail("list_alerts");
        tokio::time::sleep(Duration::from_secs(31)).await;
        assert_eq!(api.calls("list_alerts"), 2);
        assert_eq!(view.alerts(AlertTab::History).len(), 3);
        assert_eq!(view.snapshot().revision, revision);

        api.recover("list_alerts");
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(view.snapshot().revision, revision + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn changed_skips_failed_fetches() {
        let api = api();
        let mut view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        view.changed().await.expect("first fetch lands");
        api.fail("list_alerts");

        let waited = tokio::time::timeout(Duration::from_secs(45), view.changed()).await;
        assert!(waited.is_err(), "a failed poll is not a change");

        api.recover("list_alerts");
        view.changed().await.expect("next successful poll");
        assert_eq!(api.calls("list_alerts"), 3);
    }

    #[tokio::test]
    async fn unmounted_view_loads_on_refresh() {
        let api = api();
        let view = AlertsView::new(api.clone());
        assert!(!view.is_mounted());
        assert!(view.snapshot().loading);

        view.refresh().await.expect("refresh");
        assert_eq!(api.calls("list_alerts"), 1);
        assert_eq!(view.alerts(AlertTab::Active).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledge_moves_alert_to_resolved() {
        let api = api();
        let mut view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        view.changed().await.expect("first fetch lands");

        view.acknowledge(1).await.expect("acknowledge");
        assert_eq!(api.calls("mark_alert_handled"), 1);
        let resolved: Vec<_> = view
            .alerts(AlertTab::Resolved)
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(resolved, vec![1, 2]);
        assert_eq!(view.active_count(), 1);
        assert!(!view.is_acknowledging(1));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_acknowledge_sets_notice() {
        let api = api();
        let mut view = AlertsView::mount(api.clone(), Duration::from_secs(30));
        view.changed().await.expect("first fetch lands");
        api.fail("mark_alert_handled");

        assert!(view.acknowledge(3).await.is_err());
        assert!(!view.is_acknowledging(3));
        let snapshot = view.snapshot();
        assert_eq!(
            snapshot.notice.map(|n| n.text),
            Some(NOTICE_ACK_FAILED.to_string())
        );
        assert_eq!(view.active_count(), 2);
        assert_eq!(api.calls("list_alerts"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn acknowledgments_are_tracked_per_alert() {
        let api = api();
        let view = AlertsView::new(api.clone());
        view.refresh().await.expect("initial load");
        api.hold("mark_alert_handled");

        let first = view.acknowledge(1);
        let second = view.acknowledge(3);
        tokio::pin!(first, second);
        tokio::select! {
            _ = &mut first => panic!("held call cannot finish"),
            _ = &mut second => panic!("held call cannot finish"),
            _ = tokio::time::sleep(Duration::from_secs(5)) => {}
        }
        assert!(view.is_acknowledging(1));
        assert!(view.is_acknowledging(3));
        assert!(matches!(
            view.acknowledge(1).await,
            Err(ConsoleError::Busy(1))
        ));
        assert!(matches!(
            view.acknowledge(3).await,
            Err(ConsoleError::Busy(3))
        ));
        assert_eq!(api.calls("mark_alert_handled"), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn abandoned_acknowledgment_releases_its_marker() {
        let api = api();
        let view = AlertsView::new(api.clone());
        view.refresh().await.expect("initial load");
        api.hold("mark_alert_handled");

        tokio::time::timeout(Duration::from_secs(5), view.acknowledge(1))
            .await
            .expect_err("held call cannot finish");
        assert!(!view.is_acknowledging(1));
        assert!(view.in_flight().ids().is_empty());

        api.release("mark_alert_handled");
        view.acknowledge(1).await.expect("acknowledge after cancel");
        assert_eq!(view.active_count(), 1);
    }
}

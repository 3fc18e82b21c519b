//! Alert tabs.

use memoraid_types::{Alert, AlertStatus};
use std::str::FromStr;

use crate::CoreError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertTab {
    /// Alerts still awaiting acknowledgment.
    #[default]
    Active,
    /// Alerts marked handled.
    Resolved,
    /// Everything.
    History,
}

impl AlertTab {
    pub fn includes(self, alert: &Alert) -> bool {
        match self {
            AlertTab::Active => alert.status == AlertStatus::Active,
            AlertTab::Resolved => alert.status == AlertStatus::Handled,
            AlertTab::History => true,
        }
    }

    pub fn select(self, alerts: &[Alert]) -> Vec<&Alert> {
        alerts.iter().filter(|a| self.includes(a)).collect()
    }
}

impl FromStr for AlertTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(AlertTab::Active),
            "resolved" => Ok(AlertTab::Resolved),
            "history" => Ok(AlertTab::History),
            other => Err(CoreError::InvalidInput(format!("unknown alert tab: {other}"))),
        }
    }
}

pub fn count_active(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.is_active()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use memoraid_types::AlertKind;

    fn alert(id: i64, status: AlertStatus) -> Alert {
        Alert {
            id,
            kind: AlertKind::Sos,
            status,
            patient_name: None,
            message: None,
            handled_by_name: None,
            created_at: None,
        }
    }

    #[test]
    fn tabs_partition_by_status() {
        let alerts = vec![
            alert(1, AlertStatus::Active),
            alert(2, AlertStatus::Handled),
            alert(3, AlertStatus::Other),
        ];

        let ids = |tab: AlertTab| tab.select(&alerts).iter().map(|a| a.id).collect::<Vec<_>>();
        assert_eq!(ids(AlertTab::Active), vec![1]);
        assert_eq!(ids(AlertTab::Resolved), vec![2]);
        assert_eq!(ids(AlertTab::History), vec![1, 2, 3]);
        assert_eq!(count_active(&alerts), 1);
    }

    #[test]
    fn parses_tab_names() {
        assert_eq!("resolved".parse::<AlertTab>().ok(), Some(AlertTab::Resolved));
        assert!("archived".parse::<AlertTab>().is_err());
        assert_eq!(AlertTab::default(), AlertTab::Active);
    }
}

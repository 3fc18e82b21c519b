use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dashboard counters from `admin/stats/`.
///
/// The backend decides which counters exist, so they are kept as an open map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminStats(pub BTreeMap<String, serde_json::Value>);

impl AdminStats {
    /// Integer value of a counter, if present and numeric.
    pub fn counter(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(serde_json::Value::as_i64)
    }

    /// Numeric counters in name order.
    pub fn counters(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0
            .iter()
            .filter_map(|(k, v)| v.as_i64().map(|n| (k.as_str(), n)))
    }
}

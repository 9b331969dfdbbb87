//! Account statistics as embedded by the server render step.
//!
//! The snapshot is a category → account → metric mapping. Account order inside
//! a category drives label order in the charts, so both tables keep their
//! entries in document order instead of going through a hash map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed metric set tracked per account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Followers,
    Toots,
    Following,
}

impl Metric {
    /// Dataset order is fixed: one dataset per entry, always three.
    pub const ALL: [Metric; 3] = [Metric::Followers, Metric::Toots, Metric::Following];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Followers => "Followers",
            Metric::Toots => "Toots",
            Metric::Following => "Following",
        }
    }
}

/// Counters for one tracked account. Absent metrics deserialize to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetrics {
    #[serde(default, rename = "Followers")]
    pub followers: u64,
    #[serde(default, rename = "Toots")]
    pub toots: u64,
    #[serde(default, rename = "Following")]
    pub following: u64,
}

impl AccountMetrics {
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Followers => self.followers,
            Metric::Toots => self.toots,
            Metric::Following => self.following,
        }
    }
}

/// One category's account table, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryStats {
    accounts: Vec<(String, AccountMetrics)>,
}

impl CategoryStats {
    pub fn new(accounts: Vec<(String, AccountMetrics)>) -> Self {
        Self { accounts }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AccountMetrics)> {
        self.accounts
            .iter()
            .map(|(name, metrics)| (name.as_str(), metrics))
    }

    /// Account names in insertion order; these become chart labels.
    pub fn labels(&self) -> Vec<String> {
        self.accounts.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

/// The full embedded snapshot: category name → account table, in document
/// order. Supplied once at page load and never re-fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsSnapshot {
    categories: Vec<(String, CategoryStats)>,
}

impl StatsSnapshot {
    pub fn new(categories: Vec<(String, CategoryStats)>) -> Self {
        Self { categories }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryStats)> {
        self.categories
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Pre-built all-time follower series. The datasets come from the server
/// already chart-shaped and are forwarded to the chart untouched; only the
/// visual policy is applied on top.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<serde_json::Value>,
}

// Ordered-map plumbing. serde's default map handling would round-trip through
// an unordered container, losing the label order the charts rely on.

struct CategoryStatsVisitor;

impl<'de> Visitor<'de> for CategoryStatsVisitor {
    type Value = CategoryStats;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of account names to metric values")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut accounts = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, metrics)) = access.next_entry::<String, AccountMetrics>()? {
            accounts.push((name, metrics));
        }
        Ok(CategoryStats { accounts })
    }
}

impl<'de> Deserialize<'de> for CategoryStats {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CategoryStatsVisitor)
    }
}

impl Serialize for CategoryStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.accounts.len()))?;
        for (name, metrics) in &self.accounts {
            map.serialize_entry(name, metrics)?;
        }
        map.end()
    }
}

struct StatsSnapshotVisitor;

impl<'de> Visitor<'de> for StatsSnapshotVisitor {
    type Value = StatsSnapshot;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of category names to account tables")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut categories = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, stats)) = access.next_entry::<String, CategoryStats>()? {
            categories.push((name, stats));
        }
        Ok(StatsSnapshot { categories })
    }
}

impl<'de> Deserialize<'de> for StatsSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StatsSnapshotVisitor)
    }
}

impl Serialize for StatsSnapshot {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, stats) in &self.categories {
            map.serialize_entry(name, stats)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_preserves_document_order() {
        let json = r#"{
            "News": {
                "Zeitung": { "Followers": 12, "Toots": 4, "Following": 1 },
                "Anchor": { "Followers": 7 }
            },
            "Journalists": {
                "Byline": { "Toots": 99 }
            }
        }"#;

        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        let categories: Vec<&str> = snapshot.iter().map(|(name, _)| name).collect();
        assert_eq!(categories, vec!["News", "Journalists"]);

        let (_, news) = snapshot.iter().next().unwrap();
        assert_eq!(news.labels(), vec!["Zeitung", "Anchor"]);
    }

    #[test]
    fn absent_metrics_default_to_zero() {
        let metrics: AccountMetrics = serde_json::from_str(r#"{ "Followers": 3 }"#).unwrap();
        assert_eq!(metrics.get(Metric::Followers), 3);
        assert_eq!(metrics.get(Metric::Toots), 0);
        assert_eq!(metrics.get(Metric::Following), 0);
    }

    #[test]
    fn snapshot_round_trips_in_order() {
        let json = r#"{"B":{"one":{"Toots":1}},"A":{"two":{"Followers":2}}}"#;
        let snapshot: StatsSnapshot = serde_json::from_str(json).unwrap();
        let back = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(back, r#"{"B":{"one":{"Followers":0,"Toots":1,"Following":0}},"A":{"two":{"Followers":2,"Toots":0,"Following":0}}}"#);
    }

    #[test]
    fn trend_series_passes_datasets_through() {
        let json = r#"{
            "labels": ["2024-01", "2024-02"],
            "datasets": [{ "label": "Followers", "data": [1, 2], "tension": 0.4 }]
        }"#;

        let trend: TrendSeries = serde_json::from_str(json).unwrap();
        assert_eq!(trend.labels.len(), 2);
        assert_eq!(trend.datasets[0]["tension"], serde_json::json!(0.4));
    }
}

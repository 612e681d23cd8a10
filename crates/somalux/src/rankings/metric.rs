use std::fmt::Debug;

/// Closed set of sort keys a dashboard can rank one domain by.
///
/// Every domain carries a `Score` variant as its default; unknown keys resolve
/// to it so a stale dropdown value still produces a ranking.
pub trait RankingMetric: Copy + Eq + Debug + Default + Send + Sync + 'static {
    /// Every metric of the domain, `Score` first.
    fn all() -> &'static [Self];

    /// Wire key accepted from dashboards (`"score"`, `"downloads"`, ...).
    fn key(self) -> &'static str;

    fn from_key(key: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|metric| metric.key() == key)
            .unwrap_or_default()
    }

    fn keys() -> Vec<&'static str> {
        Self::all().iter().map(|metric| metric.key()).collect()
    }
}

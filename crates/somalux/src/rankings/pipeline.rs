use super::metric::RankingMetric;
use super::row::StatRow;
use tracing::debug;

/// Search box, metric dropdown and row cap for one dashboard table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingQuery<M> {
    /// Case-insensitive substring; empty keeps every row.
    pub search_term: String,
    /// Sort key; defaults to the composite score.
    pub metric: M,
    /// Rows kept after sorting; `None` keeps all matches.
    pub limit: Option<usize>,
}

impl<M: RankingMetric> Default for RankingQuery<M> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            metric: M::default(),
            limit: None,
        }
    }
}

impl<M: RankingMetric> RankingQuery<M> {
    pub fn new(search_term: impl Into<String>, metric: M) -> Self {
        Self {
            search_term: search_term.into(),
            metric,
            limit: None,
        }
    }

    /// Builds a query from the raw dashboard strings; unknown metric keys rank by score.
    pub fn from_keys(search_term: impl Into<String>, metric_key: &str) -> Self {
        Self::new(search_term, M::from_key(metric_key))
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Whether any searched field of `record` contains `term`, ignoring case.
pub fn matches_search<R: StatRow>(record: &R, term: &str) -> bool {
    contains_lowercase(record, &term.to_lowercase())
}

fn contains_lowercase<R: StatRow>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

/// Filters by the search term and sorts descending by the query metric.
///
/// The sort is stable, so rows with equal keys keep their input order. The
/// input slice is left untouched.
pub fn filter_and_sort<R: StatRow>(records: &[R], query: &RankingQuery<R::Metric>) -> Vec<R> {
    sorted_matches(records, query)
        .into_iter()
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|(_, record)| record.clone())
        .collect()
}

/// Matching rows paired with their sort key, highest first, before any limit.
pub(crate) fn sorted_matches<'a, R: StatRow>(
    records: &'a [R],
    query: &RankingQuery<R::Metric>,
) -> Vec<(f64, &'a R)> {
    let needle = query.search_term.to_lowercase();
    let mut keyed: Vec<(f64, &R)> = records
        .iter()
        .filter(|record| contains_lowercase(*record, &needle))
        // `+ 0.0` folds -0.0 into 0.0 so the two compare as a tie.
        .map(|record| (record.metric_value(query.metric) + 0.0, record))
        .collect();

    keyed.sort_by(|left, right| right.0.total_cmp(&left.0));

    debug!(
        metric = query.metric.key(),
        total = records.len(),
        matched = keyed.len(),
        "ranked stat rows"
    );

    keyed
}

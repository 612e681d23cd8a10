//! Score functions and the filter+sort pipeline behind the admin ranking dashboards.
//!
//! Each dashboard ranks flat stat rows: a weighted sum of named counters gives
//! the composite score, and a search term plus a metric key select and order
//! the rows shown.

pub mod catalog;
pub mod domains;
pub(crate) mod fields;
pub mod import;
pub mod leaderboard;
mod metric;
mod pipeline;
mod row;
pub mod router;

pub use catalog::{
    decode_records, Domain, DomainDescriptor, RankedEntryView, RankingError, RankingReport,
    RankingRequest,
};
pub use import::{read_csv_records, read_json_records, read_records_from_path, ImportError};
pub use leaderboard::{rank, Leaderboard, LeaderboardSummary, RankedEntry};
pub use metric::RankingMetric;
pub use pipeline::{filter_and_sort, matches_search, RankingQuery};
pub use row::{round_score, weighted_score, ScoreBreakdown, ScoreComponent, StatRow, WeightedTerm};
pub use router::ranking_router;

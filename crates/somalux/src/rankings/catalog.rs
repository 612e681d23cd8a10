use super::domains::{
    AchievementStats, ActivityStats, AdStats, AuthorStats, BookStats, CategoryStats,
    EngagementStats, GoalStats, PaperStats, SubscriberStats, UniversityStats, UserStats,
};
use super::leaderboard::{rank, LeaderboardSummary};
use super::metric::RankingMetric;
use super::pipeline::RankingQuery;
use super::row::{ScoreBreakdown, StatRow};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every dashboard that ranks stat rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Authors,
    Books,
    Users,
    Categories,
    Universities,
    Papers,
    Activity,
    Achievements,
    Ads,
    Goals,
    Subscribers,
    Engagement,
}

impl Domain {
    pub const ALL: [Domain; 12] = [
        Domain::Authors,
        Domain::Books,
        Domain::Users,
        Domain::Categories,
        Domain::Universities,
        Domain::Papers,
        Domain::Activity,
        Domain::Achievements,
        Domain::Ads,
        Domain::Goals,
        Domain::Subscribers,
        Domain::Engagement,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Domain::Authors => "authors",
            Domain::Books => "books",
            Domain::Users => "users",
            Domain::Categories => "categories",
            Domain::Universities => "universities",
            Domain::Papers => "papers",
            Domain::Activity => "activity",
            Domain::Achievements => "achievements",
            Domain::Ads => "ads",
            Domain::Goals => "goals",
            Domain::Subscribers => "subscribers",
            Domain::Engagement => "engagement",
        }
    }

    pub fn metric_keys(self) -> Vec<&'static str> {
        match self {
            Domain::Authors => metric_keys::<AuthorStats>(),
            Domain::Books => metric_keys::<BookStats>(),
            Domain::Users => metric_keys::<UserStats>(),
            Domain::Categories => metric_keys::<CategoryStats>(),
            Domain::Universities => metric_keys::<UniversityStats>(),
            Domain::Papers => metric_keys::<PaperStats>(),
            Domain::Activity => metric_keys::<ActivityStats>(),
            Domain::Achievements => metric_keys::<AchievementStats>(),
            Domain::Ads => metric_keys::<AdStats>(),
            Domain::Goals => metric_keys::<GoalStats>(),
            Domain::Subscribers => metric_keys::<SubscriberStats>(),
            Domain::Engagement => metric_keys::<EngagementStats>(),
        }
    }

    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            Domain::Authors | Domain::Users => &["display_name", "email"],
            Domain::Books => &["title", "author_name"],
            Domain::Categories | Domain::Universities => &["name"],
            Domain::Papers => &["title", "course_code", "university_name"],
            Domain::Activity => &["display_name", "book_title"],
            Domain::Achievements => &["name", "description"],
            Domain::Ads => &["title", "advertiser"],
            Domain::Goals => &["title", "display_name"],
            Domain::Subscribers => &["display_name", "email", "plan_name"],
            Domain::Engagement => &["display_name"],
        }
    }

    /// The score formula as `(field, weight)` pairs.
    pub fn weights(self) -> Vec<(&'static str, f64)> {
        match self {
            Domain::Authors => weights::<AuthorStats>(),
            Domain::Books => weights::<BookStats>(),
            Domain::Users => weights::<UserStats>(),
            Domain::Categories => weights::<CategoryStats>(),
            Domain::Universities => weights::<UniversityStats>(),
            Domain::Papers => weights::<PaperStats>(),
            Domain::Activity => weights::<ActivityStats>(),
            Domain::Achievements => weights::<AchievementStats>(),
            Domain::Ads => weights::<AdStats>(),
            Domain::Goals => weights::<GoalStats>(),
            Domain::Subscribers => weights::<SubscriberStats>(),
            Domain::Engagement => weights::<EngagementStats>(),
        }
    }

    pub fn descriptor(self) -> DomainDescriptor {
        DomainDescriptor {
            domain: self.slug(),
            metrics: self.metric_keys(),
            search_fields: self.search_fields().to_vec(),
            weights: self
                .weights()
                .into_iter()
                .map(|(field, weight)| WeightView { field, weight })
                .collect(),
        }
    }

    /// Decodes `records` as this domain's stat rows and ranks them.
    pub fn rank(
        self,
        records: Vec<Value>,
        request: &RankingRequest,
    ) -> Result<RankingReport, RankingError> {
        match self {
            Domain::Authors => rank_values::<AuthorStats>(self, records, request),
            Domain::Books => rank_values::<BookStats>(self, records, request),
            Domain::Users => rank_values::<UserStats>(self, records, request),
            Domain::Categories => rank_values::<CategoryStats>(self, records, request),
            Domain::Universities => rank_values::<UniversityStats>(self, records, request),
            Domain::Papers => rank_values::<PaperStats>(self, records, request),
            Domain::Activity => rank_values::<ActivityStats>(self, records, request),
            Domain::Achievements => rank_values::<AchievementStats>(self, records, request),
            Domain::Ads => rank_values::<AdStats>(self, records, request),
            Domain::Goals => rank_values::<GoalStats>(self, records, request),
            Domain::Subscribers => rank_values::<SubscriberStats>(self, records, request),
            Domain::Engagement => rank_values::<EngagementStats>(self, records, request),
        }
    }

    /// Decodes one record and explains its score.
    pub fn score(self, record: Value) -> Result<ScoreBreakdown, RankingError> {
        match self {
            Domain::Authors => score_value::<AuthorStats>(record),
            Domain::Books => score_value::<BookStats>(record),
            Domain::Users => score_value::<UserStats>(record),
            Domain::Categories => score_value::<CategoryStats>(record),
            Domain::Universities => score_value::<UniversityStats>(record),
            Domain::Papers => score_value::<PaperStats>(record),
            Domain::Activity => score_value::<ActivityStats>(record),
            Domain::Achievements => score_value::<AchievementStats>(record),
            Domain::Ads => score_value::<AdStats>(record),
            Domain::Goals => score_value::<GoalStats>(record),
            Domain::Subscribers => score_value::<SubscriberStats>(record),
            Domain::Engagement => score_value::<EngagementStats>(record),
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Domain {
    type Err = RankingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let domain = match normalized.as_str() {
            "authors" | "author" => Domain::Authors,
            "books" | "book" => Domain::Books,
            "users" | "user" => Domain::Users,
            "categories" | "category" => Domain::Categories,
            "universities" | "university" => Domain::Universities,
            "papers" | "paper" => Domain::Papers,
            "activity" | "reading_activity" | "reading-activity" => Domain::Activity,
            "achievements" | "achievement" => Domain::Achievements,
            "ads" | "ad" => Domain::Ads,
            "goals" | "goal" => Domain::Goals,
            "subscribers" | "subscriber" => Domain::Subscribers,
            "engagement" => Domain::Engagement,
            _ => return Err(RankingError::UnknownDomain(value.to_string())),
        };
        Ok(domain)
    }
}

/// Ranking parameters as dashboards send them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingRequest {
    pub search_term: String,
    pub filter_metric: String,
    pub limit: Option<usize>,
}

impl Default for RankingRequest {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            filter_metric: "score".to_string(),
            limit: None,
        }
    }
}

impl RankingRequest {
    pub fn query<M: RankingMetric>(&self) -> RankingQuery<M> {
        RankingQuery::from_keys(self.search_term.clone(), &self.filter_metric)
            .with_limit(self.limit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingReport {
    pub domain: &'static str,
    pub metric: &'static str,
    pub generated_at: DateTime<Utc>,
    pub summary: LeaderboardSummary,
    pub entries: Vec<RankedEntryView>,
}

/// Type-erased ranked row with the decoded record echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntryView {
    pub position: usize,
    pub label: String,
    pub score: i64,
    pub metric_value: f64,
    pub record: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainDescriptor {
    pub domain: &'static str,
    pub metrics: Vec<&'static str>,
    pub search_fields: Vec<&'static str>,
    pub weights: Vec<WeightView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightView {
    pub field: &'static str,
    pub weight: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("unknown ranking domain '{0}'")]
    UnknownDomain(String),
    #[error("record {index} is not a valid stat row: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("{count} records exceed the limit of {max} per request")]
    TooManyRecords { count: usize, max: usize },
    #[error("limit must be at least 1")]
    InvalidLimit,
    #[error("failed to encode ranked record: {0}")]
    Encode(#[source] serde_json::Error),
}

fn metric_keys<R: StatRow>() -> Vec<&'static str> {
    <R::Metric as RankingMetric>::keys()
}

fn weights<R: StatRow + Default>() -> Vec<(&'static str, f64)> {
    R::default()
        .terms()
        .into_iter()
        .map(|term| (term.field, term.weight))
        .collect()
}

/// Decodes JSON records into typed stat rows, reporting the first bad index.
pub fn decode_records<R: DeserializeOwned>(records: Vec<Value>) -> Result<Vec<R>, RankingError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value)
                .map_err(|source| RankingError::InvalidRecord { index, source })
        })
        .collect()
}

fn rank_values<R>(
    domain: Domain,
    records: Vec<Value>,
    request: &RankingRequest,
) -> Result<RankingReport, RankingError>
where
    R: StatRow + DeserializeOwned + Serialize,
{
    let rows: Vec<R> = decode_records(records)?;
    let query = request.query::<R::Metric>();
    let board = rank(&rows, &query);

    debug!(
        domain = domain.slug(),
        metric = board.metric,
        returned = board.entries.len(),
        "built ranking report"
    );

    let entries = board
        .entries
        .into_iter()
        .map(|entry| -> Result<RankedEntryView, RankingError> {
            Ok(RankedEntryView {
                position: entry.position,
                label: entry.record.label().to_string(),
                score: entry.score,
                metric_value: entry.metric_value,
                record: serde_json::to_value(&entry.record).map_err(RankingError::Encode)?,
            })
        })
        .collect::<Result<Vec<_>, RankingError>>()?;

    Ok(RankingReport {
        domain: domain.slug(),
        metric: board.metric,
        generated_at: Utc::now(),
        summary: board.summary,
        entries,
    })
}

fn score_value<R>(record: Value) -> Result<ScoreBreakdown, RankingError>
where
    R: StatRow + DeserializeOwned,
{
    let row: R = serde_json::from_value(record)
        .map_err(|source| RankingError::InvalidRecord { index: 0, source })?;
    Ok(row.breakdown())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_slugs_and_singular_aliases() {
        assert_eq!("authors".parse::<Domain>().ok(), Some(Domain::Authors));
        assert_eq!(" Paper ".parse::<Domain>().ok(), Some(Domain::Papers));
        assert_eq!(
            "reading-activity".parse::<Domain>().ok(),
            Some(Domain::Activity)
        );
        assert!(matches!(
            "dragons".parse::<Domain>(),
            Err(RankingError::UnknownDomain(_))
        ));
    }

    #[test]
    fn every_domain_round_trips_its_slug() {
        for domain in Domain::ALL {
            assert_eq!(domain.slug().parse::<Domain>().ok(), Some(domain));
            assert_eq!(domain.metric_keys()[0], "score");
            assert!(!domain.weights().is_empty());
            assert!(!domain.search_fields().is_empty());
        }
    }

    #[test]
    fn author_weights_are_listed_in_formula_order() {
        let weights = Domain::Authors.weights();
        assert_eq!(weights[0], ("books_count", 5.0));
        assert_eq!(weights[1], ("total_downloads", 0.1));
        assert_eq!(weights.len(), 8);
    }

    #[test]
    fn rank_decodes_json_records() {
        let records = vec![
            json!({ "title": "A", "downloads_count": 10, "views_count": 0 }),
            json!({ "title": "B", "downloads_count": "50" }),
        ];
        let request = RankingRequest {
            filter_metric: "downloads".to_string(),
            ..RankingRequest::default()
        };

        let report = Domain::Books.rank(records, &request).expect("ranks");
        assert_eq!(report.domain, "books");
        assert_eq!(report.metric, "downloads");
        let labels: Vec<_> = report.entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["B", "A"]);
        assert_eq!(report.entries[0].record["downloads_count"], json!(50.0));
    }

    #[test]
    fn rank_reports_first_undecodable_record() {
        let records = vec![json!({ "name": "Science" }), json!(42)];
        let error = Domain::Categories
            .rank(records, &RankingRequest::default())
            .expect_err("non-object rejected");
        assert!(matches!(error, RankingError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn unknown_metric_keys_rank_by_score() {
        let records = vec![
            json!({ "name": "Low", "books_count": 1 }),
            json!({ "name": "High", "books_count": 10 }),
        ];
        let request = RankingRequest {
            filter_metric: "popularity".to_string(),
            ..RankingRequest::default()
        };
        let report = Domain::Categories.rank(records, &request).expect("ranks");
        assert_eq!(report.metric, "score");
        assert_eq!(report.entries[0].label, "High");
    }

    #[test]
    fn score_explains_components() {
        let breakdown = Domain::Authors
            .score(json!({
                "books_count": 2,
                "total_downloads": 100,
                "avg_rating": 4,
                "followers_count": 10,
                "comments_count": 5,
                "likes_count": 20,
                "reviews_count": 3,
                "shares_count": 1
            }))
            .expect("scores");
        assert_eq!(breakdown.score, 102);
        assert_eq!(breakdown.components.len(), 8);
        assert_eq!(breakdown.components[2].field, "avg_rating");
        assert_eq!(breakdown.components[2].contribution, 40.0);
    }
}

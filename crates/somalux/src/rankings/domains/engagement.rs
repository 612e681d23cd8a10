use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Social-interaction counters attached to an author or other entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub entity_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub loves_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub follows_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shares_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EngagementMetric {
    #[default]
    Score,
    Likes,
    Loves,
    Follows,
    Comments,
    Shares,
}

impl RankingMetric for EngagementMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Likes,
            Self::Loves,
            Self::Follows,
            Self::Comments,
            Self::Shares,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Likes => "likes",
            Self::Loves => "loves",
            Self::Follows => "follows",
            Self::Comments => "comments",
            Self::Shares => "shares",
        }
    }
}

impl StatRow for EngagementStats {
    type Metric = EngagementMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("likes_count", 1.0, count(self.likes_count)),
            WeightedTerm::new("loves_count", 2.0, count(self.loves_count)),
            WeightedTerm::new("follows_count", 3.0, count(self.follows_count)),
            WeightedTerm::new("comments_count", 1.5, count(self.comments_count)),
            WeightedTerm::new("shares_count", 2.0, count(self.shares_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.display_name)]
    }

    fn metric_value(&self, metric: EngagementMetric) -> f64 {
        match metric {
            EngagementMetric::Score => self.score() as f64,
            EngagementMetric::Likes => count(self.likes_count),
            EngagementMetric::Loves => count(self.loves_count),
            EngagementMetric::Follows => count(self.follows_count),
            EngagementMetric::Comments => count(self.comments_count),
            EngagementMetric::Shares => count(self.shares_count),
        }
    }
}

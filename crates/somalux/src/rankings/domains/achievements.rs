use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Unlock statistics for one achievement badge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub unlocked_count: Option<f64>,
    /// Share of readers holding the badge, as a percentage in `0..=100`.
    #[serde(default, deserialize_with = "lenient_number")]
    pub completion_rate: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub points: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AchievementMetric {
    #[default]
    Score,
    Unlocked,
    Completion,
    Points,
}

impl RankingMetric for AchievementMetric {
    fn all() -> &'static [Self] {
        &[Self::Score, Self::Unlocked, Self::Completion, Self::Points]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Unlocked => "unlocked",
            Self::Completion => "completion",
            Self::Points => "points",
        }
    }
}

impl StatRow for AchievementStats {
    type Metric = AchievementMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("unlocked_count", 2.0, count(self.unlocked_count)),
            WeightedTerm::new("completion_rate", 0.5, count(self.completion_rate)),
            WeightedTerm::new("points", 1.0, count(self.points)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.name), text(&self.description)]
    }

    fn metric_value(&self, metric: AchievementMetric) -> f64 {
        match metric {
            AchievementMetric::Score => self.score() as f64,
            AchievementMetric::Unlocked => count(self.unlocked_count),
            AchievementMetric::Completion => count(self.completion_rate),
            AchievementMetric::Points => count(self.points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bookworm() -> AchievementStats {
        AchievementStats {
            name: Some("Bookworm".to_string()),
            description: Some("Finish ten books".to_string()),
            unlocked_count: Some(40.0),
            completion_rate: Some(37.5),
            points: Some(25.0),
        }
    }

    #[test]
    fn score_rounds_the_weighted_sum() {
        // 80 + 18.75 + 25
        assert_eq!(bookworm().score(), 124);
    }

    #[test]
    fn metric_keys_read_their_fields() {
        let row = bookworm();
        for (key, expected) in [
            ("score", 124.0),
            ("unlocked", 40.0),
            ("completion", 37.5),
            ("points", 25.0),
        ] {
            assert_eq!(row.metric_value(AchievementMetric::from_key(key)), expected, "{key}");
        }
    }
}

use crate::rankings::fields::{count, flag, lenient_flag, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

const COMPLETION_BONUS: f64 = 50.0;

/// A reader's reading goal and how far along it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub target_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub current_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub streak_days: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_completed: Option<bool>,
}

impl GoalStats {
    /// Progress towards the target as a percentage, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        let target = count(self.target_value);
        if target > 0.0 {
            (count(self.current_value) / target * 100.0).min(100.0)
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalMetric {
    #[default]
    Score,
    Progress,
    Current,
    Streak,
}

impl RankingMetric for GoalMetric {
    fn all() -> &'static [Self] {
        &[Self::Score, Self::Progress, Self::Current, Self::Streak]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Progress => "progress",
            Self::Current => "current",
            Self::Streak => "streak",
        }
    }
}

impl StatRow for GoalStats {
    type Metric = GoalMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        let completed = if flag(self.is_completed) { 1.0 } else { 0.0 };
        vec![
            WeightedTerm::new("progress", 1.0, self.progress_percent()),
            WeightedTerm::new("current_value", 0.5, count(self.current_value)),
            WeightedTerm::new("streak_days", 2.0, count(self.streak_days)),
            WeightedTerm::new("is_completed", COMPLETION_BONUS, completed),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.title), text(&self.display_name)]
    }

    fn metric_value(&self, metric: GoalMetric) -> f64 {
        match metric {
            GoalMetric::Score => self.score() as f64,
            GoalMetric::Progress => self.progress_percent(),
            GoalMetric::Current => count(self.current_value),
            GoalMetric::Streak => count(self.streak_days),
        }
    }
}

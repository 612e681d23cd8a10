use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Reading-session totals for one reader, optionally scoped to one book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub book_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pages_read: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub minutes_read: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sessions_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub books_completed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub streak_days: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActivityMetric {
    #[default]
    Score,
    Pages,
    Minutes,
    Sessions,
    Completed,
    Streak,
}

impl RankingMetric for ActivityMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Pages,
            Self::Minutes,
            Self::Sessions,
            Self::Completed,
            Self::Streak,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Pages => "pages",
            Self::Minutes => "minutes",
            Self::Sessions => "sessions",
            Self::Completed => "completed",
            Self::Streak => "streak",
        }
    }
}

impl StatRow for ActivityStats {
    type Metric = ActivityMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("pages_read", 0.1, count(self.pages_read)),
            WeightedTerm::new("minutes_read", 0.2, count(self.minutes_read)),
            WeightedTerm::new("sessions_count", 2.0, count(self.sessions_count)),
            WeightedTerm::new("books_completed", 10.0, count(self.books_completed)),
            WeightedTerm::new("streak_days", 3.0, count(self.streak_days)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.display_name), text(&self.book_title)]
    }

    fn metric_value(&self, metric: ActivityMetric) -> f64 {
        match metric {
            ActivityMetric::Score => self.score() as f64,
            ActivityMetric::Pages => count(self.pages_read),
            ActivityMetric::Minutes => count(self.minutes_read),
            ActivityMetric::Sessions => count(self.sessions_count),
            ActivityMetric::Completed => count(self.books_completed),
            ActivityMetric::Streak => count(self.streak_days),
        }
    }
}

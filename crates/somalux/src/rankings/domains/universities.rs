use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Past-paper coverage and reach for one university.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniversityStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub papers_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_downloads: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_views: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub students_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub courses_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniversityMetric {
    #[default]
    Score,
    Papers,
    Downloads,
    Views,
    Students,
}

impl RankingMetric for UniversityMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Papers,
            Self::Downloads,
            Self::Views,
            Self::Students,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Papers => "papers",
            Self::Downloads => "downloads",
            Self::Views => "views",
            Self::Students => "students",
        }
    }
}

impl StatRow for UniversityStats {
    type Metric = UniversityMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("papers_count", 3.0, count(self.papers_count)),
            WeightedTerm::new("total_downloads", 0.1, count(self.total_downloads)),
            WeightedTerm::new("total_views", 0.05, count(self.total_views)),
            WeightedTerm::new("students_count", 0.5, count(self.students_count)),
            WeightedTerm::new("courses_count", 2.0, count(self.courses_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.name)]
    }

    fn metric_value(&self, metric: UniversityMetric) -> f64 {
        match metric {
            UniversityMetric::Score => self.score() as f64,
            UniversityMetric::Papers => count(self.papers_count),
            UniversityMetric::Downloads => count(self.total_downloads),
            UniversityMetric::Views => count(self.total_views),
            UniversityMetric::Students => count(self.students_count),
        }
    }
}

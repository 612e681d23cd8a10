use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Catalogue totals for one book category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub books_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_downloads: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_views: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub followers_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryMetric {
    #[default]
    Score,
    Books,
    Downloads,
    Views,
    Rating,
}

impl RankingMetric for CategoryMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Books,
            Self::Downloads,
            Self::Views,
            Self::Rating,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Books => "books",
            Self::Downloads => "downloads",
            Self::Views => "views",
            Self::Rating => "rating",
        }
    }
}

impl StatRow for CategoryStats {
    type Metric = CategoryMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("books_count", 3.0, count(self.books_count)),
            WeightedTerm::new("total_downloads", 0.1, count(self.total_downloads)),
            WeightedTerm::new("total_views", 0.05, count(self.total_views)),
            WeightedTerm::new("avg_rating", 10.0, count(self.avg_rating)),
            WeightedTerm::new("followers_count", 1.0, count(self.followers_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.name)]
    }

    fn metric_value(&self, metric: CategoryMetric) -> f64 {
        match metric {
            CategoryMetric::Score => self.score() as f64,
            CategoryMetric::Books => count(self.books_count),
            CategoryMetric::Downloads => count(self.total_downloads),
            CategoryMetric::Views => count(self.total_views),
            CategoryMetric::Rating => count(self.avg_rating),
        }
    }
}

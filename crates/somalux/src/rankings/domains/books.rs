use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Reader engagement counters for one book.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub cover_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub downloads_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reviews_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shares_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub bookmarks_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookMetric {
    #[default]
    Score,
    Downloads,
    Views,
    Rating,
    Likes,
}

impl RankingMetric for BookMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Downloads,
            Self::Views,
            Self::Rating,
            Self::Likes,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Downloads => "downloads",
            Self::Views => "views",
            Self::Rating => "rating",
            Self::Likes => "likes",
        }
    }
}

impl StatRow for BookStats {
    type Metric = BookMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("downloads_count", 0.5, count(self.downloads_count)),
            WeightedTerm::new("views_count", 0.1, count(self.views_count)),
            WeightedTerm::new("avg_rating", 10.0, count(self.avg_rating)),
            WeightedTerm::new("reviews_count", 2.0, count(self.reviews_count)),
            WeightedTerm::new("likes_count", 1.0, count(self.likes_count)),
            WeightedTerm::new("comments_count", 1.0, count(self.comments_count)),
            WeightedTerm::new("shares_count", 2.0, count(self.shares_count)),
            WeightedTerm::new("bookmarks_count", 1.5, count(self.bookmarks_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.title), text(&self.author_name)]
    }

    fn metric_value(&self, metric: BookMetric) -> f64 {
        match metric {
            BookMetric::Score => self.score() as f64,
            BookMetric::Downloads => count(self.downloads_count),
            BookMetric::Views => count(self.views_count),
            BookMetric::Rating => count(self.avg_rating),
            BookMetric::Likes => count(self.likes_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_weights_downloads_and_ratings() {
        let book = BookStats {
            downloads_count: Some(50.0),
            views_count: Some(300.0),
            avg_rating: Some(4.5),
            reviews_count: Some(4.0),
            likes_count: Some(12.0),
            bookmarks_count: Some(3.0),
            ..BookStats::default()
        };
        // 25 + 30 + 45 + 8 + 12 + 4.5
        assert_eq!(book.score(), 125);
    }

    #[test]
    fn label_prefers_title() {
        let book = BookStats {
            title: Some("Organic Chemistry".to_string()),
            author_name: Some("A. Mwangi".to_string()),
            ..BookStats::default()
        };
        assert_eq!(book.label(), "Organic Chemistry");

        let untitled = BookStats {
            author_name: Some("A. Mwangi".to_string()),
            ..BookStats::default()
        };
        assert_eq!(untitled.label(), "A. Mwangi");
    }
}

use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Publishing and engagement counters for one author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub books_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_downloads: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub followers_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reviews_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub shares_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorMetric {
    #[default]
    Score,
    Books,
    Downloads,
    Rating,
    Followers,
    Likes,
}

impl RankingMetric for AuthorMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Books,
            Self::Downloads,
            Self::Rating,
            Self::Followers,
            Self::Likes,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Books => "books",
            Self::Downloads => "downloads",
            Self::Rating => "rating",
            Self::Followers => "followers",
            Self::Likes => "likes",
        }
    }
}

impl StatRow for AuthorStats {
    type Metric = AuthorMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("books_count", 5.0, count(self.books_count)),
            WeightedTerm::new("total_downloads", 0.1, count(self.total_downloads)),
            WeightedTerm::new("avg_rating", 10.0, count(self.avg_rating)),
            WeightedTerm::new("followers_count", 2.0, count(self.followers_count)),
            WeightedTerm::new("comments_count", 1.0, count(self.comments_count)),
            WeightedTerm::new("likes_count", 0.5, count(self.likes_count)),
            WeightedTerm::new("reviews_count", 1.5, count(self.reviews_count)),
            WeightedTerm::new("shares_count", 2.0, count(self.shares_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.display_name), text(&self.email)]
    }

    fn metric_value(&self, metric: AuthorMetric) -> f64 {
        match metric {
            AuthorMetric::Score => self.score() as f64,
            AuthorMetric::Books => count(self.books_count),
            AuthorMetric::Downloads => count(self.total_downloads),
            AuthorMetric::Rating => count(self.avg_rating),
            AuthorMetric::Followers => count(self.followers_count),
            AuthorMetric::Likes => count(self.likes_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_matches_dashboard_weights() {
        let author = AuthorStats {
            books_count: Some(2.0),
            total_downloads: Some(100.0),
            avg_rating: Some(4.0),
            followers_count: Some(10.0),
            comments_count: Some(5.0),
            likes_count: Some(20.0),
            reviews_count: Some(3.0),
            shares_count: Some(1.0),
            ..AuthorStats::default()
        };
        assert_eq!(author.score(), 102);
    }

    #[test]
    fn empty_row_scores_zero() {
        assert_eq!(AuthorStats::default().score(), 0);
    }

    #[test]
    fn unknown_metric_keys_fall_back_to_score() {
        assert_eq!(AuthorMetric::from_key("followers"), AuthorMetric::Followers);
        assert_eq!(AuthorMetric::from_key("popularity"), AuthorMetric::Score);
        assert_eq!(AuthorMetric::from_key(""), AuthorMetric::Score);
    }
}

use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Reading and community activity for one reader account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub avatar_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub books_read: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub papers_downloaded: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reviews_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub followers_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub following_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub active_days: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserMetric {
    #[default]
    Score,
    Books,
    Downloads,
    Followers,
    Active,
}

impl RankingMetric for UserMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Books,
            Self::Downloads,
            Self::Followers,
            Self::Active,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Books => "books",
            Self::Downloads => "downloads",
            Self::Followers => "followers",
            Self::Active => "active",
        }
    }
}

impl StatRow for UserStats {
    type Metric = UserMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("books_read", 5.0, count(self.books_read)),
            WeightedTerm::new("papers_downloaded", 2.0, count(self.papers_downloaded)),
            WeightedTerm::new("comments_count", 1.0, count(self.comments_count)),
            WeightedTerm::new("reviews_count", 2.0, count(self.reviews_count)),
            WeightedTerm::new("followers_count", 1.5, count(self.followers_count)),
            WeightedTerm::new("following_count", 0.5, count(self.following_count)),
            WeightedTerm::new("active_days", 1.0, count(self.active_days)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.display_name), text(&self.email)]
    }

    fn metric_value(&self, metric: UserMetric) -> f64 {
        match metric {
            UserMetric::Score => self.score() as f64,
            UserMetric::Books => count(self.books_read),
            UserMetric::Downloads => count(self.papers_downloaded),
            UserMetric::Followers => count(self.followers_count),
            UserMetric::Active => count(self.active_days),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader() -> UserStats {
        UserStats {
            display_name: Some("Zawadi".to_string()),
            email: Some("zawadi@example.com".to_string()),
            books_read: Some(3.0),
            papers_downloaded: Some(4.0),
            comments_count: Some(5.0),
            reviews_count: Some(2.0),
            followers_count: Some(11.0),
            following_count: Some(9.0),
            active_days: Some(20.0),
            ..UserStats::default()
        }
    }

    #[test]
    fn score_uses_every_weighted_field() {
        // 15 + 8 + 5 + 4 + 16.5 + 4.5 + 20
        assert_eq!(reader().score(), 73);
    }

    #[test]
    fn metric_keys_read_their_fields() {
        let row = reader();
        for (key, expected) in [
            ("score", 73.0),
            ("books", 3.0),
            ("downloads", 4.0),
            ("followers", 11.0),
            ("active", 20.0),
        ] {
            assert_eq!(row.metric_value(UserMetric::from_key(key)), expected, "{key}");
        }
    }
}

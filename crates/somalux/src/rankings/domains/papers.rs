use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Usage counters for one past exam paper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaperStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub course_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub university_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub downloads_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub views_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub comments_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub likes_count: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaperMetric {
    #[default]
    Score,
    Downloads,
    Views,
    Rating,
}

impl RankingMetric for PaperMetric {
    fn all() -> &'static [Self] {
        &[Self::Score, Self::Downloads, Self::Views, Self::Rating]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Downloads => "downloads",
            Self::Views => "views",
            Self::Rating => "rating",
        }
    }
}

impl StatRow for PaperStats {
    type Metric = PaperMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("downloads_count", 0.5, count(self.downloads_count)),
            WeightedTerm::new("views_count", 0.1, count(self.views_count)),
            WeightedTerm::new("avg_rating", 10.0, count(self.avg_rating)),
            WeightedTerm::new("comments_count", 1.0, count(self.comments_count)),
            WeightedTerm::new("likes_count", 1.0, count(self.likes_count)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            text(&self.title),
            text(&self.course_code),
            text(&self.university_name),
        ]
    }

    fn metric_value(&self, metric: PaperMetric) -> f64 {
        match metric {
            PaperMetric::Score => self.score() as f64,
            PaperMetric::Downloads => count(self.downloads_count),
            PaperMetric::Views => count(self.views_count),
            PaperMetric::Rating => count(self.avg_rating),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculus() -> PaperStats {
        PaperStats {
            title: Some("Calculus I Final".to_string()),
            course_code: Some("MAT101".to_string()),
            downloads_count: Some(40.0),
            views_count: Some(150.0),
            avg_rating: Some(3.5),
            comments_count: Some(6.0),
            likes_count: Some(9.0),
            ..PaperStats::default()
        }
    }

    #[test]
    fn score_uses_every_weighted_field() {
        // 20 + 15 + 35 + 6 + 9
        assert_eq!(calculus().score(), 85);
    }

    #[test]
    fn metric_keys_read_their_fields() {
        let row = calculus();
        for (key, expected) in [
            ("score", 85.0),
            ("downloads", 40.0),
            ("views", 150.0),
            ("rating", 3.5),
        ] {
            assert_eq!(row.metric_value(PaperMetric::from_key(key)), expected, "{key}");
        }
    }
}

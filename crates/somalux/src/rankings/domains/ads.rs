use crate::rankings::fields::{count, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

/// Delivery counters for one ad campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub advertiser: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub placement: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub impressions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub clicks: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub conversions: Option<f64>,
}

impl AdStats {
    /// Click-through rate as a percentage (`0..=100`), zero without impressions.
    pub fn click_through_rate(&self) -> f64 {
        let impressions = count(self.impressions);
        if impressions > 0.0 {
            count(self.clicks) / impressions * 100.0
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdMetric {
    #[default]
    Score,
    Impressions,
    Clicks,
    Ctr,
    Conversions,
}

impl RankingMetric for AdMetric {
    fn all() -> &'static [Self] {
        &[
            Self::Score,
            Self::Impressions,
            Self::Clicks,
            Self::Ctr,
            Self::Conversions,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Impressions => "impressions",
            Self::Clicks => "clicks",
            Self::Ctr => "ctr",
            Self::Conversions => "conversions",
        }
    }
}

impl StatRow for AdStats {
    type Metric = AdMetric;

    // The CTR term is a percentage summed alongside raw counts; ranking order
    // depends on that mix, so it stays unscaled.
    fn terms(&self) -> Vec<WeightedTerm> {
        vec![
            WeightedTerm::new("impressions", 0.01, count(self.impressions)),
            WeightedTerm::new("clicks", 1.0, count(self.clicks)),
            WeightedTerm::new("ctr", 1.0, self.click_through_rate()),
            WeightedTerm::new("conversions", 5.0, count(self.conversions)),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![text(&self.title), text(&self.advertiser)]
    }

    fn metric_value(&self, metric: AdMetric) -> f64 {
        match metric {
            AdMetric::Score => self.score() as f64,
            AdMetric::Impressions => count(self.impressions),
            AdMetric::Clicks => count(self.clicks),
            AdMetric::Ctr => self.click_through_rate(),
            AdMetric::Conversions => count(self.conversions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctr_is_a_percentage_added_to_the_score() {
        let ad = AdStats {
            impressions: Some(1000.0),
            clicks: Some(50.0),
            conversions: Some(2.0),
            ..AdStats::default()
        };
        assert!((ad.click_through_rate() - 5.0).abs() < f64::EPSILON);
        // 10 + 50 + 5 + 10
        assert_eq!(ad.score(), 75);
    }

    #[test]
    fn ctr_is_zero_without_impressions() {
        let ad = AdStats {
            clicks: Some(3.0),
            ..AdStats::default()
        };
        assert_eq!(ad.click_through_rate(), 0.0);
        assert_eq!(ad.score(), 3);
    }
}

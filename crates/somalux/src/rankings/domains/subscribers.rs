use crate::rankings::fields::{count, flag, lenient_flag, lenient_number, lenient_text, text};
use crate::rankings::{RankingMetric, StatRow, WeightedTerm};
use serde::{Deserialize, Serialize};

const ACTIVE_BONUS: f64 = 50.0;

/// Billing history for one subscription holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriberStats {
    #[serde(default, deserialize_with = "lenient_text")]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub plan_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub months_subscribed: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_paid: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub downloads_count: Option<f64>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubscriberMetric {
    #[default]
    Score,
    Months,
    Paid,
    Downloads,
}

impl RankingMetric for SubscriberMetric {
    fn all() -> &'static [Self] {
        &[Self::Score, Self::Months, Self::Paid, Self::Downloads]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Score => "score",
            Self::Months => "months",
            Self::Paid => "paid",
            Self::Downloads => "downloads",
        }
    }
}

impl StatRow for SubscriberStats {
    type Metric = SubscriberMetric;

    fn terms(&self) -> Vec<WeightedTerm> {
        let active = if flag(self.is_active) { 1.0 } else { 0.0 };
        vec![
            WeightedTerm::new("months_subscribed", 10.0, count(self.months_subscribed)),
            WeightedTerm::new("total_paid", 0.1, count(self.total_paid)),
            WeightedTerm::new("downloads_count", 0.5, count(self.downloads_count)),
            WeightedTerm::new("is_active", ACTIVE_BONUS, active),
        ]
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            text(&self.display_name),
            text(&self.email),
            text(&self.plan_name),
        ]
    }

    fn metric_value(&self, metric: SubscriberMetric) -> f64 {
        match metric {
            SubscriberMetric::Score => self.score() as f64,
            SubscriberMetric::Months => count(self.months_subscribed),
            SubscriberMetric::Paid => count(self.total_paid),
            SubscriberMetric::Downloads => count(self.downloads_count),
        }
    }
}

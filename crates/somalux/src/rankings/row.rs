use super::metric::RankingMetric;
use serde::{Deserialize, Serialize};

/// One `weight * value` term of a domain's score formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm {
    pub field: &'static str,
    pub weight: f64,
    pub value: f64,
}

impl WeightedTerm {
    pub fn new(field: &'static str, weight: f64, value: f64) -> Self {
        Self {
            field,
            weight,
            value,
        }
    }

    pub fn contribution(&self) -> f64 {
        self.weight * self.value
    }
}

/// Discrete contribution to a score, kept for dashboard tooltips and audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub field: String,
    pub weight: f64,
    pub value: f64,
    pub contribution: f64,
}

/// Composite score together with the terms that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: i64,
    pub components: Vec<ScoreComponent>,
}

/// Rounds half-way cases towards positive infinity, as the dashboards always have.
pub fn round_score(raw: f64) -> i64 {
    (raw + 0.5).floor() as i64
}

/// Sums the weighted terms and rounds to the integer score shown on dashboards.
pub fn weighted_score(terms: &[WeightedTerm]) -> i64 {
    round_score(terms.iter().map(WeightedTerm::contribution).sum())
}

/// A flat record of counters for one ranked entity.
pub trait StatRow: Clone {
    type Metric: RankingMetric;

    /// The score formula applied to this row.
    fn terms(&self) -> Vec<WeightedTerm>;

    /// Display strings matched against the dashboard search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Sort key for `metric`; `Score` must yield [`StatRow::score`].
    fn metric_value(&self, metric: Self::Metric) -> f64;

    fn score(&self) -> i64 {
        weighted_score(&self.terms())
    }

    fn breakdown(&self) -> ScoreBreakdown {
        let terms = self.terms();
        ScoreBreakdown {
            score: weighted_score(&terms),
            components: terms
                .iter()
                .map(|term| ScoreComponent {
                    field: term.field.to_string(),
                    weight: term.weight,
                    value: term.value,
                    contribution: term.contribution(),
                })
                .collect(),
        }
    }

    fn label(&self) -> &str {
        self.search_fields()
            .into_iter()
            .find(|field| !field.is_empty())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_score(101.5), 102);
        assert_eq!(round_score(101.49), 101);
        assert_eq!(round_score(0.0), 0);
        assert_eq!(round_score(-2.5), -2);
    }

    #[test]
    fn weighted_score_sums_contributions() {
        let terms = [
            WeightedTerm::new("a", 5.0, 2.0),
            WeightedTerm::new("b", 0.1, 100.0),
            WeightedTerm::new("c", 1.5, 3.0),
        ];
        assert_eq!(weighted_score(&terms), 25);
        assert_eq!(weighted_score(&[]), 0);
    }
}

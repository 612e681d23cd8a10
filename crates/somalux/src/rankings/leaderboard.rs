use super::metric::RankingMetric;
use super::pipeline::{sorted_matches, RankingQuery};
use super::row::StatRow;
use serde::Serialize;

/// One ranked row as a dashboard table renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry<R> {
    /// 1-based position; ties take consecutive positions in input order.
    pub position: usize,
    pub score: i64,
    pub metric_value: f64,
    pub record: R,
}

/// Headline figures shown above a ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardSummary {
    pub total_records: usize,
    pub matched_records: usize,
    pub top_score: i64,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard<R> {
    pub metric: &'static str,
    pub summary: LeaderboardSummary,
    pub entries: Vec<RankedEntry<R>>,
}

/// Ranks `records` and numbers the surviving rows.
///
/// Summary figures cover every row matching the search, including the ones
/// cut by the query limit.
pub fn rank<R: StatRow>(records: &[R], query: &RankingQuery<R::Metric>) -> Leaderboard<R> {
    let matches = sorted_matches(records, query);

    let scores: Vec<i64> = matches.iter().map(|(_, record)| record.score()).collect();
    let top_score = scores.iter().copied().max().unwrap_or(0);
    let average_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|score| *score as f64).sum::<f64>() / scores.len() as f64
    };

    let summary = LeaderboardSummary {
        total_records: records.len(),
        matched_records: matches.len(),
        top_score,
        average_score,
    };

    let entries = matches
        .into_iter()
        .zip(scores)
        .take(query.limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(index, ((metric_value, record), score))| RankedEntry {
            position: index + 1,
            score,
            metric_value,
            record: record.clone(),
        })
        .collect();

    Leaderboard {
        metric: query.metric.key(),
        summary,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rankings::domains::{AuthorStats, EngagementMetric, EngagementStats};

    fn engagement(name: &str, likes: f64, follows: f64) -> EngagementStats {
        EngagementStats {
            display_name: Some(name.to_string()),
            likes_count: Some(likes),
            follows_count: Some(follows),
            ..EngagementStats::default()
        }
    }

    #[test]
    fn positions_are_sequential_and_one_based() {
        let rows = vec![
            engagement("Kito", 10.0, 0.0),
            engagement("Zawadi", 0.0, 10.0),
            engagement("Baraka", 10.0, 0.0),
        ];
        let board = rank(&rows, &RankingQuery::default());

        let positions: Vec<_> = board
            .entries
            .iter()
            .map(|entry| (entry.position, entry.record.label(), entry.score))
            .collect();
        assert_eq!(
            positions,
            [(1, "Zawadi", 30), (2, "Kito", 10), (3, "Baraka", 10)]
        );
        assert_eq!(board.metric, "score");
    }

    #[test]
    fn summary_covers_matches_beyond_the_limit() {
        let rows = vec![
            engagement("Kito", 10.0, 0.0),
            engagement("Zawadi", 0.0, 10.0),
            engagement("Baraka", 20.0, 0.0),
        ];
        let query = RankingQuery::new("", EngagementMetric::Likes).with_limit(Some(1));
        let board = rank(&rows, &query);

        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].record.label(), "Baraka");
        assert_eq!(board.entries[0].metric_value, 20.0);
        assert_eq!(board.summary.total_records, 3);
        assert_eq!(board.summary.matched_records, 3);
        assert_eq!(board.summary.top_score, 30);
        assert!((board.summary.average_score - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_matches_produce_zeroed_summary() {
        let rows = vec![engagement("Kito", 10.0, 0.0)];
        let board = rank(&rows, &RankingQuery::new("zzz-no-match", EngagementMetric::Score));
        assert!(board.entries.is_empty());
        assert_eq!(board.summary.matched_records, 0);
        assert_eq!(board.summary.top_score, 0);
        assert_eq!(board.summary.average_score, 0.0);
    }

    #[test]
    fn saturated_scores_do_not_overflow_the_mean() {
        let prolific = AuthorStats {
            books_count: Some(1e300),
            ..AuthorStats::default()
        };
        let rows = vec![prolific.clone(), prolific];
        let board = rank(&rows, &RankingQuery::default());

        assert_eq!(board.summary.top_score, i64::MAX);
        assert_eq!(board.entries[1].score, i64::MAX);
        assert!(board.summary.average_score > 0.0);
        assert!((board.summary.average_score - i64::MAX as f64).abs() <= 1.0);
    }
}

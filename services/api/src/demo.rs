use crate::infra::parse_limit;
use clap::Args;
use serde_json::{json, Value};
use somalux::error::AppError;
use somalux::rankings::{
    read_records_from_path, Domain, RankingReport, RankingRequest, ScoreBreakdown,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Dashboard to rank (authors, books, users, categories, universities, papers,
    /// activity, achievements, ads, goals, subscribers, engagement)
    pub(crate) domain: Domain,
    /// JSON or CSV export of stat rows
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Case-insensitive search term applied to the domain's name fields
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Metric key to sort by; unknown keys sort by score
    #[arg(long, default_value = "score")]
    pub(crate) metric: String,
    /// Keep only the top N rows
    #[arg(long, value_parser = parse_limit)]
    pub(crate) limit: Option<usize>,
    /// Print the report as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Dashboard whose score formula applies
    pub(crate) domain: Domain,
    /// JSON or CSV export; the first record is scored
    #[arg(long)]
    pub(crate) input: PathBuf,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        domain,
        input,
        search,
        metric,
        limit,
        json,
    } = args;

    let records = read_records_from_path(&input)?;
    let request = RankingRequest {
        search_term: search,
        filter_metric: metric,
        limit,
    };
    let report = domain.rank(records, &request)?;

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{body}"),
            Err(err) => println!("Report unavailable: {err}"),
        }
    } else {
        for line in report_lines(&report) {
            println!("{line}");
        }
    }

    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let records = read_records_from_path(&args.input)?;
    let record = records.into_iter().next().unwrap_or_else(|| json!({}));
    let breakdown = args.domain.score(record)?;

    for line in breakdown_lines(args.domain, &breakdown) {
        println!("{line}");
    }
    Ok(())
}

pub(crate) fn run_domains() {
    for domain in Domain::ALL {
        let descriptor = domain.descriptor();
        println!("{}", descriptor.domain);
        println!("  metrics: {}", descriptor.metrics.join(", "));
        println!("  search: {}", descriptor.search_fields.join(", "));
        let weights: Vec<String> = descriptor
            .weights
            .iter()
            .map(|weight| format!("{} x{}", weight.field, weight.weight))
            .collect();
        println!("  score: {}", weights.join(" + "));
    }
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    println!("SomaLux ranking demo");

    for (domain, records, metric) in sample_datasets() {
        let request = RankingRequest {
            filter_metric: metric.to_string(),
            ..RankingRequest::default()
        };
        let report = domain.rank(records, &request)?;
        println!();
        for line in report_lines(&report) {
            println!("{line}");
        }
    }

    let breakdown = Domain::Authors.score(sample_authors().swap_remove(0))?;
    println!();
    for line in breakdown_lines(Domain::Authors, &breakdown) {
        println!("{line}");
    }

    Ok(())
}

pub(crate) fn report_lines(report: &RankingReport) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ranked by {} ({} of {} rows matched, top score {}, mean {:.1})",
        report.domain,
        report.metric,
        report.summary.matched_records,
        report.summary.total_records,
        report.summary.top_score,
        report.summary.average_score
    )];

    if report.entries.is_empty() {
        lines.push("  no matching rows".to_string());
        return lines;
    }

    for entry in &report.entries {
        let label = if entry.label.is_empty() {
            "(unnamed)"
        } else {
            entry.label.as_str()
        };
        if report.metric == "score" {
            lines.push(format!(
                "  {:>3}. {:<32} score {:>6}",
                entry.position, label, entry.score
            ));
        } else {
            lines.push(format!(
                "  {:>3}. {:<32} {} {:>10.2} | score {:>6}",
                entry.position, label, report.metric, entry.metric_value, entry.score
            ));
        }
    }
    lines
}

pub(crate) fn breakdown_lines(domain: Domain, breakdown: &ScoreBreakdown) -> Vec<String> {
    let mut lines = vec![format!("{domain} score {}", breakdown.score)];
    for component in &breakdown.components {
        lines.push(format!(
            "  {:<20} {:>10.2} x {:<6} = {:>10.2}",
            component.field, component.value, component.weight, component.contribution
        ));
    }
    lines
}

fn sample_datasets() -> Vec<(Domain, Vec<Value>, &'static str)> {
    vec![
        (Domain::Authors, sample_authors(), "score"),
        (
            Domain::Books,
            vec![
                json!({ "title": "Introduction to Algorithms", "author_name": "Amina Odhiambo", "downloads_count": 820, "views_count": 4100, "avg_rating": 4.7, "reviews_count": 38 }),
                json!({ "title": "Kiswahili Grammar", "author_name": "Juma Kamau", "downloads_count": 410, "views_count": 2900, "avg_rating": 4.2, "reviews_count": 12 }),
                json!({ "title": "Organic Chemistry Notes", "author_name": "Wanjiru Njoroge", "downloads_count": 1020, "views_count": 3600, "avg_rating": 3.9 }),
            ],
            "downloads",
        ),
        (
            Domain::Papers,
            vec![
                json!({ "title": "Calculus I Final", "course_code": "MAT101", "university_name": "University of Nairobi", "downloads_count": 640, "views_count": 2200 }),
                json!({ "title": "Data Structures Midterm", "course_code": "CSC204", "university_name": "Makerere University", "downloads_count": 510, "views_count": 2500, "avg_rating": 4.4 }),
            ],
            "score",
        ),
        (
            Domain::Ads,
            vec![
                json!({ "title": "Campus Books Sale", "advertiser": "Text Book Centre", "impressions": 20000, "clicks": 300, "conversions": 12 }),
                json!({ "title": "Laptop Deals", "advertiser": "Tech Hub", "impressions": 1000, "clicks": 80 }),
            ],
            "ctr",
        ),
        (
            Domain::Subscribers,
            vec![
                json!({ "display_name": "Amina Odhiambo", "plan_name": "Premium", "months_subscribed": 12, "total_paid": 3600, "is_active": true }),
                json!({ "display_name": "Baraka Otieno", "plan_name": "Basic", "months_subscribed": 3, "total_paid": 450, "is_active": false }),
            ],
            "score",
        ),
    ]
}

fn sample_authors() -> Vec<Value> {
    vec![
        json!({ "display_name": "Amina Odhiambo", "email": "amina@somalux.africa", "books_count": 4, "total_downloads": 1200, "avg_rating": 4.6, "followers_count": 80, "likes_count": 140, "reviews_count": 22 }),
        json!({ "display_name": "Juma Kamau", "email": "juma@example.com", "books_count": 1, "total_downloads": 90, "avg_rating": 3.9, "followers_count": 4 }),
        json!({ "display_name": "Wanjiru Njoroge", "email": "wanjiru@somalux.africa", "books_count": 7, "total_downloads": 300, "avg_rating": 4.1, "followers_count": 15, "comments_count": 9, "shares_count": 6 }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_render_positions_and_scores() {
        let report = Domain::Authors
            .rank(sample_authors(), &RankingRequest::default())
            .expect("authors rank");
        let lines = report_lines(&report);

        assert!(lines[0].starts_with("authors ranked by score (3 of 3 rows matched"));
        assert!(lines[1].contains("1. Amina Odhiambo"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn report_lines_note_empty_results() {
        let request = RankingRequest {
            search_term: "zzz-no-match".to_string(),
            ..RankingRequest::default()
        };
        let report = Domain::Books
            .rank(Vec::new(), &request)
            .expect("empty rank");
        assert_eq!(report_lines(&report)[1], "  no matching rows");
    }

    #[test]
    fn breakdown_lines_list_every_component() {
        let breakdown = Domain::Goals
            .score(json!({ "target_value": 10, "current_value": 5, "is_completed": false }))
            .expect("goal scores");
        let lines = breakdown_lines(Domain::Goals, &breakdown);
        assert_eq!(lines[0], "goals score 53");
        assert_eq!(lines.len(), 1 + breakdown.components.len());
    }

    #[test]
    fn demo_datasets_all_rank() {
        for (domain, records, metric) in sample_datasets() {
            let request = RankingRequest {
                filter_metric: metric.to_string(),
                ..RankingRequest::default()
            };
            let report = domain.rank(records, &request).expect("sample ranks");
            assert_eq!(report.metric, metric);
            assert!(!report.entries.is_empty());
        }
    }
}

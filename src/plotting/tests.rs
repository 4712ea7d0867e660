use super::chart::*;
use super::styles::{tier_color, ChartStyle, TIER_EXTREME};
use crate::analysis::aggregate::{
    CompletionShare, DashboardAggregates, GuestPopularity, Kpis, SeasonCompletion, SeasonFormat,
    TierCompletion,
};
use crate::types::{HeatTier, Outcome, ViewSource};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn sample_aggregates() -> DashboardAggregates {
    DashboardAggregates {
        kpis: Kpis {
            total_guests: 3,
            total_episodes: 3,
            completion_rate: 2.0 / 3.0,
        },
        completion_share: vec![
            CompletionShare {
                completed: false,
                status: "Did not finish".to_string(),
                guests: 1,
                percent: 25.0,
            },
            CompletionShare {
                completed: true,
                status: "Finished all 10".to_string(),
                guests: 3,
                percent: 75.0,
            },
        ],
        heat_tiers: vec![
            TierCompletion {
                tier: HeatTier::Mild,
                completion_rate: 0.6,
            },
            TierCompletion {
                tier: HeatTier::Extreme,
                completion_rate: 0.8,
            },
        ],
        season_trend: vec![
            SeasonCompletion {
                season: 1,
                completion_pct: 80.0,
            },
            SeasonCompletion {
                season: 2,
                completion_pct: 95.0,
            },
        ],
        season_format: vec![
            SeasonFormat {
                season: 1,
                avg_scoville: Some(250_000.0),
                completion_rate: 0.8,
                completion_pct: 80.0,
                row_count: 20,
            },
            SeasonFormat {
                season: 2,
                avg_scoville: None,
                completion_rate: 0.95,
                completion_pct: 95.0,
                row_count: 20,
            },
        ],
        top_guests: vec![
            GuestPopularity {
                guest: "Big Star".to_string(),
                avg_views: Some(12_000_000.0),
                completion_rate: 0.0,
                outcome: Outcome::Failed,
            },
            GuestPopularity {
                guest: "Tom & <Jerry>".to_string(),
                avg_views: Some(3_500.0),
                completion_rate: 1.0,
                outcome: Outcome::Completed,
            },
        ],
        view_source: ViewSource::Views,
    }
}

#[test]
fn test_render_all_charts() {
    let aggregates = sample_aggregates();
    let charts = render_charts(&aggregates).unwrap();

    let kinds: Vec<ChartKind> = charts.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, ChartKind::ALL.to_vec());
    for chart in &charts {
        assert!(chart.svg.contains("<svg"), "{:?} is not SVG", chart.kind);
        assert!(chart.svg.contains(&chart.title), "{:?} lacks its title", chart.kind);
    }
}

#[test]
fn test_completion_share_hover_text() {
    let aggregates = sample_aggregates();
    let chart = render_completion_share(&aggregates.completion_share, &ChartStyle::default()).unwrap();

    assert_eq!(chart.points.len(), 2);
    assert_eq!(chart.points[0].hover, "Did not finish\n% of Guests: 25.00%");
    assert_eq!(chart.points[1].value, "75.0%");
    assert!(chart.svg.contains("75.0%"));
}

#[test]
fn test_heat_tier_chart_uses_tier_colors() {
    let aggregates = sample_aggregates();
    let chart = render_heat_tiers(&aggregates.heat_tiers, &ChartStyle::default()).unwrap();

    assert_eq!(tier_color(HeatTier::Extreme), TIER_EXTREME);
    assert!(chart.svg.to_uppercase().contains("#EF476F"));
    assert_eq!(chart.points[1].hover, "Extreme\nCompletion Rate: 80.00%");
}

#[test]
fn test_season_format_handles_missing_heat() {
    let aggregates = sample_aggregates();
    let chart = render_season_format(&aggregates.season_format, &ChartStyle::default()).unwrap();

    assert_eq!(chart.points[1].value, "n/a SHU / 95.0%");
    assert!(chart.points[0].hover.contains("250,000 SHU"));
}

#[test]
fn test_guest_popularity_escapes_names_and_marks_proxy() {
    let aggregates = sample_aggregates();
    let chart = render_guest_popularity(
        &aggregates.top_guests,
        ViewSource::RankProxy,
        &ChartStyle::default(),
    )
    .unwrap();

    assert!(!chart.svg.contains("<Jerry>"));
    assert!(chart.svg.contains("synthetic rank proxy"));
    assert_eq!(chart.points[0].hover, "Big Star\nAvg Views: 12,000,000\nOutcome: Failed");
}

#[test]
fn test_guest_popularity_skips_non_finite_views() {
    let mut aggregates = sample_aggregates();
    aggregates.top_guests[0].avg_views = Some(f64::INFINITY);
    let total = aggregates.top_guests.len();

    let chart = render_guest_popularity(
        &aggregates.top_guests,
        ViewSource::Views,
        &ChartStyle::default(),
    )
    .unwrap();
    assert_eq!(chart.points.len(), total - 1);
    assert!(chart.points.iter().all(|p| p.label != aggregates.top_guests[0].guest));
}

#[test]
fn test_empty_plot() {
    let mut aggregates = sample_aggregates();
    aggregates.completion_share.clear();
    aggregates.heat_tiers.clear();
    aggregates.season_trend.clear();
    aggregates.season_format.clear();
    aggregates.top_guests.clear();

    // Should handle empty data gracefully
    let charts = render_charts(&aggregates).unwrap();
    assert_eq!(charts.len(), 5);
    assert!(charts.iter().all(|c| c.points.is_empty()));
    assert!(charts[0].svg.contains("No completion data"));
}

#[tokio::test]
async fn test_plot_cache_reuses_charts() {
    let aggregates = Arc::new(sample_aggregates());
    let first = render_charts_async(Arc::clone(&aggregates)).await.unwrap();
    assert!(plot_cache_len().await >= 1);

    let second = render_charts_async(aggregates).await.unwrap();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.svg, b.svg);
    }
}

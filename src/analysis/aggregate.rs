//! Grouped aggregates behind each dashboard chart.
//!
//! Every function takes the joined [`Dataset`] and reduces it the same way
//! regardless of how it will be drawn; the plotting layer only reshapes
//! these results into series.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::config::DashboardConfig;
use crate::types::{Dataset, HeatTier, JoinedRow, Outcome, ViewSource};
use crate::utils::{group_by, mean, rate};

/// Headline metrics shown above the charts.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kpis {
    pub total_guests: usize,
    pub total_episodes: usize,
    /// Mean of the joined completion column, 0..=1
    pub completion_rate: f64,
}

impl Kpis {
    pub fn completion_label(&self) -> String {
        format!("{:.1}%", self.completion_rate * 100.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CompletionShare {
    pub completed: bool,
    pub status: String,
    pub guests: usize,
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TierCompletion {
    pub tier: HeatTier,
    pub completion_rate: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonCompletion {
    pub season: u32,
    pub completion_pct: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonFormat {
    pub season: u32,
    /// Mean Scoville over rows with a heat value
    pub avg_scoville: Option<f64>,
    pub completion_rate: f64,
    pub completion_pct: f64,
    /// Joined rows in the season (one per episode and sauce)
    pub row_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GuestPopularity {
    pub guest: String,
    pub avg_views: Option<f64>,
    pub completion_rate: f64,
    pub outcome: Outcome,
}

/// Every aggregate the page needs, computed in one pass over the dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardAggregates {
    pub kpis: Kpis,
    pub completion_share: Vec<CompletionShare>,
    pub heat_tiers: Vec<TierCompletion>,
    pub season_trend: Vec<SeasonCompletion>,
    pub season_format: Vec<SeasonFormat>,
    pub top_guests: Vec<GuestPopularity>,
    pub view_source: ViewSource,
}

impl DashboardAggregates {
    pub fn compute(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let mut top_guests: Vec<GuestPopularity> = guest_popularity(dataset, config.outcome_threshold)
            .into_iter()
            .filter(|g| g.avg_views.is_some())
            .collect();
        top_guests.truncate(config.top_guests);

        Self {
            kpis: kpis(dataset),
            completion_share: completion_share(dataset),
            heat_tiers: heat_tier_completion(dataset),
            season_trend: season_trend(dataset),
            season_format: season_format_trend(dataset),
            top_guests,
            view_source: dataset.view_source,
        }
    }
}

fn completed_flag(row: &JoinedRow) -> Option<bool> {
    Some(row.completed)
}

pub fn kpis(dataset: &Dataset) -> Kpis {
    let guests: BTreeSet<&str> = dataset.rows.iter().map(|r| r.guest.as_str()).collect();
    let episodes: BTreeSet<u32> = dataset.rows.iter().filter_map(|r| r.episode).collect();
    let flags: Vec<bool> = dataset.rows.iter().map(|r| r.completed).collect();

    Kpis {
        total_guests: guests.len(),
        total_episodes: episodes.len(),
        completion_rate: rate(&flags).unwrap_or(0.0),
    }
}

/// Unique guests per completion flag as a share of the summed group sizes.
///
/// A guest with both finished and unfinished appearances counts in both groups.
pub fn completion_share(dataset: &Dataset) -> Vec<CompletionShare> {
    let mut groups: BTreeMap<bool, BTreeSet<&str>> = BTreeMap::new();
    for row in &dataset.rows {
        groups.entry(row.completed).or_default().insert(row.guest.as_str());
    }

    let total: usize = groups.values().map(BTreeSet::len).sum();
    groups
        .into_iter()
        .map(|(completed, guests)| CompletionShare {
            completed,
            status: if completed {
                "Finished all 10".to_string()
            } else {
                "Did not finish".to_string()
            },
            guests: guests.len(),
            percent: if total > 0 {
                guests.len() as f64 / total as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

/// Mean completion per heat tier in Mild..Extreme order, present tiers only.
pub fn heat_tier_completion(dataset: &Dataset) -> Vec<TierCompletion> {
    group_by(&dataset.rows, JoinedRow::heat_tier, completed_flag)
        .into_iter()
        .filter_map(|(tier, flags)| {
            rate(&flags).map(|completion_rate| TierCompletion {
                tier,
                completion_rate,
            })
        })
        .collect()
}

/// Completion percentage per season.
pub fn season_trend(dataset: &Dataset) -> Vec<SeasonCompletion> {
    group_by(&dataset.rows, |r| r.season, completed_flag)
        .into_iter()
        .filter_map(|(season, flags)| {
            rate(&flags).map(|r| SeasonCompletion {
                season,
                completion_pct: r * 100.0,
            })
        })
        .collect()
}

/// Heat intensity, completion and volume per season.
pub fn season_format_trend(dataset: &Dataset) -> Vec<SeasonFormat> {
    let by_season = group_by(&dataset.rows, |r| r.season, |r| Some(r.clone()));

    by_season
        .into_iter()
        .map(|(season, rows)| {
            let heat: Vec<f64> = rows.iter().filter_map(|r| r.scoville).collect();
            let flags: Vec<bool> = rows.iter().map(|r| r.completed).collect();
            let completion_rate = rate(&flags).unwrap_or(0.0);
            SeasonFormat {
                season,
                avg_scoville: mean(&heat),
                completion_rate,
                completion_pct: completion_rate * 100.0,
                row_count: rows.len(),
            }
        })
        .collect()
}

/// Mean views and completion per guest, most viewed first.
///
/// Guests without any view value sort last. Ties keep alphabetical order.
pub fn guest_popularity(dataset: &Dataset, threshold: f64) -> Vec<GuestPopularity> {
    let views = group_by(&dataset.rows, |r| Some(r.guest.clone()), |r| r.views);
    let flags = group_by(&dataset.rows, |r| Some(r.guest.clone()), completed_flag);

    let mut guests: Vec<GuestPopularity> = views
        .into_iter()
        .map(|(guest, guest_views)| {
            let completion_rate = flags.get(&guest).and_then(|f| rate(f)).unwrap_or(0.0);
            GuestPopularity {
                avg_views: mean(&guest_views),
                outcome: Outcome::from_rate(completion_rate, threshold),
                completion_rate,
                guest,
            }
        })
        .collect();

    guests.sort_by(|a, b| match (a.avg_views, b.avg_views) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    guests
}

//! # Common Types
//!
//! This module contains the common types used throughout the application for
//! representing the joined show data, its derived attributes and caching.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Display labels for the joined table's columns.
pub mod columns {
    pub const GUEST: &str = "Guest";
    pub const SEASON: &str = "Season";
    pub const EPISODE: &str = "Episode";
    pub const COMPLETED: &str = "Completed";
    pub const SAUCE_NUMBER: &str = "Sauce #";
    pub const SCOVILLE: &str = "Scoville (SHU)";
    pub const HEAT_TIER: &str = "Heat Tier";
    pub const VIEWS: &str = "Views";

    /// Header order of the exported joined table.
    pub const ALL: [&str; 8] = [
        GUEST,
        SEASON,
        EPISODE,
        COMPLETED,
        SAUCE_NUMBER,
        SCOVILLE,
        HEAT_TIER,
        VIEWS,
    ];
}

/// A key used for caching the loaded dataset.
///
/// The dataset is memoized per session for each combination of input files.
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct CacheKey {
    pub episodes: PathBuf,
    pub seasons: PathBuf,
    pub sauces: PathBuf,
}

/// Ordinal heat bucket derived from a Scoville value.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HeatTier {
    Mild,
    Medium,
    Hot,
    Extreme,
}

impl HeatTier {
    /// All tiers in display order.
    pub const ORDER: [HeatTier; 4] = [
        HeatTier::Mild,
        HeatTier::Medium,
        HeatTier::Hot,
        HeatTier::Extreme,
    ];

    /// Bucket a Scoville value using the fixed thresholds.
    pub fn from_scoville(shu: f64) -> Self {
        if shu < 5_000.0 {
            HeatTier::Mild
        } else if shu < 50_000.0 {
            HeatTier::Medium
        } else if shu < 500_000.0 {
            HeatTier::Hot
        } else {
            HeatTier::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HeatTier::Mild => "Mild",
            HeatTier::Medium => "Medium",
            HeatTier::Hot => "Hot",
            HeatTier::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for HeatTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-guest challenge outcome.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Completed,
    Failed,
}

impl Outcome {
    /// Classify a completion rate against a threshold (inclusive).
    pub fn from_rate(rate: f64, threshold: f64) -> Self {
        if rate >= threshold {
            Outcome::Completed
        } else {
            Outcome::Failed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Completed => "Completed",
            Outcome::Failed => "Failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the popularity column came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum ViewSource {
    /// A `views` column in the episodes file
    Views,
    /// A `youtube_views` column in the episodes file
    YoutubeViews,
    /// Dense rank of the episode index, descending, times 1000
    RankProxy,
}

impl ViewSource {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, ViewSource::RankProxy)
    }
}

/// Season metadata as read from the seasons file.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeasonInfo {
    pub season: u32,
    pub episodes: Option<u32>,
    pub original_release: Option<NaiveDate>,
    pub last_release: Option<NaiveDate>,
}

/// One row of the joined table: an episode paired with one sauce of its season.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct JoinedRow {
    pub guest: String,
    /// Missing when the source key is blank or not a whole number
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub title: Option<String>,
    pub completed: bool,
    /// Episode count of the season, if the season was found
    pub season_episodes: Option<u32>,
    pub original_release: Option<NaiveDate>,
    pub last_release: Option<NaiveDate>,
    pub sauce_number: Option<u32>,
    pub sauce_name: Option<String>,
    pub scoville: Option<f64>,
    pub views: Option<f64>,
}

impl JoinedRow {
    /// Heat tier of the row's sauce; rows without a heat value have none.
    ///
    /// A missing value is not bucketed as `Extreme`, so unknown sauces stay
    /// out of the tier chart instead of inflating the hottest tier.
    pub fn heat_tier(&self) -> Option<HeatTier> {
        self.scoville.map(HeatTier::from_scoville)
    }
}

/// The unified table produced by the loader.
#[derive(Clone, Debug, Serialize)]
pub struct Dataset {
    pub rows: Vec<JoinedRow>,
    pub seasons: Vec<SeasonInfo>,
    pub view_source: ViewSource,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heat_tier_boundaries() {
        let cases = [
            (0.0, HeatTier::Mild),
            (4_999.0, HeatTier::Mild),
            (5_000.0, HeatTier::Medium),
            (49_999.0, HeatTier::Medium),
            (50_000.0, HeatTier::Hot),
            (499_999.0, HeatTier::Hot),
            (500_000.0, HeatTier::Extreme),
            (2_200_000.0, HeatTier::Extreme),
        ];
        for (shu, expected) in cases {
            assert_eq!(HeatTier::from_scoville(shu), expected, "shu = {}", shu);
        }
    }

    #[test]
    fn test_heat_tier_order_matches_ord() {
        let mut sorted = HeatTier::ORDER.to_vec();
        sorted.sort();
        assert_eq!(sorted, HeatTier::ORDER.to_vec());
    }

    #[test]
    fn test_outcome_threshold_is_inclusive() {
        assert_eq!(Outcome::from_rate(0.5, 0.5), Outcome::Completed);
        assert_eq!(Outcome::from_rate(0.49, 0.5), Outcome::Failed);
        assert_eq!(Outcome::from_rate(1.0, 0.5).to_string(), "Completed");
    }

    #[test]
    fn test_missing_heat_has_no_tier() {
        let row = JoinedRow {
            guest: "A".to_string(),
            season: Some(1),
            episode: Some(1),
            title: None,
            completed: true,
            season_episodes: None,
            original_release: None,
            last_release: None,
            sauce_number: None,
            sauce_name: None,
            scoville: None,
            views: None,
        };
        assert_eq!(row.heat_tier(), None);
    }
}

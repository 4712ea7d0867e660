use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::config::DataPaths;
use crate::error::{DashboardError, Result};
use crate::types::{Dataset, JoinedRow, SeasonInfo, ViewSource};
use crate::utils::dense_rank_desc;

const EPISODE_COLUMNS: [&str; 4] = ["guest", "season", "episode_overall", "finished"];
const SEASON_COLUMNS: [&str; 4] = ["season", "episodes", "original_release", "last_release"];
const SAUCE_COLUMNS: [&str; 4] = ["season", "sauce_number", "sauce_name", "scoville"];

/// Multiplier applied to the dense episode rank when no view column exists.
const RANK_PROXY_SCALE: f64 = 1000.0;

#[derive(Debug, Deserialize)]
struct EpisodeRecord {
    guest: String,
    season: Option<String>,
    episode_overall: Option<String>,
    finished: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeasonRecord {
    season: Option<String>,
    episodes: Option<String>,
    original_release: Option<String>,
    last_release: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SauceRecord {
    season: Option<String>,
    sauce_number: Option<String>,
    sauce_name: Option<String>,
    scoville: Option<String>,
}

#[derive(Clone, Debug)]
struct SauceInfo {
    number: Option<u32>,
    name: Option<String>,
    scoville: Option<f64>,
}

/// Parse a numeric field, treating anything unparseable as missing.
pub fn coerce_number(raw: Option<&str>) -> Option<f64> {
    let value = raw?.trim().parse::<f64>().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Parse a non-negative whole number such as a season key or a count.
///
/// Float spellings like `1.0` are accepted; fractions, negatives and
/// anything unparseable are missing.
pub fn coerce_whole(raw: Option<&str>) -> Option<u32> {
    let value = coerce_number(raw)?;
    if value.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&value) {
        Some(value as u32)
    } else {
        None
    }
}

/// Truthiness of a completion field.
///
/// Boolean words and numbers map to their usual meaning, empty is false and
/// any other non-empty text is true.
pub fn parse_completed(raw: Option<&str>) -> bool {
    let value = match raw.map(str::trim) {
        None | Some("") => return false,
        Some(v) => v,
    };
    match value.to_ascii_lowercase().as_str() {
        "true" | "t" | "yes" | "y" => true,
        "false" | "f" | "no" | "n" => false,
        other => match other.parse::<f64>() {
            Ok(n) => n != 0.0 && !n.is_nan(),
            Err(_) => true,
        },
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%Y"))
        .ok()
}

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    let file = std::fs::File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ReaderBuilder::new().trim(Trim::All).from_reader(file))
}

fn read_headers(reader: &mut csv::Reader<std::fs::File>, path: &Path) -> Result<StringRecord> {
    reader
        .headers()
        .cloned()
        .map_err(|source| DashboardError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn require_columns(headers: &StringRecord, required: &[&str], path: &Path) -> Result<()> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(DashboardError::MissingColumn {
                file: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Read a file into typed records after checking its header.
fn read_table<T: DeserializeOwned>(
    path: &Path,
    required: &[&str],
) -> Result<(StringRecord, Vec<(T, StringRecord)>)> {
    let mut reader = open_reader(path)?;
    let headers = read_headers(&mut reader, path)?;
    require_columns(&headers, required, path)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| DashboardError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let typed: T = record
            .deserialize(Some(&headers))
            .map_err(|source| DashboardError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        rows.push((typed, record));
    }
    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok((headers, rows))
}

fn detect_view_column(headers: &StringRecord) -> Option<(usize, ViewSource)> {
    let find = |name: &str| headers.iter().position(|h| h == name);
    find("views")
        .map(|idx| (idx, ViewSource::Views))
        .or_else(|| find("youtube_views").map(|idx| (idx, ViewSource::YoutubeViews)))
}

/// Load the three input files and produce the unified table.
pub fn load_data(paths: &DataPaths) -> Result<Dataset> {
    info!("Loading data from {}", paths.episodes.display());

    let (episode_headers, episodes) = read_table::<EpisodeRecord>(&paths.episodes, &EPISODE_COLUMNS)?;
    let (_, seasons) = read_table::<SeasonRecord>(&paths.seasons, &SEASON_COLUMNS)?;
    let (_, sauces) = read_table::<SauceRecord>(&paths.sauces, &SAUCE_COLUMNS)?;

    if episodes.is_empty() {
        return Err(DashboardError::EmptyDataset(paths.episodes.clone()));
    }

    // Rows whose season key is not a whole number cannot join anything
    let mut bad_keys = 0usize;

    let mut season_infos: Vec<SeasonInfo> = Vec::with_capacity(seasons.len());
    for (s, _) in seasons {
        match coerce_whole(s.season.as_deref()) {
            Some(season) => season_infos.push(SeasonInfo {
                season,
                episodes: coerce_whole(s.episodes.as_deref()),
                original_release: parse_date(s.original_release.as_deref()),
                last_release: parse_date(s.last_release.as_deref()),
            }),
            None => bad_keys += 1,
        }
    }

    let mut seasons_by_key: HashMap<u32, Vec<&SeasonInfo>> = HashMap::new();
    for info in &season_infos {
        seasons_by_key.entry(info.season).or_default().push(info);
    }

    let mut sauces_by_key: HashMap<u32, Vec<SauceInfo>> = HashMap::new();
    let mut bad_heat = 0usize;
    for (sauce, _) in sauces {
        let scoville = coerce_number(sauce.scoville.as_deref());
        if scoville.is_none() && sauce.scoville.is_some() {
            bad_heat += 1;
        }
        let Some(season) = coerce_whole(sauce.season.as_deref()) else {
            bad_keys += 1;
            continue;
        };
        sauces_by_key.entry(season).or_default().push(SauceInfo {
            number: coerce_whole(sauce.sauce_number.as_deref()),
            name: sauce.sauce_name,
            scoville,
        });
    }
    if bad_heat > 0 {
        warn!("{} sauce rows had a non-numeric heat value", bad_heat);
    }

    let view_column = detect_view_column(&episode_headers);
    let view_source = view_column
        .map(|(_, source)| source)
        .unwrap_or(ViewSource::RankProxy);

    let mut rows = Vec::new();
    for (episode, record) in &episodes {
        let completed = parse_completed(episode.finished.as_deref());
        let views = view_column.and_then(|(idx, _)| coerce_number(record.get(idx)));
        let season_key = coerce_whole(episode.season.as_deref());
        if season_key.is_none() {
            bad_keys += 1;
        }

        let season_matches: Vec<Option<&SeasonInfo>> =
            match season_key.and_then(|k| seasons_by_key.get(&k)) {
                Some(found) => found.iter().copied().map(Some).collect(),
                None => vec![None],
            };
        let sauce_matches: Vec<Option<&SauceInfo>> =
            match season_key.and_then(|k| sauces_by_key.get(&k)) {
                Some(found) => found.iter().map(Some).collect(),
                None => vec![None],
            };
        let episode_key = coerce_whole(episode.episode_overall.as_deref());

        for season in &season_matches {
            for sauce in &sauce_matches {
                rows.push(JoinedRow {
                    guest: episode.guest.clone(),
                    season: season_key,
                    episode: episode_key,
                    title: episode.title.clone(),
                    completed,
                    season_episodes: season.and_then(|s| s.episodes),
                    original_release: season.and_then(|s| s.original_release),
                    last_release: season.and_then(|s| s.last_release),
                    sauce_number: sauce.and_then(|s| s.number),
                    sauce_name: sauce.and_then(|s| s.name.clone()),
                    scoville: sauce.and_then(|s| s.scoville),
                    views,
                });
            }
        }
    }

    if bad_keys > 0 {
        warn!("{} rows had a season key that is not a whole number", bad_keys);
    }

    if view_source.is_synthetic() {
        // Rows without an episode number get no proxy value
        let episode_ids: Vec<u32> = rows.iter().filter_map(|r| r.episode).collect();
        let ranks = dense_rank_desc(&episode_ids);
        let mut ranks = ranks.into_iter();
        for row in rows.iter_mut().filter(|r| r.episode.is_some()) {
            row.views = ranks.next().map(|rank| rank as f64 * RANK_PROXY_SCALE);
        }
        warn!("No view count column found, using a rank-based popularity proxy");
    }

    info!(
        "Joined {} episodes into {} rows across {} seasons",
        episodes.len(),
        rows.len(),
        season_infos.len()
    );

    Ok(Dataset {
        rows,
        seasons: season_infos,
        view_source,
    })
}

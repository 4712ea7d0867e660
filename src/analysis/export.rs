use csv::Writer;
use log::info;
use std::io;

use crate::error::Result;
use crate::types::{columns, Dataset, JoinedRow};

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn record(row: &JoinedRow) -> [String; 8] {
    [
        row.guest.clone(),
        optional(row.season),
        optional(row.episode),
        row.completed.to_string(),
        optional(row.sauce_number),
        optional(row.scoville),
        optional(row.heat_tier()),
        optional(row.views),
    ]
}

/// Write the joined table as CSV under its display labels.
pub fn write_joined_csv<W: io::Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut csv = Writer::from_writer(writer);
    csv.write_record(columns::ALL)?;
    for row in &dataset.rows {
        csv.write_record(record(row))?;
    }
    csv.flush().map_err(csv::Error::from)?;
    info!("Exported {} joined rows", dataset.rows.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ViewSource;
    use pretty_assertions::assert_eq;

    fn row(guest: &str, scoville: Option<f64>) -> JoinedRow {
        JoinedRow {
            guest: guest.to_string(),
            season: Some(1),
            episode: Some(3),
            title: None,
            completed: true,
            season_episodes: Some(10),
            original_release: None,
            last_release: None,
            sauce_number: scoville.map(|_| 10),
            sauce_name: None,
            scoville,
            views: Some(3000.0),
        }
    }

    #[test]
    fn test_write_joined_csv() {
        let dataset = Dataset {
            rows: vec![row("Tony Yayo", Some(2200000.0)), row("Guest, Jr.", None)],
            seasons: Vec::new(),
            view_source: ViewSource::Views,
        };
        let mut out = Vec::new();
        write_joined_csv(&dataset, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Guest,Season,Episode,Completed,Sauce #,Scoville (SHU),Heat Tier,Views",
                "Tony Yayo,1,3,true,10,2200000,Extreme,3000",
                "\"Guest, Jr.\",1,3,true,,,,3000",
            ]
        );
    }
}

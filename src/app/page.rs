//! Assembles the dashboard HTML page from rendered charts and aggregates.

use chrono::NaiveDate;
use std::fmt::Write;

use super::narrative::{narrative_for, Narrative};
use crate::analysis::DashboardAggregates;
use crate::plotting::{ChartKind, RenderedChart};
use crate::types::{Dataset, SeasonInfo};
use crate::utils::html_escape;

pub const PAGE_TITLE: &str = "Hot Ones Fan Engagement Dashboard";
const CAPTION: &str = "Interactive analysis of guest performance, sauce heat, and season trends.";

const STYLE: &str = r#"
body { font-family: -apple-system, "Segoe UI", Helvetica, Arial, sans-serif; margin: 0; color: #2a3f5f; background: #fafafa; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem 1.5rem 4rem; }
h1 { margin-bottom: 0.2rem; }
.caption { color: #6b7280; margin-top: 0; }
.kpis { display: flex; gap: 1rem; margin: 1.5rem 0; }
.kpi { flex: 1; background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem 1.25rem; }
.kpi .label { font-size: 0.85rem; color: #6b7280; }
.kpi .value { font-size: 2rem; font-weight: 600; }
hr { border: none; border-top: 1px solid #e5e7eb; margin: 2rem 0; }
section { margin-bottom: 2.5rem; }
.chart svg { width: 100%; height: auto; background: #fff; border-radius: 8px; }
details { margin: 0.5rem 0 1rem; }
table { border-collapse: collapse; font-size: 0.9rem; }
th, td { text-align: left; padding: 0.25rem 0.75rem; border-bottom: 1px solid #e5e7eb; }
tr[title] { cursor: help; }
.note { color: #b45309; font-size: 0.9rem; }
"#;

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

fn write_kpis(out: &mut String, aggregates: &DashboardAggregates) {
    let kpis = &aggregates.kpis;
    let tiles = [
        ("Total Guests", kpis.total_guests.to_string()),
        ("Total Episodes", kpis.total_episodes.to_string()),
        ("Completion Rate", kpis.completion_label()),
    ];
    out.push_str("<div class=\"kpis\">\n");
    for (label, value) in tiles {
        let _ = writeln!(
            out,
            "<div class=\"kpi\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
            label,
            html_escape(&value)
        );
    }
    out.push_str("</div>\n");
}

fn write_hover_table(out: &mut String, chart: &RenderedChart) {
    if chart.points.is_empty() {
        return;
    }
    out.push_str("<details><summary>Data</summary>\n<table>\n");
    for point in &chart.points {
        let _ = writeln!(
            out,
            "<tr title=\"{}\"><td>{}</td><td>{}</td></tr>",
            html_escape(&point.hover),
            html_escape(&point.label),
            html_escape(&point.value)
        );
    }
    out.push_str("</table>\n</details>\n");
}

fn write_narrative(out: &mut String, narrative: &Narrative) {
    out.push_str("<div class=\"narrative\">\n");
    for paragraph in narrative.paragraphs {
        let _ = writeln!(out, "<p>{}</p>", html_escape(paragraph));
    }
    if !narrative.points.is_empty() {
        out.push_str("<ol>\n");
        for (title, text) in narrative.points {
            let _ = writeln!(
                out,
                "<li><strong>{}:</strong> {}</li>",
                html_escape(title),
                html_escape(text)
            );
        }
        out.push_str("</ol>\n");
    }
    out.push_str("</div>\n");
}

fn write_season_table(out: &mut String, seasons: &[SeasonInfo]) {
    if seasons.is_empty() {
        return;
    }
    let mut sorted: Vec<&SeasonInfo> = seasons.iter().collect();
    sorted.sort_by_key(|s| s.season);

    out.push_str("<section id=\"seasons\">\n<h2>Seasons</h2>\n<table>\n");
    out.push_str("<tr><th>Season</th><th>Episodes</th><th>Released</th></tr>\n");
    for season in sorted {
        let episodes = season
            .episodes
            .map(|n| n.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{} &ndash; {}</td></tr>",
            season.season,
            episodes,
            format_date(season.original_release),
            format_date(season.last_release)
        );
    }
    out.push_str("</table>\n</section>\n");
}

/// Build the full dashboard document.
pub fn render_page(
    dataset: &Dataset,
    aggregates: &DashboardAggregates,
    charts: &[RenderedChart],
) -> String {
    let svg_bytes: usize = charts.iter().map(|c| c.svg.len()).sum();
    let mut out = String::with_capacity(svg_bytes + 16 * 1024);

    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n",
        PAGE_TITLE, STYLE
    );
    let _ = writeln!(out, "<h1>&#127798;&#65039; {}</h1>", PAGE_TITLE);
    let _ = writeln!(out, "<p class=\"caption\">{}</p>", CAPTION);

    write_kpis(&mut out, aggregates);
    out.push_str("<hr>\n");

    for chart in charts {
        let _ = writeln!(
            out,
            "<section id=\"{}\">\n<h2>{}</h2>",
            chart.kind.anchor(),
            html_escape(chart.kind.subheader())
        );
        let _ = writeln!(out, "<div class=\"chart\">{}</div>", chart.svg);
        write_hover_table(&mut out, chart);
        if chart.kind == ChartKind::GuestPopularity && aggregates.view_source.is_synthetic() {
            out.push_str(
                "<p class=\"note\">No view count column was found; popularity is approximated \
                 from episode order and may not reflect real audience size.</p>\n",
            );
        }
        if let Some(narrative) = narrative_for(chart.kind) {
            write_narrative(&mut out, narrative);
        }
        out.push_str("</section>\n");
    }

    write_season_table(&mut out, &dataset.seasons);

    out.push_str("</main>\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2015, 8, 27)), "Aug 27, 2015");
        assert_eq!(format_date(None), "n/a");
    }

    #[test]
    fn test_season_table_sorted() {
        let seasons = vec![
            SeasonInfo {
                season: 2,
                episodes: Some(12),
                original_release: None,
                last_release: None,
            },
            SeasonInfo {
                season: 1,
                episodes: None,
                original_release: NaiveDate::from_ymd_opt(2015, 8, 27),
                last_release: NaiveDate::from_ymd_opt(2015, 10, 15),
            },
        ];
        let mut out = String::new();
        write_season_table(&mut out, &seasons);

        let first = out.find("<td>1</td>").unwrap();
        let second = out.find("<td>2</td>").unwrap();
        assert!(first < second);
        assert!(out.contains("Aug 27, 2015 &ndash; Oct 15, 2015"));
        assert!(out.contains("<td>n/a</td>"));
    }
}

use lru::LruCache;
use once_cell::sync::Lazy;
use plotters::coord::ranged1d::{IntoSegmentedCoord, SegmentValue};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;
use std::error::Error;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex as TokioMutex;

use super::styles::{
    outcome_color, tier_color, ChartStyle, ChartTheme, COMPLETION_LINE, HEAT_LINE, PRIMARY_BAR,
};
use crate::analysis::aggregate::{
    CompletionShare, DashboardAggregates, GuestPopularity, SeasonCompletion, SeasonFormat,
    TierCompletion,
};
use crate::error::{DashboardError, Result};
use crate::types::{Outcome, ViewSource};
use crate::utils::{format_compact, format_thousands};

type PlotError = Box<dyn Error + Send + Sync>;

const PLOT_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};
const PLOT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Right axis range of the season format chart, in percent.
const COMPLETION_AXIS: (f64, f64) = (70.0, 105.0);

// Global plot cache with a 5-minute expiration
static PLOT_CACHE: Lazy<Arc<TokioMutex<LruCache<PlotCacheKey, (RenderedChart, Instant)>>>> =
    Lazy::new(|| Arc::new(TokioMutex::new(LruCache::new(PLOT_CACHE_SIZE))));

/// The five charts on the dashboard, in page order.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize)]
pub enum ChartKind {
    CompletionShare,
    HeatTiers,
    SeasonTrend,
    SeasonFormat,
    GuestPopularity,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::CompletionShare,
        ChartKind::HeatTiers,
        ChartKind::SeasonTrend,
        ChartKind::SeasonFormat,
        ChartKind::GuestPopularity,
    ];

    /// Section heading shown above the chart.
    pub fn subheader(&self) -> &'static str {
        match self {
            ChartKind::CompletionShare => "Finish vs Did Not Finish",
            ChartKind::HeatTiers => "Sauce Heat Level vs Completion Rate",
            ChartKind::SeasonTrend => "Season Evolution",
            ChartKind::SeasonFormat => "Show Format Changes Over Time",
            ChartKind::GuestPopularity => "Most Popular Episodes and Guest Performance Rankings",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            ChartKind::CompletionShare => "completion-share",
            ChartKind::HeatTiers => "heat-tiers",
            ChartKind::SeasonTrend => "season-trend",
            ChartKind::SeasonFormat => "season-format",
            ChartKind::GuestPopularity => "guest-popularity",
        }
    }
}

/// Tooltip text for one datum of a chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverPoint {
    pub label: String,
    pub value: String,
    pub hover: String,
}

/// A chart rendered to inline SVG together with its per-datum hover text.
#[derive(Clone, Debug, Serialize)]
pub struct RenderedChart {
    pub kind: ChartKind,
    pub title: String,
    pub svg: String,
    pub points: Vec<HoverPoint>,
}

#[derive(Hash, Eq, PartialEq)]
struct PlotCacheKey {
    kind: ChartKind,
    data_hash: u64,
}

impl PlotCacheKey {
    fn new(kind: ChartKind, aggregates: &DashboardAggregates) -> Self {
        use std::hash::{Hash, Hasher};
        let payload = match kind {
            ChartKind::CompletionShare => serde_json::to_string(&aggregates.completion_share),
            ChartKind::HeatTiers => serde_json::to_string(&aggregates.heat_tiers),
            ChartKind::SeasonTrend => serde_json::to_string(&aggregates.season_trend),
            ChartKind::SeasonFormat => serde_json::to_string(&aggregates.season_format),
            ChartKind::GuestPopularity => {
                serde_json::to_string(&(&aggregates.top_guests, aggregates.view_source))
            }
        }
        .unwrap_or_default();

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        payload.hash(&mut hasher);
        Self {
            kind,
            data_hash: hasher.finish(),
        }
    }
}

// Helper function to wrap errors
fn wrap_err<E: std::fmt::Display>(e: E) -> DashboardError {
    DashboardError::Plot(e.to_string())
}

/// Render every chart, reusing recently rendered ones with identical data.
pub async fn render_charts_async(aggregates: Arc<DashboardAggregates>) -> Result<Vec<RenderedChart>> {
    let mut charts = Vec::with_capacity(ChartKind::ALL.len());

    for kind in ChartKind::ALL {
        let cache_key = PlotCacheKey::new(kind, &aggregates);

        // Try to get from cache first
        if let Some((chart, timestamp)) = PLOT_CACHE.lock().await.get(&cache_key) {
            if timestamp.elapsed() < PLOT_CACHE_TTL {
                charts.push(chart.clone());
                continue;
            }
        }

        // Generate new plot in blocking task
        let data = Arc::clone(&aggregates);
        let chart = tokio::task::spawn_blocking(move || {
            render_chart(kind, &data, &ChartStyle::default())
        })
        .await
        .map_err(|e| DashboardError::Task(e.to_string()))??;

        PLOT_CACHE
            .lock()
            .await
            .put(cache_key, (chart.clone(), Instant::now()));
        charts.push(chart);
    }

    Ok(charts)
}

/// Number of charts currently held in the plot cache.
pub async fn plot_cache_len() -> usize {
    PLOT_CACHE.lock().await.len()
}

/// Render every chart synchronously, bypassing the cache.
pub fn render_charts(aggregates: &DashboardAggregates) -> Result<Vec<RenderedChart>> {
    let style = ChartStyle::default();
    ChartKind::ALL
        .iter()
        .map(|kind| render_chart(*kind, aggregates, &style))
        .collect()
}

pub fn render_chart(
    kind: ChartKind,
    aggregates: &DashboardAggregates,
    style: &ChartStyle,
) -> Result<RenderedChart> {
    match kind {
        ChartKind::CompletionShare => render_completion_share(&aggregates.completion_share, style),
        ChartKind::HeatTiers => render_heat_tiers(&aggregates.heat_tiers, style),
        ChartKind::SeasonTrend => render_season_trend(&aggregates.season_trend, style),
        ChartKind::SeasonFormat => render_season_format(&aggregates.season_format, style),
        ChartKind::GuestPopularity => {
            render_guest_popularity(&aggregates.top_guests, aggregates.view_source, style)
        }
    }
}

fn render_svg<F>(size: (u32, u32), draw: F) -> Result<String>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> std::result::Result<(), PlotError>,
{
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw(&root).map_err(wrap_err)?;
        root.present().map_err(wrap_err)?;
    }
    Ok(svg)
}

fn draw_empty(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    message: &str,
    theme: &ChartTheme,
) -> std::result::Result<(), PlotError> {
    let (w, h) = root.dim_in_pixel();
    root.draw(&Text::new(
        message.to_string(),
        ((w / 2) as i32, (h / 2) as i32),
        ("sans-serif", 20)
            .into_font()
            .color(&theme.text_color)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;
    Ok(())
}

fn caption_font(style: &ChartStyle, theme: &ChartTheme) -> TextStyle<'static> {
    ("sans-serif", style.title_font_size)
        .into_font()
        .color(&theme.text_color)
}

fn label_font(style: &ChartStyle, theme: &ChartTheme) -> TextStyle<'static> {
    ("sans-serif", style.font_size)
        .into_font()
        .color(&theme.text_color)
}

fn segment_label(labels: &[String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(idx) => labels.get(*idx).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// Label whole seasons only.
fn season_tick(x: &f64) -> String {
    if (x - x.round()).abs() < 1e-6 && *x >= 0.0 {
        format!("{:.0}", x)
    } else {
        String::new()
    }
}

fn season_bounds(seasons: impl Iterator<Item = u32>) -> (f64, f64) {
    let (min, max) = seasons.fold((u32::MAX, 0), |(lo, hi), s| (lo.min(s), hi.max(s)));
    if min > max {
        (0.0, 1.0)
    } else {
        (min as f64 - 0.5, max as f64 + 0.5)
    }
}

/// Split a polyline into alternating dashes.
fn dashed_segments(points: &[(f64, f64)], dashes_per_edge: usize) -> Vec<Vec<(f64, f64)>> {
    let pieces = (dashes_per_edge * 2).max(2);
    let mut dashes = Vec::new();
    for edge in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (edge[0], edge[1]);
        for i in (0..pieces).step_by(2) {
            let t0 = i as f64 / pieces as f64;
            let t1 = (i + 1) as f64 / pieces as f64;
            dashes.push(vec![
                (x0 + (x1 - x0) * t0, y0 + (y1 - y0) * t0),
                (x0 + (x1 - x0) * t1, y0 + (y1 - y0) * t1),
            ]);
        }
    }
    dashes
}

pub fn render_completion_share(data: &[CompletionShare], style: &ChartStyle) -> Result<RenderedChart> {
    let title = "Share of Guests Who Finished the Challenge";
    let theme = ChartTheme::default();
    let labels: Vec<String> = data.iter().map(|d| d.status.clone()).collect();
    let y_max = data.iter().map(|d| d.percent).fold(10.0, f64::max) * 1.15;

    let svg = render_svg((style.width, 600), |root| {
        root.fill(&theme.background_color)?;
        if data.is_empty() {
            return draw_empty(root, "No completion data", &theme);
        }

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_font(style, &theme))
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size + 10)
            .build_cartesian_2d((0..data.len()).into_segmented(), 0f64..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .y_desc("% of Guests")
            .label_style(label_font(style, &theme))
            .axis_desc_style(label_font(style, &theme))
            .x_label_formatter(&|v| segment_label(&labels, v))
            .y_label_formatter(&|y| format!("{:.0}%", y))
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0.0), (SegmentValue::Exact(i + 1), d.percent)],
                PRIMARY_BAR.filled(),
            );
            bar.set_margin(0, 0, 40, 40);
            bar
        }))?;

        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            Text::new(
                format!("{:.1}%", d.percent),
                (SegmentValue::CenterOf(i), d.percent + y_max * 0.01),
                label_font(style, &theme).pos(Pos::new(HPos::Center, VPos::Bottom)),
            )
        }))?;

        Ok(())
    })?;

    let points = data
        .iter()
        .map(|d| HoverPoint {
            label: d.status.clone(),
            value: format!("{:.1}%", d.percent),
            hover: format!("{}\n% of Guests: {:.2}%", d.status, d.percent),
        })
        .collect();

    Ok(RenderedChart {
        kind: ChartKind::CompletionShare,
        title: title.to_string(),
        svg,
        points,
    })
}

pub fn render_heat_tiers(data: &[TierCompletion], style: &ChartStyle) -> Result<RenderedChart> {
    let title = "Average Guest Completion Rate by Heat Tier";
    let theme = ChartTheme::default();
    let labels: Vec<String> = data.iter().map(|d| d.tier.to_string()).collect();

    let svg = render_svg((style.width, 600), |root| {
        root.fill(&theme.background_color)?;
        if data.is_empty() {
            return draw_empty(root, "No heat data", &theme);
        }

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_font(style, &theme))
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size + 10)
            .build_cartesian_2d((0..data.len()).into_segmented(), 0f64..1.1f64)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .x_desc("Heat Level Tier")
            .y_desc("Completion Rate")
            .label_style(label_font(style, &theme))
            .axis_desc_style(label_font(style, &theme))
            .x_label_formatter(&|v| segment_label(&labels, v))
            .y_label_formatter(&|y| format!("{:.0}%", y * 100.0))
            .draw()?;

        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), 0.0),
                    (SegmentValue::Exact(i + 1), d.completion_rate),
                ],
                tier_color(d.tier).filled(),
            );
            bar.set_margin(0, 0, 20, 20);
            bar
        }))?;

        chart.draw_series(data.iter().enumerate().map(|(i, d)| {
            Text::new(
                format!("{:.1}%", d.completion_rate * 100.0),
                (SegmentValue::CenterOf(i), d.completion_rate + 0.01),
                label_font(style, &theme).pos(Pos::new(HPos::Center, VPos::Bottom)),
            )
        }))?;

        Ok(())
    })?;

    let points = data
        .iter()
        .map(|d| HoverPoint {
            label: d.tier.to_string(),
            value: format!("{:.1}%", d.completion_rate * 100.0),
            hover: format!("{}\nCompletion Rate: {:.2}%", d.tier, d.completion_rate * 100.0),
        })
        .collect();

    Ok(RenderedChart {
        kind: ChartKind::HeatTiers,
        title: title.to_string(),
        svg,
        points,
    })
}

pub fn render_season_trend(data: &[SeasonCompletion], style: &ChartStyle) -> Result<RenderedChart> {
    let title = "Guest Completion Trend by Season";
    let theme = ChartTheme::default();
    let series: Vec<(f64, f64)> = data
        .iter()
        .map(|d| (d.season as f64, d.completion_pct))
        .collect();
    let (x_min, x_max) = season_bounds(data.iter().map(|d| d.season));
    let (lo, hi) = series
        .iter()
        .fold((f64::MAX, f64::MIN), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    let y_range = if lo > hi {
        0.0..100.0
    } else {
        (lo - 10.0).max(0.0)..(hi + 5.0)
    };

    let svg = render_svg((style.width, 450), |root| {
        root.fill(&theme.background_color)?;
        if data.is_empty() {
            return draw_empty(root, "No season data", &theme);
        }

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_font(style, &theme))
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size + 10)
            .build_cartesian_2d(x_min..x_max, y_range)?;

        chart
            .configure_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .x_desc("Season")
            .y_desc("Completion Rate (%)")
            .x_labels(data.len() + 1)
            .label_style(label_font(style, &theme))
            .axis_desc_style(label_font(style, &theme))
            .x_label_formatter(&season_tick)
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;

        chart.draw_series(
            LineSeries::new(
                series.clone(),
                PRIMARY_BAR.stroke_width(style.line_width),
            )
            .point_size(5),
        )?;

        Ok(())
    })?;

    let points = data
        .iter()
        .map(|d| HoverPoint {
            label: format!("Season {}", d.season),
            value: format!("{:.1}%", d.completion_pct),
            hover: format!("Season {}\nCompletion Rate: {:.2}%", d.season, d.completion_pct),
        })
        .collect();

    Ok(RenderedChart {
        kind: ChartKind::SeasonTrend,
        title: title.to_string(),
        svg,
        points,
    })
}

pub fn render_season_format(data: &[SeasonFormat], style: &ChartStyle) -> Result<RenderedChart> {
    let title = "Evolution of Heat Intensity and Completion Rate by Season";
    let theme = ChartTheme::default();
    let heat: Vec<(f64, f64)> = data
        .iter()
        .filter_map(|d| d.avg_scoville.map(|shu| (d.season as f64, shu)))
        .collect();
    let completion: Vec<(f64, f64)> = data
        .iter()
        .map(|d| (d.season as f64, d.completion_pct))
        .collect();
    let (x_min, x_max) = season_bounds(data.iter().map(|d| d.season));
    let heat_max = heat.iter().map(|(_, y)| *y).fold(1.0, f64::max) * 1.1;

    let svg = render_svg((style.width, 600), |root| {
        root.fill(&theme.background_color)?;
        if data.is_empty() {
            return draw_empty(root, "No season data", &theme);
        }

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_font(style, &theme))
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size + 30)
            .right_y_label_area_size(style.label_area_size + 30)
            .build_cartesian_2d(x_min..x_max, 0f64..heat_max)?
            .set_secondary_coord(x_min..x_max, COMPLETION_AXIS.0..COMPLETION_AXIS.1);

        chart
            .configure_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .x_desc("Season")
            .y_desc("Avg Scoville (SHU)")
            .x_labels(data.len() + 1)
            .label_style(("sans-serif", style.font_size).into_font().color(&HEAT_LINE))
            .axis_desc_style(("sans-serif", style.font_size).into_font().color(&HEAT_LINE))
            .x_label_formatter(&season_tick)
            .y_label_formatter(&|y| format_compact(*y))
            .draw()?;

        chart
            .configure_secondary_axes()
            .axis_style(theme.axis_color)
            .y_desc("Completion Rate (%)")
            .label_style(("sans-serif", style.font_size).into_font().color(&COMPLETION_LINE))
            .axis_desc_style(("sans-serif", style.font_size).into_font().color(&COMPLETION_LINE))
            .y_label_formatter(&|y| format!("{:.0}", y))
            .draw()?;

        let line_width = style.line_width;
        chart
            .draw_series(
                LineSeries::new(heat.clone(), HEAT_LINE.stroke_width(line_width)).point_size(5),
            )?
            .label("Avg Scoville (Heat)")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], HEAT_LINE.stroke_width(line_width))
            });

        chart
            .draw_secondary_series(
                dashed_segments(&completion, 4)
                    .into_iter()
                    .map(|dash| PathElement::new(dash, COMPLETION_LINE.stroke_width(line_width))),
            )?
            .label("Completion Rate (%)")
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 6, y)], COMPLETION_LINE.stroke_width(line_width))
            });

        chart.draw_secondary_series(
            completion
                .iter()
                .map(|p| Circle::new(*p, 5, COMPLETION_LINE.filled())),
        )?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerMiddle)
            .background_style(WHITE.mix(0.85))
            .border_style(theme.axis_color)
            .label_font(label_font(style, &theme))
            .draw()?;

        Ok(())
    })?;

    let points = data
        .iter()
        .map(|d| {
            let shu = d
                .avg_scoville
                .map(format_thousands)
                .unwrap_or_else(|| "n/a".to_string());
            HoverPoint {
                label: format!("Season {}", d.season),
                value: format!("{} SHU / {:.1}%", shu, d.completion_pct),
                hover: format!(
                    "Season {}\nAvg Scoville: {} SHU\nCompletion Rate: {:.2}%",
                    d.season, shu, d.completion_pct
                ),
            }
        })
        .collect();

    Ok(RenderedChart {
        kind: ChartKind::SeasonFormat,
        title: title.to_string(),
        svg,
        points,
    })
}

pub fn render_guest_popularity(
    guests: &[GuestPopularity],
    view_source: ViewSource,
    style: &ChartStyle,
) -> Result<RenderedChart> {
    let title = "Top Guests by Popularity and Completion Outcome";
    let theme = ChartTheme::default();

    // Least viewed at the bottom
    let ordered: Vec<(&GuestPopularity, f64)> = guests
        .iter()
        .rev()
        .filter_map(|g| g.avg_views.filter(|v| v.is_finite()).map(|v| (g, v)))
        .collect();
    let names: Vec<String> = ordered.iter().map(|(g, _)| g.guest.clone()).collect();
    let x_max = ordered.iter().map(|(_, v)| *v).fold(1.0, f64::max) * 1.25;
    let x_desc = if view_source.is_synthetic() {
        "Average Views (Popularity, synthetic rank proxy)"
    } else {
        "Average Views (Popularity)"
    };

    let svg = render_svg((style.width, 700), |root| {
        root.fill(&theme.background_color)?;
        if ordered.is_empty() {
            return draw_empty(root, "No view data", &theme);
        }

        let mut chart = ChartBuilder::on(root)
            .caption(title, caption_font(style, &theme))
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(style.label_area_size * 3)
            .build_cartesian_2d(0f64..x_max, (0..ordered.len()).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .light_line_style(TRANSPARENT)
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .x_desc(x_desc)
            .y_desc("Guest")
            .y_labels(ordered.len())
            .label_style(label_font(style, &theme))
            .axis_desc_style(label_font(style, &theme))
            .x_label_formatter(&|x| format_compact(*x))
            .y_label_formatter(&|v| segment_label(&names, v))
            .draw()?;

        for outcome in [Outcome::Completed, Outcome::Failed] {
            let color = outcome_color(outcome);
            chart
                .draw_series(
                    ordered
                        .iter()
                        .enumerate()
                        .filter(|(_, (g, _))| g.outcome == outcome)
                        .map(|(i, (_, views))| {
                            let mut bar = Rectangle::new(
                                [(0.0, SegmentValue::Exact(i)), (*views, SegmentValue::Exact(i + 1))],
                                color.filled(),
                            );
                            bar.set_margin(4, 4, 0, 0);
                            bar
                        }),
                )?
                .label(outcome.label())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 15, y + 5)], color.filled()));
        }

        chart.draw_series(ordered.iter().enumerate().map(|(i, (_, views))| {
            Text::new(
                format_thousands(*views),
                (*views + x_max * 0.01, SegmentValue::CenterOf(i)),
                label_font(style, &theme).pos(Pos::new(HPos::Left, VPos::Center)),
            )
        }))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.85))
            .border_style(theme.axis_color)
            .label_font(label_font(style, &theme))
            .draw()?;

        Ok(())
    })?;

    let points = guests
        .iter()
        .filter_map(|g| {
            g.avg_views.filter(|v| v.is_finite()).map(|views| HoverPoint {
                label: g.guest.clone(),
                value: format_thousands(views),
                hover: format!(
                    "{}\nAvg Views: {}\nOutcome: {}",
                    g.guest,
                    format_thousands(views),
                    g.outcome
                ),
            })
        })
        .collect();

    Ok(RenderedChart {
        kind: ChartKind::GuestPopularity,
        title: title.to_string(),
        svg,
        points,
    })
}

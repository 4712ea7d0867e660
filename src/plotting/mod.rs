pub mod chart;
pub mod styles;

#[cfg(test)]
mod tests;

pub use chart::{
    plot_cache_len, render_chart, render_charts, render_charts_async, ChartKind, HoverPoint,
    RenderedChart,
};
pub use styles::{ChartStyle, ChartTheme};

use log::{debug, info};
use std::sync::Arc;
use std::time::Instant;

use super::page::render_page;
use crate::analysis::{load_data_async, load_data_cached, DashboardAggregates};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::plotting::{render_charts, render_charts_async};
use crate::types::Dataset;

/// Shared application state: the resolved configuration.
///
/// The dataset itself lives in the session cache, so cloning the state is
/// cheap and every render sees the same memoized table.
#[derive(Clone)]
pub struct App {
    pub config: Arc<DashboardConfig>,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Load (or reuse) the dataset and compute every aggregate.
    pub async fn aggregates(&self) -> Result<(Arc<Dataset>, Arc<DashboardAggregates>)> {
        let dataset = load_data_async(self.config.data_paths()).await?;
        let aggregates = Arc::new(DashboardAggregates::compute(&dataset, &self.config));
        Ok((dataset, aggregates))
    }

    /// Re-run the whole report: aggregate, draw charts, assemble the page.
    pub async fn render(&self) -> Result<String> {
        let start_time = Instant::now();
        let (dataset, aggregates) = self.aggregates().await?;
        let charts = render_charts_async(Arc::clone(&aggregates)).await?;
        let page = render_page(&dataset, &aggregates, &charts);
        debug!(
            "Rendered dashboard ({} bytes) in {:.1}ms",
            page.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );
        Ok(page)
    }

    /// Same as [`App::render`] without a runtime or the plot cache.
    pub fn render_blocking(&self) -> Result<String> {
        let dataset = load_data_cached(&self.config.data_paths())?;
        let aggregates = DashboardAggregates::compute(&dataset, &self.config);
        let charts = render_charts(&aggregates)?;
        info!("Rendered {} charts", charts.len());
        Ok(render_page(&dataset, &aggregates, &charts))
    }
}

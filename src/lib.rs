//! # Hot Ones Fan Engagement Dashboard
//!
//! `hotones_dashboard` loads the episode, season and sauce tables of the
//! show, joins them into one row per episode and sauce, and renders a
//! self-contained HTML report of completion, heat and popularity trends.
//!
//! ## Features
//!
//! - Typed CSV loading with header validation
//! - Heat tier and outcome classification
//! - Session-level dataset cache and an LRU cache of rendered charts
//! - SVG charts drawn with plotters
//! - Static report output or a small HTTP server
//!
//! ## Example
//!
//! ```no_run
//! use hotones_dashboard::{App, DashboardConfig};
//!
//! let app = App::new(DashboardConfig::default());
//! let html = app.render_blocking().unwrap();
//! std::fs::write("hotones_dashboard.html", html).unwrap();
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App;
pub use config::{DashboardConfig, DataPaths};
pub use error::{DashboardError, Result};
pub use types::{CacheKey, Dataset, HeatTier, JoinedRow, Outcome};

pub mod aggregate;
mod cache;
mod export;
pub mod loader;


pub use aggregate::{
    completion_share, guest_popularity, heat_tier_completion, kpis, season_format_trend,
    season_trend, DashboardAggregates,
};
pub use cache::{clear_session_cache, load_data_async, load_data_cached, CacheManager};
pub use export::write_joined_csv;
pub use loader::load_data;

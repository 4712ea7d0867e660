use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::DataPaths;
use crate::error::{DashboardError, Result};
use crate::types::{CacheKey, Dataset};

use super::loader::load_data;

// Session-scoped dataset memo, one entry per set of input files
static SESSION_CACHE: Lazy<Mutex<CacheManager>> = Lazy::new(|| Mutex::new(CacheManager::new()));

/// Manages caching of loaded datasets
pub struct CacheManager {
    cache: HashMap<CacheKey, Arc<Dataset>>,
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    /// Store a dataset in the cache
    pub fn store(&mut self, key: CacheKey, dataset: Arc<Dataset>) {
        self.cache.insert(key, dataset);
    }

    /// Retrieve a dataset from the cache
    pub fn get(&self, key: &CacheKey) -> Option<Arc<Dataset>> {
        self.cache.get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Clear the cache
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the dataset once per session; later calls with the same paths reuse it.
///
/// Failed loads are not cached.
pub fn load_data_cached(paths: &DataPaths) -> Result<Arc<Dataset>> {
    let key = paths.cache_key();
    if let Some(dataset) = session_cache().get(&key) {
        debug!("Dataset cache hit for {}", paths.episodes.display());
        return Ok(dataset);
    }

    let dataset = Arc::new(load_data(paths)?);
    session_cache().store(key, Arc::clone(&dataset));
    Ok(dataset)
}

/// Run [`load_data_cached`] on the blocking pool.
pub async fn load_data_async(paths: DataPaths) -> Result<Arc<Dataset>> {
    tokio::task::spawn_blocking(move || load_data_cached(&paths))
        .await
        .map_err(|e| DashboardError::Task(e.to_string()))?
}

/// Drop every memoized dataset.
pub fn clear_session_cache() {
    session_cache().clear();
}

fn session_cache() -> std::sync::MutexGuard<'static, CacheManager> {
    SESSION_CACHE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

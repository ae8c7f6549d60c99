//! Application State
//!
//! Shared, read-only state accessible by all handlers. Built once at
//! start-up from the loaded dataset and wrapped in `Arc`.

use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::dataset::Dataset;
use crate::layout::{build_layout, render_page, DashboardLayout};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The immutable dataset every chart update filters
    pub dataset: Arc<Dataset>,
    /// Page tree derived from the dataset
    pub layout: Arc<DashboardLayout>,
    /// `layout` rendered to HTML
    pub page: Arc<String>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build the layout and page for a loaded dataset
    pub fn new(dataset: Dataset, config: ServerConfig) -> Self {
        let layout = build_layout(&dataset);
        let page = render_page(&layout);

        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            page: Arc::new(page),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

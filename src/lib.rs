//! # Avocado Analytics
//!
//! A single-page dashboard for the behaviour of avocado prices and the
//! number of avocados sold in the US between 2015 and 2018.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading into an immutable, date-sorted table
//! - [`layout`]: Page tree built from the dataset, rendered to HTML
//! - [`charts`]: Filter selection to price and volume figures
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use avocado_analytics::charts::update_charts;
//! use avocado_analytics::dataset::load_path;
//! use avocado_analytics::layout::build_layout;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = load_path("avocado.csv")?;
//!     let layout = build_layout(&dataset);
//!
//!     if let Some(selection) = layout.initial_selection() {
//!         let charts = update_charts(&dataset, &selection);
//!         println!("{} points for {}", charts.price_chart.x().len(), selection.region);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;

pub use api::{build_router, serve, ApiError, AppState};

pub use charts::{update_charts, ChartPair, ChartPayload, FilterSelection};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ResolvedConfig, ServerConfig};

pub use dataset::{load_path, Dataset, DatasetError, Row};

pub use layout::{build_layout, render_page, Component, DashboardLayout};

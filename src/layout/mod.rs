//! Dashboard Layout
//!
//! - **component**: typed UI tree (divs, dropdowns, date range, graphs)
//! - **builder**: `build_layout`, dataset to page tree
//! - **render**: HTML output for the served page

pub mod builder;
pub mod component;
pub mod render;

pub use builder::{
    build_layout, DashboardLayout, Stylesheet, APP_TITLE, DATE_RANGE_ID, PRICE_CHART_ID,
    REGION_FILTER_ID, TYPE_FILTER_ID, VOLUME_CHART_ID,
};
pub use component::{Component, DatePickerRange, Dropdown, DropdownOption, Graph, GraphConfig};
pub use render::{render_component, render_page};

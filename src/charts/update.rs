//! Chart update
//!
//! Turns a filter selection into the price and volume figures. Runs on
//! every filter change and holds no state between calls.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::figure::{ChartPayload, FigureLayout, Trace};
use super::selection::FilterSelection;
use crate::dataset::Dataset;

pub const PRICE_COLOR: &str = "#17B897";
pub const VOLUME_COLOR: &str = "#E12D39";

/// Price tooltip: currency with two decimals, trace name suppressed
pub const PRICE_HOVER_TEMPLATE: &str = "$%{y:.2f}<extra></extra>";

/// Both figures produced for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPair {
    pub price_chart: ChartPayload,
    pub volume_chart: ChartPayload,
}

/// Filter the dataset and build both figures
///
/// A selection matching no rows yields empty series, never an error.
pub fn update_charts(dataset: &Dataset, selection: &FilterSelection) -> ChartPair {
    let mut dates = Vec::new();
    let mut prices = Vec::new();
    let mut volumes = Vec::new();

    for row in dataset.filter(selection) {
        dates.push(row.date);
        prices.push(row.average_price);
        volumes.push(row.total_volume);
    }

    tracing::debug!(
        region = %selection.region,
        avocado_type = %selection.avocado_type,
        start_date = %selection.start_date,
        end_date = %selection.end_date,
        rows = dates.len(),
        "Updated charts"
    );

    ChartPair {
        price_chart: price_chart(&selection.region, dates.clone(), prices),
        volume_chart: volume_chart(&selection.region, dates, volumes),
    }
}

/// Figures with empty series, for selections that cannot match any row
pub fn empty_charts(region: &str) -> ChartPair {
    ChartPair {
        price_chart: price_chart(region, Vec::new(), Vec::new()),
        volume_chart: volume_chart(region, Vec::new(), Vec::new()),
    }
}

pub fn price_chart(region: &str, dates: Vec<NaiveDate>, prices: Vec<f64>) -> ChartPayload {
    ChartPayload {
        data: vec![Trace::line(dates, prices).hovertemplate(PRICE_HOVER_TEMPLATE)],
        layout: FigureLayout::new(
            format!("Average Price of Avocados in {}", region),
            PRICE_COLOR,
        )
        .y_tick_prefix("$"),
    }
}

pub fn volume_chart(region: &str, dates: Vec<NaiveDate>, volumes: Vec<f64>) -> ChartPayload {
    ChartPayload {
        data: vec![Trace::line(dates, volumes)],
        layout: FigureLayout::new(format!("Avocados Sold in {}", region), VOLUME_COLOR),
    }
}

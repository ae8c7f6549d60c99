//! Layout builder
//!
//! Builds the dashboard page from the loaded dataset. Dropdown options and
//! date bounds come from the data; everything else is fixed.

use serde::Serialize;

use super::component::{Component, DatePickerRange, Dropdown, Graph};
use crate::charts::FilterSelection;
use crate::dataset::Dataset;

pub const APP_TITLE: &str = "Avocado Analytics: Understand your Avocados!";

pub const REGION_FILTER_ID: &str = "region-filter";
pub const TYPE_FILTER_ID: &str = "type-filter";
pub const DATE_RANGE_ID: &str = "date-range";
pub const PRICE_CHART_ID: &str = "price-chart";
pub const VOLUME_CHART_ID: &str = "volume-chart";

/// Preferred initial dropdown values, used when present in the data
pub const DEFAULT_REGION: &str = "Albany";
pub const DEFAULT_TYPE: &str = "organic";

const FONT_STYLESHEET: &str =
    "https://fonts.googleapis.com/css2?family=Lato:wght@400;700&display=swap";

/// External stylesheet link
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stylesheet {
    pub href: String,
    pub rel: String,
}

/// The whole page: document title, stylesheets and component tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: String,
    pub stylesheets: Vec<Stylesheet>,
    pub root: Component,
}

impl DashboardLayout {
    pub fn region_filter(&self) -> Option<&Dropdown> {
        self.root.find(REGION_FILTER_ID).and_then(Component::as_dropdown)
    }

    pub fn type_filter(&self) -> Option<&Dropdown> {
        self.root.find(TYPE_FILTER_ID).and_then(Component::as_dropdown)
    }

    pub fn date_range(&self) -> Option<&DatePickerRange> {
        self.root.find(DATE_RANGE_ID).and_then(Component::as_date_picker)
    }

    /// Selection shown before the user touches any control
    ///
    /// `None` when the dataset was empty and no control has a value.
    pub fn initial_selection(&self) -> Option<FilterSelection> {
        let region = self.region_filter()?.value.clone()?;
        let avocado_type = self.type_filter()?.value.clone()?;
        let range = self.date_range()?;
        Some(FilterSelection::new(
            region,
            avocado_type,
            range.start_date?,
            range.end_date?,
        ))
    }
}

/// Build the page for a dataset
pub fn build_layout(dataset: &Dataset) -> DashboardLayout {
    DashboardLayout {
        title: APP_TITLE.to_string(),
        stylesheets: vec![Stylesheet {
            href: FONT_STYLESHEET.to_string(),
            rel: "stylesheet".to_string(),
        }],
        root: Component::plain_div(vec![header(), menu(dataset), charts()]),
    }
}

fn header() -> Component {
    Component::div(
        "header",
        vec![
            Component::paragraph("header-emoji", "🥑"),
            Component::heading("header-title", "Avocado Analytics"),
            Component::paragraph(
                "header-description",
                "Analyze the behavior of avocado prices \
                 and the number of avocados sold in the US \
                 between 2015 and 2018",
            ),
        ],
    )
}

fn menu(dataset: &Dataset) -> Component {
    let regions = dataset.regions();
    let region_value = preferred(&regions, DEFAULT_REGION);
    let types = dataset.types();
    let type_value = preferred(&types, DEFAULT_TYPE);

    Component::div(
        "menu",
        vec![
            labelled(
                "Region",
                Component::Dropdown(Dropdown::new(REGION_FILTER_ID, regions, region_value)),
            ),
            labelled(
                "Type",
                Component::Dropdown(
                    Dropdown::new(TYPE_FILTER_ID, types, type_value).not_searchable(),
                ),
            ),
            labelled(
                "Date Range",
                Component::DatePickerRange(DatePickerRange::spanning(
                    DATE_RANGE_ID,
                    dataset.date_bounds(),
                )),
            ),
        ],
    )
}

fn charts() -> Component {
    Component::div(
        "wrapper",
        vec![
            Component::div("card", vec![Component::Graph(Graph::new(PRICE_CHART_ID))]),
            Component::div("card", vec![Component::Graph(Graph::new(VOLUME_CHART_ID))]),
        ],
    )
}

fn labelled(title: &str, control: Component) -> Component {
    Component::plain_div(vec![
        Component::div("menu-title", vec![Component::text(title)]),
        control,
    ])
}

/// `preferred` if it is one of the options, else the first option
fn preferred(options: &[String], preferred: &str) -> Option<String> {
    options
        .iter()
        .find(|o| o.as_str() == preferred)
        .or_else(|| options.first())
        .cloned()
}

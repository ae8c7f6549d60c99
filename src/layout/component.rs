//! UI component tree
//!
//! A typed description of the dashboard page. The tree serializes to JSON
//! (tagged by `type`) and renders to HTML via [`super::render`].

use chrono::NaiveDate;
use serde::Serialize;

/// A node in the page tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    /// Container block
    Div {
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        children: Vec<Component>,
    },
    /// Bare text
    Text { text: String },
    Paragraph {
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        text: String,
    },
    Heading {
        #[serde(skip_serializing_if = "Option::is_none")]
        class_name: Option<String>,
        text: String,
    },
    Dropdown(Dropdown),
    DatePickerRange(DatePickerRange),
    Graph(Graph),
}

impl Component {
    pub fn div(class_name: impl Into<String>, children: Vec<Component>) -> Self {
        Component::Div {
            class_name: Some(class_name.into()),
            children,
        }
    }

    /// Div without a class
    pub fn plain_div(children: Vec<Component>) -> Self {
        Component::Div {
            class_name: None,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Component::Text { text: text.into() }
    }

    pub fn paragraph(class_name: impl Into<String>, text: impl Into<String>) -> Self {
        Component::Paragraph {
            class_name: Some(class_name.into()),
            text: text.into(),
        }
    }

    pub fn heading(class_name: impl Into<String>, text: impl Into<String>) -> Self {
        Component::Heading {
            class_name: Some(class_name.into()),
            text: text.into(),
        }
    }

    /// Depth-first search for a component with the given id
    pub fn find(&self, id: &str) -> Option<&Component> {
        match self {
            Component::Div { children, .. } => children.iter().find_map(|c| c.find(id)),
            Component::Dropdown(d) if d.id == id => Some(self),
            Component::DatePickerRange(d) if d.id == id => Some(self),
            Component::Graph(g) if g.id == id => Some(self),
            _ => None,
        }
    }

    pub fn as_dropdown(&self) -> Option<&Dropdown> {
        match self {
            Component::Dropdown(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_date_picker(&self) -> Option<&DatePickerRange> {
        match self {
            Component::DatePickerRange(d) => Some(d),
            _ => None,
        }
    }
}

/// Single-select dropdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    /// Initially selected value; `None` only when there are no options
    pub value: Option<String>,
    pub clearable: bool,
    pub searchable: bool,
    pub class_name: String,
}

impl Dropdown {
    /// Options whose label and value are the same string
    pub fn new(id: impl Into<String>, values: Vec<String>, value: Option<String>) -> Self {
        Self {
            id: id.into(),
            options: values.into_iter().map(DropdownOption::from).collect(),
            value,
            clearable: false,
            searchable: true,
            class_name: "dropdown".to_string(),
        }
    }

    /// Builder method: disable type-to-search
    pub fn not_searchable(mut self) -> Self {
        self.searchable = false;
        self
    }

    /// Option values in display order
    pub fn values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl From<String> for DropdownOption {
    fn from(value: String) -> Self {
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Inclusive date range picker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatePickerRange {
    pub id: String,
    pub min_date_allowed: Option<NaiveDate>,
    pub max_date_allowed: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl DatePickerRange {
    /// Picker spanning `bounds`, initially selecting the whole span
    pub fn spanning(id: impl Into<String>, bounds: Option<(NaiveDate, NaiveDate)>) -> Self {
        let (min, max) = bounds.unzip();
        Self {
            id: id.into(),
            min_date_allowed: min,
            max_date_allowed: max,
            start_date: min,
            end_date: max,
        }
    }
}

/// Chart container filled in by the charting front-end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub id: String,
    pub config: GraphConfig,
}

impl Graph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: GraphConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
    pub display_mode_bar: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: false,
        }
    }
}

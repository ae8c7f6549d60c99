//! Chart payloads
//!
//! Serializable figure descriptions in the shape Plotly.js expects for
//! `Plotly.react(element, figure.data, figure.layout)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One figure: traces plus layout metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub data: Vec<Trace>,
    pub layout: FigureLayout,
}

impl ChartPayload {
    /// Dates on the x axis of the first trace
    pub fn x(&self) -> &[NaiveDate] {
        self.data.first().map(|t| t.x.as_slice()).unwrap_or(&[])
    }

    /// Values on the y axis of the first trace
    pub fn y(&self) -> &[f64] {
        self.data.first().map(|t| t.y.as_slice()).unwrap_or(&[])
    }
}

/// A connected line series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub trace_type: String,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}

impl Trace {
    pub fn line(x: Vec<NaiveDate>, y: Vec<f64>) -> Self {
        Self {
            x,
            y,
            trace_type: "scatter".to_string(),
            mode: "lines".to_string(),
            hovertemplate: None,
        }
    }

    /// Builder method: set the hover tooltip template
    pub fn hovertemplate(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureLayout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub colorway: Vec<String>,
    /// "x" draws one vertical hover indicator for every series at that x
    pub hovermode: String,
}

impl FigureLayout {
    /// Left-aligned title, axes locked against zoom and pan
    pub fn new(title: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            title: Title {
                text: title.into(),
                x: 0.05,
                xanchor: "left".to_string(),
            },
            xaxis: Axis::fixed(),
            yaxis: Axis::fixed(),
            colorway: vec![color.into()],
            hovermode: "x".to_string(),
        }
    }

    /// Builder method: prefix y axis tick labels
    pub fn y_tick_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.yaxis.tickprefix = Some(prefix.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub xanchor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub fixedrange: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickprefix: Option<String>,
}

impl Axis {
    pub fn fixed() -> Self {
        Self {
            fixedrange: true,
            tickprefix: None,
        }
    }
}

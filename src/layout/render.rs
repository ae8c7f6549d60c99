//! HTML rendering
//!
//! Renders the component tree into the served page. Dropdowns become
//! `<select>` elements and the date range becomes two `<input type="date">`
//! fields (`{id}-start`, `{id}-end`); graphs are empty containers that the
//! dashboard script fills with Plotly.

use std::fmt::Write;

use super::builder::DashboardLayout;
use super::component::{Component, DatePickerRange, Dropdown, Graph};

const PLOTLY_SCRIPT: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Render a complete HTML document
pub fn render_page(layout: &DashboardLayout) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(&layout.title));
    for sheet in &layout.stylesheets {
        let _ = writeln!(
            html,
            "<link rel=\"{}\" href=\"{}\">",
            escape(&sheet.rel),
            escape(&sheet.href)
        );
    }
    html.push_str("<link rel=\"stylesheet\" href=\"/assets/style.css\">\n");
    let _ = writeln!(html, "<script src=\"{}\"></script>", PLOTLY_SCRIPT);
    html.push_str("<script src=\"/assets/dashboard.js\" defer></script>\n");
    html.push_str("</head>\n<body>\n");
    render_component(&layout.root, &mut html);
    html.push_str("\n</body>\n</html>\n");
    html
}

/// Render one component and its children
pub fn render_component(component: &Component, out: &mut String) {
    match component {
        Component::Div {
            class_name,
            children,
        } => {
            out.push_str("<div");
            class_attr(class_name.as_deref(), out);
            out.push('>');
            for child in children {
                render_component(child, out);
            }
            out.push_str("</div>");
        }
        Component::Text { text } => out.push_str(&escape(text)),
        Component::Paragraph { class_name, text } => {
            out.push_str("<p");
            class_attr(class_name.as_deref(), out);
            let _ = write!(out, ">{}</p>", escape(text));
        }
        Component::Heading { class_name, text } => {
            out.push_str("<h1");
            class_attr(class_name.as_deref(), out);
            let _ = write!(out, ">{}</h1>", escape(text));
        }
        Component::Dropdown(dropdown) => render_dropdown(dropdown, out),
        Component::DatePickerRange(picker) => render_date_picker(picker, out),
        Component::Graph(graph) => render_graph(graph, out),
    }
}

fn render_dropdown(dropdown: &Dropdown, out: &mut String) {
    let _ = write!(
        out,
        "<select id=\"{}\" class=\"{}\" data-clearable=\"{}\" data-searchable=\"{}\">",
        escape(&dropdown.id),
        escape(&dropdown.class_name),
        dropdown.clearable,
        dropdown.searchable
    );
    for option in &dropdown.options {
        let selected = dropdown.value.as_deref() == Some(option.value.as_str());
        let _ = write!(
            out,
            "<option value=\"{}\"{}>{}</option>",
            escape(&option.value),
            if selected { " selected" } else { "" },
            escape(&option.label)
        );
    }
    out.push_str("</select>");
}

fn render_date_picker(picker: &DatePickerRange, out: &mut String) {
    let _ = write!(out, "<div id=\"{}\" class=\"date-range\">", escape(&picker.id));
    for (suffix, value) in [("start", picker.start_date), ("end", picker.end_date)] {
        let _ = write!(out, "<input type=\"date\" id=\"{}-{}\"", escape(&picker.id), suffix);
        if let Some(min) = picker.min_date_allowed {
            let _ = write!(out, " min=\"{}\"", min);
        }
        if let Some(max) = picker.max_date_allowed {
            let _ = write!(out, " max=\"{}\"", max);
        }
        if let Some(value) = value {
            let _ = write!(out, " value=\"{}\"", value);
        }
        out.push('>');
    }
    out.push_str("</div>");
}

fn render_graph(graph: &Graph, out: &mut String) {
    let _ = write!(
        out,
        "<div id=\"{}\" class=\"graph\" data-display-mode-bar=\"{}\"></div>",
        escape(&graph.id),
        graph.config.display_mode_bar
    );
}

fn class_attr(class_name: Option<&str>, out: &mut String) {
    if let Some(class_name) = class_name {
        let _ = write!(out, " class=\"{}\"", escape(class_name));
    }
}

/// Escape text for use in element content and quoted attributes
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

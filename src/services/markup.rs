use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

use crate::models::render_plan::RenderPlan;

/// Which widget anchors the homepage carries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidgetLayout {
    /// `gh-activity-link` + `gh-activity-text` + `gh-activity-graph`
    #[default]
    Split,
    /// A single `gh-activity` anchor holding the text, no graph
    Combined,
    /// The page has no widget at all
    None,
}

impl WidgetLayout {
    pub fn has_anchors(self) -> bool {
        self != WidgetLayout::None
    }
}

#[derive(Debug, Error)]
#[error("unknown widget layout '{0}'")]
pub struct UnknownLayout(String);

impl FromStr for WidgetLayout {
    type Err = UnknownLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "split" => Ok(WidgetLayout::Split),
            "combined" => Ok(WidgetLayout::Combined),
            "none" => Ok(WidgetLayout::None),
            other => Err(UnknownLayout(other.to_string())),
        }
    }
}

/// Commit a render plan to widget markup for the given layout
pub fn render_widget(plan: &RenderPlan, layout: WidgetLayout) -> String {
    let mut html = String::new();

    match layout {
        WidgetLayout::Split => {
            let _ = write!(
                html,
                r#"<a id="gh-activity-link" href="{}" title="{}" target="_blank" rel="noopener"><span id="gh-activity-text">{}</span></a>"#,
                html_escape(&plan.href),
                html_escape(&plan.title),
                html_escape(&plan.text)
            );

            if !plan.cells.is_empty() {
                html.push_str(r#"<div id="gh-activity-graph" class="gh-graph" aria-hidden="true">"#);
                for cell in &plan.cells {
                    let _ = write!(
                        html,
                        r#"<span class="gh-cell {}" title="{}"></span>"#,
                        cell.class_name(),
                        html_escape(&cell.tooltip)
                    );
                }
                html.push_str("</div>");
            }
        }
        WidgetLayout::Combined => {
            let _ = write!(
                html,
                r#"<a id="gh-activity" href="{}" title="{}" target="_blank" rel="noopener">{}</a>"#,
                html_escape(&plan.href),
                html_escape(&plan.title),
                html_escape(&plan.text)
            );
        }
        WidgetLayout::None => {}
    }

    html
}

/// Applies the dark flag in browsers that never send the color scheme hint
pub const DARK_MODE_SCRIPT: &str = concat!(
    "<script>",
    "if (window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches) {",
    "document.body.classList.add('dark');",
    "}",
    "</script>"
);

/// A complete homepage document with the widget rendered in
pub fn render_page(plan: &RenderPlan, layout: WidgetLayout) -> String {
    let body_class = if plan.dark { r#" class="dark""# } else { "" };

    format!(
        concat!(
            "<!DOCTYPE html>",
            r#"<html lang="en">"#,
            "<head>",
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<meta name="color-scheme" content="light dark">"#,
            "<title>maxhabra</title>",
            r#"<link rel="stylesheet" href="./assets/css/style.css">"#,
            "</head>",
            "<body{}>",
            "{}",
            r#"<footer class="gh-activity">{}</footer>"#,
            "</body>",
            "</html>"
        ),
        body_class,
        DARK_MODE_SCRIPT,
        render_widget(plan, layout)
    )
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

use serde::Serialize;

/// Color scheme the visitor's browser prefers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// A single day square of the contribution graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphCell {
    pub level: u8,
    pub tooltip: String,
}

impl GraphCell {
    pub fn class_name(&self) -> String {
        format!("gh-level-{}", self.level)
    }
}

/// Everything the widget shows, decided before any markup is produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub text: String,
    pub href: String,
    pub title: String,
    pub cells: Vec<GraphCell>,
    pub dark: bool,
}

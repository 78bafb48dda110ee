use crate::models::render_plan::GraphCell;
use crate::models::snapshot::DayRecord;
use crate::services::contribution_count::format_count;

/// The calendar-style grid of recent days
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContributionGraph {
    cells: Vec<GraphCell>,
}

impl ContributionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `days` into the graph, replacing whatever was there before.
    ///
    /// An empty day list leaves the graph untouched.
    pub fn render(&mut self, days: &[DayRecord]) {
        if days.is_empty() {
            return;
        }

        self.cells = days.iter().map(cell_for_day).collect();
    }

    #[allow(dead_code)]
    pub fn cells(&self) -> &[GraphCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<GraphCell> {
        self.cells
    }
}

fn cell_for_day(day: &DayRecord) -> GraphCell {
    GraphCell {
        level: day.level.index(),
        tooltip: format!("{} contributions on {}", format_count(day.count), day.date),
    }
}

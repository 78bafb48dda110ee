pub mod render_plan;
pub mod snapshot;

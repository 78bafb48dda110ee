pub mod activity_widget;
pub mod color_scheme;
pub mod contribution_count;
pub mod contribution_graph;
pub mod markup;
pub mod snapshot_loader;

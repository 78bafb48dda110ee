use crate::models::render_plan::{ColorScheme, RenderPlan};
use crate::models::snapshot::ActivitySnapshot;
use crate::services::contribution_count::{format_count, resolve_contribution_count};
use crate::services::contribution_graph::ContributionGraph;
use crate::services::snapshot_loader::{ActivityUnavailable, SnapshotSource};
use crate::utils::validators::{is_site_path, is_web_link};
use url::Url;

pub const DEFAULT_PROFILE_URL: &str = "https://github.com/maxhabra";
pub const FALLBACK_LABEL: &str = "GitHub activity";

/// Load a fresh snapshot and turn it into a render plan.
///
/// Never fails: any problem loading the snapshot yields the fallback plan.
pub async fn load_widget(source: &dyn SnapshotSource, scheme: ColorScheme) -> RenderPlan {
    let result = source.load().await;

    match &result {
        Ok(snapshot) => log::debug!(
            "Loaded activity snapshot from {} (generated at {:?})",
            source.describe(),
            snapshot.generated_at()
        ),
        Err(e) => log::warn!(
            "GitHub activity unavailable from {}: {}",
            source.describe(),
            e
        ),
    }

    build_plan(result, scheme)
}

/// Derive everything the widget shows from the load result
pub fn build_plan(
    result: Result<ActivitySnapshot, ActivityUnavailable>,
    scheme: ColorScheme,
) -> RenderPlan {
    let snapshot = match result {
        Ok(snapshot) => snapshot,
        Err(_) => return fallback_plan(scheme),
    };

    if snapshot.is_generator_fallback() {
        log::debug!("Activity snapshot is a generator placeholder");
    }

    let mut graph = ContributionGraph::new();
    if let Some(days) = &snapshot.recent_days {
        graph.render(days);
    }

    RenderPlan {
        text: display_text(&snapshot),
        href: link_target(&snapshot),
        title: snapshot
            .summary
            .clone()
            .unwrap_or_else(|| FALLBACK_LABEL.to_string()),
        cells: graph.into_cells(),
        dark: scheme.is_dark(),
    }
}

/// What the widget shows when the snapshot cannot be loaded
pub fn fallback_plan(scheme: ColorScheme) -> RenderPlan {
    RenderPlan {
        text: FALLBACK_LABEL.to_string(),
        href: DEFAULT_PROFILE_URL.to_string(),
        title: FALLBACK_LABEL.to_string(),
        cells: Vec::new(),
        dark: scheme.is_dark(),
    }
}

/// Make a site-relative link absolute, for markup embedded on other origins
pub fn resolve_href(plan: &mut RenderPlan, site_url: &Url) {
    if !is_site_path(&plan.href) {
        return;
    }
    if let Ok(resolved) = site_url.join(&plan.href) {
        plan.href = resolved.to_string();
    }
}

fn display_text(snapshot: &ActivitySnapshot) -> String {
    if let Some(count) = resolve_contribution_count(snapshot) {
        return format!("{} contributions in the last year", format_count(count));
    }

    // Oldest snapshots only had a weekly event count and a last-seen date
    let mut parts = Vec::new();
    if let Some(week_events) = snapshot.week_events.filter(|v| v.is_finite()) {
        parts.push(format!("7d: {}", format_count(week_events)));
    }
    if let Some(last_event_date) = &snapshot.last_event_date {
        parts.push(format!("last: {}", last_event_date));
    }

    if parts.is_empty() {
        FALLBACK_LABEL.to_string()
    } else {
        parts.join(" | ")
    }
}

fn link_target(snapshot: &ActivitySnapshot) -> String {
    [&snapshot.activity_url, &snapshot.profile_url]
        .into_iter()
        .flatten()
        .find(|link| is_web_link(link) || is_site_path(link))
        .cloned()
        .unwrap_or_else(|| DEFAULT_PROFILE_URL.to_string())
}

use actix_web::http::header::{self, HeaderValue};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;
use url::Url;

use crate::models::render_plan::{ColorScheme, RenderPlan};
use crate::services::activity_widget::{load_widget, resolve_href};
use crate::services::color_scheme::PREFERS_COLOR_SCHEME;
use crate::services::markup::{render_page, render_widget, WidgetLayout};
use crate::services::snapshot_loader::SnapshotSource;

/// Shared, read-only state of the widget endpoints
#[derive(Clone)]
pub struct WidgetState {
    pub source: Arc<dyn SnapshotSource>,
    pub layout: WidgetLayout,
    pub site_url: Option<Url>,
}

impl WidgetState {
    pub fn new(source: Arc<dyn SnapshotSource>, layout: WidgetLayout) -> Self {
        Self {
            source,
            layout,
            site_url: None,
        }
    }

    /// Site-relative snapshot links are made absolute against this URL
    pub fn with_site_url(mut self, site_url: Option<Url>) -> Self {
        self.site_url = site_url;
        self
    }

    /// Load and plan the widget, unless the page has nowhere to put it
    async fn plan(&self, req: &HttpRequest) -> Option<RenderPlan> {
        if !self.layout.has_anchors() {
            return None;
        }

        let scheme = ColorScheme::from_request(req);
        let mut plan = load_widget(self.source.as_ref(), scheme).await;
        if let Some(site_url) = &self.site_url {
            resolve_href(&mut plan, site_url);
        }
        Some(plan)
    }
}

/// GET /
/// The homepage with the activity widget rendered in
pub async fn get_page(req: HttpRequest, state: web::Data<WidgetState>) -> impl Responder {
    let plan = match state.plan(&req).await {
        Some(plan) => plan,
        // Still honour the color scheme when there is no widget
        None => RenderPlan {
            text: String::new(),
            href: String::new(),
            title: String::new(),
            cells: Vec::new(),
            dark: ColorScheme::from_request(&req).is_dark(),
        },
    };

    let mut response = fresh_response();
    response
        .content_type("text/html; charset=utf-8")
        .body(render_page(&plan, state.layout))
}

/// GET /widget
/// Just the widget markup, for embedding
pub async fn get_widget(req: HttpRequest, state: web::Data<WidgetState>) -> impl Responder {
    match state.plan(&req).await {
        Some(plan) => fresh_response()
            .content_type("text/html; charset=utf-8")
            .body(render_widget(&plan, state.layout)),
        None => HttpResponse::NoContent().finish(),
    }
}

/// GET /widget/plan
/// The render plan as JSON, for clients that build their own markup
pub async fn get_widget_plan(req: HttpRequest, state: web::Data<WidgetState>) -> impl Responder {
    match state.plan(&req).await {
        Some(plan) => fresh_response().json(plan),
        None => HttpResponse::NoContent().finish(),
    }
}

/// Widget responses depend on the snapshot at request time and on the
/// visitor's color scheme hint
fn fresh_response() -> actix_web::HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    builder
        .insert_header((header::CACHE_CONTROL, HeaderValue::from_static("no-store")))
        .insert_header(("Accept-CH", PREFERS_COLOR_SCHEME))
        // Chromium retries the first navigation once it learns about the hint
        .insert_header(("Critical-CH", PREFERS_COLOR_SCHEME))
        .insert_header((header::VARY, PREFERS_COLOR_SCHEME));
    builder
}

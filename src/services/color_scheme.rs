use actix_web::HttpRequest;

use crate::models::render_plan::ColorScheme;

/// Client hint carrying the browser's `prefers-color-scheme` value
pub const PREFERS_COLOR_SCHEME: &str = "Sec-CH-Prefers-Color-Scheme";

impl ColorScheme {
    /// Parse a client hint value such as `"dark"`. Browsers send it quoted,
    /// proxies sometimes strip the quotes.
    pub fn from_hint(value: &str) -> Self {
        if value.trim().trim_matches('"').eq_ignore_ascii_case("dark") {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }

    /// Read the preference once from the request headers
    pub fn from_request(req: &HttpRequest) -> Self {
        req.headers()
            .get(PREFERS_COLOR_SCHEME)
            .and_then(|v| v.to_str().ok())
            .map(ColorScheme::from_hint)
            .unwrap_or_default()
    }

    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

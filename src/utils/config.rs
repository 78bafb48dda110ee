use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::services::markup::WidgetLayout;
use crate::utils::validators::validate_url;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub site_dir: PathBuf,
    pub site_url: Option<Url>,
    pub widget_layout: WidgetLayout,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let site_url = match lookup("SITE_URL").filter(|v| !v.trim().is_empty()) {
            Some(raw) => Some(validate_url(raw.trim()).context("SITE_URL is not a valid URL")?),
            None => None,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .context("PORT must be a number")?,
            site_dir: PathBuf::from(lookup("SITE_DIR").unwrap_or_else(|| ".".to_string())),
            site_url,
            widget_layout: lookup("WIDGET_LAYOUT")
                .unwrap_or_else(|| "split".to_string())
                .parse()
                .context("WIDGET_LAYOUT must be split, combined or none")?,
            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .context("HTTP_TIMEOUT_SECS must be a number")?,
        })
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn assets_dir(&self) -> PathBuf {
        self.site_dir.join("assets")
    }
}

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde_json::Value as JsonValue;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::models::snapshot::ActivitySnapshot;

/// Location of the snapshot, relative to the homepage
pub const SNAPSHOT_PATH: &str = "./assets/data/github-activity.json";

/// Every way loading the snapshot can fail. The widget treats them all alike.
#[derive(Debug, Error)]
pub enum ActivityUnavailable {
    #[error("snapshot request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("snapshot request returned status {0}")]
    Status(u16),
    #[error("snapshot file could not be read: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("snapshot is not a JSON object")]
    NotAnObject,
}

/// Where the activity snapshot comes from
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch and parse a fresh copy of the snapshot
    async fn load(&self) -> Result<ActivitySnapshot, ActivityUnavailable>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Parse a snapshot document. The top level must be an object; individual
/// fields are best-effort.
pub fn parse_snapshot(bytes: &[u8]) -> Result<ActivitySnapshot, ActivityUnavailable> {
    let value: JsonValue = serde_json::from_slice(bytes)?;
    if !value.is_object() {
        return Err(ActivityUnavailable::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

/// Fetches the snapshot over HTTP, bypassing every cache on the way
pub struct HttpSnapshotSource {
    client: Client,
    url: Url,
}

impl HttpSnapshotSource {
    /// Resolve the snapshot path against the site's base URL
    pub fn new(client: Client, site_url: &Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            client,
            url: site_url.join(SNAPSHOT_PATH)?,
        })
    }

    #[allow(dead_code)]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    async fn load(&self) -> Result<ActivitySnapshot, ActivityUnavailable> {
        let response = self
            .client
            .get(self.url.clone())
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ActivityUnavailable::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        parse_snapshot(&body)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the snapshot straight from the site directory on disk
pub struct FileSnapshotSource {
    path: PathBuf,
}

impl FileSnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_site_dir(site_dir: &Path) -> Self {
        Self::new(site_dir.join(SNAPSHOT_PATH.trim_start_matches("./")))
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotSource for FileSnapshotSource {
    async fn load(&self) -> Result<ActivitySnapshot, ActivityUnavailable> {
        let bytes = tokio::fs::read(&self.path).await?;
        parse_snapshot(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http_client::create_http_client;
    use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
    use std::time::Duration;

    fn test_client() -> Client {
        create_http_client(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_parse_snapshot() {
        let snapshot = parse_snapshot(br#"{"yearly_contributions": 5, "extra": true}"#).unwrap();
        assert_eq!(snapshot.yearly_contributions, Some(5.0));
    }

    #[test]
    fn test_parse_snapshot_rejects_garbage() {
        assert!(matches!(
            parse_snapshot(b"<html>not json</html>"),
            Err(ActivityUnavailable::Malformed(_))
        ));
        assert!(matches!(
            parse_snapshot(b"{\"summary\": "),
            Err(ActivityUnavailable::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_snapshot_requires_object() {
        assert!(matches!(parse_snapshot(b"null"), Err(ActivityUnavailable::NotAnObject)));
        assert!(matches!(parse_snapshot(b"[1, 2]"), Err(ActivityUnavailable::NotAnObject)));
        assert!(matches!(parse_snapshot(b"42"), Err(ActivityUnavailable::NotAnObject)));
    }

    #[test]
    fn test_snapshot_url_is_relative_to_page() {
        let client = test_client();

        let site = Url::parse("https://example.com/blog/").unwrap();
        let source = HttpSnapshotSource::new(client.clone(), &site).unwrap();
        assert_eq!(
            source.url().as_str(),
            "https://example.com/blog/assets/data/github-activity.json"
        );

        let site = Url::parse("https://example.com/index.html").unwrap();
        let source = HttpSnapshotSource::new(client, &site).unwrap();
        assert_eq!(
            source.url().as_str(),
            "https://example.com/assets/data/github-activity.json"
        );
    }

    #[test]
    fn test_file_source_path() {
        let source = FileSnapshotSource::from_site_dir(Path::new("/srv/site"));
        assert_eq!(
            source.path(),
            Path::new("/srv/site/assets/data/github-activity.json")
        );
    }

    #[actix_web::test]
    async fn test_file_source_reads_snapshot() {
        let dir = std::env::temp_dir().join(format!("gh-activity-loader-{}", std::process::id()));
        let path = dir.join("assets/data/github-activity.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"summary": "7 contributions in the last year"}"#).unwrap();

        let snapshot = FileSnapshotSource::from_site_dir(&dir).load().await.unwrap();
        assert_eq!(
            snapshot.summary.as_deref(),
            Some("7 contributions in the last year")
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[actix_web::test]
    async fn test_file_source_missing_file() {
        let source = FileSnapshotSource::new("/nonexistent/gh-activity/snapshot.json");
        assert!(matches!(source.load().await, Err(ActivityUnavailable::Io(_))));
    }

    /// Start a throwaway site that serves `body` as the snapshot, or nothing
    async fn spawn_site(body: Option<&'static str>) -> Url {
        let server = HttpServer::new(move || {
            let app = App::new();
            match body {
                Some(body) => app.route(
                    "/assets/data/github-activity.json",
                    web::get().to(move |req: HttpRequest| async move {
                        let no_store = req
                            .headers()
                            .get("cache-control")
                            .and_then(|v| v.to_str().ok())
                            == Some("no-store");
                        if no_store {
                            HttpResponse::Ok()
                                .content_type("application/json")
                                .body(body)
                        } else {
                            HttpResponse::BadRequest().finish()
                        }
                    }),
                ),
                None => app,
            }
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Url::parse(&format!("http://{}/", addr)).unwrap()
    }

    #[actix_web::test]
    async fn test_http_source_loads_without_cache() {
        let site = spawn_site(Some(r#"{"yearly_contributions": 1234}"#)).await;
        let source = HttpSnapshotSource::new(test_client(), &site).unwrap();

        let snapshot = source.load().await.unwrap();
        assert_eq!(snapshot.yearly_contributions, Some(1234.0));
    }

    #[actix_web::test]
    async fn test_http_source_not_found() {
        let site = spawn_site(None).await;
        let source = HttpSnapshotSource::new(test_client(), &site).unwrap();

        assert!(matches!(
            source.load().await,
            Err(ActivityUnavailable::Status(404))
        ));
    }

    #[actix_web::test]
    async fn test_http_source_malformed_body() {
        let site = spawn_site(Some("{ this is not json")).await;
        let source = HttpSnapshotSource::new(test_client(), &site).unwrap();

        assert!(matches!(
            source.load().await,
            Err(ActivityUnavailable::Malformed(_))
        ));
    }
}

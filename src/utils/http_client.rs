use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create the HTTP client shared by every snapshot fetch
pub fn create_http_client(timeout: Duration) -> reqwest::Result<Client> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(concat!("gh-activity/", env!("CARGO_PKG_VERSION")))
        .build()
}

use anyhow::{anyhow, Result};
use url::Url;

/// Validate that a string is a valid URL with http or https scheme
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|e| anyhow!("Invalid URL format: {}", e))?;

    // Only allow http and https schemes
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!(
            "URL must use http or https scheme, got: {}",
            url.scheme()
        ));
    }

    // Must have a host
    if url.host_str().is_none() {
        return Err(anyhow!("URL must have a host"));
    }

    Ok(url)
}

/// Whether a link taken from the snapshot is safe to put in an `href`
pub fn is_web_link(link: &str) -> bool {
    validate_url(link).is_ok()
}

/// Whether a link is a path on the homepage's own site, e.g. `/about` or
/// `./posts/`. Protocol-relative `//host` links are not.
pub fn is_site_path(link: &str) -> bool {
    let relative = (link.starts_with('/') && !link.starts_with("//"))
        || link.starts_with("./")
        || link.starts_with("../");

    relative && !link.contains('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://github.com").is_ok());
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not-a-url").is_err());
    }

    #[test]
    fn test_is_web_link() {
        assert!(is_web_link("https://github.com/maxhabra"));
        assert!(is_web_link("http://github.com/maxhabra?tab=overview"));
        assert!(!is_web_link("javascript:alert(1)"));
        assert!(!is_web_link("/relative/path"));
        assert!(!is_web_link(""));
    }

    #[test]
    fn test_is_site_path() {
        assert!(is_site_path("/about"));
        assert!(is_site_path("./activity.html"));
        assert!(is_site_path("../github"));
        assert!(!is_site_path("//evil.example/x"));
        assert!(!is_site_path("/\\evil.example"));
        assert!(!is_site_path("javascript:alert(1)"));
        assert!(!is_site_path("about"));
        assert!(!is_site_path(""));
    }
}

// Cookie domain derivation from a URL

use crate::error::{Error, Result};
use url::Url;

/// Derives the cookie domain a site most likely uses from one of its URLs.
///
/// - `www.` hosts are returned unchanged (`www.saucedemo.com`)
/// - hosts with a subdomain collapse to the registrable domain with a leading
///   dot (`app.example.com` → `.example.com`)
/// - anything else is returned as-is (`example.com`, `localhost`)
pub fn url_domain(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    let host = parsed.host_str().ok_or_else(|| Error::InvalidUrl {
        url: url.to_string(),
        reason: "URL has no host".to_string(),
    })?;

    if host.starts_with("www.") {
        return Ok(host.to_string());
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        Ok(format!(".{}", labels[labels.len() - 2..].join(".")))
    } else {
        Ok(host.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_www_host_kept() {
        assert_eq!(
            url_domain("https://www.saucedemo.com/").unwrap(),
            "www.saucedemo.com"
        );
    }

    #[test]
    fn test_subdomain_collapses() {
        assert_eq!(
            url_domain("https://nucleus.anacondaconnect.com/login").unwrap(),
            ".anacondaconnect.com"
        );
        assert_eq!(
            url_domain("https://a.b.example.com").unwrap(),
            ".example.com"
        );
    }

    #[test]
    fn test_root_domain_and_localhost() {
        assert_eq!(url_domain("https://example.com").unwrap(), "example.com");
        assert_eq!(url_domain("https://localhost:9002").unwrap(), "localhost");
    }

    #[test]
    fn test_invalid_urls() {
        assert!(matches!(
            url_domain("not a url"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(url_domain("data:text/html,hi").is_err());
    }
}

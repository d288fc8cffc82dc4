//! HTTP utilities for The Odds API

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

/// Headers sent with every Odds API request.
pub fn common_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    let agent = format!("vegas-ffl/{}", env!("CARGO_PKG_VERSION"));
    h.insert(USER_AGENT, HeaderValue::from_str(&agent)?);
    Ok(h)
}

/// Read a numeric quota header such as `x-requests-remaining`.
pub fn quota_header(headers: &HeaderMap, name: &str) -> Option<u64> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .trim()
        .parse::<f64>()
        .ok()
        .map(|v| v as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_headers() {
        let headers = common_headers().unwrap();

        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("vegas-ffl/"));
    }

    #[test]
    fn test_quota_header_parsing() {
        let mut headers = HeaderMap::new();
        headers.insert("x-requests-remaining", HeaderValue::from_static("487"));
        headers.insert("x-requests-used", HeaderValue::from_static("13.0"));
        headers.insert("x-requests-last", HeaderValue::from_static("n/a"));

        assert_eq!(quota_header(&headers, "x-requests-remaining"), Some(487));
        assert_eq!(quota_header(&headers, "x-requests-used"), Some(13));
        assert_eq!(quota_header(&headers, "x-requests-last"), None);
        assert_eq!(quota_header(&headers, "missing"), None);
    }
}

use std::fmt;
use std::time::Duration;

use frames_core::{ImageMeta, SearchResult};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// The API caps image results per request at this many.
const MAX_RESULTS_PER_REQUEST: u8 = 10;

const CREATIVE_COMMONS_RIGHTS: &str =
    "cc_publicdomain,cc_attribute,cc_sharealike,cc_noncommercial,cc_nonderived";

#[derive(Clone, PartialEq, Eq)]
pub struct SearchCredentials {
    pub api_key: String,
    pub engine_id: String,
}

impl fmt::Debug for SearchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchCredentials")
            .field("api_key", &"<redacted>")
            .field("engine_id", &self.engine_id)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub credentials: SearchCredentials,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl SearchSettings {
    pub fn new(credentials: SearchCredentials) -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            credentials,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("search request timed out")]
    Timeout,
    #[error("search request failed: {0}")]
    Network(String),
    #[error("search api returned http status {0}")]
    HttpStatus(u16),
    #[error("could not parse search response: {0}")]
    Parse(String),
}

#[async_trait::async_trait]
pub trait ImageSearch: Send + Sync {
    /// Runs one image query, returning at most `count` records in API order.
    async fn search(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, SearchError>;
}

/// Builds the request URL for an image query restricted to Creative Commons photos.
pub fn build_search_url(
    settings: &SearchSettings,
    query: &str,
    count: u8,
) -> Result<Url, SearchError> {
    let num = count.clamp(1, MAX_RESULTS_PER_REQUEST).to_string();
    Url::parse_with_params(
        &settings.endpoint,
        &[
            ("key", settings.credentials.api_key.as_str()),
            ("cx", settings.credentials.engine_id.as_str()),
            ("q", query),
            ("searchType", "image"),
            ("num", num.as_str()),
            ("imgSize", "large"),
            ("imgType", "photo"),
            ("safe", "active"),
            ("rights", CREATIVE_COMMONS_RIGHTS),
            ("fileType", "jpg,png"),
            ("imgColorType", "color"),
        ],
    )
    .map_err(|err| SearchError::InvalidEndpoint(err.to_string()))
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItem {
    link: Option<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    display_link: String,
    #[serde(default)]
    mime: String,
    #[serde(default)]
    image: Option<SearchItemImage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchItemImage {
    width: Option<u32>,
    height: Option<u32>,
    byte_size: Option<u64>,
    context_link: Option<String>,
}

impl SearchItem {
    fn into_result(self) -> Option<SearchResult> {
        let url = self.link.filter(|link| !link.trim().is_empty())?;
        let image = self
            .image
            .map(|meta| ImageMeta {
                width: meta.width,
                height: meta.height,
                byte_size: meta.byte_size,
                context_link: meta.context_link,
            })
            .unwrap_or_default();
        Some(SearchResult {
            url,
            title: self.title,
            snippet: self.snippet,
            source_domain: self.display_link,
            mime: self.mime,
            image,
        })
    }
}

pub(crate) fn parse_search_response(body: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let response: SearchResponse =
        serde_json::from_slice(body).map_err(|err| SearchError::Parse(err.to_string()))?;
    Ok(response
        .items
        .into_iter()
        .filter_map(SearchItem::into_result)
        .collect())
}

/// Client for the Custom Search JSON API in image mode.
#[derive(Debug, Clone)]
pub struct CustomSearchClient {
    settings: SearchSettings,
    client: reqwest::Client,
}

impl CustomSearchClient {
    pub fn new(settings: SearchSettings) -> Result<Self, SearchError> {
        Url::parse(&settings.endpoint)
            .map_err(|err| SearchError::InvalidEndpoint(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SearchError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ImageSearch for CustomSearchClient {
    async fn search(&self, query: &str, count: u8) -> Result<Vec<SearchResult>, SearchError> {
        let url = build_search_url(&self.settings, query, count)?;
        let response = self.client.get(url).send().await.map_err(map_search_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_search_error)?;
        let mut results = parse_search_response(&body)?;
        results.truncate(usize::from(count));
        Ok(results)
    }
}

fn map_search_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout
    } else {
        SearchError::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SearchSettings {
        SearchSettings::new(SearchCredentials {
            api_key: "k3y".into(),
            engine_id: "cx-1".into(),
        })
    }

    #[test]
    fn search_url_carries_license_and_photo_filters() {
        let url = build_search_url(&settings(), "gold aviator eyeglasses", 10).unwrap();
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let get = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(url.host_str(), Some("www.googleapis.com"));
        assert_eq!(get("key"), "k3y");
        assert_eq!(get("cx"), "cx-1");
        assert_eq!(get("q"), "gold aviator eyeglasses");
        assert_eq!(get("searchType"), "image");
        assert_eq!(get("num"), "10");
        assert_eq!(get("imgSize"), "large");
        assert_eq!(get("imgType"), "photo");
        assert_eq!(get("safe"), "active");
        assert_eq!(get("rights"), CREATIVE_COMMONS_RIGHTS);
        assert_eq!(get("fileType"), "jpg,png");
        assert_eq!(get("imgColorType"), "color");
    }

    #[test]
    fn result_count_is_capped_at_ten() {
        let url = build_search_url(&settings(), "q", 50).unwrap();
        assert!(url.query_pairs().any(|(k, v)| k == "num" && v == "10"));
    }

    #[test]
    fn parses_items_and_drops_entries_without_link() {
        let body = br#"{
            "kind": "customsearch#search",
            "items": [
                {
                    "link": "https://img.example.com/a.jpg",
                    "title": "Gold Aviator Sunglasses - Studio Shot",
                    "displayLink": "www.shutterstock.com",
                    "mime": "image/jpeg",
                    "image": {"width": 1200, "height": 900, "byteSize": 52311,
                              "contextLink": "https://www.shutterstock.com/x"}
                },
                {"title": "no link here"}
            ]
        }"#;
        let results = parse_search_response(body).unwrap();
        assert_eq!(results.len(), 1);
        let first = &results[0];
        assert_eq!(first.url, "https://img.example.com/a.jpg");
        assert_eq!(first.source_domain, "www.shutterstock.com");
        assert_eq!(first.snippet, "");
        assert_eq!(first.image.width, Some(1200));
        assert_eq!(first.image.byte_size, Some(52311));
    }

    #[test]
    fn missing_items_means_no_results() {
        let results = parse_search_response(br#"{"kind": "customsearch#search"}"#).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn debug_output_hides_api_key() {
        let rendered = format!("{:?}", settings().credentials);
        assert!(!rendered.contains("k3y"));
        assert!(rendered.contains("cx-1"));
    }
}

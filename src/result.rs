use serde::Deserialize;

use crate::error::{CseError, Result};

/// One entry from the API's `items` array, reduced to the fields callers
/// care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Title of the returned result.
    pub title: String,
    /// Short description of the page, with embedded newlines removed.
    pub snippet: Option<String>,
    /// The target link.
    pub link: String,
    /// A preview image of the page, if the page map carries one.
    pub image: Option<String>,
}

/// Raw response body. `error` and `items` are mutually exclusive in
/// practice; an error body has no items and a success body may have an
/// empty or missing list.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    pub(crate) error: Option<ApiErrorBody>,
    #[serde(default)]
    pub(crate) items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) code: i64,
    pub(crate) status: String,
    pub(crate) message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawItem {
    title: String,
    snippet: Option<String>,
    link: String,
    pagemap: Option<PageMap>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageMap {
    #[serde(default)]
    cse_image: Vec<CseImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CseImage {
    src: String,
}

impl ApiResponse {
    /// Maps the body to results, surfacing an API-level error object as
    /// the matching error kind.
    pub(crate) fn into_results(self) -> Result<Vec<SearchResult>> {
        if let Some(error) = self.error {
            if error.status == "RESOURCE_EXHAUSTED" {
                return Err(CseError::QuotaExceeded);
            }
            return Err(CseError::Api {
                code: error.code,
                status: error.status,
                message: error.message,
            });
        }
        Ok(self.items.into_iter().map(SearchResult::from).collect())
    }
}

impl From<RawItem> for SearchResult {
    fn from(raw: RawItem) -> Self {
        SearchResult {
            title: raw.title,
            snippet: raw
                .snippet
                .map(|snippet| snippet.split('\n').collect::<String>()),
            link: raw.link,
            image: raw
                .pagemap
                .and_then(|map| map.cse_image.into_iter().next())
                .map(|image| image.src),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Result<Vec<SearchResult>> {
        serde_json::from_str::<ApiResponse>(body)
            .expect("test body must be valid JSON")
            .into_results()
    }

    #[test]
    fn test_items_map_to_results() {
        let results = parse(
            r#"{
                "items": [
                    {
                        "title": "The Rust Programming Language",
                        "snippet": "A language empowering\neveryone.",
                        "link": "https://www.rust-lang.org/",
                        "pagemap": {
                            "cse_image": [{"src": "https://www.rust-lang.org/logo.png"}]
                        }
                    },
                    {
                        "title": "crates.io",
                        "link": "https://crates.io/",
                        "pagemap": {}
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "The Rust Programming Language");
        // Newlines inside the snippet are stripped, not replaced.
        assert_eq!(
            results[0].snippet.as_deref(),
            Some("A language empoweringeveryone.")
        );
        assert_eq!(
            results[0].image.as_deref(),
            Some("https://www.rust-lang.org/logo.png")
        );
        assert_eq!(results[1].snippet, None);
        assert_eq!(results[1].image, None);
    }

    #[test]
    fn test_missing_items_is_an_empty_page() {
        assert_eq!(parse("{}").unwrap(), Vec::new());
    }

    #[test]
    fn test_error_body_is_surfaced() {
        let err = parse(
            r#"{"error": {"code": 400, "status": "INVALID_ARGUMENT", "message": "Bad cx"}}"#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "[400: INVALID_ARGUMENT] Bad cx");
    }

    #[test]
    fn test_exhausted_quota_gets_its_own_kind() {
        let err = parse(
            r#"{"error": {"code": 429, "status": "RESOURCE_EXHAUSTED", "message": "Quota exceeded"}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, CseError::QuotaExceeded));
    }
}

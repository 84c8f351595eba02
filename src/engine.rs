use log::debug;

use crate::error::{CseError, Result};
use crate::flags::country::CountryCode;
use crate::flags::language::Language;
use crate::result::{ApiResponse, SearchResult};

const CSE_URL: &str = "https://customsearch.googleapis.com/customsearch/v1";
const DEFAULT_ENGINE_ID: &str = "0013301c62cb228c5";

/// The client used for interacting with the API.
///
/// Holds the API key, the engine id and a pooled HTTP client; one
/// instance can serve any number of sequential or concurrent searches.
#[derive(Debug, Clone)]
pub struct Search {
    client: reqwest::Client,
    api_key: String,
    engine_id: String,
}

impl Search {
    /// Creates a client for the default public engine id.
    ///
    /// An API key can be obtained at
    /// <https://developers.google.com/custom-search/v1/overview>.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_engine_id(api_key, DEFAULT_ENGINE_ID)
    }

    /// Creates a client for a specific engine id.
    pub fn with_engine_id(api_key: impl Into<String>, engine_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            engine_id: engine_id.into(),
        }
    }

    /// Issues one search request and returns its page of results, which
    /// can be empty.
    ///
    /// Argument validation happens before any I/O; an API-level error in
    /// the response body surfaces as [`CseError::QuotaExceeded`] or
    /// [`CseError::Api`].
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        let params = request.to_query_params(&self.api_key, &self.engine_id)?;
        debug!("GET {} with {} parameters", CSE_URL, params.len());

        let response: ApiResponse = self
            .client
            .get(CSE_URL)
            .query(&params)
            .send()
            .await?
            .json()
            .await?;

        response.into_results()
    }
}

/// Parameters for one search, assembled builder-style.
///
/// ```
/// use cse_client::{Language, SearchRequest};
///
/// let request = SearchRequest::new("ferris the crab")
///     .max_results(5)
///     .language(Language::from_flags([("english", true)])?);
/// # Ok::<(), cse_client::CseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequest {
    query: String,
    max_results: u8,
    start_index: u32,
    language: Option<Language>,
    country: Option<CountryCode>,
    safe_search: bool,
}

impl SearchRequest {
    /// Starts a request for `query` with the API defaults: ten results
    /// from the first page, any language, any country, safe search on.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: 10,
            start_index: 0,
            language: None,
            country: None,
            safe_search: true,
        }
    }

    /// Maximum number of results to return. Must be between 1 and 10.
    pub fn max_results(mut self, max_results: u8) -> Self {
        self.max_results = max_results;
        self
    }

    /// Zero-based index of the first result. Must be between 0 and 100;
    /// with the default page size, 10 starts the second page.
    pub fn start_index(mut self, start_index: u32) -> Self {
        self.start_index = start_index;
        self
    }

    /// Restricts results to documents in the given languages.
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Restricts results to documents originating in the given countries.
    pub fn country(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    /// Whether to filter NSFW results. Defaults to on.
    pub fn safe_search(mut self, safe_search: bool) -> Self {
        self.safe_search = safe_search;
        self
    }

    /// Validates the arguments and assembles the full query-parameter
    /// list. The `lr` and `cr` parameters are present only when the
    /// corresponding flag set encodes to a value; an omitted parameter
    /// means "any" to the API, so an empty string is never sent.
    fn to_query_params(
        &self,
        api_key: &str,
        engine_id: &str,
    ) -> Result<Vec<(&'static str, String)>> {
        if !(1..=10).contains(&self.max_results) {
            return Err(CseError::InvalidArg(format!(
                "max_results must be between 1 and 10, got {}",
                self.max_results
            )));
        }
        if self.start_index > 100 {
            return Err(CseError::InvalidArg(format!(
                "start_index must be between 0 and 100, got {}",
                self.start_index
            )));
        }

        let mut params = vec![
            ("q", self.query.clone()),
            ("cx", engine_id.to_owned()),
            ("key", api_key.to_owned()),
            ("num", self.max_results.to_string()),
            // The API counts results from 1.
            ("start", (self.start_index + 1).to_string()),
            (
                "safe",
                if self.safe_search { "active" } else { "off" }.to_owned(),
            ),
        ];

        if let Some(value) = self.language.as_ref().and_then(Language::to_query_param) {
            params.push(("lr", value));
        }
        if let Some(value) = self.country.as_ref().and_then(CountryCode::to_query_param) {
            params.push(("cr", value));
        }

        Ok(params)
    }
}

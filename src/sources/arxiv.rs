//! arXiv query endpoint.

use tracing::{debug, info};
use url::Url;

use crate::config::QueryConfig;
use crate::sources::FeedError;
use crate::utils::HttpClient;

/// Path segment preceding the identifier in arXiv entry ids
const ABS_PATH_PREFIX: &str = "/abs/";

/// arXiv author query
///
/// Issues exactly one request per [`fetch`](ArxivSource::fetch) call; there
/// is no retry and no pagination.
#[derive(Debug, Clone)]
pub struct ArxivSource {
    client: HttpClient,
    query_url: String,
}

impl ArxivSource {
    /// Create a source for the configured query
    pub fn new(query: &QueryConfig) -> Result<Self, FeedError> {
        Self::with_client(HttpClient::new()?, query)
    }

    /// Create with a custom HTTP client (for testing)
    pub fn with_client(client: HttpClient, query: &QueryConfig) -> Result<Self, FeedError> {
        Ok(Self {
            client,
            query_url: Self::build_query_url(query)?,
        })
    }

    /// The URL [`fetch`](ArxivSource::fetch) will request
    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Build the query URL for arXiv API
    ///
    /// Query parameters already present on the endpoint are kept.
    pub fn build_query_url(query: &QueryConfig) -> Result<String, FeedError> {
        let mut url = Url::parse(&query.endpoint)
            .map_err(|e| FeedError::InvalidEndpoint(format!("{}: {}", query.endpoint, e)))?;

        url.query_pairs_mut()
            .append_pair("search_query", &format!("au:{}", query.author))
            .append_pair("max_results", &query.max_results.to_string());

        Ok(url.into())
    }

    /// Fetch the raw Atom document
    pub fn fetch(&self) -> Result<String, FeedError> {
        info!("Querying arXiv: {}", self.query_url);
        let body = self.client.get_text(&self.query_url)?;
        debug!("Received {} bytes", body.len());
        Ok(body)
    }

    /// Extract the identifier from an entry `id` URL
    ///
    /// `http://arxiv.org/abs/2301.00001v2` yields `2301.00001v2`; old-style
    /// identifiers such as `math.GT/0104020v1` keep their slash. The version
    /// suffix is preserved.
    pub fn parse_id(raw: &str) -> Result<String, FeedError> {
        let raw = raw.trim();
        let url = Url::parse(raw).map_err(|_| FeedError::MalformedId(raw.to_string()))?;

        url.path()
            .strip_prefix(ABS_PATH_PREFIX)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or_else(|| FeedError::MalformedId(raw.to_string()))
    }
}

//! Flight-search collaborator

use serde::Deserialize;

use tripkit_state::search::query::SearchQuery;
use tripkit_state::search::state::FlightOffer;

use crate::envelope::decode;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct SearchData {
    results: Vec<FlightOffer>,
}

/// Client for the flight-search endpoint
#[derive(Clone, Debug)]
pub struct FlightsClient {
    base_url: String,
    http: reqwest::Client,
}

impl FlightsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Run a search; the query serializes with trip-type-specific fields
    /// (a legs array for multi-city, a return date for round trips).
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<FlightOffer>, ApiError> {
        tracing::debug!(trip_type = ?query.plan.trip_type(), "Searching flights");
        let response = self
            .http
            .post(format!("{}/flights/search", self.base_url))
            .json(query)
            .send()
            .await?;
        let data: SearchData = decode(response).await?;
        Ok(data.results)
    }
}

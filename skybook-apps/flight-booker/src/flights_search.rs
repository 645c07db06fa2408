//!  Skybook Flight Booker
//!
//!  Copyright (C) 2026  The Skybook Developers
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # Skypicker Search Client
//!
//! Effectful (time, network) side of the flight search.

use crate::error::SearchError;
use crate::flights_query_builder::SearchCriteria;
use crate::flights_results_parser::{FlightOffer, parse_search_response};
use crate::{DEFAULT_BOOKING_URL, DEFAULT_CURRENCY, DEFAULT_SEARCH_URL};
use anyhow::{Context, Result};
use std::sync::Arc;

/// Endpoints and booking currency.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub search_url: String,
    pub booking_url: String,
    pub currency: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            booking_url: DEFAULT_BOOKING_URL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

pub(crate) fn build_http_client() -> Result<wreq::Client> {
    wreq::Client::builder()
        .build()
        .context("Failed to build HTTP client")
}

pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(500).collect()
}

#[derive(Clone)]
pub struct SkypickerClient {
    client: Arc<wreq::Client>,
    search_url: String,
}

impl SkypickerClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Arc::new(build_http_client()?),
            search_url: config.search_url.clone(),
        })
    }

    pub fn search_url(&self, criteria: &SearchCriteria) -> String {
        criteria.search_url(&self.search_url)
    }

    async fn fetch_raw(&self, url: &str) -> Result<String, SearchError> {
        let http_start = std::time::Instant::now();
        tracing::trace!("[fetch_raw] Starting HTTP request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        tracing::debug!(
            "[fetch_raw] HTTP Status: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        );

        let body = response.text().await?;
        tracing::debug!(
            "[fetch_raw] Response body read in {:?}: {} bytes",
            http_start.elapsed(),
            body.len()
        );

        if !status.is_success() {
            return Err(SearchError::Http {
                status: status.as_u16(),
                body: body_preview(&body),
            });
        }

        Ok(body)
    }

    /// One GET against the search endpoint. Returns offers in server order.
    pub async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, SearchError> {
        let today = chrono::Local::now().date_naive();
        if criteria.depart_date() < today {
            tracing::warn!(
                "Departure date {} is in the past, the search will likely be empty",
                criteria.depart_date()
            );
        }

        let url = self.search_url(criteria);
        tracing::info!("🔗 Search URL: {}", url);

        let body = self.fetch_raw(&url).await?;
        let response = parse_search_response(&body).inspect_err(|e| {
            tracing::error!(
                "Search response decoding failed: {}. Body preview: {}",
                e,
                body_preview(&body)
            )
        })?;

        tracing::info!(
            "Search completed: {} offers{}",
            response.data.len(),
            response
                .currency
                .as_deref()
                .map(|c| format!(" in {}", c))
                .unwrap_or_default()
        );
        Ok(response.data)
    }
}

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

//! # Booking Client
//!
//! Redeems a booking token against the booking endpoint with a fixed mock
//! passenger.

use crate::error::BookingError;
use crate::flights_search::{ClientConfig, body_preview, build_http_client};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub email: String,
    pub title: String,
    pub last_name: String,
    pub first_name: String,
    pub birthday: String,
    #[serde(rename = "documentID")]
    pub document_id: String,
}

impl Passenger {
    /// Placeholder identity sent with every booking.
    pub fn mock() -> Self {
        Self {
            email: "mock@email.com".to_string(),
            title: "Mr".to_string(),
            last_name: "Surname".to_string(),
            first_name: "Name".to_string(),
            birthday: "1900-01-01".to_string(),
            document_id: "A123456B".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingRequest<'a> {
    pub booking_token: &'a str,
    pub bags: u8,
    pub currency: &'a str,
    pub passengers: Passenger,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum BookingStatus {
    Confirmed,
    Other(String),
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        if s == "confirmed" {
            BookingStatus::Confirmed
        } else {
            BookingStatus::Other(s)
        }
    }
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Other(s) => s,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookingResult {
    pub status: BookingStatus,
    #[serde(default)]
    pub pnr: Option<String>,
}

impl BookingResult {
    /// The PNR, only for confirmed bookings.
    pub fn confirmation_code(&self) -> Option<&str> {
        match self.status {
            BookingStatus::Confirmed => self.pnr.as_deref(),
            BookingStatus::Other(_) => None,
        }
    }
}

pub fn parse_booking_response(body: &str) -> Result<BookingResult, serde_json::Error> {
    serde_json::from_str(body)
}

#[derive(Clone)]
pub struct BookingClient {
    client: Arc<wreq::Client>,
    booking_url: String,
    currency: String,
}

impl BookingClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: Arc::new(build_http_client()?),
            booking_url: config.booking_url.clone(),
            currency: config.currency.clone(),
        })
    }

    /// One POST against the booking endpoint. Any well-formed answer is `Ok`,
    /// whatever its status.
    pub async fn book(&self, booking_token: &str, bags: u8) -> Result<BookingResult, BookingError> {
        let request = BookingRequest {
            booking_token,
            bags,
            currency: &self.currency,
            passengers: Passenger::mock(),
        };
        tracing::info!("Booking {} with {} bag(s) at {}", booking_token, bags, self.booking_url);

        let response = self
            .client
            .post(self.booking_url.as_str())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Booking response: HTTP {}, {} bytes", status.as_u16(), body.len());

        if !status.is_success() {
            return Err(BookingError::Http {
                status: status.as_u16(),
                body: body_preview(&body),
            });
        }

        Ok(parse_booking_response(&body)?)
    }

    /// Book and require confirmation; yields the PNR.
    pub async fn confirm(&self, booking_token: &str, bags: u8) -> Result<String, BookingError> {
        let result = self.book(booking_token, bags).await?;
        match (&result.status, result.confirmation_code()) {
            (BookingStatus::Confirmed, Some(pnr)) => {
                tracing::info!("Booking confirmed: {}", pnr);
                Ok(pnr.to_string())
            }
            (BookingStatus::Confirmed, None) => Err(BookingError::MissingPnr),
            (status, _) => Err(BookingError::NotConfirmed {
                status: status.as_str().to_string(),
            }),
        }
    }
}

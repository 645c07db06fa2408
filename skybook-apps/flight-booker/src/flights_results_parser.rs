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

//! # Flights Results Parser
//!
//! Side-effect free decoding of the Skypicker `flights` JSON response.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Top-level search response. Only `data` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub data: Vec<FlightOffer>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// One bookable itinerary as returned by the search API.
///
/// Offers arrive already sorted by the server according to the `sort` parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightOffer {
    pub booking_token: String,
    pub price: f64,
    /// Extra cost keyed by number of checked bags. A missing key means the
    /// carrier does not accept that many bags.
    #[serde(default, deserialize_with = "lenient_bags_price")]
    pub bags_price: BTreeMap<u8, f64>,
    #[serde(default, rename = "flyFrom")]
    pub fly_from: Option<String>,
    #[serde(default, rename = "flyTo")]
    pub fly_to: Option<String>,
    #[serde(default)]
    pub fly_duration: Option<String>,
    #[serde(default)]
    pub airlines: Vec<String>,
}

impl FlightOffer {
    pub fn supports_bags(&self, bags: u8) -> bool {
        bags == 0 || self.bags_price.contains_key(&bags)
    }

    /// Price including the bag fee, `None` if `bags` is not supported.
    pub fn total_price(&self, bags: u8) -> Option<f64> {
        if bags == 0 {
            return Some(self.price);
        }
        self.bags_price.get(&bags).map(|fee| self.price + fee)
    }
}

/// `null` reads as an empty map; entries that are not `"<count>": <number>` are skipped.
fn lenient_bags_price<'de, D>(deserializer: D) -> Result<BTreeMap<u8, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(count, fee)| Some((count.trim().parse::<u8>().ok()?, fee.as_f64()?)))
        .collect())
}

pub fn parse_search_response(body: &str) -> Result<SearchResponse, serde_json::Error> {
    serde_json::from_str(body)
}

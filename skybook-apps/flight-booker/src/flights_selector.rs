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

//! # Flight Selector
//!
//! Picks the one offer to book. The server already sorts by price or
//! duration, but bag fees can reorder prices, so priced selections with bags
//! are recomputed client-side.

use crate::error::SelectionError;
use crate::flights_query_builder::{Optimize, SearchCriteria};
use crate::flights_results_parser::FlightOffer;

pub fn select_offer(
    criteria: &SearchCriteria,
    offers: Vec<FlightOffer>,
) -> Result<FlightOffer, SelectionError> {
    let bags = criteria.bags();

    if bags == 0 {
        return offers.into_iter().next().ok_or(SelectionError::NoResults);
    }
    if offers.is_empty() {
        return Err(SelectionError::NoResults);
    }

    let mut eligible = offers
        .into_iter()
        .filter(|offer| offer.bags_price.contains_key(&bags));

    let chosen = match criteria.optimize() {
        // `min_by` keeps the first of equal elements, so ties go to the earlier offer.
        Optimize::Price => eligible.min_by(|a, b| {
            bag_total(a, bags).total_cmp(&bag_total(b, bags))
        }),
        Optimize::Duration => eligible.next(),
    };

    let chosen = chosen.ok_or(SelectionError::NoEligibleFlight { bags })?;
    tracing::debug!(
        "Selected {} at {} with {} bag(s)",
        chosen.booking_token,
        bag_total(&chosen, bags),
        bags
    );
    Ok(chosen)
}

fn bag_total(offer: &FlightOffer, bags: u8) -> f64 {
    offer.total_price(bags).unwrap_or(f64::INFINITY)
}

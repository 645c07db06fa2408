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

//! # Search-and-book pipeline
//!
//! Search, select, book, strictly in that order.

use crate::error::Error;
use crate::flights_booking::BookingClient;
use crate::flights_query_builder::SearchCriteria;
use crate::flights_search::SkypickerClient;
use crate::flights_selector::select_offer;

/// Run one booking for `criteria` and return the PNR.
pub async fn search_and_book(
    criteria: &SearchCriteria,
    search: &SkypickerClient,
    booking: &BookingClient,
) -> Result<String, Error> {
    let overall_start = std::time::Instant::now();

    let offers = search.search_flights(criteria).await?;
    let offer = select_offer(criteria, offers)?;
    tracing::info!(
        "Picked {} ({}{}), base price {}",
        offer.booking_token,
        offer.fly_from.as_deref().unwrap_or(criteria.from_airport()),
        offer
            .fly_to
            .as_deref()
            .map(|to| format!(" → {}", to))
            .unwrap_or_default(),
        offer.price
    );

    let pnr = booking.confirm(&offer.booking_token, criteria.bags()).await?;
    tracing::debug!("Total search_and_book time: {:?}", overall_start.elapsed());
    Ok(pnr)
}

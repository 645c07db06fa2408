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

// Library for skybook-flight-booker
// Search Skypicker flights, pick one itinerary, book it.

mod error;
mod flights_booking;
mod flights_pipeline;
mod flights_query_builder;
mod flights_results_parser;
mod flights_search;
mod flights_selector;

pub use error::{BookingError, Error, ErrorKind, SearchError, SelectionError, ValidationError};

// Re-export the pure side: criteria, query string, decoding, selection
pub use flights_query_builder::{Optimize, SearchCriteria, SearchCriteriaBuilder};
pub use flights_results_parser::{FlightOffer, SearchResponse, parse_search_response};
pub use flights_selector::select_offer;

// Re-export the effectful side: HTTP clients
pub use flights_booking::{
    BookingClient, BookingRequest, BookingResult, BookingStatus, Passenger,
    parse_booking_response,
};
pub use flights_pipeline::search_and_book;
pub use flights_search::{ClientConfig, SkypickerClient};

pub const DEFAULT_SEARCH_URL: &str = "https://api.skypicker.com/flights?";
pub const DEFAULT_BOOKING_URL: &str = "http://128.199.48.38:8080/booking";
pub const DEFAULT_CURRENCY: &str = "EUR";

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

//! # Error taxonomy
//!
//! One error type per pipeline stage, unified by [`Error`] so the CLI can
//! report each failure kind distinctly.

use thiserror::Error;

/// Rejected command-line input. Raised before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid {field} airport code {value:?}: expected three uppercase letters")]
    InvalidAirportCode { field: &'static str, value: String },
    #[error("invalid date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),
    #[error("impossible date {0:?}")]
    ImpossibleDate(String),
    #[error("invalid return window {0}: days in destination must be positive")]
    NonPositiveReturn(i64),
    #[error("unsupported bag count {0}: choose 0, 1 or 2")]
    UnsupportedBagCount(u8),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Transport(#[from] wreq::Error),
    #[error("search API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("malformed search response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no flight found, probably incorrect args")]
    NoResults,
    #[error("no flight found that accepts {bags} bag(s)")]
    NoEligibleFlight { bags: u8 },
}

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("booking request failed: {0}")]
    Transport(#[from] wreq::Error),
    #[error("booking API returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("malformed booking response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("booking not confirmed (status {status:?})")]
    NotConfirmed { status: String },
    #[error("booking confirmed without a PNR")]
    MissingPnr,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Coarse failure classes, one per user-visible outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    EmptyResult,
    Transport,
    NotConfirmed,
}

impl ErrorKind {
    /// Process exit code used in strict mode.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Validation => 1,
            ErrorKind::EmptyResult => 2,
            ErrorKind::Transport => 3,
            ErrorKind::NotConfirmed => 4,
        }
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Selection(_) => ErrorKind::EmptyResult,
            Error::Search(_) => ErrorKind::Transport,
            Error::Booking(BookingError::NotConfirmed { .. } | BookingError::MissingPnr) => {
                ErrorKind::NotConfirmed
            }
            Error::Booking(_) => ErrorKind::Transport,
        }
    }
}

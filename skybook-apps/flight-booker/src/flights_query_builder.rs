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

//! # Flights Query Builder
//!
//! Side-effect free validation of search input and encoding of the
//! Skypicker `flights` query string.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static AIRPORT_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}$").unwrap());
static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap());

pub const MAX_BAGS: u8 = 2;

/// What the server should sort results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Optimize {
    #[default]
    Price,
    Duration,
}

impl Optimize {
    pub fn as_sort_param(self) -> &'static str {
        match self {
            Optimize::Price => "price",
            Optimize::Duration => "duration",
        }
    }
}

/// Validated search input. Only obtainable through [`SearchCriteriaBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    from_airport: String,
    to_airport: String,
    depart_date: NaiveDate,
    bags: u8,
    optimize: Optimize,
    return_after_days: Option<u32>,
}

impl SearchCriteria {
    pub fn builder(
        from_airport: impl Into<String>,
        to_airport: impl Into<String>,
        depart_date: impl Into<String>,
    ) -> SearchCriteriaBuilder {
        SearchCriteriaBuilder {
            from_airport: from_airport.into(),
            to_airport: to_airport.into(),
            depart_date: depart_date.into(),
            bags: 0,
            optimize: Optimize::Price,
            return_after_days: None,
        }
    }

    pub fn from_airport(&self) -> &str {
        &self.from_airport
    }

    pub fn to_airport(&self) -> &str {
        &self.to_airport
    }

    pub fn depart_date(&self) -> NaiveDate {
        self.depart_date
    }

    pub fn bags(&self) -> u8 {
        self.bags
    }

    pub fn optimize(&self) -> Optimize {
        self.optimize
    }

    pub fn return_after_days(&self) -> Option<u32> {
        self.return_after_days
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_after_days.is_some()
    }

    /// Encode as `flyFrom=..&to=..&dateFrom=..&dateTo=..&typeFlight=..[&daysInDestination..]&sort=..`.
    ///
    /// Fields without a value are dropped, so the result never holds `&&`
    /// nor a leading or trailing `&`.
    pub fn to_query_string(&self) -> String {
        let date = self.depart_date.format("%d/%m/%Y").to_string();
        let (type_flight, days) = match self.return_after_days {
            Some(n) => ("round", n.to_string()),
            None => ("one-way", String::new()),
        };

        let fields = [
            ("flyFrom", self.from_airport.as_str()),
            ("to", self.to_airport.as_str()),
            ("dateFrom", date.as_str()),
            ("dateTo", date.as_str()),
            ("typeFlight", type_flight),
            ("daysInDestinationFrom", days.as_str()),
            ("daysInDestinationTo", days.as_str()),
            ("sort", self.optimize.as_sort_param()),
        ];

        fields
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Full search URL against `base`, e.g. `https://api.skypicker.com/flights?`.
    pub fn search_url(&self, base: &str) -> String {
        let query = self.to_query_string();
        if base.ends_with('?') || base.ends_with('&') {
            format!("{}{}", base, query)
        } else if base.contains('?') {
            format!("{}&{}", base, query)
        } else {
            format!("{}?{}", base, query)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchCriteriaBuilder {
    from_airport: String,
    to_airport: String,
    depart_date: String,
    bags: u8,
    optimize: Optimize,
    return_after_days: Option<i64>,
}

impl SearchCriteriaBuilder {
    pub fn bags(mut self, bags: u8) -> Self {
        self.bags = bags;
        self
    }

    pub fn optimize(mut self, optimize: Optimize) -> Self {
        self.optimize = optimize;
        self
    }

    /// `None` means one-way.
    pub fn return_after_days(mut self, days: Option<i64>) -> Self {
        self.return_after_days = days;
        self
    }

    pub fn build(self) -> Result<SearchCriteria, ValidationError> {
        validate_airport("departure", &self.from_airport)?;
        validate_airport("destination", &self.to_airport)?;
        let depart_date = parse_iso_date(&self.depart_date)?;

        if self.bags > MAX_BAGS {
            return Err(ValidationError::UnsupportedBagCount(self.bags));
        }

        let return_after_days = match self.return_after_days {
            Some(days) if days > 0 => Some(
                u32::try_from(days).map_err(|_| ValidationError::NonPositiveReturn(days))?,
            ),
            Some(days) => return Err(ValidationError::NonPositiveReturn(days)),
            None => None,
        };

        Ok(SearchCriteria {
            from_airport: self.from_airport,
            to_airport: self.to_airport,
            depart_date,
            bags: self.bags,
            optimize: self.optimize,
            return_after_days,
        })
    }
}

fn validate_airport(field: &'static str, code: &str) -> Result<(), ValidationError> {
    if AIRPORT_CODE_RE.is_match(code) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAirportCode {
            field,
            value: code.to_string(),
        })
    }
}

/// Strict `YYYY-MM-DD`; the date must exist on the calendar.
fn parse_iso_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let caps = ISO_DATE_RE
        .captures(s)
        .ok_or_else(|| ValidationError::MalformedDate(s.to_string()))?;

    let field = |i: usize| caps[i].parse::<u32>();
    match (field(1), field(2), field(3)) {
        // no year 0
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y as i32, m, d)
            .filter(|_| y > 0)
            .ok_or_else(|| ValidationError::ImpossibleDate(s.to_string())),
        _ => Err(ValidationError::MalformedDate(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_way(from: &str, to: &str, date: &str) -> SearchCriteria {
        SearchCriteria::builder(from, to, date).build().unwrap()
    }

    #[test]
    fn test_one_way_cheapest_query() {
        let criteria = one_way("PRG", "LON", "2024-06-01");
        assert_eq!(
            criteria.to_query_string(),
            "flyFrom=PRG&to=LON&dateFrom=01/06/2024&dateTo=01/06/2024&typeFlight=one-way&sort=price"
        );
    }

    #[test]
    fn test_round_trip_fastest_query() {
        let criteria = SearchCriteria::builder("BCN", "DUB", "2023-12-31")
            .optimize(Optimize::Duration)
            .return_after_days(Some(5))
            .build()
            .unwrap();
        assert_eq!(
            criteria.to_query_string(),
            "flyFrom=BCN&to=DUB&dateFrom=31/12/2023&dateTo=31/12/2023&typeFlight=round\
             &daysInDestinationFrom=5&daysInDestinationTo=5&sort=duration"
        );
    }

    #[test]
    fn test_search_url_separator() {
        let criteria = one_way("PRG", "LON", "2024-06-01");
        let q = criteria.to_query_string();
        assert_eq!(
            criteria.search_url("https://api.skypicker.com/flights?"),
            format!("https://api.skypicker.com/flights?{}", q)
        );
        assert_eq!(
            criteria.search_url("http://localhost:1234/flights"),
            format!("http://localhost:1234/flights?{}", q)
        );
        assert_eq!(
            criteria.search_url("http://localhost:1234/flights?partner=picky"),
            format!("http://localhost:1234/flights?partner=picky&{}", q)
        );
    }

    #[test]
    fn test_airport_validation() {
        for code in ["ABC", "AAA", "ZZZ", "BZA"] {
            assert!(SearchCriteria::builder(code, "LON", "2024-06-01").build().is_ok());
        }
        for code in ["prg", "PR", "PRGX", "P1G", "", "ÄBC", "PR "] {
            let err = SearchCriteria::builder("PRG", code, "2024-06-01")
                .build()
                .unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidAirportCode {
                    field: "destination",
                    value: code.to_string()
                }
            );
        }
    }

    #[test]
    fn test_date_validation() {
        let build = |date: &str| SearchCriteria::builder("PRG", "LON", date).build();

        assert_eq!(
            build("2024-02-29").unwrap().depart_date(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            build("2023-02-30"),
            Err(ValidationError::ImpossibleDate("2023-02-30".into()))
        );
        assert_eq!(
            build("2023-13-01"),
            Err(ValidationError::ImpossibleDate("2023-13-01".into()))
        );
        assert_eq!(
            build("2023-02-29"),
            Err(ValidationError::ImpossibleDate("2023-02-29".into()))
        );
        assert_eq!(
            build("0000-01-01"),
            Err(ValidationError::ImpossibleDate("0000-01-01".into()))
        );
        assert!(build("0001-01-01").is_ok());
        for bad in ["2023-2-3", "23-02-03", "2023/02/03", "2023-02-03 ", "tomorrow"] {
            assert_eq!(build(bad), Err(ValidationError::MalformedDate(bad.into())));
        }
    }

    #[test]
    fn test_return_and_bags_validation() {
        let base = SearchCriteria::builder("PRG", "LON", "2024-06-01");

        assert_eq!(
            base.clone().return_after_days(Some(0)).build(),
            Err(ValidationError::NonPositiveReturn(0))
        );
        assert_eq!(
            base.clone().return_after_days(Some(-3)).build(),
            Err(ValidationError::NonPositiveReturn(-3))
        );
        assert_eq!(
            base.clone().bags(3).build(),
            Err(ValidationError::UnsupportedBagCount(3))
        );

        let ok = base.bags(2).return_after_days(Some(7)).build().unwrap();
        assert!(ok.is_round_trip());
        assert_eq!(ok.return_after_days(), Some(7));
        assert_eq!(ok.bags(), 2);
    }
}

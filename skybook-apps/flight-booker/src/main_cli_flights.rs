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

//! CLI that searches Skypicker and books the preferred flight.
//!
//! Prints the PNR on success. Every failure prints a diagnostic on stderr
//! and `0` on stdout; the exit status stays 0 unless `--strict-exit` is set.

use anyhow::{Context, Result};
use clap::Parser;
use skybook_flight_booker::{
    BookingClient, ClientConfig, DEFAULT_BOOKING_URL, DEFAULT_CURRENCY, DEFAULT_SEARCH_URL,
    Error, ErrorKind, Optimize, SearchCriteria, SkypickerClient, ValidationError, search_and_book,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "skybook-flights")]
#[command(author, version, about = "Process desired flight information and book it", long_about = None)]
struct CliArgs {
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Departure airport IATA code (e.g., PRG)
    #[arg(long)]
    from: String,

    /// Destination airport IATA code (e.g., LHR)
    #[arg(long)]
    to: String,

    /// Number of checked bags
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    bags: u8,

    /// Book the cheapest flight (default)
    #[arg(long, conflicts_with = "fastest")]
    cheapest: bool,

    /// Book the fastest flight
    #[arg(long)]
    fastest: bool,

    /// One-way ticket (default)
    #[arg(long, conflicts_with = "return_days")]
    one_way: bool,

    /// Round trip, flying back after N days in destination
    #[arg(long = "return", value_name = "N", allow_negative_numbers = true)]
    return_days: Option<i64>,

    /// Search endpoint
    #[arg(long, env = "SKYBOOK_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    search_url: String,

    /// Booking endpoint
    #[arg(long, env = "SKYBOOK_BOOKING_URL", default_value = DEFAULT_BOOKING_URL)]
    booking_url: String,

    /// Exit with a non-zero code when no booking was made
    #[arg(long)]
    strict_exit: bool,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,
}

/// Configure logging. Logs go to stderr, stdout only carries the PNR.
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn criteria_from_args(args: &CliArgs) -> Result<SearchCriteria, ValidationError> {
    let optimize = if args.fastest {
        Optimize::Duration
    } else {
        Optimize::Price
    };
    SearchCriteria::builder(&args.from, &args.to, &args.date)
        .bags(args.bags)
        .optimize(optimize)
        .return_after_days(args.return_days)
        .build()
}

async fn run(args: &CliArgs) -> Result<Result<String, Error>> {
    let criteria = match criteria_from_args(args) {
        Ok(criteria) => criteria,
        Err(e) => return Ok(Err(e.into())),
    };
    tracing::info!("Parsed request: {:?}", criteria);

    let config = ClientConfig {
        search_url: args.search_url.clone(),
        booking_url: args.booking_url.clone(),
        currency: DEFAULT_CURRENCY.to_string(),
    };
    let search = SkypickerClient::new(&config).context("Failed to create search client")?;
    let booking = BookingClient::new(&config).context("Failed to create booking client")?;

    Ok(search_and_book(&criteria, &search, &booking).await)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    tracing::debug!("Args: {:?}", args);

    let (message, exit_code) = match run(&args).await {
        Ok(Ok(pnr)) => {
            println!("{}", pnr);
            return Ok(ExitCode::SUCCESS);
        }
        Ok(Err(e)) => {
            tracing::debug!("Failure kind: {:?}", e.kind());
            (e.to_string(), e.kind().exit_code())
        }
        Err(e) => (format!("{:#}", e), ErrorKind::Transport.exit_code()),
    };

    eprintln!("{}", message);
    println!("0");
    if args.strict_exit {
        Ok(ExitCode::from(exit_code))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

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

//! In-process stand-in for the search and booking endpoints.

#![allow(dead_code)]

use axum::Json;
use axum::Router;
use axum::extract::{RawQuery, State};
use axum::http::{HeaderName, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
struct MockState {
    search_reply: Arc<(u16, String)>,
    booking_reply: Arc<(u16, String)>,
    search_hits: Arc<AtomicUsize>,
    booking_hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    last_booking: Arc<Mutex<Option<Value>>>,
}

pub struct MockApi {
    addr: SocketAddr,
    state: MockState,
}

async fn flights(State(state): State<MockState>, RawQuery(query): RawQuery) -> impl IntoResponse {
    state.search_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;
    reply(&state.search_reply)
}

async fn booking(State(state): State<MockState>, Json(payload): Json<Value>) -> impl IntoResponse {
    state.booking_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_booking.lock().unwrap() = Some(payload);
    reply(&state.booking_reply)
}

fn reply((status, body): &(u16, String)) -> (StatusCode, [(HeaderName, &'static str); 1], String) {
    (
        StatusCode::from_u16(*status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body.clone(),
    )
}

impl MockApi {
    pub async fn start(search: (u16, &str), booking: (u16, &str)) -> Self {
        let state = MockState {
            search_reply: Arc::new((search.0, search.1.to_string())),
            booking_reply: Arc::new((booking.0, booking.1.to_string())),
            search_hits: Arc::new(AtomicUsize::new(0)),
            booking_hits: Arc::new(AtomicUsize::new(0)),
            last_query: Arc::new(Mutex::new(None)),
            last_booking: Arc::new(Mutex::new(None)),
        };

        let app = Router::new()
            .route("/flights", get(flights))
            .route("/booking", post(booking))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn search_url(&self) -> String {
        format!("http://{}/flights?", self.addr)
    }

    pub fn booking_url(&self) -> String {
        format!("http://{}/booking", self.addr)
    }

    pub fn search_hits(&self) -> usize {
        self.state.search_hits.load(Ordering::SeqCst)
    }

    pub fn booking_hits(&self) -> usize {
        self.state.booking_hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.state.last_query.lock().unwrap().clone()
    }

    pub fn last_booking(&self) -> Option<Value> {
        self.state.last_booking.lock().unwrap().clone()
    }
}

/// The two-offer search response where the bag fee flips the price order.
pub const TWO_OFFERS: &str = r#"{
    "currency": "EUR",
    "data": [
        {"booking_token": "tok-first", "price": 100, "bags_price": {"1": 20}, "flyFrom": "PRG", "flyTo": "LGW"},
        {"booking_token": "tok-second", "price": 90, "bags_price": {"1": 50}, "flyFrom": "PRG", "flyTo": "STN"}
    ]
}"#;

pub const CONFIRMED: &str = r#"{"status": "confirmed", "pnr": "ABC123"}"#;

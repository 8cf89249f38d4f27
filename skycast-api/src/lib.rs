//! HTTP binding for the list contract.
//!
//! One POST route per record type, delegating straight to the configured
//! local broker. The JSON shapes here are the wire contract the remote
//! broker depends on; no auth or validation beyond deserialization.

pub mod handlers;

use std::sync::Arc;

use axum::{routing::post, Router};
use skycast_core::{ListableRecord, WeatherForecast};
use skycast_store::{LocalBroker, WeatherStore};

/// Shared state for the endpoint handlers: the broker every list route
/// delegates to.
#[derive(Clone)]
pub struct AppState {
    pub broker: Arc<LocalBroker<WeatherStore>>,
}

impl AppState {
    pub fn new(broker: Arc<LocalBroker<WeatherStore>>) -> Self {
        Self { broker }
    }
}

/// Build the list routes. Each registered record type contributes one
/// `POST /api/{record}/list/` route bound to the generic handler.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route(
            &list_path(WeatherForecast::endpoint_name()),
            post(handlers::list_records::<WeatherForecast>),
        )
        .with_state(state)
}

fn list_path(endpoint_name: &str) -> String {
    format!("/api/{}/list/", endpoint_name)
}

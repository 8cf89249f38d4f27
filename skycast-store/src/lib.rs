//! Backing store and local data broker.
//!
//! The store side of the listing contract: a [`RecordStore`] per record
//! type, an in-memory implementation, the [`LocalBroker`] that executes
//! [`skycast_core::ListRequest`]s against it, and the seed-data builder.

pub mod broker;
pub mod error;
pub mod memory;
pub mod seed;

pub use broker::{LocalBroker, QUERY_ERROR_MESSAGE};
pub use error::{StoreError, StoreResult};
pub use memory::{RecordStore, WeatherStore};
pub use seed::{seed_forecasts, DEFAULT_SEED_COUNT, SUMMARIES};

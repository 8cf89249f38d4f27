//! Remote data broker.
//!
//! [`ApiBroker`] implements the same broker contract as the local store
//! broker, but over HTTP: it POSTs the list request as JSON to the
//! per-record endpoint and deserializes the response body as the list
//! result. Transport problems of any kind degrade to a failed result
//! rather than an error.

pub mod broker;
pub mod config;
pub mod error;

pub use broker::{ApiBroker, NO_API_FOUND_MESSAGE};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};

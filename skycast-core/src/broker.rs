use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

use crate::domain::{ListRequest, ListResult};

/// A record type that can be listed through a [`DataBroker`].
///
/// `endpoint_name` is the lower-cased record name used as the API path
/// segment, so the local and remote bindings resolve the same collection.
pub trait ListableRecord:
    Clone + Send + Sync + Serialize + DeserializeOwned + 'static
{
    fn endpoint_name() -> &'static str;
}

/// The single data-access capability: fetch a page of records for a
/// [`ListRequest`]. Implemented by the local store broker and the remote
/// API broker; the two are interchangeable behind this trait.
///
/// Ordinary query and transport failures never surface as errors here —
/// they come back as a `ListResult` with `success == false` and a message.
/// Cancellation is cooperative: dropping the returned future aborts the
/// in-flight fetch.
#[async_trait]
pub trait DataBroker<R: ListableRecord>: Send + Sync {
    async fn get_records(&self, request: &ListRequest) -> ListResult<R>;
}

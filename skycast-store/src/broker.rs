use async_trait::async_trait;
use skycast_core::{DataBroker, ListRequest, ListResult, ListableRecord};
use tracing::{debug, warn};

use crate::memory::RecordStore;

/// Message reported when either store query fails. Part of the displayed
/// contract, not just a log line.
pub const QUERY_ERROR_MESSAGE: &str = "Error in Executing Query.";

/// Executes list requests directly against a backing store. One generic
/// implementation serves every record type the store carries.
#[derive(Debug, Clone)]
pub struct LocalBroker<S> {
    store: S,
}

impl<S> LocalBroker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<R, S> DataBroker<R> for LocalBroker<S>
where
    R: ListableRecord,
    S: RecordStore<R>,
{
    async fn get_records(&self, request: &ListRequest) -> ListResult<R> {
        debug!(
            transaction_id = %request.transaction_id,
            record = R::endpoint_name(),
            start_index = request.start_index,
            count = request.count,
            "executing list query"
        );

        // The windowed fetch and the total count are independent store
        // queries; a failure in one leaves the other's outcome intact.
        let items = match self.store.fetch(request.window()).await {
            Ok(items) => Some(items),
            Err(err) => {
                warn!(
                    transaction_id = %request.transaction_id,
                    record = R::endpoint_name(),
                    error = %err,
                    "windowed fetch failed"
                );
                None
            }
        };

        let total = match self.store.count().await {
            Ok(total) => Some(total),
            Err(err) => {
                warn!(
                    transaction_id = %request.transaction_id,
                    record = R::endpoint_name(),
                    error = %err,
                    "count query failed"
                );
                None
            }
        };

        let success = items.is_some() && total.is_some();
        let message = (!success).then(|| QUERY_ERROR_MESSAGE.to_string());

        ListResult::with_status(
            items.unwrap_or_default(),
            total.unwrap_or(0),
            success,
            message,
        )
    }
}

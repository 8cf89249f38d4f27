use axum::{extract::State, Json};
use skycast_core::{DataBroker, ListRequest, ListResult, ListableRecord};
use skycast_store::{LocalBroker, WeatherStore};
use tracing::debug;

use crate::AppState;

/// Accept a JSON [`ListRequest`], delegate to the local broker, return the
/// JSON [`ListResult`]. The same handler serves every record type the
/// broker's store carries; failures come back inside the result with
/// status 200.
pub async fn list_records<R>(
    State(state): State<AppState>,
    Json(request): Json<ListRequest>,
) -> Json<ListResult<R>>
where
    R: ListableRecord,
    LocalBroker<WeatherStore>: DataBroker<R>,
{
    debug!(
        transaction_id = %request.transaction_id,
        record = R::endpoint_name(),
        "list request received"
    );
    Json(state.broker.get_records(&request).await)
}

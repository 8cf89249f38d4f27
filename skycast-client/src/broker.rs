use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{header, Client};
use skycast_core::{DataBroker, ListRequest, ListResult, ListableRecord};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Message reported when the remote call produced no usable result —
/// unreachable host, non-success status, empty or malformed body alike.
pub const NO_API_FOUND_MESSAGE: &str = "No Api Found";

/// Data broker backed by the remote list API. The endpoint path is derived
/// from the record's lower-cased name, so the same broker instance serves
/// every record type the remote host exposes.
#[derive(Debug, Clone)]
pub struct ApiBroker {
    client: Client,
    config: Arc<ClientConfig>,
}

impl ApiBroker {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            client,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full URL for one record type's list endpoint.
    fn list_url(&self, endpoint_name: &str) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        format!("{}/api/{}/list/", base, endpoint_name)
    }

    async fn post_list<R: ListableRecord>(
        &self,
        request: &ListRequest,
    ) -> ClientResult<ListResult<R>> {
        let url = self.list_url(R::endpoint_name());
        debug!(
            transaction_id = %request.transaction_id,
            %url,
            start_index = request.start_index,
            count = request.count,
            "posting list request"
        );

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await?;
        let result = serde_json::from_str(&body)?;
        Ok(result)
    }
}

#[async_trait]
impl<R: ListableRecord> DataBroker<R> for ApiBroker {
    async fn get_records(&self, request: &ListRequest) -> ListResult<R> {
        match self.post_list::<R>(request).await {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    transaction_id = %request.transaction_id,
                    record = R::endpoint_name(),
                    error = %err,
                    "list call produced no result"
                );
                ListResult::failure(NO_API_FOUND_MESSAGE)
            }
        }
    }
}

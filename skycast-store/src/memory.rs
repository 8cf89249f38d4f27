use std::sync::Arc;

use async_trait::async_trait;
use skycast_core::{WeatherForecast, Window};
use tokio::sync::RwLock;

use crate::error::StoreResult;

/// The backing-store capability a broker needs for one record type:
/// a windowed fetch over the collection and an independent count of the
/// full collection. Any persistence engine can sit behind this.
#[async_trait]
pub trait RecordStore<R>: Send + Sync {
    async fn fetch(&self, window: Window) -> StoreResult<Vec<R>>;
    async fn count(&self) -> StoreResult<usize>;
}

/// In-memory record store. Each call acquires a fresh read session (the
/// lock guard), scoped to that call and released on every exit path; the
/// iteration order of the underlying vector is the store's stable order.
#[derive(Debug, Clone, Default)]
pub struct WeatherStore {
    forecasts: Arc<RwLock<Vec<WeatherForecast>>>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit seeding: load the records only if the store is empty.
    pub async fn load_if_empty(&self, records: Vec<WeatherForecast>) {
        let mut forecasts = self.forecasts.write().await;
        if forecasts.is_empty() {
            *forecasts = records;
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.forecasts.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore<WeatherForecast> for WeatherStore {
    async fn fetch(&self, window: Window) -> StoreResult<Vec<WeatherForecast>> {
        let session = self.forecasts.read().await;
        Ok(match window {
            Window::All => session.clone(),
            Window::Page { start_index, count } => session
                .iter()
                .skip(start_index)
                .take(count)
                .cloned()
                .collect(),
        })
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.forecasts.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn records(n: usize) -> Vec<WeatherForecast> {
        (0..n)
            .map(|i| WeatherForecast::new(Utc::now(), i as i32, None))
            .collect()
    }

    #[tokio::test]
    async fn load_if_empty_is_a_no_op_on_a_populated_store() {
        let store = WeatherStore::new();
        store.load_if_empty(records(3)).await;
        store.load_if_empty(records(10)).await;

        assert_eq!(store.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn fetch_preserves_store_order() {
        let store = WeatherStore::new();
        store.load_if_empty(records(5)).await;

        let page = store
            .fetch(Window::Page {
                start_index: 1,
                count: 3,
            })
            .await
            .unwrap();

        let temps: Vec<i32> = page.iter().map(|f| f.temperature_c).collect();
        assert_eq!(temps, vec![1, 2, 3]);
    }
}

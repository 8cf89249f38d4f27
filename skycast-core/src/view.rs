use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::broker::{DataBroker, ListableRecord};
use crate::domain::{ListRequest, ListResult};
use crate::notify::ListChangedNotifier;

/// The windowed slice a UI consumes incrementally: the page of items plus
/// the total count of the full collection.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowedItems<R> {
    pub items: Vec<R>,
    pub total_item_count: usize,
}

struct ViewState<R> {
    result: ListResult<R>,
    last_request: Option<ListRequest>,
    loading: bool,
}

/// Wraps the last list result and a loading flag around a broker, and
/// raises a change notification for the paged entry point.
///
/// Concurrent fetches against the same service are not serialized, but each
/// fetch carries a monotonic sequence number and a completion is discarded
/// when a newer fetch has started since, so a stale completion never
/// overwrites newer state.
pub struct ListViewService<R: ListableRecord> {
    broker: Arc<dyn DataBroker<R>>,
    notifier: Arc<ListChangedNotifier>,
    state: RwLock<ViewState<R>>,
    fetch_seq: AtomicU64,
}

impl<R: ListableRecord> ListViewService<R> {
    pub fn new(broker: Arc<dyn DataBroker<R>>, notifier: Arc<ListChangedNotifier>) -> Self {
        Self {
            broker,
            notifier,
            state: RwLock::new(ViewState {
                result: ListResult::default(),
                last_request: None,
                loading: true,
            }),
            fetch_seq: AtomicU64::new(0),
        }
    }

    /// Issue a fetch and store its outcome. The lock is never held across
    /// the await; only the latest fetch's completion is stored.
    pub async fn load(&self, request: ListRequest) {
        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.state.write().expect("view state lock poisoned");
            state.loading = true;
            state.last_request = Some(request);
        }

        let result = self.broker.get_records(&request).await;

        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            debug!(
                transaction_id = %request.transaction_id,
                "discarding stale list completion"
            );
            return;
        }

        let mut state = self.state.write().expect("view state lock poisoned");
        state.result = result;
        state.loading = false;
    }

    /// Fetch one window and return it in the shape a virtualized list
    /// consumes.
    pub async fn load_window(&self, start_index: usize, count: usize) -> WindowedItems<R> {
        self.load(ListRequest::page(start_index, count)).await;
        let state = self.state.read().expect("view state lock poisoned");
        WindowedItems {
            items: state.result.items.clone(),
            total_item_count: state.result.total_item_count,
        }
    }

    /// Fetch one window, raise the list-changed notification, and return
    /// the total item count.
    pub async fn load_window_and_notify(&self, start_index: usize, count: usize) -> usize {
        self.load(ListRequest::page(start_index, count)).await;
        self.notifier.notify_list_changed();
        self.state
            .read()
            .expect("view state lock poisoned")
            .result
            .total_item_count
    }

    /// The last stored result; the default zero-value until a fetch
    /// completes.
    pub fn result(&self) -> ListResult<R> {
        self.state
            .read()
            .expect("view state lock poisoned")
            .result
            .clone()
    }

    pub fn records(&self) -> Vec<R> {
        self.state
            .read()
            .expect("view state lock poisoned")
            .result
            .items
            .clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().expect("view state lock poisoned").loading
    }

    pub fn last_request(&self) -> Option<ListRequest> {
        self.state
            .read()
            .expect("view state lock poisoned")
            .last_request
    }
}

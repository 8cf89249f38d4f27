use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Describes a page window over a record collection, plus an opaque
/// transaction id for correlation. Constructed per call, immutable,
/// discarded after the call.
///
/// Wire shape: `{ "transactionId": <uuid>, "startIndex": <int>, "count": <int> }`.
/// `count == 0` encodes [`Window::All`] on the wire; use the named
/// constructors rather than passing a literal zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub transaction_id: Uuid,
    pub start_index: usize,
    pub count: usize,
}

impl ListRequest {
    /// A request for the window `[start_index, start_index + count)`.
    pub fn page(start_index: usize, count: usize) -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            start_index,
            count,
        }
    }

    /// A request for the full collection, no windowing.
    pub fn all() -> Self {
        Self {
            transaction_id: Uuid::new_v4(),
            start_index: 0,
            count: 0,
        }
    }

    /// The named windowing mode this request asks for.
    pub fn window(&self) -> Window {
        if self.count == 0 {
            Window::All
        } else {
            Window::Page {
                start_index: self.start_index,
                count: self.count,
            }
        }
    }
}

/// Explicit windowing mode derived from a [`ListRequest`]. On the wire a
/// count of zero means "no windowing"; this enum names that convention so
/// backends cannot misread it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Skip `start_index` records, take at most `count`.
    Page { start_index: usize, count: usize },
    /// The full collection.
    All,
}

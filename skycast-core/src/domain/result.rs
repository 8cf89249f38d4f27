use serde::{Deserialize, Serialize};

/// Message carried by a default-constructed result, before any fetch has
/// completed. Distinguishes the zero-value from a real empty page.
pub const EMPTY_INIT_MESSAGE: &str = "Empty New Initialization";

/// One page of records plus the total count of the full collection.
///
/// `total_item_count` is the size of the unwindowed collection, independent
/// of how many items the window returned. Failure is reported here as data
/// (`success == false` plus a displayable message), never as an error from
/// the broker.
///
/// Wire shape: `{ "items": [...], "totalItemCount": <int>, "success": <bool>,
/// "message": <string|null> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub total_item_count: usize,
    pub success: bool,
    pub message: Option<String>,
}

impl<T> ListResult<T> {
    /// A successful result.
    pub fn new(items: Vec<T>, total_item_count: usize) -> Self {
        Self {
            items,
            total_item_count,
            success: true,
            message: None,
        }
    }

    pub fn with_status(
        items: Vec<T>,
        total_item_count: usize,
        success: bool,
        message: Option<String>,
    ) -> Self {
        Self {
            items,
            total_item_count,
            success,
            message,
        }
    }

    /// A failed result: empty items, zero total, a displayable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            total_item_count: 0,
            success: false,
            message: Some(message.into()),
        }
    }
}

impl<T> Default for ListResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_item_count: 0,
            success: false,
            message: Some(EMPTY_INIT_MESSAGE.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};

/// One entry of the fixed case-history timeline. `data` is a free-form
/// mapping rendered verbatim by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineItem {
    pub time: String,
    pub title: String,
    pub data: serde_json::Value,
}

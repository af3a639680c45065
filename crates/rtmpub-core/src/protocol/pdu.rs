//! Outer PDU wrapper.
//!
//! ```text
//! { "action": "rtm/write", "body": {..}, "id": 42 }
//! ```
//!
//! The `id` is assigned by whoever correlates replies; it is omitted when absent.

use serde::{Deserialize, Serialize};

/// Action name of a write request.
pub const WRITE_ACTION: &str = "rtm/write";

/// One protocol data unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Pdu<B> {
    /// Action name (e.g., "rtm/write").
    pub action: String,
    /// Action-specific body.
    pub body: B,
    /// Optional request correlation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl<B> Pdu<B> {
    /// Wrap a write body.
    pub fn write(body: B, id: Option<u64>) -> Self {
        Self {
            action: WRITE_ACTION.to_owned(),
            body,
            id,
        }
    }

    /// True when the action is `rtm/write`.
    pub fn is_write(&self) -> bool {
        self.action == WRITE_ACTION
    }
}

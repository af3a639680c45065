//! Protocol modules for the write operation.
//!
//! - `write`: the `rtm/write` body (`WriteEnvelope`) and its builder.
//! - `read_mode`: closed read-back mode enumeration.
//! - `pdu`: the `{action, body, id}` wrapper shared by all requests.
//!
//! Construction is panic-free: an invalid ttl is reported as `RtmError`.

pub mod pdu;
pub mod read_mode;
pub mod write;

pub use pdu::{Pdu, WRITE_ACTION};
pub use read_mode::ReadMode;
pub use write::{WriteEnvelope, WriteEnvelopeBuilder};

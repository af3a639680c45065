//! rtmpub codec library entry.
//!
//! Turns write envelopes into `rtm/write` PDUs (JSON text or `Bytes` frames),
//! parses them back, hands out request correlation ids, and loads YAML write
//! plans. It never opens a connection; the bytes go to whatever transport the
//! caller owns.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod config;
pub mod ids;

pub use codec::{decode_write, encode_write_bytes, encode_write_text};
pub use ids::RequestIds;

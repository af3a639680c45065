//! rtmpub core: the write-request body of the RTM publish/subscribe protocol.
//!
//! This crate defines the envelope a client hands to a codec for one
//! `rtm/write` operation, the closed read-back mode enumeration, the outer PDU
//! wrapper, and the error surface shared by the other rtmpub crates. It carries
//! no transport or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Invalid input such as
//! a non-positive ttl surfaces as `RtmError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, RtmError};
pub use protocol::{Pdu, ReadMode, WriteEnvelope, WriteEnvelopeBuilder, WRITE_ACTION};

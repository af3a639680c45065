//! Top-level facade crate for rtmpub.
//!
//! Re-exports the write envelope types and the codec so users can depend on a single crate.

pub mod core {
    pub use rtmpub_core::*;
}

pub mod codec {
    pub use rtmpub_codec::*;
}

//! Write plan loader.
//!
//! A plan is a YAML list of writes the `rtmpub-encode` binary turns into
//! `rtm/write` PDUs. Parsing is strict (unknown keys fail) and every write is
//! built through the envelope builder before the plan is returned, so a loaded
//! plan never holds a write that cannot be encoded.

pub mod schema;

use std::fs;
use std::path::Path;

use rtmpub_core::error::{Result, RtmError};

pub use schema::{IdsSection, WritePlan, WriteSpec};

/// Read and validate a plan file. A missing or unreadable file is `Internal`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<WritePlan> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        RtmError::Internal(format!("read write plan {} failed: {e}", path.display()))
    })?;
    let plan = load_from_str(&s)?;
    tracing::debug!(path = %path.display(), writes = plan.writes.len(), "write plan loaded");
    Ok(plan)
}

/// Parse and validate plan text. Malformed YAML is `BadRequest`.
pub fn load_from_str(s: &str) -> Result<WritePlan> {
    let plan: WritePlan = serde_yaml::from_str(s)
        .map_err(|e| RtmError::BadRequest(format!("invalid write plan yaml: {e}")))?;
    plan.validate()?;
    Ok(plan)
}

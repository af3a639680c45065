//! Read-back mode requested on a write.
//!
//! The server echoes the effect of the write in its acknowledgment according
//! to this mode. The set is closed: unknown strings never reach the wire.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RtmError;

/// Read-back mode (`read` field of a write body).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// Acknowledge with the stream position only.
    Simple,
    /// Acknowledge with the previous message body and its metadata.
    Full,
}

impl ReadMode {
    /// String form embedded in the `read` field.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadMode::Simple => "simple",
            ReadMode::Full => "full",
        }
    }
}

impl fmt::Display for ReadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadMode {
    type Err = RtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(ReadMode::Simple),
            "full" => Ok(ReadMode::Full),
            other => Err(RtmError::BadRequest(format!("unknown read mode: {other}"))),
        }
    }
}

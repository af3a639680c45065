//! `rtm/write` body.
//!
//! ```text
//! {
//!     "action": "rtm/write",
//!     "body": {
//!         "channel": ChannelName,
//!         "message": Message,
//!         "position": Position OPTIONAL,
//!         "ttl": Seconds OPTIONAL,
//!         "ttl_message": Message OPTIONAL,
//!         "read": "simple" | "full" OPTIONAL
//!     },
//!     "id": RequestId OPTIONAL
//! }
//! ```
//!
//! `ttl` and `ttl_message` travel together: the builder only sets them as a pair.
//! Values produced by serde (or `Default`) skip validation until `validate()`
//! is called. A `null` ttl message is still a present ttl message.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, RtmError};
use crate::protocol::read_mode::ReadMode;

/// Immutable body of one outbound write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, bound(deserialize = "T: Deserialize<'de>"))]
pub struct WriteEnvelope<T> {
    #[serde(default)]
    channel: String,
    message: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ttl: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present"
    )]
    ttl_message: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    read: Option<ReadMode>,
}

/// Deserialize a present key as `Some`, even when `T` accepts `null`.
///
/// Pair with `#[serde(default)]` so a missing key still yields `None`.
pub fn present<'de, D, T>(d: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(d).map(Some)
}

fn check_ttl(ttl: i64) -> Result<()> {
    if ttl <= 0 {
        tracing::debug!(ttl, "rejecting non-positive ttl");
        return Err(RtmError::InvalidTtl(ttl));
    }
    Ok(())
}

impl<T> WriteEnvelope<T> {
    /// Minimal write: no position, no ttl, no read mode.
    pub fn new(channel: impl Into<String>, message: T) -> Self {
        Self {
            channel: channel.into(),
            message,
            position: None,
            ttl: None,
            ttl_message: None,
            read: None,
        }
    }

    /// Start a builder for writes carrying optional features.
    pub fn builder(channel: impl Into<String>, message: T) -> WriteEnvelopeBuilder<T> {
        WriteEnvelopeBuilder {
            channel: channel.into(),
            message,
            position: None,
            expiry: None,
            read: None,
        }
    }

    /// Target channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Payload, opaque to this crate.
    pub fn message(&self) -> &T {
        &self.message
    }

    /// Stream position the write is anchored at.
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Time-to-live in seconds.
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }

    /// Fallback message substituted when the ttl expires.
    pub fn ttl_message(&self) -> Option<&T> {
        self.ttl_message.as_ref()
    }

    /// Requested read-back mode.
    pub fn read_mode(&self) -> Option<ReadMode> {
        self.read
    }

    /// Re-check a value that did not come from the builder.
    ///
    /// Enforces "ttl present => positive" and "ttl present <=> ttl_message present".
    pub fn validate(&self) -> Result<()> {
        match (self.ttl, self.ttl_message.is_some()) {
            (Some(ttl), true) => check_ttl(ttl),
            (None, false) => Ok(()),
            (Some(_), false) => Err(RtmError::InvalidEnvelope(
                "ttl present without ttl_message".into(),
            )),
            (None, true) => Err(RtmError::InvalidEnvelope(
                "ttl_message present without ttl".into(),
            )),
        }
    }
}

impl<T: Clone> WriteEnvelope<T> {
    /// Copy with the ttl pair replaced. Position and read mode are kept.
    pub fn with_ttl(&self, ttl: i64, ttl_message: T) -> Result<Self> {
        check_ttl(ttl)?;
        Ok(Self {
            channel: self.channel.clone(),
            message: self.message.clone(),
            position: self.position.clone(),
            ttl: Some(ttl),
            ttl_message: Some(ttl_message),
            read: self.read,
        })
    }

    /// Copy with the read mode replaced. The ttl pair is kept.
    pub fn with_request_return(&self, read: impl Into<Option<ReadMode>>) -> Self {
        Self {
            read: read.into(),
            ..self.clone()
        }
    }

    /// Copy with the ttl pair cleared.
    pub fn without_ttl(&self) -> Self {
        Self {
            channel: self.channel.clone(),
            message: self.message.clone(),
            position: self.position.clone(),
            ttl: None,
            ttl_message: None,
            read: self.read,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for WriteEnvelope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WriteEnvelope{{channel='{}', message={:?}, position=",
            self.channel, self.message
        )?;
        match &self.position {
            Some(p) => write!(f, "'{p}'")?,
            None => f.write_str("null")?,
        }
        match self.ttl {
            Some(ttl) => write!(f, ", ttl={ttl}")?,
            None => f.write_str(", ttl=null")?,
        }
        match &self.ttl_message {
            Some(m) => write!(f, ", ttlMessage={m:?}}}"),
            None => f.write_str(", ttlMessage=null}"),
        }
    }
}

/// Builder covering every legal combination of optional write features.
#[derive(Debug, Clone)]
pub struct WriteEnvelopeBuilder<T> {
    channel: String,
    message: T,
    position: Option<String>,
    expiry: Option<(i64, T)>,
    read: Option<ReadMode>,
}

impl<T> WriteEnvelopeBuilder<T> {
    /// Anchor the write at a stream position.
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Same as `position`, but accepts an absent position.
    pub fn position_opt(mut self, position: Option<String>) -> Self {
        self.position = position;
        self
    }

    /// Expire the message after `ttl` seconds, substituting `ttl_message`.
    pub fn ttl(mut self, ttl: i64, ttl_message: T) -> Self {
        self.expiry = Some((ttl, ttl_message));
        self
    }

    /// Request read-back semantics. `None` leaves the field off the wire.
    pub fn read_mode(mut self, read: impl Into<Option<ReadMode>>) -> Self {
        self.read = read.into();
        self
    }

    /// Validate and produce the envelope.
    pub fn build(self) -> Result<WriteEnvelope<T>> {
        let (ttl, ttl_message) = match self.expiry {
            Some((ttl, message)) => {
                check_ttl(ttl)?;
                (Some(ttl), Some(message))
            }
            None => (None, None),
        };
        Ok(WriteEnvelope {
            channel: self.channel,
            message: self.message,
            position: self.position,
            ttl,
            ttl_message,
            read: self.read,
        })
    }
}

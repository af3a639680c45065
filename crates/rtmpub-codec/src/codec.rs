//! Encode-once codec for `rtm/write` PDUs.
//!
//! - Encode: envelope + id => `{"action":"rtm/write","body":{..},"id":..}`,
//!   absent optional fields omitted.
//! - Decode: the body is held as `RawValue` until the action is confirmed,
//!   then parsed strictly and validated.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;

use rtmpub_core::{
    error::{Result, RtmError},
    protocol::{Pdu, WriteEnvelope},
};

/// Channel is the one field the envelope leaves unchecked that the wire needs.
fn check_encodable<T>(env: &WriteEnvelope<T>) -> Result<()> {
    if env.channel().is_empty() {
        return Err(RtmError::BadRequest("channel must not be empty".into()));
    }
    env.validate()
}

/// Encode a write PDU as JSON text.
pub fn encode_write_text<T: Serialize>(env: &WriteEnvelope<T>, id: Option<u64>) -> Result<String> {
    check_encodable(env)?;
    let s = serde_json::to_string(&Pdu::write(env, id))
        .map_err(|e| RtmError::Internal(format!("json encode failed: {e}")))?;
    tracing::debug!(channel = env.channel(), ?id, bytes = s.len(), "encoded write pdu");
    Ok(s)
}

/// Encode a write PDU as a byte frame.
pub fn encode_write_bytes<T: Serialize>(env: &WriteEnvelope<T>, id: Option<u64>) -> Result<Bytes> {
    check_encodable(env)?;
    let v = serde_json::to_vec(&Pdu::write(env, id))
        .map_err(|e| RtmError::Internal(format!("json encode failed: {e}")))?;
    tracing::debug!(channel = env.channel(), ?id, bytes = v.len(), "encoded write pdu");
    Ok(Bytes::from(v))
}

/// Decode and validate a write PDU.
pub fn decode_write<T: DeserializeOwned>(s: &str) -> Result<Pdu<WriteEnvelope<T>>> {
    let res = decode_inner(s);
    if let Err(e) = &res {
        tracing::warn!(code = e.code().as_str(), error = %e, "write pdu rejected");
    }
    res
}

fn decode_inner<T: DeserializeOwned>(s: &str) -> Result<Pdu<WriteEnvelope<T>>> {
    let raw: Pdu<Box<RawValue>> = serde_json::from_str(s)
        .map_err(|e| RtmError::BadRequest(format!("invalid pdu json: {e}")))?;
    if !raw.is_write() {
        return Err(RtmError::BadRequest(format!(
            "unexpected action: {}",
            raw.action
        )));
    }

    let body: WriteEnvelope<T> = serde_json::from_str(raw.body.get())
        .map_err(|e| RtmError::BadRequest(format!("invalid write body: {e}")))?;
    body.validate()?;

    tracing::debug!(channel = body.channel(), id = ?raw.id, "decoded write pdu");
    Ok(Pdu {
        action: raw.action,
        body,
        id: raw.id,
    })
}

use serde::Deserialize;
use serde_json::Value;

use rtmpub_core::error::{Result, RtmError};
use rtmpub_core::protocol::write::present;
use rtmpub_core::protocol::{ReadMode, WriteEnvelope};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WritePlan {
    pub version: u32,

    #[serde(default)]
    pub ids: IdsSection,

    #[serde(default)]
    pub writes: Vec<WriteSpec>,
}

impl WritePlan {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RtmError::UnsupportedVersion);
        }
        if self.writes.is_empty() {
            return Err(RtmError::BadRequest("writes must not be empty".into()));
        }

        self.ids.validate()?;

        for (i, w) in self.writes.iter().enumerate() {
            if w.channel.is_empty() {
                return Err(RtmError::BadRequest(format!(
                    "writes[{i}].channel must not be empty"
                )));
            }
            w.to_envelope()?;
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdsSection {
    #[serde(default = "default_id_start")]
    pub start: u64,
}

impl Default for IdsSection {
    fn default() -> Self {
        Self {
            start: default_id_start(),
        }
    }
}

impl IdsSection {
    pub fn validate(&self) -> Result<()> {
        if self.start == 0 {
            return Err(RtmError::BadRequest("ids.start must be at least 1".into()));
        }
        Ok(())
    }
}

fn default_id_start() -> u64 {
    1
}

/// One write as described in the plan. `message` may be any YAML value.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteSpec {
    pub channel: String,
    pub message: Value,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub ttl: Option<i64>,
    /// `ttl_message: null` is a present (null) fallback, not a missing one.
    #[serde(default, deserialize_with = "present")]
    pub ttl_message: Option<Value>,
    #[serde(default)]
    pub read: Option<ReadMode>,
}

impl WriteSpec {
    pub fn to_envelope(&self) -> Result<WriteEnvelope<Value>> {
        let b = WriteEnvelope::builder(self.channel.clone(), self.message.clone())
            .position_opt(self.position.clone())
            .read_mode(self.read);
        let b = match (self.ttl, &self.ttl_message) {
            (Some(ttl), Some(m)) => b.ttl(ttl, m.clone()),
            (None, None) => b,
            (Some(_), None) => {
                return Err(RtmError::InvalidEnvelope(format!(
                    "channel {}: ttl requires ttl_message",
                    self.channel
                )))
            }
            (None, Some(_)) => {
                return Err(RtmError::InvalidEnvelope(format!(
                    "channel {}: ttl_message requires ttl",
                    self.channel
                )))
            }
        };
        b.build()
    }
}

//! WriteEnvelope construction, derived copies, and wire shape.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use rtmpub_core::{Pdu, ReadMode, RtmError, WriteEnvelope};

fn orders() -> WriteEnvelope<String> {
    WriteEnvelope::builder("orders", "hello".to_owned())
        .position("1234:0")
        .build()
        .unwrap()
}

#[test]
fn minimal_has_no_optional_fields() {
    let env = WriteEnvelope::new("c", 7u32);
    assert_eq!(env.channel(), "c");
    assert_eq!(*env.message(), 7);
    assert!(env.position().is_none());
    assert!(env.ttl().is_none());
    assert!(env.ttl_message().is_none());
    assert!(env.read_mode().is_none());
}

#[test]
fn position_only_accessors() {
    let env = orders();
    assert_eq!(env.channel(), "orders");
    assert_eq!(env.message(), "hello");
    assert_eq!(env.position(), Some("1234:0"));
    assert_eq!(env.ttl(), None);
    assert_eq!(env.ttl_message(), None);
    assert_eq!(env.read_mode(), None);
}

#[test]
fn absent_read_mode_equals_position_only() {
    let with_none = WriteEnvelope::builder("orders", "hello".to_owned())
        .position("1234:0")
        .read_mode(None)
        .build()
        .unwrap();
    assert_eq!(with_none, orders());
}

#[test]
fn non_positive_ttl_rejected() {
    for ttl in [0, -1, -5, i64::MIN] {
        let err = WriteEnvelope::builder("c", "m")
            .ttl(ttl, "expired")
            .build()
            .expect_err("must reject");
        assert_eq!(err, RtmError::InvalidTtl(ttl));
        assert_eq!(err.code().as_str(), "INVALID_TTL");
        assert!(err.to_string().contains(&ttl.to_string()));

        let err = WriteEnvelope::new("c", "m").with_ttl(ttl, "expired").expect_err("must reject");
        assert_eq!(err, RtmError::InvalidTtl(ttl));
    }
}

#[test]
fn positive_ttl_accepted() {
    for ttl in [1, 60, i64::MAX] {
        let env = WriteEnvelope::builder("c", "m")
            .ttl(ttl, "expired")
            .read_mode(ReadMode::Full)
            .build()
            .unwrap();
        assert_eq!(env.ttl(), Some(ttl));
        assert_eq!(env.ttl_message(), Some(&"expired"));
        assert_eq!(env.read_mode(), Some(ReadMode::Full));
    }
}

#[test]
fn with_ttl_replaces_pair_and_keeps_read_mode() {
    let base = WriteEnvelope::builder("c", "m")
        .position("1:0")
        .ttl(10, "old")
        .read_mode(ReadMode::Simple)
        .build()
        .unwrap();

    let next = base.with_ttl(30, "new").unwrap();
    assert_eq!(next.ttl(), Some(30));
    assert_eq!(next.ttl_message(), Some(&"new"));
    assert_eq!(next.position(), Some("1:0"));
    assert_eq!(next.read_mode(), Some(ReadMode::Simple));

    // receiver untouched
    assert_eq!(base.ttl(), Some(10));
    assert_eq!(base.ttl_message(), Some(&"old"));
}

#[test]
fn with_request_return_keeps_ttl_pair() {
    let base = WriteEnvelope::builder("c", "m").ttl(60, "expired").build().unwrap();

    let next = base.with_request_return(ReadMode::Full);
    assert_eq!(next.read_mode(), Some(ReadMode::Full));
    assert_eq!(next.ttl(), Some(60));
    assert_eq!(next.ttl_message(), Some(&"expired"));

    let cleared = next.with_request_return(None);
    assert_eq!(cleared, base);
}

#[test]
fn without_ttl_clears_pair() {
    let base = WriteEnvelope::builder("c", "m")
        .ttl(60, "expired")
        .read_mode(ReadMode::Simple)
        .build()
        .unwrap();
    let next = base.without_ttl();
    assert!(next.ttl().is_none());
    assert!(next.ttl_message().is_none());
    assert_eq!(next.read_mode(), Some(ReadMode::Simple));
    next.validate().unwrap();
}

#[test]
fn position_only_wire_body() {
    let body = serde_json::to_value(orders()).unwrap();
    assert_eq!(body, json!({"channel":"orders","message":"hello","position":"1234:0"}));
}

#[test]
fn ttl_wire_body_without_position() {
    let env = WriteEnvelope::builder("c", "m".to_owned())
        .position_opt(None)
        .ttl(60, "expired".to_owned())
        .build()
        .unwrap();
    let body = serde_json::to_value(&env).unwrap();
    assert_eq!(body, json!({"channel":"c","message":"m","ttl":60,"ttl_message":"expired"}));
    assert!(body.get("position").is_none());
}

#[test]
fn read_mode_on_the_wire() {
    let env = orders().with_request_return(ReadMode::Simple);
    let pdu = serde_json::to_value(Pdu::write(&env, Some(3))).unwrap();
    assert_eq!(pdu["action"], "rtm/write");
    assert_eq!(pdu["id"], 3);
    assert_eq!(pdu["body"]["read"], "simple");
}

#[test]
fn structured_payload_is_opaque() {
    let msg = json!({"sku": "A-1", "qty": 3});
    let env = WriteEnvelope::builder("orders", msg.clone())
        .ttl(5, json!(null))
        .build()
        .unwrap();
    assert_eq!(env.message(), &msg);
    assert_eq!(env.ttl_message(), Some(&json!(null)));
}

#[test]
fn deserialized_value_is_not_validated_until_asked() {
    let env: WriteEnvelope<String> =
        serde_json::from_value(json!({"channel":"c","message":"m","ttl":-1,"ttl_message":"x"}))
            .unwrap();
    assert_eq!(env.ttl(), Some(-1));
    assert_eq!(env.validate(), Err(RtmError::InvalidTtl(-1)));

    let env: WriteEnvelope<String> =
        serde_json::from_value(json!({"channel":"c","message":"m","ttl":5})).unwrap();
    assert_eq!(env.validate().unwrap_err().code().as_str(), "INVALID_ENVELOPE");
}

#[test]
fn blank_value_is_empty() {
    let env: WriteEnvelope<String> = WriteEnvelope::default();
    assert_eq!(env.channel(), "");
    assert_eq!(env.message(), "");
    assert!(env.position().is_none());
    env.validate().unwrap();
}

#[test]
fn display_is_diagnostic() {
    assert_eq!(
        orders().to_string(),
        "WriteEnvelope{channel='orders', message=\"hello\", position='1234:0', ttl=null, ttlMessage=null}"
    );
    let env = WriteEnvelope::builder("c", 1).ttl(60, 2).build().unwrap();
    assert_eq!(
        env.to_string(),
        "WriteEnvelope{channel='c', message=1, position=null, ttl=60, ttlMessage=2}"
    );
}

#[test]
fn null_ttl_message_is_present_after_deserialize() {
    let env: WriteEnvelope<serde_json::Value> =
        serde_json::from_value(json!({"channel":"c","message":"m","ttl":5,"ttl_message":null}))
            .unwrap();
    assert_eq!(env.ttl_message(), Some(&serde_json::Value::Null));
    env.validate().unwrap();

    let env: WriteEnvelope<serde_json::Value> =
        serde_json::from_value(json!({"channel":"c","message":"m"})).unwrap();
    assert!(env.ttl_message().is_none());
}

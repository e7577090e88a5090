//! Payload schema and validator for the `about-us` endpoint
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{check_kind, check_keys, member, CheckContext, JsonKind};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};

pub(crate) const PAYLOAD_KEYS: &[&str] = &["aboutus"];

pub(crate) fn validate(payload: &Map<String, Value>) -> ConformanceResult<()> {
    let ctx = CheckContext::root().child("payload");
    check_keys("about-us payload keys", payload, PAYLOAD_KEYS)?;
    check_kind(&ctx.child("aboutus"), member(payload, "aboutus"), JsonKind::String)
}

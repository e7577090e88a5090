//! Payload schema and validator for the `reels` endpoint
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{
    check_count, check_kind, check_keys, check_object, member, CheckContext, FieldSpec, JsonKind,
    ObjectSchema,
};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};

pub(crate) const PAYLOAD_KEYS: &[&str] = &["reelList", "numReels"];

const REEL_SCHEMA: ObjectSchema = ObjectSchema {
    label: "reel entry keys",
    fields: &[
        FieldSpec {
            name: "url",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "sUrl",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "thumb",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "frame",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "title",
            kind: JsonKind::String,
        },
    ],
};

pub(crate) fn validate(payload: &Map<String, Value>) -> ConformanceResult<()> {
    let ctx = CheckContext::root().child("payload");
    check_keys("reels payload keys", payload, PAYLOAD_KEYS)?;

    let count_value = member(payload, "numReels");
    check_kind(&ctx.child("numReels"), count_value, JsonKind::Integer)?;

    let list_ctx = ctx.child("reelList");
    let list_value = member(payload, "reelList");
    check_kind(&list_ctx, list_value, JsonKind::Array)?;

    let reels = list_value.as_array().map(Vec::as_slice).unwrap_or_default();
    let declared = count_value.as_i64().unwrap_or_default();
    check_count("numReels", "reelList", declared, reels.len())?;

    for (index, reel) in reels.iter().enumerate() {
        check_object(&list_ctx.child_index(index), reel, &REEL_SCHEMA)?;
    }

    Ok(())
}

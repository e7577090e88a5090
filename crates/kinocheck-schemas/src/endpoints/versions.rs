//! Payload schema and validator for the `versions` endpoint
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{
    check_count, check_kind, check_keys, check_object, member, CheckContext, FieldSpec, JsonKind,
    ObjectSchema,
};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};

pub(crate) const PAYLOAD_KEYS: &[&str] = &["numApis", "apiList"];

const API_SCHEMA: ObjectSchema = ObjectSchema {
    label: "api entry keys",
    fields: &[
        FieldSpec {
            name: "apiName",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "apiVersion",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "apiDataVersion",
            kind: JsonKind::String,
        },
    ],
};

pub(crate) fn validate(payload: &Map<String, Value>) -> ConformanceResult<()> {
    let ctx = CheckContext::root().child("payload");
    check_keys("versions payload keys", payload, PAYLOAD_KEYS)?;

    let count_value = member(payload, "numApis");
    check_kind(&ctx.child("numApis"), count_value, JsonKind::Integer)?;

    let list_ctx = ctx.child("apiList");
    let list_value = member(payload, "apiList");
    check_kind(&list_ctx, list_value, JsonKind::Array)?;

    let apis = list_value.as_array().map(Vec::as_slice).unwrap_or_default();
    let declared = count_value.as_i64().unwrap_or_default();
    check_count("numApis", "apiList", declared, apis.len())?;

    for (index, api) in apis.iter().enumerate() {
        check_object(&list_ctx.child_index(index), api, &API_SCHEMA)?;
    }

    Ok(())
}

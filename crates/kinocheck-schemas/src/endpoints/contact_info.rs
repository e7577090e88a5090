//! Payload schema and validator for the `contact-info` endpoint
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{
    check_kind, check_keys, check_object, member, CheckContext, FieldSpec, JsonKind, ObjectSchema,
};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};

pub(crate) const PAYLOAD_KEYS: &[&str] =
    &["location", "address", "email", "phone", "socialNetworks"];

const ADDRESS_SCHEMA: ObjectSchema = ObjectSchema {
    label: "address keys",
    fields: &[
        FieldSpec {
            name: "name",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "street",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "city",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "state",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "zipcode",
            kind: JsonKind::String,
        },
    ],
};

const NETWORK_SCHEMA: ObjectSchema = ObjectSchema {
    label: "social network entry keys",
    fields: &[
        FieldSpec {
            name: "network",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "id",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "url",
            kind: JsonKind::String,
        },
    ],
};

pub(crate) fn validate(payload: &Map<String, Value>) -> ConformanceResult<()> {
    let ctx = CheckContext::root().child("payload");
    check_keys("contact-info payload keys", payload, PAYLOAD_KEYS)?;

    check_kind(&ctx.child("location"), member(payload, "location"), JsonKind::String)?;
    check_object(&ctx.child("address"), member(payload, "address"), &ADDRESS_SCHEMA)?;
    check_kind(&ctx.child("email"), member(payload, "email"), JsonKind::String)?;
    check_kind(&ctx.child("phone"), member(payload, "phone"), JsonKind::String)?;

    let list_ctx = ctx.child("socialNetworks");
    let list_value = member(payload, "socialNetworks");
    check_kind(&list_ctx, list_value, JsonKind::Array)?;

    let networks = list_value.as_array().map(Vec::as_slice).unwrap_or_default();
    for (index, network) in networks.iter().enumerate() {
        check_object(&list_ctx.child_index(index), network, &NETWORK_SCHEMA)?;
    }

    Ok(())
}

//! Payload schema and validator for the `our-work` endpoint
//!
//! Video entries mix flat string fields with a nested `roles` block, so
//! the element walk here is explicit rather than a single
//! [`check_object`] call.
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{
    check_count, check_kind, check_keys, check_object, expect_object, member, CheckContext,
    FieldSpec, JsonKind, ObjectSchema,
};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};

pub(crate) const PAYLOAD_KEYS: &[&str] = &["numVideos", "videoList"];

pub(crate) const VIDEO_KEYS: &[&str] = &[
    "type",
    "roles",
    "description",
    "url",
    "sUrl",
    "thumb",
    "frame",
    "title",
];

/// The production roles credited on every video.
pub(crate) const ROLES_SCHEMA: ObjectSchema = ObjectSchema {
    label: "roles keys",
    fields: &[
        FieldSpec {
            name: "director",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "dp",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "camera",
            kind: JsonKind::String,
        },
        FieldSpec {
            name: "editor",
            kind: JsonKind::String,
        },
    ],
};

pub(crate) fn validate(payload: &Map<String, Value>) -> ConformanceResult<()> {
    let ctx = CheckContext::root().child("payload");
    check_keys("our-work payload keys", payload, PAYLOAD_KEYS)?;

    let count_value = member(payload, "numVideos");
    check_kind(&ctx.child("numVideos"), count_value, JsonKind::Integer)?;

    let list_ctx = ctx.child("videoList");
    let list_value = member(payload, "videoList");
    check_kind(&list_ctx, list_value, JsonKind::Array)?;

    let videos = list_value.as_array().map(Vec::as_slice).unwrap_or_default();
    let declared = count_value.as_i64().unwrap_or_default();
    check_count("numVideos", "videoList", declared, videos.len())?;

    for (index, video) in videos.iter().enumerate() {
        let video_ctx = list_ctx.child_index(index);
        let entry = expect_object(&video_ctx, video)?;
        check_keys("video entry keys", entry, VIDEO_KEYS)?;

        for &key in VIDEO_KEYS {
            let field_ctx = video_ctx.child(key);
            let value = member(entry, key);
            if key == "roles" {
                check_object(&field_ctx, value, &ROLES_SCHEMA)?;
            } else {
                check_kind(&field_ctx, value, JsonKind::String)?;
            }
        }
    }

    Ok(())
}

//! Common reply-envelope validator
//!
//! Every API reply, regardless of endpoint, is wrapped in the same
//! three-block envelope: a `debug` diagnostics block, an `apiVersion`
//! block, and the endpoint-specific `payload`. This module validates the
//! envelope and hands the payload on to the endpoint validator.
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

use crate::check::{check_keys, expect_object, member, CheckContext};
use crate::error::ConformanceResult;
use serde_json::{Map, Value};
use tracing::debug;

/// Exact key-set of the reply envelope.
pub const ENVELOPE_KEYS: &[&str] = &["debug", "apiVersion", "payload"];

/// Exact key-set of the `debug` block. Values are not deeply typed here;
/// presence of the block with exactly these keys is the contract.
pub const DEBUG_KEYS: &[&str] = &[
    "query_string",
    "restAPIkeys",
    "parseOK",
    "traceMsgQ",
    "request_uri",
];

/// Exact key-set of the `apiVersion` block.
pub const VERSION_KEYS: &[&str] = &["apiDataVersion", "apiVersion", "apiName"];

/// Validate the envelope common to every reply and borrow the payload.
///
/// `api` is the request path the reply came from, used for trace lines
/// only. The payload's own key-set is the endpoint validator's job; here
/// it only has to be an object.
pub fn validate_envelope<'a>(
    reply: &'a Value,
    api: &str,
) -> ConformanceResult<&'a Map<String, Value>> {
    debug!(api, "validating common reply envelope");

    let ctx = CheckContext::root();
    let envelope = expect_object(&ctx, reply)?;
    check_keys("reply envelope keys", envelope, ENVELOPE_KEYS)?;

    let debug_block = expect_object(&ctx.child("debug"), member(envelope, "debug"))?;
    check_keys("debug block keys", debug_block, DEBUG_KEYS)?;

    let version_block = expect_object(&ctx.child("apiVersion"), member(envelope, "apiVersion"))?;
    check_keys("apiVersion block keys", version_block, VERSION_KEYS)?;

    expect_object(&ctx.child("payload"), member(envelope, "payload"))
}

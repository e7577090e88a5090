//! Schema definitions and conformance validators for the studio content API
//!
//! This crate holds the pure validation layer of kinocheck: the JSON kind
//! and key-set checker, the common reply-envelope validator, and one
//! payload validator per API endpoint. Every schema is expressed as data
//! (key-set constants and [`ObjectSchema`] field tables) consumed by the
//! generic checker, so the endpoint modules stay declarative.
//!
//! No I/O happens here; callers hand in an already-decoded
//! [`serde_json::Value`] and get back `Ok(())` or the first
//! [`ConformanceError`] found.
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

pub mod check;
pub mod endpoints;
pub mod envelope;
pub mod error;

// Re-export commonly used types
pub use check::{
    check_count, check_keys, check_kind, check_object, CheckContext, FieldSpec, JsonKind,
    ObjectSchema,
};
pub use endpoints::Endpoint;
pub use envelope::validate_envelope;
pub use error::{ConformanceError, ConformanceResult};

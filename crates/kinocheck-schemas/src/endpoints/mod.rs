//! Endpoint identifiers and payload validator dispatch
//!
//! The five content endpoints are a closed set, so they are modelled as a
//! fieldless enum and dispatched by exhaustive match rather than by name
//! lookup. Each variant knows its selector name, the GET path variants
//! checked for it, and which payload validator applies.
//!
//! Copyright (c) 2026 Kinocheck Team
//! Licensed under the Apache-2.0 license

mod about_us;
mod contact_info;
mod our_work;
mod reels;
mod versions;

use crate::error::ConformanceResult;
use serde_json::{Map, Value};
use std::fmt;
use tracing::debug;

/// One of the five content API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Reels,
    AboutUs,
    ContactInfo,
    OurWork,
    Versions,
}

impl Endpoint {
    /// Every endpoint, in the order a full run checks them.
    pub const ALL: [Endpoint; 5] = [
        Endpoint::Reels,
        Endpoint::AboutUs,
        Endpoint::ContactInfo,
        Endpoint::OurWork,
        Endpoint::Versions,
    ];

    /// Selector and display name.
    pub fn name(self) -> &'static str {
        match self {
            Endpoint::Reels => "reels",
            Endpoint::AboutUs => "about-us",
            Endpoint::ContactInfo => "contact-info",
            Endpoint::OurWork => "our-work",
            Endpoint::Versions => "versions",
        }
    }

    /// The GET path variants checked for this endpoint, index and detail
    /// forms included.
    pub fn path_variants(self) -> &'static [&'static str] {
        match self {
            Endpoint::Reels => &["reels/", "reels/0"],
            Endpoint::AboutUs => &["about-us/"],
            Endpoint::ContactInfo => &["contact-info/"],
            Endpoint::OurWork => &["our-work/", "our-work/3/"],
            Endpoint::Versions => &["versions/", "versions/reels/"],
        }
    }

    /// Resolve a CLI selector to an endpoint, if it names one.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "reels" => Some(Endpoint::Reels),
            "about-us" => Some(Endpoint::AboutUs),
            "contact-info" => Some(Endpoint::ContactInfo),
            "our-work" => Some(Endpoint::OurWork),
            "versions" => Some(Endpoint::Versions),
            _ => None,
        }
    }

    /// Validate an already-unwrapped payload against this endpoint's
    /// schema. Fails on the first violation found.
    pub fn validate_payload(self, payload: &Map<String, Value>) -> ConformanceResult<()> {
        debug!(endpoint = self.name(), "validating endpoint payload");
        match self {
            Endpoint::Reels => reels::validate(payload),
            Endpoint::AboutUs => about_us::validate(payload),
            Endpoint::ContactInfo => contact_info::validate(payload),
            Endpoint::OurWork => our_work::validate(payload),
            Endpoint::Versions => versions::validate(payload),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

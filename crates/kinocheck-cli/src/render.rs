//! Human rendering of validated payloads
//!
//! Renderers run only on payloads the validators accepted, so field
//! access is total: an absent or mistyped field renders as empty instead
//! of panicking.

use kinocheck_schemas::Endpoint;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Delimiter printed between endpoint runs.
pub const RUN_DELIMITER: &str = "------------------------";

/// Credit order for the our-work roles block.
const ROLE_ORDER: &[&str] = &["director", "dp", "camera", "editor"];

fn text<'a>(object: &'a Map<String, Value>, key: &str) -> &'a str {
    object.get(key).and_then(Value::as_str).unwrap_or_default()
}

fn integer(object: &Map<String, Value>, key: &str) -> i64 {
    object.get(key).and_then(Value::as_i64).unwrap_or_default()
}

fn entries<'a>(object: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    object
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn block<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    object.get(key).and_then(Value::as_object)
}

/// First `limit` characters of a longer text.
fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Render a validated payload the way the original checker printed it.
pub fn render_payload(endpoint: Endpoint, payload: &Map<String, Value>) -> String {
    match endpoint {
        Endpoint::Reels => render_reels(payload),
        Endpoint::AboutUs => render_about_us(payload),
        Endpoint::ContactInfo => render_contact_info(payload),
        Endpoint::OurWork => render_our_work(payload),
        Endpoint::Versions => render_versions(payload),
    }
}

fn render_reels(payload: &Map<String, Value>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "numReels: {}", integer(payload, "numReels"));
    for reel in entries(payload, "reelList") {
        if let Some(reel) = reel.as_object() {
            let _ = writeln!(out, "{} available at {}", text(reel, "title"), text(reel, "url"));
        }
    }
    out.trim_end().to_string()
}

fn render_about_us(payload: &Map<String, Value>) -> String {
    format!("{}... [more]", excerpt(text(payload, "aboutus"), 80))
}

fn render_contact_info(payload: &Map<String, Value>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Location: {}", text(payload, "location"));
    let _ = writeln!(out, "   Email: {}", text(payload, "email"));
    let _ = writeln!(out, "   Phone: {}", text(payload, "phone"));
    if let Some(address) = block(payload, "address") {
        let _ = writeln!(
            out,
            " Address: {},{},{},{} {}",
            text(address, "name"),
            text(address, "street"),
            text(address, "city"),
            text(address, "state"),
            text(address, "zipcode"),
        );
    }
    for (index, network) in entries(payload, "socialNetworks").iter().enumerate() {
        if let Some(network) = network.as_object() {
            let _ = writeln!(
                out,
                "socialNetwork[{index}] {{name:{}, id:{}, url:{}}}",
                text(network, "network"),
                text(network, "id"),
                text(network, "url"),
            );
        }
    }
    out.trim_end().to_string()
}

fn render_our_work(payload: &Map<String, Value>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "numVideos: {}", integer(payload, "numVideos"));
    for (index, video) in entries(payload, "videoList").iter().enumerate() {
        if let Some(video) = video.as_object() {
            let _ = writeln!(out, "videoList[{index}] detailed video information:");
            let _ = writeln!(out, "        type: {}", text(video, "type"));
            if let Some(roles) = block(video, "roles") {
                // uncredited roles are skipped, not printed empty
                for &role in ROLE_ORDER {
                    let credit = text(roles, role);
                    if !credit.is_empty() {
                        let _ = writeln!(out, "{role:>12.12}: {credit}");
                    }
                }
            }
            let _ = writeln!(
                out,
                " description: {} ... [more]",
                excerpt(text(video, "description"), 80)
            );
            let _ = writeln!(out, "       title: {}", text(video, "title"));
            let _ = writeln!(out, "         url: {}", text(video, "url"));
            let _ = writeln!(out, "        sUrl: {}", text(video, "sUrl"));
            let _ = writeln!(out, "       thumb: {}", text(video, "thumb"));
            let _ = writeln!(out, "       frame: {}", text(video, "frame"));
        }
    }
    out.trim_end().to_string()
}

fn render_versions(payload: &Map<String, Value>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "numApis: {}", integer(payload, "numApis"));
    for (index, api) in entries(payload, "apiList").iter().enumerate() {
        if let Some(api) = api.as_object() {
            let _ = writeln!(
                out,
                "apiList[{index}] {{apiName:{}, apiVersion:{}, apiDataVersion:{}}}",
                text(api, "apiName"),
                text(api, "apiVersion"),
                text(api, "apiDataVersion"),
            );
        }
    }
    out.trim_end().to_string()
}

//! Conformance tests for the common reply envelope
//!
//! Exercises the envelope contract every endpoint reply shares: exact
//! three-key envelope, exact debug and apiVersion block key-sets, and an
//! object payload.

use kinocheck_schemas::envelope::{DEBUG_KEYS, ENVELOPE_KEYS, VERSION_KEYS};
use kinocheck_schemas::{validate_envelope, ConformanceError, JsonKind};
use serde_json::{json, Value};

fn reply(payload: Value) -> Value {
    json!({
        "debug": {
            "query_string": "",
            "restAPIkeys": "['reelList', 'numReels']",
            "parseOK": true,
            "traceMsgQ": ["parsed request uri"],
            "request_uri": "/reels/",
        },
        "apiVersion": {
            "apiDataVersion": "1.2",
            "apiVersion": "1.0",
            "apiName": "reels",
        },
        "payload": payload,
    })
}

mod well_formed_replies {
    use super::*;

    #[test]
    fn test_valid_envelope_yields_payload() {
        let value = reply(json!({"aboutus": "A small studio."}));
        let payload = validate_envelope(&value, "about-us/").unwrap();
        assert_eq!(payload.len(), 1);
        assert!(payload.contains_key("aboutus"));
    }

    #[test]
    fn test_envelope_key_order_is_irrelevant() {
        // serde_json maps are keyed, not ordered; spelling the envelope in
        // a different order must validate identically
        let value = json!({
            "payload": {"aboutus": "x"},
            "apiVersion": {"apiDataVersion": "1", "apiVersion": "1", "apiName": "about-us"},
            "debug": {
                "query_string": "", "restAPIkeys": "", "parseOK": false,
                "traceMsgQ": [], "request_uri": "/about-us/",
            },
        });
        assert!(validate_envelope(&value, "about-us/").is_ok());
    }
}

mod missing_keys {
    use super::*;

    #[test]
    fn test_each_missing_envelope_key_is_named() {
        for key in ENVELOPE_KEYS {
            let mut value = reply(json!({}));
            value.as_object_mut().unwrap().remove(*key);

            let err = validate_envelope(&value, "reels/").unwrap_err();
            assert_eq!(
                err,
                ConformanceError::MissingKey {
                    key_set: "reply envelope keys".to_string(),
                    key: (*key).to_string(),
                },
                "removing envelope key {key} must fail naming that key"
            );
        }
    }

    #[test]
    fn test_missing_api_version_block() {
        // Scenario: envelope without its apiVersion block
        let mut value = reply(json!({}));
        value.as_object_mut().unwrap().remove("apiVersion");

        let err = validate_envelope(&value, "versions/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::MissingKey {
                key_set: "reply envelope keys".to_string(),
                key: "apiVersion".to_string(),
            }
        );
    }

    #[test]
    fn test_each_missing_debug_key_is_named() {
        for key in DEBUG_KEYS {
            let mut value = reply(json!({}));
            value["debug"].as_object_mut().unwrap().remove(*key);

            let err = validate_envelope(&value, "reels/").unwrap_err();
            assert_eq!(
                err,
                ConformanceError::MissingKey {
                    key_set: "debug block keys".to_string(),
                    key: (*key).to_string(),
                }
            );
        }
    }

    #[test]
    fn test_each_missing_version_key_is_named() {
        for key in VERSION_KEYS {
            let mut value = reply(json!({}));
            value["apiVersion"].as_object_mut().unwrap().remove(*key);

            let err = validate_envelope(&value, "reels/").unwrap_err();
            assert_eq!(
                err,
                ConformanceError::MissingKey {
                    key_set: "apiVersion block keys".to_string(),
                    key: (*key).to_string(),
                }
            );
        }
    }
}

mod unexpected_keys {
    use super::*;

    #[test]
    fn test_extra_envelope_key_is_rejected() {
        let mut value = reply(json!({}));
        value
            .as_object_mut()
            .unwrap()
            .insert("extra".to_string(), json!(1));

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::UnexpectedKey {
                key_set: "reply envelope keys".to_string(),
                key: "extra".to_string(),
            }
        );
    }

    #[test]
    fn test_extra_debug_key_is_rejected() {
        let mut value = reply(json!({}));
        value["debug"]
            .as_object_mut()
            .unwrap()
            .insert("verbose".to_string(), json!(true));

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::UnexpectedKey {
                key_set: "debug block keys".to_string(),
                key: "verbose".to_string(),
            }
        );
    }

    #[test]
    fn test_extra_version_key_is_rejected() {
        let mut value = reply(json!({}));
        value["apiVersion"]
            .as_object_mut()
            .unwrap()
            .insert("build".to_string(), json!("abc"));

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::UnexpectedKey {
                key_set: "apiVersion block keys".to_string(),
                key: "build".to_string(),
            }
        );
    }
}

mod wrong_kinds {
    use super::*;

    #[test]
    fn test_reply_must_be_an_object() {
        for value in [json!("reply"), json!(7), json!([1, 2, 3]), json!(null)] {
            let err = validate_envelope(&value, "reels/").unwrap_err();
            assert!(matches!(
                err,
                ConformanceError::TypeMismatch {
                    ref path,
                    expected: JsonKind::Object,
                    ..
                } if path == "$"
            ));
        }
    }

    #[test]
    fn test_debug_block_must_be_an_object() {
        let mut value = reply(json!({}));
        value["debug"] = json!("diagnostics");

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::TypeMismatch {
                path: "$.debug".to_string(),
                expected: JsonKind::Object,
                actual: JsonKind::String,
            }
        );
    }

    #[test]
    fn test_version_block_must_be_an_object() {
        let mut value = reply(json!({}));
        value["apiVersion"] = json!(["1.0"]);

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::TypeMismatch {
                path: "$.apiVersion".to_string(),
                expected: JsonKind::Object,
                actual: JsonKind::Array,
            }
        );
    }

    #[test]
    fn test_payload_must_be_an_object() {
        let mut value = reply(json!({}));
        value["payload"] = json!(42);

        let err = validate_envelope(&value, "reels/").unwrap_err();
        assert_eq!(
            err,
            ConformanceError::TypeMismatch {
                path: "$.payload".to_string(),
                expected: JsonKind::Object,
                actual: JsonKind::Integer,
            }
        );
    }
}

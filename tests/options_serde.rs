#![cfg(feature = "serde")]

use ipv6_text::ParseOptions;

#[test]
fn should_deserialize_options_with_defaults() {
    let options: ParseOptions = serde_json::from_str("{}").expect("to deserialize");
    assert_eq!(options, ParseOptions::DEFAULT);

    let options: ParseOptions = serde_json::from_str(r#"{"allow_zone_index": true}"#).expect("to deserialize");
    assert!(options.allows_zone_index());
    assert!(options.allows_surrounding_whitespace());

    let options: ParseOptions = serde_json::from_str(r#"{"allow_surrounding_whitespace": false}"#).expect("to deserialize");
    assert_eq!(options, ParseOptions::STRICT);
}

#[test]
fn should_serialize_options() {
    let text = serde_json::to_string(&ParseOptions::DEFAULT).expect("to serialize");
    assert_eq!(text, r#"{"allow_surrounding_whitespace":true,"allow_zone_index":false}"#);
}

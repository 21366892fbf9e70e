use keyed_json::{Error, KeyedCodec, Shape, Strategy, UnknownKeyPolicy};

fn codecs(policy: UnknownKeyPolicy) -> Vec<KeyedCodec<Shape>> {
    [Strategy::Tagged, Strategy::Shadow]
        .into_iter()
        .map(|strategy| {
            KeyedCodec::builder()
                .strategy(strategy)
                .on_unknown_key(policy)
                .build()
                .unwrap()
        })
        .collect()
}

fn decode_all(policy: UnknownKeyPolicy, input: &[u8]) -> Vec<Result<usize, Error>> {
    codecs(policy)
        .iter()
        .map(|c| c.decode(input).map(|m| m.len()))
        .collect()
}

fn assert_all_fail(input: &[u8], expected: Error) {
    for policy in [UnknownKeyPolicy::Reject, UnknownKeyPolicy::Skip] {
        for result in decode_all(policy, input) {
            assert_eq!(result, Err(expected.clone()));
        }
    }
}

// ---- unknown keys -----------------------------------------------------------

#[test]
fn unknown_key_rejected_by_default() {
    let input = br#"{"objects": {"NotARealShape": [1, 2, 3]}}"#;
    for result in decode_all(UnknownKeyPolicy::Reject, input) {
        assert_eq!(result, Err(Error::UnknownKey("NotARealShape".into())));
    }
    assert_eq!(
        KeyedCodec::<Shape>::new().decode(input),
        Err(Error::UnknownKey("NotARealShape".into()))
    );
}

#[test]
fn unknown_key_skipped_on_request() {
    let input = br#"{"objects": {"NotARealShape": [1, 2, 3]}}"#;
    for result in decode_all(UnknownKeyPolicy::Skip, input) {
        assert_eq!(result, Ok(0));
    }
}

#[test]
fn skip_keeps_known_entries() {
    let input = br#"{"objects": {"Circle": [1], "Blob": [2], "Line": []}}"#;
    for c in codecs(UnknownKeyPolicy::Skip) {
        let map = c.decode(input).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Shape::Circle], vec![1]);
        assert!(map[&Shape::Line].is_empty());
    }
}

#[test]
fn labels_are_case_sensitive() {
    let input = br#"{"objects": {"circle": [1]}}"#;
    for result in decode_all(UnknownKeyPolicy::Reject, input) {
        assert_eq!(result, Err(Error::UnknownKey("circle".into())));
    }
}

#[test]
fn skip_still_validates_values() {
    let input = br#"{"objects": {"Blob": [1.5]}}"#;
    for result in decode_all(UnknownKeyPolicy::Skip, input) {
        assert_eq!(result, Err(Error::InvalidValueShape("Blob".into())));
    }
}

// ---- shape mismatches -------------------------------------------------------

#[test]
fn alternating_array_is_a_shape_mismatch() {
    assert_all_fail(
        br#"{"objects": ["Circle", [1, 2, 3]]}"#,
        Error::SchemaShapeMismatch {
            field: "objects".into(),
            found: "array",
        },
    );
}

#[test]
fn scalar_field_is_a_shape_mismatch() {
    assert_all_fail(
        br#"{"objects": "Circle"}"#,
        Error::SchemaShapeMismatch {
            field: "objects".into(),
            found: "string",
        },
    );
    assert_all_fail(
        br#"{"objects": 3}"#,
        Error::SchemaShapeMismatch {
            field: "objects".into(),
            found: "number",
        },
    );
    assert_all_fail(
        br#"{"objects": null}"#,
        Error::SchemaShapeMismatch {
            field: "objects".into(),
            found: "null",
        },
    );
}

#[test]
fn top_level_must_be_an_object() {
    assert_all_fail(
        br#"[{"objects": {}}]"#,
        Error::SchemaShapeMismatch {
            field: "$".into(),
            found: "array",
        },
    );
}

#[test]
fn missing_field() {
    assert_all_fail(br#"{"things": {}}"#, Error::MissingField("objects".into()));
}

// ---- values -----------------------------------------------------------------

#[test]
fn fractional_value_is_invalid() {
    assert_all_fail(
        br#"{"objects": {"Circle": [1, 2.5, 3]}}"#,
        Error::InvalidValueShape("Circle".into()),
    );
}

#[test]
fn non_array_value_is_invalid() {
    assert_all_fail(
        br#"{"objects": {"Line": 4}}"#,
        Error::InvalidValueShape("Line".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Line": {"0": 4}}}"#,
        Error::InvalidValueShape("Line".into()),
    );
}

#[test]
fn non_number_element_is_invalid() {
    assert_all_fail(
        br#"{"objects": {"Square": [1, "2"]}}"#,
        Error::InvalidValueShape("Square".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Square": [[1]]}}"#,
        Error::InvalidValueShape("Square".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Square": [null]}}"#,
        Error::InvalidValueShape("Square".into()),
    );
}

#[test]
fn out_of_range_integer_is_invalid() {
    assert_all_fail(
        br#"{"objects": {"Hexagon": [18446744073709551615]}}"#,
        Error::InvalidValueShape("Hexagon".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Hexagon": [9223372036854775808]}}"#,
        Error::InvalidValueShape("Hexagon".into()),
    );
}

#[test]
fn negative_overflow_is_invalid() {
    assert_all_fail(
        br#"{"objects": {"Circle": [-9223372036854775809]}}"#,
        Error::InvalidValueShape("Circle".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Circle": [-1e19]}}"#,
        Error::InvalidValueShape("Circle".into()),
    );
}

#[test]
fn i64_min_literal_still_decodes() {
    for c in codecs(UnknownKeyPolicy::Reject) {
        let map = c
            .decode(br#"{"objects": {"Circle": [-9223372036854775808]}}"#)
            .unwrap();
        assert_eq!(map[&Shape::Circle], vec![i64::MIN]);
    }
}

#[test]
fn huge_exponent_is_invalid_not_malformed() {
    assert_all_fail(
        br#"{"objects": {"Circle": [1e400]}}"#,
        Error::InvalidValueShape("Circle".into()),
    );
    assert_all_fail(
        br#"{"objects": {"Line": [-1e400]}}"#,
        Error::InvalidValueShape("Line".into()),
    );
}

// ---- malformed input --------------------------------------------------------

#[test]
fn malformed_json() {
    let inputs: [&[u8]; 4] = [b"{", b"", b"{\"objects\": {\"Circle\": [1,]}}", b"\xff\xfe"];
    for input in inputs {
        for result in decode_all(UnknownKeyPolicy::Reject, input) {
            assert!(matches!(result, Err(Error::MalformedJson(_))), "{result:?}");
        }
    }
}

// ---- diagnostics ------------------------------------------------------------

#[test]
fn error_messages_name_the_offender() {
    assert_eq!(
        Error::UnknownKey("Blob".into()).to_string(),
        "unknown key `Blob`"
    );
    assert_eq!(
        Error::InvalidValueShape("Circle".into()).to_string(),
        "value for `Circle` must be an array of integers"
    );
    assert_eq!(
        Error::SchemaShapeMismatch {
            field: "objects".into(),
            found: "array"
        }
        .to_string(),
        "field `objects` must be a JSON object, found array"
    );
    assert_eq!(
        Error::MissingField("objects".into()).to_string(),
        "missing field `objects`"
    );
}

#[test]
fn serde_json_errors_are_classified() {
    let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert!(matches!(Error::from(syntax), Error::MalformedJson(_)));
    let data = serde_json::from_str::<u8>("\"x\"").unwrap_err();
    assert!(matches!(Error::from(data), Error::Deserialize(_)));
}

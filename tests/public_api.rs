use jsonmend::{Options, RepairError, RepairErrorKind, repair_to_string, repair_to_string_with_log};

#[test]
fn repairs_llm_style_output() {
    let opts = Options::default();
    let s = "{'name': 'Widget', 'tags': ['a' 'b'], 'count': 3,";
    let out = repair_to_string(s, &opts).unwrap();
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["name"], "Widget");
    assert_eq!(v["tags"], serde_json::json!(["a", "b"]));
    assert_eq!(v["count"], 3);
}

#[test]
fn valid_input_round_trips_unchanged() {
    let opts = Options::default();
    let s = r#"{"a": [1, 2.5, "x"], "b": null}"#;
    assert_eq!(repair_to_string(s, &opts).unwrap(), s);
}

#[test]
fn errors_carry_offsets() {
    let opts = Options::default();
    let err = repair_to_string("{:1}", &opts).unwrap_err();
    assert_eq!(err, RepairError::new(RepairErrorKind::ObjectKeyExpected, 1));
    assert_eq!(err.to_string(), "Object key expected at position 1");
}

#[test]
fn repair_log_round_trip() {
    let opts = Options {
        logging: true,
        ..Options::default()
    };
    let (out, log) = repair_to_string_with_log("[1 2]", &opts).unwrap();
    assert_eq!(out, "[1, 2]");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].message, "inserted missing comma");
}

#[cfg(feature = "serde")]
#[test]
fn repair_to_value_parses_repaired_output() {
    let opts = Options::default();
    let v = jsonmend::repair_to_value("{a: [1, tiger,]}", &opts).unwrap();
    assert_eq!(v["a"], serde_json::json!([1, "tiger"]));
}

#[test]
fn concurrent_sessions_share_nothing() {
    let opts = Options::default();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let opts = opts.clone();
            std::thread::spawn(move || {
                let s = format!("{{k{i}: {i},");
                repair_to_string(&s, &opts).unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let out = h.join().unwrap();
        assert_eq!(out, format!("{{\"k{i}\": {i}}}"));
    }
}

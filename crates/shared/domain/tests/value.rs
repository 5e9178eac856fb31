use symattr_domain::value::{EnumValue, RawValue};

#[test]
fn text_and_symbol_inputs_compare_equal_after_conversion() {
    assert_eq!(EnumValue::from("active"), EnumValue::sym("active"));
    assert_ne!(EnumValue::sym("true"), EnumValue::Bool(true));
}

#[test]
fn quoted_literal_escapes_embedded_quotes() {
    assert_eq!(EnumValue::sym("active").quoted_literal(), "'active'");
    assert_eq!(EnumValue::sym("weird'; chars").quoted_literal(), "'weird''; chars'");
    assert_eq!(EnumValue::Bool(true).quoted_literal(), "true");
}

#[test]
fn textual_forms() {
    assert_eq!(EnumValue::sym("linux").as_text(), "linux");
    assert_eq!(EnumValue::Bool(false).as_text(), "false");
    assert_eq!(EnumValue::Bool(true).to_string(), "true");
}

#[test]
fn raw_value_blankness() {
    assert!(RawValue::Null.is_null());
    assert!(RawValue::from("").is_blank());
    assert!(!RawValue::from("x").is_blank());
    assert!(!RawValue::Null.is_blank());
    assert!(!RawValue::sym("").is_null());
}

#[test]
fn raw_value_conversions() {
    assert_eq!(RawValue::from("active"), RawValue::Text("active".to_owned()));
    assert_eq!(RawValue::from(43_i64), RawValue::Int(43));
    assert_eq!(RawValue::from(Option::<bool>::None), RawValue::Null);
    assert_eq!(RawValue::from(Some(true)), RawValue::Bool(true));
    assert_eq!(RawValue::from(EnumValue::sym("qt")), RawValue::Sym("qt".to_owned()));
}

#[test]
fn enum_value_serde_shape() {
    let json = serde_json::to_string(&vec![EnumValue::sym("pt"), EnumValue::Bool(true)])
        .expect("serialize values");
    assert_eq!(json, r#"["pt",true]"#);

    let back: Vec<EnumValue> = serde_json::from_str(&json).expect("deserialize values");
    assert_eq!(back, vec![EnumValue::sym("pt"), EnumValue::Bool(true)]);
}

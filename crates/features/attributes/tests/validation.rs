use symattr_attributes::registry::AttrRegistry;
use symattr_attributes::validate::{ViolationKind, validate};
use symattr_domain::definition::EnumDef;
use symattr_domain::value::RawValue;

#[test]
fn nil_canonical_without_flags_yields_exactly_one_failure() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("status").values(["active", "inactive"]))
        .unwrap();

    let mut user = registry.record("User");
    user.write("status", RawValue::Null).unwrap();

    let violations = validate(&user);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].attribute, "status");
    assert_eq!(violations[0].kind, ViolationKind::InvalidEnumerationValue);
}

#[test]
fn valid_value_passes() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("status").values(["active", "inactive"]))
        .unwrap();

    let mut user = registry.record("User");
    user.write("status", "active").unwrap();
    assert!(validate(&user).is_empty());
}

#[test]
fn allow_nil_suppresses_nil_but_not_blank() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("karma").values(["good", "bad", "ugly"]).allow_nil(true),
        )
        .unwrap();

    let mut user = registry.record("User");
    user.write("karma", RawValue::Null).unwrap();
    assert!(validate(&user).is_empty());

    user.write("karma", "").unwrap();
    assert_eq!(validate(&user).len(), 1);
}

#[test]
fn allow_blank_suppresses_blank_but_not_nil() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("so")
                .labeled([("linux", "Linux"), ("mac", "Mac OS X"), ("win", "Videogame")])
                .allow_blank(true),
        )
        .unwrap();

    let mut user = registry.record("User");
    user.write("so", "").unwrap();
    assert!(validate(&user).is_empty());

    user.write("so", RawValue::Null).unwrap();
    assert_eq!(validate(&user).len(), 1);
}

#[test]
fn never_written_counts_as_nil() {
    let registry = AttrRegistry::new();
    registry.register("User", EnumDef::new("language").values(["pt", "en"])).unwrap();
    registry
        .register("User", EnumDef::new("karma").values(["good", "bad"]).allow_nil(true))
        .unwrap();

    let user = registry.record("User");
    let violations = validate(&user);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].attribute, "language");
}

#[test]
fn rejected_values_fail_even_with_both_flags() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("status")
                .values(["active", "inactive"])
                .allow_blank(true)
                .allow_nil(true),
        )
        .unwrap();

    let mut user = registry.record("User");
    user.write("status", "bogus").unwrap();
    assert_eq!(validate(&user).len(), 1);

    user.write("status", 43_i64).unwrap();
    assert_eq!(validate(&user).len(), 1);
}

#[test]
fn open_enumerations_are_never_validated() {
    let registry = AttrRegistry::new();
    registry.register("User", EnumDef::new("other")).unwrap();

    let mut user = registry.record("User");
    assert!(validate(&user).is_empty());

    user.write("other", RawValue::Null).unwrap();
    assert!(validate(&user).is_empty());

    user.write("other", "").unwrap();
    assert!(validate(&user).is_empty());
}

#[test]
fn failures_accumulate_per_attribute() {
    let registry = AttrRegistry::new();
    registry.register("User", EnumDef::new("status").values(["active", "inactive"])).unwrap();
    registry.register("User", EnumDef::new("language").values(["pt", "en"])).unwrap();

    let user = registry.record("User");
    let violations = validate(&user);
    assert_eq!(violations.len(), 2);

    let attrs: Vec<&str> = violations.iter().map(|v| v.attribute.as_str()).collect();
    assert_eq!(attrs, ["status", "language"]);
}

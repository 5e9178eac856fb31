use serde_json::json;
use symattr_attributes::registry::AttrRegistry;
use symattr_domain::definition::EnumDef;
use symattr_domain::value::EnumValue;
use symattr_i18n::{NoTranslations, StaticCatalog};

fn catalog() -> StaticCatalog {
    StaticCatalog::from_json(&json!({
        "user": {
            "language": { "pt": "Português", "en": "Inglês" },
            "sex": { "true": "Feminino", "false": "Masculino" }
        },
        "user_skill": {
            "kind": { "magic": "Mágica" }
        }
    }))
}

#[test]
fn capitalized_labels_without_i18n() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("status").values(["active", "inactive"]).i18n(false).capitalize(true),
        )
        .unwrap();

    let pairs = registry.values_with_labels("User", "status", &NoTranslations).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("Active".to_owned(), EnumValue::sym("active")),
            ("Inactive".to_owned(), EnumValue::sym("inactive")),
        ]
    );

    let map = registry.value_label_map("User", "status", &NoTranslations).unwrap();
    assert_eq!(map.get(&EnumValue::sym("active")).map(String::as_str), Some("Active"));
    assert_eq!(map.get(&EnumValue::sym("inactive")).map(String::as_str), Some("Inactive"));
}

#[test]
fn plain_labels_without_i18n_or_capitalize() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("gui").values(["cocoa", "qt", "gtk"]).i18n(false))
        .unwrap();

    let pairs = registry.values_with_labels("User", "gui", &NoTranslations).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("cocoa".to_owned(), EnumValue::sym("cocoa")),
            ("qt".to_owned(), EnumValue::sym("qt")),
            ("gtk".to_owned(), EnumValue::sym("gtk")),
        ]
    );
}

#[test]
fn explicit_labels_win_and_keep_declared_order() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("so").labeled([
                ("linux", "Linux"),
                ("mac", "Mac OS X"),
                ("win", "Videogame"),
            ]),
        )
        .unwrap();

    // Explicit labels win even though i18n is on and the catalog is empty.
    let pairs = registry.values_with_labels("User", "so", &NoTranslations).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("Linux".to_owned(), EnumValue::sym("linux")),
            ("Mac OS X".to_owned(), EnumValue::sym("mac")),
            ("Videogame".to_owned(), EnumValue::sym("win")),
        ]
    );
}

#[test]
fn i18n_labels_resolve_through_the_catalog() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("language").values(["pt", "en"]))
        .unwrap();

    let pairs = registry.values_with_labels("User", "language", &catalog()).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("Português".to_owned(), EnumValue::sym("pt")),
            ("Inglês".to_owned(), EnumValue::sym("en")),
        ]
    );
}

#[test]
fn boolean_domains_translate_their_two_values() {
    let registry = AttrRegistry::new();
    registry.register("User", EnumDef::new("sex").values([true, false])).unwrap();

    let pairs = registry.values_with_labels("User", "sex", &catalog()).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("Feminino".to_owned(), EnumValue::Bool(true)),
            ("Masculino".to_owned(), EnumValue::Bool(false)),
        ]
    );

    let map = registry.value_label_map("User", "sex", &catalog()).unwrap();
    assert_eq!(map.get(&EnumValue::Bool(false)).map(String::as_str), Some("Masculino"));
}

#[test]
fn disabling_i18n_falls_back_to_the_textual_form() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("language").values(["pt", "en"]).i18n(false))
        .unwrap();

    // Catalog entries exist but the flag is off.
    let pairs = registry.values_with_labels("User", "language", &catalog()).unwrap();
    assert_eq!(
        pairs,
        vec![
            ("pt".to_owned(), EnumValue::sym("pt")),
            ("en".to_owned(), EnumValue::sym("en")),
        ]
    );
}

#[test]
fn metadata_is_memoized_after_the_first_resolution() {
    let registry = AttrRegistry::new();
    registry
        .register("User", EnumDef::new("language").values(["pt", "en"]))
        .unwrap();

    let first = registry.values_with_labels("User", "language", &catalog()).unwrap();
    // Second call with a different translator still serves the cached labels.
    let second = registry.values_with_labels("User", "language", &NoTranslations).unwrap();
    assert_eq!(first, second);
    assert_eq!(second[0].0, "Português");
}

#[test]
fn record_labels_follow_the_same_chain() {
    let registry = AttrRegistry::new();
    registry
        .register(
            "User",
            EnumDef::new("status").values(["active", "inactive"]).i18n(false).capitalize(true),
        )
        .unwrap();
    registry
        .register(
            "User",
            EnumDef::new("so").labeled([("linux", "Linux"), ("mac", "Mac OS X")]),
        )
        .unwrap();
    registry.register("User", EnumDef::new("language").values(["pt", "en"])).unwrap();
    registry.register("User", EnumDef::new("other")).unwrap();

    let mut user = registry.record("User");
    user.write("status", "active").unwrap();
    user.write("so", "linux").unwrap();
    user.write("language", "pt").unwrap();
    user.write("other", "fo").unwrap();

    let catalog = catalog();
    assert_eq!(user.label("status", &catalog).unwrap().as_deref(), Some("Active"));
    assert_eq!(user.label("so", &catalog).unwrap().as_deref(), Some("Linux"));
    assert_eq!(user.label("language", &catalog).unwrap().as_deref(), Some("Português"));
    // Open enumerations stringify their current value.
    assert_eq!(user.label("other", &catalog).unwrap().as_deref(), Some("fo"));

    user.write("so", "mac").unwrap();
    assert_eq!(user.label("so", &catalog).unwrap().as_deref(), Some("Mac OS X"));

    // No canonical value, no label.
    user.write("status", "").unwrap();
    assert_eq!(user.label("status", &catalog).unwrap(), None);
}

#[test]
fn multiword_entity_types_use_snake_cased_catalog_keys() {
    let registry = AttrRegistry::new();
    registry
        .register("UserSkill", EnumDef::new("kind").values(["agility", "magic"]))
        .unwrap();

    let mut skill = registry.record("UserSkill");
    skill.write("kind", "magic").unwrap();
    assert_eq!(skill.label("kind", &catalog()).unwrap().as_deref(), Some("Mágica"));
}

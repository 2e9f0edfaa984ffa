use super::*;

// =============================================================
// Variant
// =============================================================

#[test]
fn variant_default_is_default() {
    assert_eq!(Variant::default(), Variant::Default);
    assert_eq!(Variant::default().as_str(), "default");
}

#[test]
fn variant_parses_case_insensitively() {
    assert_eq!("danger".parse::<Variant>(), Ok(Variant::Danger));
    assert_eq!(" Primary ".parse::<Variant>(), Ok(Variant::Primary));
    assert_eq!("SECONDARY".parse::<Variant>(), Ok(Variant::Secondary));
}

#[test]
fn variant_rejects_unknown_names() {
    assert_eq!(
        "warning".parse::<Variant>(),
        Err(ParseThemeError::UnknownVariant("warning".to_owned()))
    );
}

#[test]
fn variant_serde_uses_lowercase_names() {
    let json = serde_json::to_string(&Variant::Secondary).expect("variant should serialize");
    assert_eq!(json, "\"secondary\"");
    let parsed: Variant = serde_json::from_str("\"danger\"").expect("variant should deserialize");
    assert_eq!(parsed, Variant::Danger);
}

#[test]
fn variant_display_matches_as_str() {
    for variant in Variant::ALL {
        assert_eq!(variant.to_string(), variant.as_str());
    }
}

// =============================================================
// TitleColor
// =============================================================

#[test]
fn title_color_theme_class_is_prefixed() {
    assert_eq!(TitleColor::Yellow.theme_class(), "theme-yellow");
    assert_eq!(TitleColor::Purple.theme_class(), "theme-purple");
}

#[test]
fn title_color_parses_all_five_themes() {
    for color in TitleColor::ALL {
        assert_eq!(color.as_str().parse::<TitleColor>(), Ok(color));
    }
    assert!(matches!("orange".parse::<TitleColor>(), Err(ParseThemeError::UnknownTitleColor(_))));
}

// =============================================================
// class_list
// =============================================================

#[test]
fn class_list_joins_base_classes() {
    assert_eq!(class_list(&["a", "b", "c"], None), "a b c");
}

#[test]
fn class_list_appends_trimmed_extra() {
    assert_eq!(class_list(&["blocky-card"], Some("  wide ")), "blocky-card wide");
}

#[test]
fn class_list_skips_empty_parts() {
    assert_eq!(class_list(&["a", "", "b"], Some("")), "a b");
}

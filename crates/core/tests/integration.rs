use cotton_core::{resolve_color_token, Settings, COLOR_TOKEN_RULES};
use pretty_assertions::assert_eq;

#[test]
fn test_rule_order_first_match_wins() {
    // `text-symbol-text-<N>` 排在 `text-<N>` 之前
    let names: Vec<&str> = COLOR_TOKEN_RULES.iter().map(|r| r.pattern).collect();
    let symbol = names.iter().position(|p| p.contains("symbol")).unwrap();
    let plain = names.iter().position(|p| *p == r"^text-([0-9]+)$").unwrap();
    assert!(symbol < plain);
    assert_eq!(COLOR_TOKEN_RULES.len(), 6);
}

#[test]
fn test_design_token_names() {
    let cases = [
        ("--background-bg1", Some("bg_1")),
        ("--background-bg12", Some("bg_12")),
        ("--text-symbol-text-2", Some("text_2")),
        ("--text-4", Some("text_4")),
        ("--norm-brand_pink", Some("brand_pink")),
        ("--norm-brand_blue", Some("brand_blue")),
        ("--line-line_light", Some("line_light")),
        ("--line-line_dark", None),
        ("--background-bg", None),
        ("", None),
    ];

    for (name, expected) in cases {
        assert_eq!(
            resolve_color_token(name).as_deref(),
            expected,
            "token for {}",
            name
        );
    }
}

#[test]
fn test_settings_file_roundtrip() {
    let dir = std::env::temp_dir().join(format!("cotton-settings-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    std::fs::write(&path, r#"{ "noNeedStylesKey": ["font-family", "opacity"] }"#).unwrap();

    let settings = Settings::from_path(&path).unwrap();
    assert!(settings.is_ignored("opacity"));
    assert!(!settings.is_ignored("padding"));

    std::fs::remove_dir_all(&dir).unwrap();
}

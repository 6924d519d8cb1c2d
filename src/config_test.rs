use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_site_constants() {
    let config = PageConfig::default();
    assert_eq!(config.header_clearance_px, 80.0);
    assert_eq!(config.navbar_shadow_after_px, 50.0);
    assert_eq!(config.scroll_debounce_ms, 10);
    assert_eq!(config.popup_max_width_px, 768.0);
    assert_eq!(config.reveal_threshold, 0.1);
    assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
    assert!(config.popup_enabled);
}

#[test]
fn active_section_defaults() {
    let config = ActiveSectionConfig::default();
    assert_eq!(config.near_top_px, 100.0);
    assert_eq!(config.lookahead_px, 150.0);
    assert_eq!(config.bottom_slack_px, 50.0);
    assert_eq!(config.final_section_id, "contact");
}

#[test]
fn resume_reveal_delay_defaults_to_100ms() {
    assert_eq!(ResumeConfig::default().reveal_delay_ms, 100);
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}");
    assert_eq!(config.ok(), Some(PageConfig::default()));
}

#[test]
fn partial_override_keeps_other_defaults() {
    let config = PageConfig::from_json(r#"{"popup_enabled": false, "active_section": {"final_section_id": "footer"}}"#)
        .unwrap_or_default();
    assert!(!config.popup_enabled);
    assert_eq!(config.active_section.final_section_id, "footer");
    assert_eq!(config.active_section.lookahead_px, 150.0);
    assert_eq!(config.header_clearance_px, 80.0);
}

#[test]
fn wrong_type_is_an_error() {
    assert!(PageConfig::from_json(r#"{"scroll_debounce_ms": "fast"}"#).is_err());
}

#[test]
fn malformed_json_falls_back_to_defaults() {
    assert_eq!(PageConfig::from_json_or_default("{not json"), PageConfig::default());
}

// =============================================================
// Log level
// =============================================================

#[test]
fn log_level_parses_known_names() {
    let config = PageConfig { log_level: "debug".to_owned(), ..PageConfig::default() };
    assert_eq!(config.log_level(), log::Level::Debug);
}

#[test]
fn log_level_unknown_falls_back_to_info() {
    let config = PageConfig { log_level: "chatty".to_owned(), ..PageConfig::default() };
    assert_eq!(config.log_level(), log::Level::Info);
}

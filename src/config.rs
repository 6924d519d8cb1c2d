//! Page tunables.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the site's stylesheet (header height, breakpoints). A page
//! can override any field through a JSON block in
//! `<script type="application/json" id="pageConfig">`; missing fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    BOTTOM_SLACK_PX, FINAL_SECTION_ID, HEADER_CLEARANCE_PX, NAVBAR_SHADOW, NAVBAR_SHADOW_AFTER_PX, NEAR_TOP_PX,
    POPUP_MAX_WIDTH_PX, RESUME_COLLAPSE_LABEL, RESUME_EXPAND_LABEL, RESUME_MIN_VISIBLE_PX, RESUME_REVEAL_DELAY_MS,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, SCROLL_DEBOUNCE_MS, SECTION_LOOKAHEAD_PX,
};

/// Every tunable the page features read.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub header_clearance_px: f64,
    pub navbar_shadow_after_px: f64,
    pub navbar_shadow: String,
    pub active_section: ActiveSectionConfig,
    pub scroll_debounce_ms: u32,
    pub resume: ResumeConfig,
    pub popup_enabled: bool,
    pub popup_max_width_px: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            header_clearance_px: HEADER_CLEARANCE_PX,
            navbar_shadow_after_px: NAVBAR_SHADOW_AFTER_PX,
            navbar_shadow: NAVBAR_SHADOW.to_owned(),
            active_section: ActiveSectionConfig::default(),
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            resume: ResumeConfig::default(),
            popup_enabled: true,
            popup_max_width_px: POPUP_MAX_WIDTH_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

/// Thresholds for picking the highlighted navigation link.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActiveSectionConfig {
    pub near_top_px: f64,
    pub lookahead_px: f64,
    pub bottom_slack_px: f64,
    pub final_section_id: String,
}

impl Default for ActiveSectionConfig {
    fn default() -> Self {
        Self {
            near_top_px: NEAR_TOP_PX,
            lookahead_px: SECTION_LOOKAHEAD_PX,
            bottom_slack_px: BOTTOM_SLACK_PX,
            final_section_id: FINAL_SECTION_ID.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    pub reveal_delay_ms: u32,
    pub min_visible_px: f64,
    pub expand_label: String,
    pub collapse_label: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: RESUME_REVEAL_DELAY_MS,
            min_visible_px: RESUME_MIN_VISIBLE_PX,
            expand_label: RESUME_EXPAND_LABEL.to_owned(),
            collapse_label: RESUME_COLLAPSE_LABEL.to_owned(),
        }
    }
}

impl PageConfig {
    /// Parse overrides from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serde error when `raw` is not a JSON object of known fields
    /// with the right types.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Parse overrides, falling back to the defaults on malformed input.
    #[must_use]
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring malformed page config: {err}");
                Self::default()
            }
        }
    }

    /// Console log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

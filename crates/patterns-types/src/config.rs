//! Site configuration.
//!
//! Every field is defaulted, so an empty TOML document describes the
//! stock demo page: element ids, scaler bounds, gate threshold, label
//! strings, and the class lists applied for each visual state.

use std::path::Path;

use serde::Deserialize;

use crate::error::{PatternsError, Result};

/// Top-level configuration for the demo page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page shown at startup.
    pub default_page: String,
    pub selectors: Selectors,
    pub scaler: ScalerConfig,
    pub gate: GateConfig,
    pub labels: Labels,
    pub styles: Styles,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_page: "home".to_string(),
            selectors: Selectors::default(),
            scaler: ScalerConfig::default(),
            gate: GateConfig::default(),
            labels: Labels::default(),
            styles: Styles::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&source)?;
        log::info!("Loaded site config from {}", path.display());
        Ok(config)
    }

    /// Reject configurations the widgets cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.default_page.trim().is_empty() {
            return Err(PatternsError::Config("default_page is empty".into()));
        }
        let s = &self.scaler;
        if s.min > s.max {
            return Err(PatternsError::Config(format!(
                "scaler min ({}) exceeds max ({})",
                s.min, s.max
            )));
        }
        if s.step <= 0 {
            return Err(PatternsError::Config(format!(
                "scaler step must be positive, got {}",
                s.step
            )));
        }
        if self.gate.max_attempts == 0 {
            return Err(PatternsError::Config("gate max_attempts is 0".into()));
        }
        Ok(())
    }
}

/// How widgets find their elements.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_item_class: String,
    pub page_class: String,
    /// Appended to a page name to form the page element's id.
    pub page_id_suffix: String,
    pub active_page_class: String,
    /// Focus fallback when a page has no focusable heading.
    pub main_content_id: String,
    /// `data-*` key naming the page a nav control shows.
    pub nav_page_attribute: String,
    pub demo_text_id: String,
    pub increase_id: String,
    pub decrease_id: String,
    pub input_toggle_id: String,
    pub input_state_id: String,
    pub speed_button_class: String,
    pub speed_attribute: String,
    pub fail_button_id: String,
    pub skip_button_id: String,
    pub play_button_id: String,
    pub pause_button_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_item_class: "nav-item".into(),
            page_class: "page-content".into(),
            page_id_suffix: "-page".into(),
            active_page_class: "active-page".into(),
            main_content_id: "main-content".into(),
            nav_page_attribute: "page".into(),
            demo_text_id: "demo-text".into(),
            increase_id: "increase-text".into(),
            decrease_id: "decrease-text".into(),
            input_toggle_id: "input-toggle-button".into(),
            input_state_id: "input-state".into(),
            speed_button_class: "speed-btn".into(),
            speed_attribute: "speed".into(),
            fail_button_id: "fail-attempt-button".into(),
            skip_button_id: "skip-challenge-button".into(),
            play_button_id: "media-play-button".into(),
            pause_button_id: "media-pause-button".into(),
        }
    }
}

/// Bounds for the demo text size, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScalerConfig {
    pub initial: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self {
            initial: 16,
            min: 12,
            max: 32,
            step: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// Failures needed before the skip control unlocks.
    pub max_attempts: u32,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// User-visible strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub toggle_enabled: String,
    pub hold_required: String,
    /// Prefix of the fail control's `"<prefix> (n/max)"` label.
    pub fail_attempt: String,
    pub skip_available: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            toggle_enabled: "TOGGLE ENABLED".into(),
            hold_required: "HOLD REQUIRED".into(),
            fail_attempt: "Fail Attempt".into(),
            skip_available: "Skip Difficult Section (Available)".into(),
        }
    }
}

/// Class lists applied for each visual state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Styles {
    pub nav_current: Vec<String>,
    pub toggle_enabled: Vec<String>,
    pub toggle_hold: Vec<String>,
    pub speed_selected: Vec<String>,
    pub speed_idle: Vec<String>,
    pub first_rounding: String,
    pub last_rounding: String,
    pub skip_blocked: Vec<String>,
    pub skip_available: Vec<String>,
    pub play_active: Vec<String>,
    pub play_inactive: Vec<String>,
    pub pause_active: Vec<String>,
    pub pause_inactive: Vec<String>,
}

fn classes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| (*c).to_string()).collect()
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            nav_current: classes(&["bg-gray-100", "text-gray-900"]),
            toggle_enabled: classes(&["bg-blue-200", "text-blue-800", "hover:bg-blue-300"]),
            toggle_hold: classes(&["bg-green-200", "text-green-800", "hover:bg-green-300"]),
            speed_selected: classes(&["text-blue-700"]),
            speed_idle: classes(&["text-gray-900"]),
            first_rounding: "rounded-l-lg".into(),
            last_rounding: "rounded-r-lg".into(),
            skip_blocked: classes(&["bg-red-500", "hover:bg-red-600", "disabled:opacity-50"]),
            skip_available: classes(&["bg-green-500", "hover:bg-green-600"]),
            play_active: classes(&["bg-green-500"]),
            play_inactive: classes(&["bg-gray-700"]),
            pause_active: classes(&["bg-red-500", "text-white"]),
            pause_inactive: classes(&["bg-gray-200", "text-gray-800"]),
        }
    }
}

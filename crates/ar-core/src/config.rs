//! Startup configuration for one AR session.
//!
//! Everything here is fixed once the experience starts; defaults come from
//! `constants.rs`.

use crate::constants::*;
use crate::error::CoreError;

/// Thresholds that separate a tap from a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    pub tap_max_duration_ms: f64,
    pub move_threshold: f32,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            tap_max_duration_ms: TAP_MAX_DURATION_MS,
            move_threshold: TAP_MOVE_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalloutParams {
    pub amplitude: f32,
    pub speed: f64,
}

impl Default for CalloutParams {
    fn default() -> Self {
        Self {
            amplitude: CALLOUT_AMPLITUDE,
            speed: CALLOUT_SPEED,
        }
    }
}

/// Text drawn on the left pane of the info panel.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelContent {
    pub title: String,
    pub lines: Vec<String>,
}

impl Default for PanelContent {
    fn default() -> Self {
        Self {
            title: DEFAULT_PANEL_TITLE.to_string(),
            lines: DEFAULT_PANEL_LINES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceConfig {
    pub target_src: String,
    pub model_url: String,
    pub callout_texture_url: String,
    pub slide_urls: Vec<String>,
    pub filter_min_cf: f64,
    pub filter_beta: f64,
    pub gestures: GestureThresholds,
    pub rotation_per_unit: f32,
    pub callout: CalloutParams,
    pub panel: PanelContent,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            target_src: DEFAULT_TARGET_SRC.to_string(),
            model_url: DEFAULT_MODEL_URL.to_string(),
            callout_texture_url: DEFAULT_CALLOUT_TEXTURE_URL.to_string(),
            slide_urls: DEFAULT_SLIDE_URLS.iter().map(|s| s.to_string()).collect(),
            filter_min_cf: TRACKER_FILTER_MIN_CF,
            filter_beta: TRACKER_FILTER_BETA,
            gestures: GestureThresholds::default(),
            rotation_per_unit: ROTATION_RADIANS_PER_UNIT,
            callout: CalloutParams::default(),
            panel: PanelContent::default(),
        }
    }
}

impl ExperienceConfig {
    /// Replace the slide list with a comma separated list of URLs.
    /// Blank entries are skipped; an input with no usable entry keeps the
    /// current list.
    pub fn with_slide_list(mut self, list: &str) -> Self {
        let urls: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if !urls.is_empty() {
            self.slide_urls = urls;
        }
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.slide_urls.is_empty() {
            return Err(CoreError::EmptySlideshow);
        }
        let positive = [
            ("gestures.tap_max_duration_ms", self.gestures.tap_max_duration_ms),
            ("gestures.move_threshold", self.gestures.move_threshold as f64),
            ("callout.speed", self.callout.speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(CoreError::InvalidConfig { name, value });
            }
        }
        let finite = [
            ("rotation_per_unit", self.rotation_per_unit as f64),
            ("callout.amplitude", self.callout.amplitude as f64),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(CoreError::InvalidConfig { name, value });
            }
        }
        Ok(())
    }
}

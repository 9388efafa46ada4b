//! Effect configuration
//!
//! Defaults mirror the classic scroll parallax: listen for `"scroll"`, halve
//! the scroll position. Hosts that carry per-element option data (markup
//! attributes, style sheets, saved presets) overlay it on the defaults with
//! [`ConfigOverrides`], which deserializes with every field optional.

use drift_core::ScrollMapping;
use serde::Deserialize;

/// Configuration for a parallax effect instance
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    /// Event name the effect subscribes to
    pub on: String,
    /// Scroll-position-to-offset mapping
    pub mapping: ScrollMapping,
    /// Recognized for compatibility with scene-based hosts; not yet
    /// interpreted by the effect itself
    pub scene_mode: bool,
    /// Optional caller-supplied identifier, used only in diagnostics
    pub label: Option<String>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            on: "scroll".to_string(),
            mapping: ScrollMapping::default(),
            scene_mode: false,
            label: None,
        }
    }
}

impl EffectConfig {
    /// Config listening for a custom event name
    pub fn on_event(event: impl Into<String>) -> Self {
        Self {
            on: event.into(),
            ..Default::default()
        }
    }

    /// Set the scroll mapping factor
    pub fn factor(mut self, factor: f32) -> Self {
        self.mapping = ScrollMapping::new(factor);
        self
    }

    /// Set the diagnostic label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Overlay host-provided option data on this config
    ///
    /// Fields absent from the overrides keep their current value.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(on) = overrides.on {
            self.on = on;
        }
        if let Some(factor) = overrides.factor {
            self.mapping = ScrollMapping::new(factor);
        }
        if let Some(scene_mode) = overrides.scene_mode {
            self.scene_mode = scene_mode;
        }
        if let Some(label) = overrides.label {
            self.label = Some(label);
        }
        self
    }
}

/// Per-element option data overlaid on [`EffectConfig`] defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    /// Override the event name
    pub on: Option<String>,
    /// Override the mapping factor
    pub factor: Option<f32>,
    /// Override the scene mode flag
    pub scene_mode: Option<bool>,
    /// Override the diagnostic label
    pub label: Option<String>,
}

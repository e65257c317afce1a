//! Page configuration.
//!
//! Every field has a default matching the shipped markup, so an empty JSON
//! object (or no config at all) yields a working page.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};

/// Smoothing factor applied to each drag velocity sample.
pub const VELOCITY_BLEND: f64 = 0.35;
/// Fraction of coast velocity that survives one second.
pub const DECAY_PER_SECOND: f64 = 0.68;
/// Coast velocities below this magnitude (deg/s) snap to zero.
pub const STOP_THRESHOLD: f64 = 6.0;
/// Release velocity cap (deg/s).
pub const MAX_VELOCITY: f64 = 1080.0;
/// Longest step a single animation frame may advance.
pub const MAX_FRAME_MS: f64 = 50.0;
/// Floor for the elapsed time between two drag samples.
pub const MIN_SAMPLE_MS: f64 = 1.0;

/// Physics constants for the spinning record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub velocity_blend: f64,
    pub decay_per_second: f64,
    pub stop_threshold: f64,
    pub max_velocity: f64,
    pub max_frame_ms: f64,
    pub min_sample_ms: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            velocity_blend: VELOCITY_BLEND,
            decay_per_second: DECAY_PER_SECOND,
            stop_threshold: STOP_THRESHOLD,
            max_velocity: MAX_VELOCITY,
            max_frame_ms: MAX_FRAME_MS,
            min_sample_ms: MIN_SAMPLE_MS,
        }
    }
}

impl SpinConfig {
    fn validate(&self) -> ConfigResult<()> {
        check_range("spin.velocity_blend", self.velocity_blend, 0.0, 1.0)?;
        // At 1.0 a coast would never settle
        if !(self.decay_per_second >= 0.0 && self.decay_per_second < 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "spin.decay_per_second",
                value: self.decay_per_second,
            });
        }
        check_positive("spin.stop_threshold", self.stop_threshold)?;
        check_positive("spin.max_velocity", self.max_velocity)?;
        check_positive("spin.max_frame_ms", self.max_frame_ms)?;
        check_positive("spin.min_sample_ms", self.min_sample_ms)
    }
}

/// DOM hooks for the vinyl widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VinylConfig {
    /// Element receiving pointer input.
    pub container_selector: String,
    /// Element whose rotation is driven; falls back to the container.
    pub disc_selector: String,
    /// Custom property receiving `"<deg>deg"`.
    pub rotation_property: String,
    pub dragging_class: String,
    pub spin: SpinConfig,
}

impl Default for VinylConfig {
    fn default() -> Self {
        Self {
            container_selector: ".vinyl".to_string(),
            disc_selector: ".vinyl__disc".to_string(),
            rotation_property: "--vinyl-rotation".to_string(),
            dragging_class: "is-dragging".to_string(),
            spin: SpinConfig::default(),
        }
    }
}

/// Scroll reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Visible fraction that counts as "in view".
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal".to_string(),
            visible_class: "is-visible".to_string(),
            threshold: 0.12,
        }
    }
}

/// Background audio wiring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub audio_id: String,
    pub slider_id: String,
    pub mute_button_id: String,
    pub muted_class: String,
    /// Volume in [0, 1] applied before the first play attempt.
    pub initial_volume: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            audio_id: "bgAudio".to_string(),
            slider_id: "volumeSlider".to_string(),
            mute_button_id: "muteButton".to_string(),
            muted_class: "is-muted".to_string(),
            initial_volume: 0.4,
        }
    }
}

/// Top-level configuration for the whole page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub vinyl: VinylConfig,
    pub reveal: RevealConfig,
    pub audio: AudioConfig,
    /// Element whose text becomes the current year.
    pub year_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            vinyl: VinylConfig::default(),
            reveal: RevealConfig::default(),
            audio: AudioConfig::default(),
            year_id: "currentYear".to_string(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `json` if present, logging and falling back to defaults on error.
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                log::warn!("Ignoring page config: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Check numeric fields are usable.
    pub fn validate(&self) -> ConfigResult<()> {
        self.vinyl.spin.validate()?;
        check_range("reveal.threshold", self.reveal.threshold, 0.0, 1.0)?;
        check_range("audio.initial_volume", self.audio.initial_volume, 0.0, 1.0)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

fn check_positive(field: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_defaults_match_tuned_constants() {
        let spin = SpinConfig::default();
        assert_eq!(spin.velocity_blend, 0.35);
        assert_eq!(spin.decay_per_second, 0.68);
        assert_eq!(spin.stop_threshold, 6.0);
        assert_eq!(spin.max_velocity, 1080.0);
        assert_eq!(spin.max_frame_ms, 50.0);
        assert_eq!(spin.min_sample_ms, 1.0);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = PageConfig::from_json("{}").unwrap();
        assert_eq!(config, PageConfig::default());
        assert_eq!(config.year_id, "currentYear");
        assert_eq!(config.reveal.selector, ".reveal");
    }

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(
            r#"{"reveal": {"threshold": 0.5}, "vinyl": {"spin": {"max_velocity": 720}}}"#,
        )
        .unwrap();
        assert_eq!(config.reveal.threshold, 0.5);
        assert_eq!(config.reveal.visible_class, "is-visible");
        assert_eq!(config.vinyl.spin.max_velocity, 720.0);
        assert_eq!(config.vinyl.spin.velocity_blend, 0.35);
        assert_eq!(config.vinyl.container_selector, ".vinyl");
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = PageConfig::from_json(r#"{"audio": {"initial_volume": 1.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "audio.initial_volume", .. }
        ));

        let err =
            PageConfig::from_json(r#"{"vinyl": {"spin": {"stop_threshold": 0}}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));

        let err = PageConfig::from_json(r#"{"vinyl": {"spin": {"decay_per_second": 1.0}}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange { field: "spin.decay_per_second", .. }
        ));

        let config =
            PageConfig::from_json(r#"{"vinyl": {"spin": {"decay_per_second": 0.99}}}"#).unwrap();
        assert_eq!(config.vinyl.spin.decay_per_second, 0.99);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(matches!(PageConfig::from_json("{"), Err(ConfigError::Parse(_))));
        let config = PageConfig::from_json_or_default(Some("not json"));
        assert_eq!(config, PageConfig::default());
        assert_eq!(PageConfig::from_json_or_default(None), PageConfig::default());
    }
}

//! Stimulus configuration.
//!
//! A [`Config`] is immutable for the lifetime of a dot field. It can be
//! built in code, deserialized from JSON (missing keys take defaults,
//! unknown keys are rejected), and is always validated before a field is
//! constructed.

use crate::color::Rgb;
use crate::error::RdmError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Default fraction of dots that move in the configured direction.
pub const DEFAULT_MOTION_COHERENCE: f64 = 0.5;
/// Default coherent motion direction, degrees (180 = leftward).
pub const DEFAULT_MOTION_ANGLE: f64 = 180.0;
/// Default number of dots.
pub const DEFAULT_N_DOTS: usize = 500;
/// Default dot side length in pixels.
pub const DEFAULT_DOT_SIZE: usize = 3;
/// Default dot speed in pixels per frame.
pub const DEFAULT_DOT_VELOCITY: f64 = 3.0;
/// Default aperture radius in pixels.
pub const DEFAULT_DOT_AREA_RADIUS: usize = 256;
/// Largest accepted `dot_area_radius`. The canvas holds
/// `(2 * radius)^2 * 3` bytes, about 200 MB at this bound.
pub const MAX_DOT_AREA_RADIUS: usize = 4096;
/// Default title for an attached display window.
pub const DEFAULT_WINDOW_TITLE: &str = "Random Dot Motion";

/// Random-dot-motion configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Probability in [0, 1] that a dot adopts `motion_angle`.
    pub motion_coherence: f64,
    /// Direction of coherent dots, degrees counter-clockwise from +x.
    pub motion_angle: f64,
    pub n_dots: usize,
    /// Side of the square dot sprite, pixels.
    pub dot_size: usize,
    /// Pixels moved per frame.
    pub dot_velocity: f64,
    pub dot_color: Rgb,
    pub background_color: Rgb,
    /// Radius of the circular aperture, pixels.
    pub dot_area_radius: usize,
    /// Label for an attached display. Has no effect on the simulation.
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            motion_coherence: DEFAULT_MOTION_COHERENCE,
            motion_angle: DEFAULT_MOTION_ANGLE,
            n_dots: DEFAULT_N_DOTS,
            dot_size: DEFAULT_DOT_SIZE,
            dot_velocity: DEFAULT_DOT_VELOCITY,
            dot_color: Rgb::WHITE,
            background_color: Rgb::BLACK,
            dot_area_radius: DEFAULT_DOT_AREA_RADIUS,
            window_title: DEFAULT_WINDOW_TITLE.to_owned(),
        }
    }
}

impl Config {
    /// Side length of the square display, `2 * dot_area_radius`.
    pub fn display_size(&self) -> usize {
        self.dot_area_radius.saturating_mul(2)
    }

    /// Largest distance from the center a dot may occupy at a frame boundary.
    pub fn max_radius(&self) -> f64 {
        self.dot_area_radius as f64 - self.dot_size as f64 / 2.0
    }

    /// Checks every constraint a dot field relies on.
    ///
    /// Returns `RdmError::InvalidConfig` naming the first violated option.
    pub fn validate(&self) -> Result<(), RdmError> {
        let invalid = |msg: String| Err(RdmError::InvalidConfig(msg));

        if !(0.0..=1.0).contains(&self.motion_coherence) {
            return invalid(format!(
                "motion_coherence must be in [0, 1], got {}",
                self.motion_coherence
            ));
        }
        if !self.motion_angle.is_finite() {
            return invalid(format!(
                "motion_angle must be finite, got {}",
                self.motion_angle
            ));
        }
        if self.n_dots == 0 {
            return invalid("n_dots must be positive".into());
        }
        if self.dot_size == 0 {
            return invalid("dot_size must be positive".into());
        }
        if !(self.dot_velocity.is_finite() && self.dot_velocity > 0.0) {
            return invalid(format!(
                "dot_velocity must be positive and finite, got {}",
                self.dot_velocity
            ));
        }
        if self.dot_area_radius <= 1 {
            return invalid(format!(
                "dot_area_radius must be greater than 1, got {}",
                self.dot_area_radius
            ));
        }
        if self.dot_area_radius > MAX_DOT_AREA_RADIUS {
            return invalid(format!(
                "dot_area_radius must be at most {MAX_DOT_AREA_RADIUS}, got {}",
                self.dot_area_radius
            ));
        }
        if self.max_radius() < 1.0 {
            return invalid(format!(
                "dot_size {} leaves no room inside dot_area_radius {}",
                self.dot_size, self.dot_area_radius
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON object.
    ///
    /// Missing keys take their defaults. Unknown keys, wrong types, and
    /// failed validation are all `RdmError::InvalidConfig`.
    pub fn from_json(params: &Value) -> Result<Self, RdmError> {
        let config =
            Config::deserialize(params).map_err(|e| RdmError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a validated copy with the keys of `overrides` replacing this
    /// configuration's values.
    pub fn with_overrides(&self, overrides: &Value) -> Result<Self, RdmError> {
        let Value::Object(extra) = overrides else {
            return Err(RdmError::InvalidConfig(
                "overrides must be a JSON object".into(),
            ));
        };
        let mut merged = self.to_json();
        if let Value::Object(base) = &mut merged {
            base.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        Config::from_json(&merged)
    }

    /// Current values as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "motion_coherence": self.motion_coherence,
            "motion_angle": self.motion_angle,
            "n_dots": self.n_dots,
            "dot_size": self.dot_size,
            "dot_velocity": self.dot_velocity,
            "dot_color": self.dot_color.to_hex(),
            "background_color": self.background_color.to_hex(),
            "dot_area_radius": self.dot_area_radius,
            "window_title": self.window_title,
        })
    }

    /// Schema describing every option: type, default, range, and effect.
    pub fn schema() -> Value {
        json!({
            "motion_coherence": {
                "type": "number",
                "default": DEFAULT_MOTION_COHERENCE,
                "min": 0.0,
                "max": 1.0,
                "description": "Fraction of dots assigned motion_angle rather than a random direction"
            },
            "motion_angle": {
                "type": "number",
                "default": DEFAULT_MOTION_ANGLE,
                "description": "Direction of coherent dots in degrees (0 = right, 90 = up)"
            },
            "n_dots": {
                "type": "integer",
                "default": DEFAULT_N_DOTS,
                "min": 1,
                "description": "Number of dots"
            },
            "dot_size": {
                "type": "integer",
                "default": DEFAULT_DOT_SIZE,
                "min": 1,
                "description": "Side length of the square dot sprite in pixels"
            },
            "dot_velocity": {
                "type": "number",
                "default": DEFAULT_DOT_VELOCITY,
                "exclusive_min": 0.0,
                "description": "Pixels moved per frame along a dot's motion angle"
            },
            "dot_color": {
                "type": "color",
                "default": Rgb::WHITE.to_hex(),
                "description": "Dot color as #rrggbb or [r, g, b]"
            },
            "background_color": {
                "type": "color",
                "default": Rgb::BLACK.to_hex(),
                "description": "Background color as #rrggbb or [r, g, b]"
            },
            "dot_area_radius": {
                "type": "integer",
                "default": DEFAULT_DOT_AREA_RADIUS,
                "min": 2,
                "max": MAX_DOT_AREA_RADIUS,
                "description": "Aperture radius in pixels; the display is twice this size"
            },
            "window_title": {
                "type": "string",
                "default": DEFAULT_WINDOW_TITLE,
                "description": "Title of an attached display window"
            }
        })
    }
}

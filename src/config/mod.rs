pub mod overrides;

use crate::{
    animation::ease::Ease,
    foundation::error::{MuvError, MuvResult},
};

pub const DEFAULT_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_DURATION_MS: f64 = 800.0;
pub const DEFAULT_THRESHOLD: f64 = 0.10;
pub const DEFAULT_BASE_TRANSFORM_ATTR: &str = "data-muv-transform";

/// What to do with candidates when the host cannot observe viewport intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Start every entrance animation right after initialization.
    #[default]
    AnimateImmediately,
    /// Show every candidate at rest without animating.
    LeaveStatic,
}

/// Document lifecycle event the browser binding starts on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StartOn {
    /// The window `load` event: layout and images have settled.
    #[default]
    Load,
    /// `DOMContentLoaded`, for scripts loaded with `defer`/`async` in `<head>`.
    DomContentLoaded,
}

/// Tunables for one page session.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MuvConfig {
    /// Per-axis offset magnitude in pixels.
    pub offset_px: f64,
    /// Animation duration in milliseconds. `<= 0` completes on the first frame.
    pub duration_ms: f64,
    pub ease: Ease,
    /// Fraction of the element box that must be visible to trigger, in `[0, 1]`.
    pub threshold: f64,
    /// Attribute holding a transform to preserve under the entrance translation.
    pub base_transform_attr: String,
    pub fallback: Fallback,
    pub start_on: StartOn,
    /// Show candidates at rest when the host reports a reduced-motion preference.
    pub respect_reduced_motion: bool,
}

impl Default for MuvConfig {
    fn default() -> Self {
        Self {
            offset_px: DEFAULT_OFFSET_PX,
            duration_ms: DEFAULT_DURATION_MS,
            ease: Ease::default(),
            threshold: DEFAULT_THRESHOLD,
            base_transform_attr: DEFAULT_BASE_TRANSFORM_ATTR.to_owned(),
            fallback: Fallback::default(),
            start_on: StartOn::default(),
            respect_reduced_motion: true,
        }
    }
}

impl MuvConfig {
    /// Parse a JSON object; missing keys take their defaults. The result is not sanitized.
    pub fn from_json(s: &str) -> MuvResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_offset_px(mut self, offset_px: f64) -> Self {
        self.offset_px = offset_px;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// Report the first out-of-range value as [`MuvError::Config`], for callers that want
    /// strictness. The session itself never calls this; it uses [`MuvConfig::sanitized`].
    pub fn validate(&self) -> MuvResult<()> {
        if !(self.offset_px.is_finite() && self.offset_px >= 0.0) {
            return Err(MuvError::config(format!(
                "offset-px must be a finite number >= 0, got {}",
                self.offset_px
            )));
        }
        if self.duration_ms.is_nan() || self.duration_ms == f64::INFINITY {
            return Err(MuvError::config(format!(
                "duration-ms must be finite, got {}",
                self.duration_ms
            )));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MuvError::config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.base_transform_attr.trim().is_empty() {
            return Err(MuvError::config("base-transform-attr must be non-empty"));
        }
        Ok(())
    }

    /// Clamp out-of-range values to safe defaults, logging each correction.
    pub fn sanitized(mut self) -> Self {
        if !(self.offset_px.is_finite() && self.offset_px >= 0.0) {
            tracing::warn!(value = self.offset_px, "offset_px out of range; using default");
            self.offset_px = DEFAULT_OFFSET_PX;
        }
        if self.duration_ms.is_nan() || self.duration_ms == f64::INFINITY {
            tracing::warn!(value = self.duration_ms, "duration_ms not finite; using default");
            self.duration_ms = DEFAULT_DURATION_MS;
        } else if self.duration_ms < 0.0 {
            // Negative durations keep their "complete immediately" meaning.
            self.duration_ms = 0.0;
        }
        if self.threshold.is_nan() {
            tracing::warn!("threshold is NaN; using default");
            self.threshold = DEFAULT_THRESHOLD;
        } else if !(0.0..=1.0).contains(&self.threshold) {
            tracing::warn!(value = self.threshold, "threshold outside [0, 1]; clamping");
            self.threshold = self.threshold.clamp(0.0, 1.0);
        }
        if self.base_transform_attr.trim().is_empty() {
            self.base_transform_attr = DEFAULT_BASE_TRANSFORM_ATTR.to_owned();
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;

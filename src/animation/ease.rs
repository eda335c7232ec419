use std::sync::Arc;

use crate::foundation::error::{MuvError, MuvResult};

/// Easing curve mapping linear progress in `[0, 1]` to perceptual progress.
///
/// Named curves serialize as kebab-case strings (`"out-quad"`). [`Ease::Custom`] wraps any pure
/// function and is skipped by serde.
#[derive(Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    Linear,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    #[serde(skip)]
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Ease {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    /// Evaluate the curve at `t`. Input is clamped to `[0, 1]`; a custom curve that yields a
    /// non-finite value falls back to the default ease-out for that sample.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => out_quad(t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Custom(f) => {
                let v = f(t);
                if v.is_finite() { v } else { out_quad(t) }
            }
        }
    }

    /// Parse a curve name as written in markup (`"out-cubic"`, `"linear"`, ...).
    pub fn from_name(name: &str) -> MuvResult<Self> {
        serde_json::from_value(serde_json::Value::String(name.trim().to_owned()))
            .map_err(|_| MuvError::markup(format!("unknown ease '{name}'")))
    }
}

fn out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

impl std::fmt::Debug for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::InQuad => write!(f, "InQuad"),
            Self::OutQuad => write!(f, "OutQuad"),
            Self::InOutQuad => write!(f, "InOutQuad"),
            Self::InCubic => write!(f, "InCubic"),
            Self::OutCubic => write!(f, "OutCubic"),
            Self::InOutCubic => write!(f, "InOutCubic"),
            Self::Custom(_) => write!(f, "Custom(<fn>)"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;

use crate::{
    animation::ease::Ease,
    foundation::core::{ElementId, Vec2, clean_px},
    style::compose_transform,
};

/// Lifecycle of one [`AnimationRun`] inside the [`crate::Animator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum RunPhase {
    /// Created, first frame not yet delivered.
    Pending,
    /// At least one frame sampled, progress still below 1.
    Running,
    /// Terminal. No further frames are requested.
    Completed,
}

/// Immutable record of one entrance animation.
///
/// Sampling is a pure function of the record and a timestamp, so any scheduler (animation
/// frames, timers, synthetic test clocks) can drive it.
#[derive(Clone, Debug)]
pub struct AnimationRun {
    pub element: ElementId,
    pub offset: Vec2,
    pub duration_ms: f64,
    pub ease: Ease,
    pub start_ms: f64,
    pub base_transform: String,
}

/// Visual properties written to an element for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    pub translate: Vec2,
    pub opacity: f64,
    pub transform: String,
}

impl VisualState {
    /// Pre-animation state: transparent, at the full offset.
    pub fn hidden(offset: Vec2, base_transform: &str) -> Self {
        Self::at(offset, 0.0, base_transform)
    }

    /// Rest state: opaque, zero residual offset.
    pub fn shown(base_transform: &str) -> Self {
        Self::at(Vec2::ZERO, 1.0, base_transform)
    }

    fn at(translate: Vec2, opacity: f64, base_transform: &str) -> Self {
        let translate = Vec2::new(clean_px(translate.x), clean_px(translate.y));
        Self {
            translate,
            opacity,
            transform: compose_transform(base_transform, translate),
        }
    }
}

/// Result of sampling a run at a timestamp.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Step {
    pub progress: f64,
    pub visual: VisualState,
    pub done: bool,
}

impl AnimationRun {
    /// Linear progress in `[0, 1]`. Non-positive or non-finite durations complete immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return 1.0;
        }
        let elapsed = (now_ms - self.start_ms).max(0.0);
        (elapsed / self.duration_ms).min(1.0)
    }

    /// Visual state at linear progress `t`.
    pub fn sample(&self, t: f64) -> VisualState {
        if t >= 1.0 {
            return VisualState::shown(&self.base_transform);
        }
        let eased = self.ease.apply(t);
        let remaining = 1.0 - eased;
        VisualState::at(
            Vec2::new(self.offset.x * remaining, self.offset.y * remaining),
            eased.clamp(0.0, 1.0),
            &self.base_transform,
        )
    }

    pub fn step(&self, now_ms: f64) -> Step {
        let progress = self.progress(now_ms);
        Step {
            progress,
            visual: self.sample(progress),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/run.rs"]
mod tests;

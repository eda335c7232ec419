pub use kurbo::Vec2;

/// Index of a candidate element inside a session's arena.
///
/// Ids are assigned in discovery (document) order and stay stable for the lifetime of the
/// session. Hosts hand them back in intersection entries.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalize a pixel value for CSS output: folds `-0` into `0` and non-finite values into `0`.
pub fn clean_px(v: f64) -> f64 {
    if v == 0.0 || !v.is_finite() { 0.0 } else { v }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

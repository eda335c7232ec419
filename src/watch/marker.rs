use crate::{foundation::core::Vec2, host::Surface};

/// Directional marker class selecting where an element enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Marker {
    Left,
    Right,
    Top,
    Bottom,
}

impl Marker {
    /// Evaluation order. On a conflicting axis the later marker wins.
    pub const ALL: [Marker; 4] = [Marker::Left, Marker::Right, Marker::Top, Marker::Bottom];

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "animated-left",
            Self::Right => "animated-right",
            Self::Top => "animated-top",
            Self::Bottom => "animated-bottom",
        }
    }

    /// Unit direction of the starting offset, in screen coordinates (y grows downward).
    pub fn direction(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1.0, 0.0),
            Self::Right => Vec2::new(1.0, 0.0),
            Self::Top => Vec2::new(0.0, -1.0),
            Self::Bottom => Vec2::new(0.0, 1.0),
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Selector list matching any marker class.
pub fn selector() -> String {
    Marker::ALL
        .iter()
        .map(|m| format!(".{}", m.class_name()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Starting offset for `el`, or `None` when it carries no marker.
pub fn offset_for<E: Surface>(el: &E, magnitude: f64) -> Option<Vec2> {
    let mut found = false;
    let mut offset = Vec2::ZERO;
    for marker in Marker::ALL {
        if !el.has_class(marker.class_name()) {
            continue;
        }
        found = true;
        let d = marker.direction() * magnitude;
        if marker.is_horizontal() {
            offset.x = d.x;
        } else {
            offset.y = d.y;
        }
    }
    found.then_some(offset)
}

#[cfg(test)]
#[path = "../../tests/unit/watch/marker.rs"]
mod tests;

//! CSS text produced by muv: composed transforms and the bootstrap rule.

use crate::foundation::core::{Vec2, clean_px};
use crate::watch::marker;

/// Compose `base` with a pixel translation. The base transform is written first so the
/// translation is expressed in the element's already-transformed coordinate space.
pub fn compose_transform(base: &str, offset: Vec2) -> String {
    let translate = format!(
        "translate({}px, {}px)",
        clean_px(offset.x),
        clean_px(offset.y)
    );
    let base = base.trim();
    if base.is_empty() {
        translate
    } else {
        format!("{base} {translate}")
    }
}

/// One rule hiding every marker class until the session initializes each element.
pub fn baseline_rule() -> String {
    format!("{} {{ opacity: 0; }}", marker::selector())
}

#[cfg(test)]
#[path = "../../tests/unit/style/mod.rs"]
mod tests;

use crate::{
    animation::ease::Ease,
    foundation::error::{MuvError, MuvResult},
    host::Surface,
};

pub const DURATION_ATTR: &str = "data-muv-duration";
pub const EASE_ATTR: &str = "data-muv-ease";

/// Per-element settings read from markup at discovery time.
#[derive(Clone, Debug, Default)]
pub struct ElementOverrides {
    pub duration_ms: Option<f64>,
    pub ease: Option<Ease>,
}

impl ElementOverrides {
    /// Read override attributes from `el`. Malformed values are logged and ignored.
    pub fn read<E: Surface>(el: &E) -> Self {
        let duration_ms = el
            .attribute(DURATION_ATTR)
            .and_then(|raw| match parse_duration(&raw) {
                Ok(ms) => Some(ms),
                Err(err) => {
                    tracing::warn!(attr = DURATION_ATTR, %err, "ignoring override");
                    None
                }
            });
        let ease = el
            .attribute(EASE_ATTR)
            .and_then(|raw| match Ease::from_name(&raw) {
                Ok(ease) => Some(ease),
                Err(err) => {
                    tracing::warn!(attr = EASE_ATTR, %err, "ignoring override");
                    None
                }
            });
        Self { duration_ms, ease }
    }
}

fn parse_duration(raw: &str) -> MuvResult<f64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix("ms").unwrap_or(trimmed).trim();
    let ms: f64 = digits
        .parse()
        .map_err(|_| MuvError::markup(format!("invalid duration '{raw}'")))?;
    if !ms.is_finite() {
        return Err(MuvError::markup(format!("invalid duration '{raw}'")));
    }
    Ok(ms.max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/config/overrides.rs"]
mod tests;

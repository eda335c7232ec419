//! Seams between muv and the page it runs in.
//!
//! The browser binding in [`crate::web`] is one implementation; tests drive the same traits with
//! in-memory fakes and synthetic timestamps.

use crate::foundation::core::ElementId;

/// A borrowed visual surface (an element in the host document).
///
/// Writes to a surface that has left the document are inert. There is no error path.
pub trait Surface {
    fn has_class(&self, class: &str) -> bool;

    fn attribute(&self, name: &str) -> Option<String>;

    fn set_opacity(&mut self, opacity: f64);

    fn set_transform(&mut self, transform: &str);
}

/// The page: element lookup, viewport observation, frame scheduling and a clock.
pub trait Host {
    type Element: Surface;

    /// Monotonic time in milliseconds, on the same clock as frame callbacks.
    fn now(&self) -> f64;

    /// Append one stylesheet rule to the document.
    fn inject_style(&mut self, css: &str);

    /// Elements matching a CSS selector list, in document order.
    fn query(&mut self, selector: &str) -> Vec<Self::Element>;

    /// Whether viewport-intersection observation is available.
    fn supports_intersection(&self) -> bool;

    /// Start reporting visibility of `element` under `id` once `threshold` of its box is visible.
    fn observe(&mut self, id: ElementId, element: &Self::Element, threshold: f64);

    /// Stop reporting visibility of `element`. Must take effect before the call returns.
    fn unobserve(&mut self, id: ElementId, element: &Self::Element);

    /// Request one animation-frame callback into the session.
    fn request_frame(&mut self);

    fn prefers_reduced_motion(&self) -> bool {
        false
    }
}

//! Browser binding: `web-sys` implementations of [`Host`] and [`Surface`].
//!
//! The session lives in a thread-local slot. Intersection and animation-frame callbacks borrow
//! it for the duration of one call; control returns to the browser between frames.

mod console;

use std::cell::RefCell;

use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Node, Performance, Window,
};

use crate::{
    config::{MuvConfig, StartOn},
    foundation::{
        core::ElementId,
        error::{MuvError, MuvResult},
    },
    host::{Host, Surface},
    session::Muv,
};

pub use console::{ConsoleWriter, MakeConsoleWriter, init_console_tracing};

/// Attribute on `<html>` holding a JSON [`MuvConfig`].
const CONFIG_ATTR: &str = "data-muv-config";
const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

thread_local! {
    static SESSION: RefCell<Option<Muv<WebHost>>> = const { RefCell::new(None) };
}

/// Run `f` against the installed session. `None` when no session is installed or the slot is
/// already borrowed by an outer callback.
pub fn with_session<R>(f: impl FnOnce(&mut Muv<WebHost>) -> R) -> Option<R> {
    SESSION.with(|cell| match cell.try_borrow_mut() {
        Ok(mut slot) => slot.as_mut().map(f),
        Err(_) => {
            tracing::warn!("session busy; dropping re-entrant callback");
            None
        }
    })
}

fn is_installed() -> bool {
    SESSION.with(|cell| cell.try_borrow().map_or(true, |slot| slot.is_some()))
}

fn js_err(err: JsValue, what: &'static str) -> MuvError {
    anyhow::anyhow!("{err:?}").context(what).into()
}

/// An element in the live document.
#[derive(Clone, Debug)]
pub struct WebSurface {
    el: HtmlElement,
}

impl WebSurface {
    pub fn element(&self) -> &HtmlElement {
        &self.el
    }
}

impl From<HtmlElement> for WebSurface {
    fn from(el: HtmlElement) -> Self {
        Self { el }
    }
}

impl Surface for WebSurface {
    fn has_class(&self, class: &str) -> bool {
        self.el.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.el.get_attribute(name)
    }

    fn set_opacity(&mut self, opacity: f64) {
        let _ = self
            .el
            .style()
            .set_property("opacity", &opacity.to_string());
    }

    fn set_transform(&mut self, transform: &str) {
        let _ = self.el.style().set_property("transform", transform);
    }
}

/// The browser page.
///
/// Dropping the host disconnects its observer and cancels any queued frame, so no browser
/// callback can reach its freed closures.
pub struct WebHost {
    window: Window,
    document: Document,
    performance: Option<Performance>,
    observer: Option<IntersectionObserver>,
    observed: Vec<(HtmlElement, ElementId)>,
    pending_frame: Option<i32>,
    on_frame: Closure<dyn FnMut(f64)>,
    // Keeps the observer callback alive as long as the observer.
    _on_intersect: Option<Closure<dyn FnMut(js_sys::Array)>>,
}

impl WebHost {
    /// Bind to `window`. The intersection observer is created here with `threshold`; when the
    /// browser lacks it, [`Host::supports_intersection`] reports `false`.
    pub fn new(window: Window, threshold: f64) -> MuvResult<Self> {
        let document = window
            .document()
            .ok_or_else(|| MuvError::host("window has no document"))?;
        let performance = window.performance();

        let (observer, on_intersect) = match create_observer(&window, threshold) {
            Ok(Some((observer, callback))) => (Some(observer), Some(callback)),
            Ok(None) => (None, None),
            Err(err) => {
                tracing::warn!(%err, "could not create intersection observer");
                (None, None)
            }
        };

        let on_frame = Closure::<dyn FnMut(f64)>::new(|now: f64| {
            with_session(|session| {
                session.host_mut().pending_frame = None;
                session.on_frame(now);
            });
        });

        Ok(Self {
            window,
            document,
            performance,
            observer,
            observed: Vec::new(),
            pending_frame: None,
            on_frame,
            _on_intersect: on_intersect,
        })
    }

    /// Session id of an observed element, matched by node identity.
    pub fn id_of(&self, target: &Element) -> Option<ElementId> {
        let target: &Node = target;
        self.observed
            .iter()
            .find(|(el, _)| el.is_same_node(Some(target)))
            .map(|(_, id)| *id)
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
        if let Some(handle) = self.pending_frame.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}

type ObserverParts = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

fn create_observer(window: &Window, threshold: f64) -> MuvResult<Option<ObserverParts>> {
    let supported = js_sys::Reflect::get(window, &JsValue::from_str("IntersectionObserver"))
        .is_ok_and(|ctor| ctor.is_function());
    if !supported {
        return Ok(None);
    }

    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        let entries = entries
            .iter()
            .filter_map(|value| value.dyn_into::<IntersectionObserverEntry>().ok())
            .collect::<Vec<_>>();
        with_session(|session| {
            let batch = entries
                .iter()
                .filter_map(|entry| {
                    let id = session.host().id_of(&entry.target())?;
                    Some((id, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            session.handle_intersections(batch);
        });
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| js_err(err, "construct IntersectionObserver"))?;
    Ok(Some((observer, callback)))
}

impl Host for WebHost {
    type Element = WebSurface;

    fn now(&self) -> f64 {
        self.performance.as_ref().map_or(0.0, Performance::now)
    }

    fn inject_style(&mut self, css: &str) {
        let result = self.document.create_element("style").and_then(|style| {
            style.set_text_content(Some(css));
            match self.document.head() {
                Some(head) => head.append_child(&style).map(|_| ()),
                None => Err(JsValue::from_str("document has no <head>")),
            }
        });
        if let Err(err) = result {
            let err = js_err(err, "inject baseline style");
            tracing::warn!(%err, "style not injected");
        }
    }

    fn query(&mut self, selector: &str) -> Vec<WebSurface> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                let err = js_err(err, "querySelectorAll");
                tracing::warn!(%err, selector, "query failed");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(WebSurface::from)
            .collect()
    }

    fn supports_intersection(&self) -> bool {
        self.observer.is_some()
    }

    fn observe(&mut self, id: ElementId, element: &WebSurface, _threshold: f64) {
        let Some(observer) = &self.observer else {
            return;
        };
        observer.observe(&element.el);
        self.observed.push((element.el.clone(), id));
    }

    fn unobserve(&mut self, id: ElementId, element: &WebSurface) {
        if let Some(observer) = &self.observer {
            observer.unobserve(&element.el);
        }
        self.observed.retain(|(_, observed)| *observed != id);
    }

    fn request_frame(&mut self) {
        match self
            .window
            .request_animation_frame(self.on_frame.as_ref().unchecked_ref())
        {
            Ok(handle) => self.pending_frame = Some(handle),
            Err(err) => {
                let err = js_err(err, "requestAnimationFrame");
                tracing::warn!(%err, "frame not scheduled");
            }
        }
    }

    fn prefers_reduced_motion(&self) -> bool {
        matches!(
            self.window.match_media(REDUCED_MOTION_QUERY),
            Ok(Some(list)) if list.matches()
        )
    }
}

fn start(config: MuvConfig) {
    if is_installed() {
        tracing::warn!("muv already running; ignoring second start");
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    let config = config.sanitized();
    let host = match WebHost::new(window, config.threshold) {
        Ok(host) => host,
        Err(err) => {
            tracing::warn!(%err, "muv not started");
            return;
        }
    };
    let session = Muv::initialize(host, config);
    SESSION.with(|cell| *cell.borrow_mut() = Some(session));
}

/// Start a session on the configured lifecycle event, or right away if the document has
/// already reached it. A page runs at most one session; later calls are logged and ignored.
pub fn install(config: MuvConfig) -> MuvResult<()> {
    console_error_panic_hook::set_once();
    if is_installed() {
        tracing::warn!("muv already installed; ignoring");
        return Ok(());
    }
    let window = web_sys::window().ok_or_else(|| MuvError::host("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| MuvError::host("window has no document"))?;

    let (event, reached) = match config.start_on {
        StartOn::Load => ("load", document.ready_state() == "complete"),
        StartOn::DomContentLoaded => ("DOMContentLoaded", document.ready_state() != "loading"),
    };
    if reached {
        start(config);
        return Ok(());
    }

    let callback = Closure::once_into_js(move || start(config));
    window
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(|err| js_err(err, "add lifecycle listener"))
}

/// Module entry point: route logs to the console, then install with the JSON config on
/// `<html data-muv-config>`, if any.
#[wasm_bindgen(start)]
pub fn auto_install() {
    init_console_tracing();
    let config = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|html| html.get_attribute(CONFIG_ATTR))
        .map(|raw| match MuvConfig::from_json(&raw) {
            Ok(config) => {
                if let Err(err) = config.validate() {
                    tracing::warn!(%err, "{CONFIG_ATTR} out of range; clamping");
                }
                config
            }
            Err(err) => {
                tracing::warn!(%err, "invalid {CONFIG_ATTR}; using defaults");
                MuvConfig::default()
            }
        })
        .unwrap_or_default();
    if let Err(err) = install(config) {
        tracing::warn!(%err, "muv not installed");
    }
}

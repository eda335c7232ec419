#![allow(dead_code)]

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use muv::{ElementId, Host, Surface};

#[derive(Debug, Default)]
pub struct ElementData {
    pub classes: Vec<String>,
    pub attrs: BTreeMap<String, String>,
    pub opacity: Option<f64>,
    pub transform: Option<String>,
    pub transforms: Vec<String>,
}

/// Element handle sharing its style with the test through `Rc<RefCell<_>>`.
#[derive(Clone, Debug, Default)]
pub struct FakeElement(pub Rc<RefCell<ElementData>>);

impl FakeElement {
    pub fn with_classes(classes: &[&str]) -> Self {
        let data = ElementData {
            classes: classes.iter().map(|c| (*c).to_owned()).collect(),
            ..ElementData::default()
        };
        Self(Rc::new(RefCell::new(data)))
    }

    pub fn attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_owned(), value.to_owned());
        self
    }

    pub fn opacity(&self) -> Option<f64> {
        self.0.borrow().opacity
    }

    pub fn transform(&self) -> Option<String> {
        self.0.borrow().transform.clone()
    }

    pub fn transforms(&self) -> Vec<String> {
        self.0.borrow().transforms.clone()
    }
}

impl Surface for FakeElement {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attrs.get(name).cloned()
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.0.borrow_mut().opacity = Some(opacity);
    }

    fn set_transform(&mut self, transform: &str) {
        let mut data = self.0.borrow_mut();
        data.transform = Some(transform.to_owned());
        data.transforms.push(transform.to_owned());
    }
}

/// In-memory page. Every element is returned from `query`; the session filters by marker.
#[derive(Debug)]
pub struct FakeHost {
    pub elements: Vec<FakeElement>,
    pub now: f64,
    pub intersection: bool,
    pub reduced_motion: bool,
    pub styles: Vec<String>,
    pub queries: Vec<String>,
    pub observed: BTreeMap<ElementId, f64>,
    pub unobserved: Vec<ElementId>,
    pub frame_requests: usize,
}

impl FakeHost {
    pub fn new(elements: Vec<FakeElement>) -> Self {
        Self {
            elements,
            now: 0.0,
            intersection: true,
            reduced_motion: false,
            styles: Vec::new(),
            queries: Vec::new(),
            observed: BTreeMap::new(),
            unobserved: Vec::new(),
            frame_requests: 0,
        }
    }
}

impl Host for FakeHost {
    type Element = FakeElement;

    fn now(&self) -> f64 {
        self.now
    }

    fn inject_style(&mut self, css: &str) {
        self.styles.push(css.to_owned());
    }

    fn query(&mut self, selector: &str) -> Vec<FakeElement> {
        self.queries.push(selector.to_owned());
        self.elements.clone()
    }

    fn supports_intersection(&self) -> bool {
        self.intersection
    }

    fn observe(&mut self, id: ElementId, _element: &FakeElement, threshold: f64) {
        self.observed.insert(id, threshold);
    }

    fn unobserve(&mut self, id: ElementId, _element: &FakeElement) {
        self.observed.remove(&id);
        self.unobserved.push(id);
    }

    fn request_frame(&mut self) {
        self.frame_requests += 1;
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

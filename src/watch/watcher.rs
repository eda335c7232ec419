use crate::{
    animation::{ease::Ease, run::VisualState},
    config::{MuvConfig, overrides::ElementOverrides},
    foundation::core::{ElementId, Vec2},
    host::{Host, Surface},
    watch::marker,
};

/// Where a candidate is in its one-way lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum CandidateState {
    /// Found by discovery, visual state untouched.
    Discovered,
    /// Transparent at its starting offset.
    Hidden,
    /// Registered with the host's intersection observer.
    Watching,
    /// Fired; its run is live in the animator.
    Animating,
    /// Run completed. Never re-enters the animation path.
    Animated,
    /// Shown at rest without animating (reduced motion or no observer support).
    Static,
}

/// An element selected by a marker class, with everything derived at discovery.
#[derive(Debug)]
pub struct Candidate<E> {
    pub element: E,
    pub offset: Vec2,
    pub base_transform: String,
    pub overrides: ElementOverrides,
    pub state: CandidateState,
}

impl<E: Surface> Candidate<E> {
    fn apply(&mut self, visual: &VisualState) {
        self.element.set_transform(&visual.transform);
        self.element.set_opacity(visual.opacity);
    }

    /// Whether the element has already been handed to the animator.
    pub fn animated(&self) -> bool {
        matches!(
            self.state,
            CandidateState::Animating | CandidateState::Animated
        )
    }
}

/// Parameters for one run, produced when a candidate fires.
#[derive(Clone, Debug)]
pub struct Trigger {
    pub id: ElementId,
    pub offset: Vec2,
    pub duration_ms: f64,
    pub ease: Ease,
    pub base_transform: String,
}

/// Maps marker classes to offsets, hides candidates, and fires each one once on first visibility.
#[derive(Debug)]
pub struct VisibilityWatcher<E> {
    candidates: Vec<Candidate<E>>,
}

impl<E: Surface> VisibilityWatcher<E> {
    /// Query `host` for marker-class elements. Elements without a recognized marker are skipped.
    pub fn discover<H>(host: &mut H, config: &MuvConfig) -> Self
    where
        H: Host<Element = E>,
    {
        let candidates = host
            .query(&marker::selector())
            .into_iter()
            .filter_map(|element| {
                let offset = marker::offset_for(&element, config.offset_px)?;
                let base_transform = element
                    .attribute(&config.base_transform_attr)
                    .map(|s| s.trim().to_owned())
                    .unwrap_or_default();
                let overrides = ElementOverrides::read(&element);
                Some(Candidate {
                    element,
                    offset,
                    base_transform,
                    overrides,
                    state: CandidateState::Discovered,
                })
            })
            .collect::<Vec<_>>();
        tracing::debug!(count = candidates.len(), "discovered candidates");
        Self { candidates }
    }

    /// Set every discovered candidate transparent at its starting offset.
    pub fn initialize(&mut self) {
        for c in self
            .candidates
            .iter_mut()
            .filter(|c| c.state == CandidateState::Discovered)
        {
            let visual = VisualState::hidden(c.offset, &c.base_transform);
            c.apply(&visual);
            c.state = CandidateState::Hidden;
        }
    }

    /// Register every hidden candidate with the host's intersection observer.
    pub fn watch<H>(&mut self, host: &mut H, threshold: f64)
    where
        H: Host<Element = E>,
    {
        for (idx, c) in self.candidates.iter_mut().enumerate() {
            if c.state != CandidateState::Hidden {
                continue;
            }
            host.observe(ElementId(idx), &c.element, threshold);
            c.state = CandidateState::Watching;
        }
    }

    /// Handle one intersection report. Returns a trigger only on the first intersecting report for
    /// a watched candidate; the candidate is unobserved before anything else happens.
    pub fn on_intersection<H>(
        &mut self,
        host: &mut H,
        id: ElementId,
        is_intersecting: bool,
        config: &MuvConfig,
    ) -> Option<Trigger>
    where
        H: Host<Element = E>,
    {
        if !is_intersecting {
            return None;
        }
        let c = self.candidates.get_mut(id.index())?;
        if c.state != CandidateState::Watching {
            return None;
        }
        host.unobserve(id, &c.element);
        c.state = CandidateState::Animating;
        Some(trigger(id, c, config))
    }

    /// Fire every hidden candidate at once, for hosts without intersection support.
    pub fn trigger_all(&mut self, config: &MuvConfig) -> Vec<Trigger> {
        self.candidates
            .iter_mut()
            .enumerate()
            .filter(|(_, c)| c.state == CandidateState::Hidden)
            .map(|(idx, c)| {
                c.state = CandidateState::Animating;
                trigger(ElementId(idx), c, config)
            })
            .collect()
    }

    /// Show every candidate that has not started animating at rest, without animation.
    pub fn show_all_static(&mut self) {
        for c in self.candidates.iter_mut().filter(|c| !c.animated()) {
            let visual = VisualState::shown(&c.base_transform);
            c.apply(&visual);
            c.state = CandidateState::Static;
        }
    }

    /// Write a frame's visual state to the candidate's element.
    pub fn apply(&mut self, id: ElementId, visual: &VisualState) {
        if let Some(c) = self.candidates.get_mut(id.index()) {
            c.apply(visual);
        }
    }

    pub fn mark_animated(&mut self, id: ElementId) {
        if let Some(c) = self.candidates.get_mut(id.index()) {
            c.state = CandidateState::Animated;
        }
    }

    pub fn get(&self, id: ElementId) -> Option<&Candidate<E>> {
        self.candidates.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Candidate<E>)> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| (ElementId(idx), c))
    }
}

fn trigger<E>(id: ElementId, c: &Candidate<E>, config: &MuvConfig) -> Trigger {
    Trigger {
        id,
        offset: c.offset,
        duration_ms: c.overrides.duration_ms.unwrap_or(config.duration_ms),
        ease: c
            .overrides
            .ease
            .clone()
            .unwrap_or_else(|| config.ease.clone()),
        base_transform: c.base_transform.clone(),
    }
}

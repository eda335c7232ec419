use crate::{
    animation::run::{AnimationRun, RunPhase, VisualState},
    foundation::core::ElementId,
};

#[derive(Clone, Debug)]
struct Slot {
    run: AnimationRun,
    phase: RunPhase,
}

/// Arena of in-flight runs, indexed by [`ElementId`].
///
/// The animator owns no element handles. Each [`Animator::step`] samples every live run and
/// hands the resulting [`VisualState`] to a caller-supplied writer.
#[derive(Debug, Default)]
pub struct Animator {
    slots: Vec<Option<Slot>>,
    live: usize,
    started: usize,
}

/// Outcome of one frame across all runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub sampled: usize,
    pub completed: Vec<ElementId>,
}

impl Animator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a run in `Pending`. Returns `false` if the element already has a live run.
    pub fn start(&mut self, run: AnimationRun) -> bool {
        let idx = run.element.index();
        if idx >= self.slots.len() {
            self.slots.resize_with(idx + 1, || None);
        }
        if self.slots[idx].is_some() {
            tracing::warn!(element = %run.element, "run already live; ignoring second start");
            return false;
        }
        tracing::debug!(
            element = %run.element,
            dx = run.offset.x,
            dy = run.offset.y,
            duration_ms = run.duration_ms,
            "run started"
        );
        self.slots[idx] = Some(Slot {
            run,
            phase: RunPhase::Pending,
        });
        self.live += 1;
        self.started += 1;
        true
    }

    /// Sample every live run at `now_ms`, passing each state to `write`. Completed runs are
    /// dropped from the arena and reported.
    pub fn step<F>(&mut self, now_ms: f64, mut write: F) -> FrameReport
    where
        F: FnMut(ElementId, &VisualState),
    {
        let mut report = FrameReport::default();
        for slot in self.slots.iter_mut() {
            let Some(active) = slot.as_mut() else {
                continue;
            };

            let step = active.run.step(now_ms);
            write(active.run.element, &step.visual);
            report.sampled += 1;

            if step.done {
                report.completed.push(active.run.element);
                *slot = None;
                self.live -= 1;
            } else {
                active.phase = RunPhase::Running;
            }
        }
        for id in &report.completed {
            tracing::debug!(element = %id, "run completed");
        }
        report
    }

    /// Phase of the live run for `id`, if any. Completed runs are no longer tracked.
    pub fn phase(&self, id: ElementId) -> Option<RunPhase> {
        self.slots
            .get(id.index())
            .and_then(Option::as_ref)
            .map(|s| s.phase)
    }

    pub fn is_idle(&self) -> bool {
        self.live == 0
    }

    pub fn live_count(&self) -> usize {
        self.live
    }

    /// Total runs ever started by this animator.
    pub fn started_count(&self) -> usize {
        self.started
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/animator.rs"]
mod tests;

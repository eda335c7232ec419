use crate::{
    animation::{
        animator::Animator,
        run::{AnimationRun, RunPhase},
    },
    config::{Fallback, MuvConfig},
    foundation::core::ElementId,
    host::Host,
    style,
    watch::watcher::{Candidate, CandidateState, Trigger, VisibilityWatcher},
};

/// How a session was set up, decided once during [`Muv::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Mode {
    /// No candidates on the page.
    Idle,
    /// Candidates registered with the host's intersection observer.
    Observing,
    /// No observer support; every candidate was started at once.
    Immediate,
    /// Candidates shown at rest (reduced motion, or no observer support with `LeaveStatic`).
    Static,
}

/// One page session: a [`VisibilityWatcher`] feeding an [`Animator`].
///
/// The host drives the session from its own callbacks: intersection reports go to
/// [`Muv::handle_intersections`], animation frames to [`Muv::on_frame`].
pub struct Muv<H: Host> {
    host: H,
    config: MuvConfig,
    watcher: VisibilityWatcher<H::Element>,
    animator: Animator,
    mode: Mode,
    frame_requested: bool,
}

impl<H: Host> Muv<H> {
    /// Bootstrap a session: inject the baseline rule, discover and hide candidates, then observe
    /// them (or degrade when the host cannot). Never fails; bad config is clamped.
    #[tracing::instrument(skip_all)]
    pub fn initialize(mut host: H, config: MuvConfig) -> Self {
        let config = config.sanitized();
        tracing::info!("muv is running");

        host.inject_style(&style::baseline_rule());

        let mut watcher = VisibilityWatcher::discover(&mut host, &config);
        let mut session = if watcher.is_empty() {
            Self::assemble(host, config, watcher, Mode::Idle)
        } else if config.respect_reduced_motion && host.prefers_reduced_motion() {
            tracing::debug!("reduced motion preferred; showing candidates at rest");
            watcher.show_all_static();
            Self::assemble(host, config, watcher, Mode::Static)
        } else {
            watcher.initialize();
            if host.supports_intersection() {
                watcher.watch(&mut host, config.threshold);
                Self::assemble(host, config, watcher, Mode::Observing)
            } else {
                tracing::warn!(fallback = ?config.fallback, "intersection observation unavailable");
                match config.fallback {
                    Fallback::AnimateImmediately => {
                        let triggers = watcher.trigger_all(&config);
                        let mut session = Self::assemble(host, config, watcher, Mode::Immediate);
                        for t in triggers {
                            session.start_run(t);
                        }
                        session
                    }
                    Fallback::LeaveStatic => {
                        watcher.show_all_static();
                        Self::assemble(host, config, watcher, Mode::Static)
                    }
                }
            }
        };
        session.request_frame_if_live();
        session
    }

    fn assemble(
        host: H,
        config: MuvConfig,
        watcher: VisibilityWatcher<H::Element>,
        mode: Mode,
    ) -> Self {
        Self {
            host,
            config,
            watcher,
            animator: Animator::new(),
            mode,
            frame_requested: false,
        }
    }

    /// Feed one batch of intersection reports `(id, is_intersecting)`. Returns the ids that fired.
    pub fn handle_intersections<I>(&mut self, entries: I) -> Vec<ElementId>
    where
        I: IntoIterator<Item = (ElementId, bool)>,
    {
        let mut fired = Vec::new();
        for (id, is_intersecting) in entries {
            let Some(trigger) =
                self.watcher
                    .on_intersection(&mut self.host, id, is_intersecting, &self.config)
            else {
                continue;
            };
            tracing::debug!(element = %id, "candidate entered viewport");
            self.start_run(trigger);
            fired.push(id);
        }
        self.request_frame_if_live();
        fired
    }

    /// Advance every live run to `now_ms`. Requests another frame while any run is live.
    pub fn on_frame(&mut self, now_ms: f64) {
        self.frame_requested = false;
        let watcher = &mut self.watcher;
        let report = self
            .animator
            .step(now_ms, |id, visual| watcher.apply(id, visual));
        for id in report.completed {
            self.watcher.mark_animated(id);
        }
        self.request_frame_if_live();
    }

    fn start_run(&mut self, t: Trigger) {
        let run = AnimationRun {
            element: t.id,
            offset: t.offset,
            duration_ms: t.duration_ms,
            ease: t.ease,
            start_ms: self.host.now(),
            base_transform: t.base_transform,
        };
        self.animator.start(run);
    }

    fn request_frame_if_live(&mut self) {
        if !self.frame_requested && !self.animator.is_idle() {
            self.frame_requested = true;
            self.host.request_frame();
        }
    }

    /// Run phase for `id`: live phases from the animator, `Completed` once animated.
    pub fn run_phase(&self, id: ElementId) -> Option<RunPhase> {
        if let Some(phase) = self.animator.phase(id) {
            return Some(phase);
        }
        match self.watcher.get(id)?.state {
            CandidateState::Animated => Some(RunPhase::Completed),
            _ => None,
        }
    }

    pub fn state(&self, id: ElementId) -> Option<CandidateState> {
        self.watcher.get(id).map(|c| c.state)
    }

    /// The host element behind `id`.
    pub fn element(&self, id: ElementId) -> Option<&H::Element> {
        self.watcher.get(id).map(|c| &c.element)
    }

    pub fn candidate(&self, id: ElementId) -> Option<&Candidate<H::Element>> {
        self.watcher.get(id)
    }

    pub fn candidates(&self) -> impl Iterator<Item = (ElementId, &Candidate<H::Element>)> {
        self.watcher.iter()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &MuvConfig {
        &self.config
    }

    /// Total runs started during the session.
    pub fn runs_started(&self) -> usize {
        self.animator.started_count()
    }

    /// No live runs.
    pub fn is_idle(&self) -> bool {
        self.animator.is_idle()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

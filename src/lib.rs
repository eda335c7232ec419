//! muv: scroll-triggered slide and fade entrance animations.
//!
//! Elements carrying one or more marker classes (`animated-left`, `animated-right`,
//! `animated-top`, `animated-bottom`) start transparent and displaced, then ease back to rest the
//! first time they become visible.
//!
//! # Pieces
//!
//! 1. [`VisibilityWatcher`]: discovery, marker-to-offset mapping, pre-animation state, and a
//!    one-shot trigger per element.
//! 2. [`Animator`]: an arena of immutable [`AnimationRun`] records sampled as a pure function of
//!    `(run, now)`.
//! 3. [`Muv`]: one page session wiring the two together over a [`Host`].
//!
//! The `web` feature provides the browser [`Host`] (`muv::web`).
#![cfg_attr(not(feature = "web"), forbid(unsafe_code))]

mod animation;
mod config;
mod foundation;
mod host;
mod session;
mod style;
mod watch;

#[cfg(feature = "web")]
pub mod web;

pub use animation::animator::{Animator, FrameReport};
pub use animation::ease::Ease;
pub use animation::run::{AnimationRun, RunPhase, Step, VisualState};
pub use config::overrides::{DURATION_ATTR, EASE_ATTR, ElementOverrides};
pub use config::{
    DEFAULT_BASE_TRANSFORM_ATTR, DEFAULT_DURATION_MS, DEFAULT_OFFSET_PX, DEFAULT_THRESHOLD,
    Fallback, MuvConfig, StartOn,
};
pub use foundation::core::{ElementId, Vec2};
pub use foundation::error::{MuvError, MuvResult};
pub use host::{Host, Surface};
pub use session::{Mode, Muv};
pub use style::{baseline_rule, compose_transform};
pub use watch::marker::{Marker, offset_for, selector};
pub use watch::watcher::{Candidate, CandidateState, Trigger, VisibilityWatcher};

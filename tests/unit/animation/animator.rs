use super::*;
use crate::{animation::ease::Ease, foundation::core::Vec2};

fn run(id: usize, start_ms: f64, duration_ms: f64) -> AnimationRun {
    AnimationRun {
        element: ElementId(id),
        offset: Vec2::new(100.0, 0.0),
        duration_ms,
        ease: Ease::Linear,
        start_ms,
        base_transform: String::new(),
    }
}

#[test]
fn phases_advance_pending_running_completed() {
    let mut anim = Animator::new();
    assert!(anim.start(run(2, 0.0, 100.0)));
    assert_eq!(anim.phase(ElementId(2)), Some(RunPhase::Pending));

    let report = anim.step(50.0, |_, _| {});
    assert_eq!(report.sampled, 1);
    assert!(report.completed.is_empty());
    assert_eq!(anim.phase(ElementId(2)), Some(RunPhase::Running));

    let report = anim.step(100.0, |_, _| {});
    assert_eq!(report.completed, vec![ElementId(2)]);
    assert_eq!(anim.phase(ElementId(2)), None);
    assert!(anim.is_idle());
}

#[test]
fn second_start_for_same_element_is_refused() {
    let mut anim = Animator::new();
    assert!(anim.start(run(0, 0.0, 100.0)));
    assert!(!anim.start(run(0, 10.0, 100.0)));
    assert_eq!(anim.live_count(), 1);
    assert_eq!(anim.started_count(), 1);
}

#[test]
fn runs_progress_independently() {
    let mut anim = Animator::new();
    anim.start(run(0, 0.0, 100.0));
    anim.start(run(1, 50.0, 100.0));

    let mut written = Vec::new();
    let report = anim.step(100.0, |id, v| written.push((id, v.opacity)));
    assert_eq!(written, vec![(ElementId(0), 1.0), (ElementId(1), 0.5)]);
    assert_eq!(report.completed, vec![ElementId(0)]);
    assert_eq!(anim.live_count(), 1);

    let report = anim.step(150.0, |_, _| {});
    assert_eq!(report.completed, vec![ElementId(1)]);
    assert!(anim.is_idle());
    assert_eq!(anim.started_count(), 2);
}

#[test]
fn zero_duration_completes_on_first_frame() {
    let mut anim = Animator::new();
    anim.start(run(0, 0.0, 0.0));
    let mut last = None;
    let report = anim.step(0.0, |_, v| last = Some(v.clone()));
    assert_eq!(report.completed, vec![ElementId(0)]);
    assert_eq!(last.unwrap().opacity, 1.0);
}

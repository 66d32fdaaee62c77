use std::time::{Duration, Instant};

use presence::{Phase, Transition, TransitionConfig, TransitionEvent, DEFAULT_TIMEOUT};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// =============================================================================
// TransitionConfig Tests
// =============================================================================

#[test]
fn test_config_default() {
    let config = TransitionConfig::default();
    assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    assert_eq!(config.timeout, ms(200));
    assert!(!config.appear);
    assert!(!config.unmount_on_exit);
}

#[test]
fn test_config_builder() {
    let config = TransitionConfig::new(ms(50))
        .appear(true)
        .unmount_on_exit(true);

    assert_eq!(config.timeout, ms(50));
    assert!(config.appear);
    assert!(config.unmount_on_exit);

    let config = config.timeout(ms(75));
    assert_eq!(config.timeout, ms(75));
}

// =============================================================================
// Initial Phase Tests
// =============================================================================

#[test]
fn test_initial_inactive_is_exited() {
    let t = Transition::new(TransitionConfig::default(), false);
    assert_eq!(t.phase(), Phase::Exited);
    assert!(!t.is_active());
}

#[test]
fn test_initial_inactive_unmounted_with_unmount_on_exit() {
    let t = Transition::new(TransitionConfig::default().unmount_on_exit(true), false);
    assert_eq!(t.phase(), Phase::Unmounted);
}

#[test]
fn test_initial_active_without_appear_is_entered() {
    let mut t = Transition::new(TransitionConfig::default(), true);
    assert_eq!(t.phase(), Phase::Entered);
    // Nothing to run on mount
    assert_eq!(t.mount(Instant::now()), None);
    assert_eq!(t.phase(), Phase::Entered);
}

#[test]
fn test_initial_active_with_appear_enters_on_mount() {
    let now = Instant::now();
    let mut t = Transition::new(TransitionConfig::default().appear(true), true);
    assert_eq!(t.phase(), Phase::Exited);

    assert_eq!(t.mount(now), Some(TransitionEvent::Enter));
    assert_eq!(t.phase(), Phase::Entering);

    // Appear only runs once
    assert_eq!(t.mount(now), None);
}

#[test]
fn test_cancelled_appear_unmounts() {
    let now = Instant::now();
    let config = TransitionConfig::default().appear(true).unmount_on_exit(true);
    let mut t = Transition::new(config, true);
    assert_eq!(t.phase(), Phase::Exited);

    assert_eq!(t.set_active(false, now), None);
    assert_eq!(t.phase(), Phase::Unmounted);
    assert_eq!(t.mount(now), None);
}

// =============================================================================
// Lifecycle Tests
// =============================================================================

#[test]
fn test_enter_completes_at_deadline() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), false);

    assert_eq!(t.set_active(true, t0), Some(TransitionEvent::Enter));
    assert_eq!(t.phase(), Phase::Entering);
    assert_eq!(t.deadline(), Some(t0 + ms(200)));

    assert_eq!(t.tick(t0 + ms(199)), None);
    assert_eq!(t.phase(), Phase::Entering);

    assert_eq!(t.tick(t0 + ms(200)), Some(TransitionEvent::Entered));
    assert_eq!(t.phase(), Phase::Entered);
    assert_eq!(t.deadline(), None);
}

#[test]
fn test_exit_completes_to_exited() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), true);

    assert_eq!(t.set_active(false, t0), Some(TransitionEvent::Exit));
    assert_eq!(t.phase(), Phase::Exiting);

    assert_eq!(t.tick(t0 + ms(250)), Some(TransitionEvent::Exited));
    assert_eq!(t.phase(), Phase::Exited);
}

#[test]
fn test_exit_unmounts_with_unmount_on_exit() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default().unmount_on_exit(true), true);

    t.set_active(false, t0);
    assert_eq!(t.tick(t0 + ms(200)), Some(TransitionEvent::Exited));
    assert_eq!(t.phase(), Phase::Unmounted);
}

#[test]
fn test_set_active_is_idempotent() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), false);

    assert_eq!(t.set_active(true, t0), Some(TransitionEvent::Enter));
    assert_eq!(t.set_active(true, t0 + ms(50)), None);
    // Repeated value does not restart the clock
    assert_eq!(t.deadline(), Some(t0 + ms(200)));
}

#[test]
fn test_tick_when_settled_is_noop() {
    let mut t = Transition::new(TransitionConfig::default(), false);
    assert_eq!(t.tick(Instant::now()), None);
    assert_eq!(t.phase(), Phase::Exited);
}

#[test]
fn test_reactivate_during_exit_enters_again() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), true);

    t.set_active(false, t0);
    assert_eq!(t.set_active(true, t0 + ms(100)), Some(TransitionEvent::Enter));
    assert_eq!(t.phase(), Phase::Entering);
    assert_eq!(t.deadline(), Some(t0 + ms(300)));
}

#[test]
fn test_deactivate_during_enter_exits() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), false);

    t.set_active(true, t0);
    assert_eq!(t.set_active(false, t0 + ms(50)), Some(TransitionEvent::Exit));
    assert_eq!(t.phase(), Phase::Exiting);
}

#[test]
fn test_zero_timeout_completes_on_next_tick() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::new(Duration::ZERO), false);

    t.set_active(true, t0);
    assert_eq!(t.phase(), Phase::Entering);
    assert_eq!(t.tick(t0), Some(TransitionEvent::Entered));
}

// =============================================================================
// Progress Tests
// =============================================================================

#[test]
fn test_progress_settled_is_one() {
    let t = Transition::new(TransitionConfig::default(), false);
    assert_eq!(t.progress(Instant::now()), 1.0);
}

#[test]
fn test_progress_midway() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::default(), false);
    t.set_active(true, t0);

    assert_eq!(t.progress(t0), 0.0);
    assert!((t.progress(t0 + ms(100)) - 0.5).abs() < 0.0001);
    // Clamped past the deadline
    assert_eq!(t.progress(t0 + ms(400)), 1.0);
}

#[test]
fn test_progress_zero_timeout() {
    let t0 = Instant::now();
    let mut t = Transition::new(TransitionConfig::new(Duration::ZERO), false);
    t.set_active(true, t0);
    assert_eq!(t.progress(t0), 1.0);
}

// =============================================================================
// Phase Tests
// =============================================================================

#[test]
fn test_phase_predicates() {
    assert!(!Phase::Unmounted.is_mounted());
    assert!(Phase::Exited.is_mounted());

    assert!(Phase::Entering.is_transitioning());
    assert!(Phase::Exiting.is_transitioning());
    assert!(!Phase::Entered.is_transitioning());

    assert!(Phase::Entering.is_shown());
    assert!(Phase::Entered.is_shown());
    assert!(!Phase::Exiting.is_shown());
}

#[test]
fn test_phase_display() {
    assert_eq!(Phase::Entering.to_string(), "entering");
    assert_eq!(Phase::default().to_string(), "unmounted");
}

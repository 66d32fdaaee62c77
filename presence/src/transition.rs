//! Transition lifecycle primitive.
//!
//! A [`Transition`] follows a declarative `active` input through the
//! `entering -> entered -> exiting -> exited` phases. Each animated phase
//! lasts for the configured timeout; completion is detected by [`Transition::tick`],
//! which the host calls from its event loop with the current time.

use std::time::{Duration, Instant};

use crate::phase::Phase;

/// Enter and exit duration used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(200);

/// Configuration for a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    /// Duration of both the enter and the exit animation.
    pub timeout: Duration,
    /// Run the enter animation when mounted already active.
    pub appear: bool,
    /// Drop the element from the tree once it has exited.
    pub unmount_on_exit: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            appear: false,
            unmount_on_exit: false,
        }
    }
}

impl TransitionConfig {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Default::default()
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn appear(mut self, appear: bool) -> Self {
        self.appear = appear;
        self
    }

    pub fn unmount_on_exit(mut self, unmount: bool) -> Self {
        self.unmount_on_exit = unmount;
        self
    }
}

/// Lifecycle notifications emitted by a [`Transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionEvent {
    /// The enter animation started.
    Enter,
    /// The enter animation finished.
    Entered,
    /// The exit animation started.
    Exit,
    /// The exit animation finished.
    Exited,
}

/// Drives one element through its enter/exit lifecycle.
#[derive(Debug, Clone)]
pub struct Transition {
    config: TransitionConfig,
    phase: Phase,
    active: bool,
    /// When the current animated phase started.
    started: Option<Instant>,
    /// Mounted active with `appear`: enter runs on `mount`.
    pending_appear: bool,
}

impl Transition {
    /// Create a transition in the phase its initial `active` value implies.
    ///
    /// Nothing animates until [`mount`](Self::mount) or
    /// [`set_active`](Self::set_active) is called.
    pub fn new(config: TransitionConfig, active: bool) -> Self {
        let (phase, pending_appear) = match (active, config.appear) {
            (true, true) => (Phase::Exited, true),
            (true, false) => (Phase::Entered, false),
            (false, _) if config.unmount_on_exit => (Phase::Unmounted, false),
            (false, _) => (Phase::Exited, false),
        };

        Self {
            config,
            phase,
            active,
            started: None,
            pending_appear,
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Run the appear animation if one is pending.
    pub fn mount(&mut self, now: Instant) -> Option<TransitionEvent> {
        if !std::mem::take(&mut self.pending_appear) {
            return None;
        }
        self.enter(now)
    }

    /// Update the `active` input.
    ///
    /// Setting the value it already has is a no-op.
    pub fn set_active(&mut self, active: bool, now: Instant) -> Option<TransitionEvent> {
        if self.active == active {
            return None;
        }
        self.active = active;
        self.pending_appear = false;

        if active { self.enter(now) } else { self.exit(now) }
    }

    /// Complete the running animation if its deadline has passed.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        let deadline = self.deadline()?;
        if now < deadline && !self.config.timeout.is_zero() {
            return None;
        }

        match self.phase {
            Phase::Entering => {
                self.settle(Phase::Entered);
                Some(TransitionEvent::Entered)
            }
            Phase::Exiting => {
                let rest = if self.config.unmount_on_exit {
                    Phase::Unmounted
                } else {
                    Phase::Exited
                };
                self.settle(rest);
                Some(TransitionEvent::Exited)
            }
            _ => None,
        }
    }

    /// When the running animation completes, if one is running.
    pub fn deadline(&self) -> Option<Instant> {
        if !self.phase.is_transitioning() {
            return None;
        }
        self.started.map(|start| start + self.config.timeout)
    }

    /// Progress through the running animation (0.0 to 1.0).
    ///
    /// Settled phases report 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        let Some(start) = self.started.filter(|_| self.phase.is_transitioning()) else {
            return 1.0;
        };
        if self.config.timeout.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f32() / self.config.timeout.as_secs_f32()).min(1.0)
    }

    fn enter(&mut self, now: Instant) -> Option<TransitionEvent> {
        match self.phase {
            Phase::Entering | Phase::Entered => None,
            Phase::Unmounted | Phase::Exited | Phase::Exiting => {
                self.begin(Phase::Entering, now);
                Some(TransitionEvent::Enter)
            }
        }
    }

    fn exit(&mut self, now: Instant) -> Option<TransitionEvent> {
        match self.phase {
            Phase::Entering | Phase::Entered => {
                self.begin(Phase::Exiting, now);
                Some(TransitionEvent::Exit)
            }
            // Cancelled appear: nothing was shown, just drop it.
            Phase::Exited if self.config.unmount_on_exit => {
                self.settle(Phase::Unmounted);
                None
            }
            Phase::Unmounted | Phase::Exited | Phase::Exiting => None,
        }
    }

    fn begin(&mut self, phase: Phase, now: Instant) {
        log::debug!(
            "[transition] {} -> {} (timeout={:?})",
            self.phase, phase, self.config.timeout
        );
        self.phase = phase;
        self.started = Some(now);
    }

    fn settle(&mut self, phase: Phase) {
        log::debug!("[transition] {} -> {}", self.phase, phase);
        self.phase = phase;
        self.started = None;
    }
}

//! Open/close controller on top of the [`Transition`] primitive.
//!
//! The caller only says whether the element should be open. The controller
//! forwards `active = is_open && !is_exiting` to the primitive, so once an
//! exit has started it cannot be reversed: an open request arriving during
//! the exit is held until the exit completes and is picked up by the same
//! [`tick`](TransitionController::tick) that finishes it.
//!
//! ```ignore
//! let mut modal = TransitionController::builder()
//!     .render(|phase, styles: &AnimationStyles| draw_modal(phase, styles))
//!     .on_close_complete(|| log::info!("modal closed"))
//!     .build()?;
//!
//! modal.update(true, Instant::now());
//! loop {
//!     modal.tick(Instant::now());
//!     if let Some(frame) = modal.render() {
//!         // ...
//!     }
//! }
//! ```

use std::time::{Duration, Instant};

use crate::error::{Error, Result};
use crate::phase::Phase;
use crate::styles::AnimationStyles;
use crate::transition::{Transition, TransitionConfig, TransitionEvent, DEFAULT_TIMEOUT};

type RenderFn<R, S> = Box<dyn Fn(Phase, &S) -> R>;
type Callback = Box<dyn FnMut()>;

/// Controller view of the lifecycle, advanced only by primitive events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LifecycleState {
    /// No lifecycle event has fired yet.
    #[default]
    Idle,
    Entering,
    Entered,
    /// Exit in flight; open requests are held.
    Exiting,
    Exited,
}

/// Drives a rendered element in and out based on a boolean intent.
pub struct TransitionController<R, S = AnimationStyles> {
    transition: Transition,
    state: LifecycleState,
    is_open: bool,
    mounted: bool,
    styles: S,
    render: RenderFn<R, S>,
    on_open_complete: Option<Callback>,
    on_close_complete: Option<Callback>,
}

impl<R> TransitionController<R> {
    /// Start building a controller that uses the default [`AnimationStyles`].
    pub fn builder() -> TransitionControllerBuilder<R> {
        TransitionControllerBuilder::new(AnimationStyles::default())
    }
}

impl<R, S> TransitionController<R, S> {
    /// Record the caller's open intent and forward it to the transition.
    ///
    /// Returns the new phase if it changed.
    pub fn update(&mut self, is_open: bool, now: Instant) -> Option<Phase> {
        let before = self.phase();
        if is_open != self.is_open {
            log::debug!("[presence] open {} -> {}", self.is_open, is_open);
            self.is_open = is_open;
        }
        self.sync(now);
        self.changed(before)
    }

    /// Advance the transition clock.
    ///
    /// Fires completion callbacks for animations whose deadline has passed,
    /// then re-evaluates the active signal. Returns the new phase if it
    /// changed.
    pub fn tick(&mut self, now: Instant) -> Option<Phase> {
        let before = self.phase();
        if let Some(event) = self.transition.tick(now) {
            self.dispatch(event);
        }
        self.sync(now);
        self.changed(before)
    }

    /// Render the current phase, or `None` while unmounted.
    pub fn render(&self) -> Option<R> {
        let phase = self.phase();
        if !phase.is_mounted() {
            return None;
        }
        Some((self.render)(phase, &self.styles))
    }

    pub fn phase(&self) -> Phase {
        self.transition.phase()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn styles(&self) -> &S {
        &self.styles
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_exiting(&self) -> bool {
        self.state == LifecycleState::Exiting
    }

    /// The signal forwarded to the transition.
    pub fn active(&self) -> bool {
        self.is_open && !self.is_exiting()
    }

    pub fn is_animating(&self) -> bool {
        self.phase().is_transitioning()
    }

    /// Progress through the running animation (1.0 when settled).
    pub fn progress(&self, now: Instant) -> f32 {
        self.transition.progress(now)
    }

    /// When the running animation completes. Hosts can sleep until then.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.transition.deadline()
    }

    fn sync(&mut self, now: Instant) {
        if !self.mounted {
            self.mounted = true;
            if let Some(event) = self.transition.mount(now) {
                self.dispatch(event);
            }
        }

        if self.is_open && self.is_exiting() {
            log::trace!("[presence] open request held until exit completes");
        }

        let active = self.active();
        if let Some(event) = self.transition.set_active(active, now) {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: TransitionEvent) {
        match event {
            TransitionEvent::Enter => self.state = LifecycleState::Entering,
            TransitionEvent::Entered => {
                self.state = LifecycleState::Entered;
                if let Some(callback) = self.on_open_complete.as_mut() {
                    callback();
                }
            }
            TransitionEvent::Exit => {
                log::debug!("[presence] exit started, guard set");
                self.state = LifecycleState::Exiting;
            }
            TransitionEvent::Exited => {
                log::debug!("[presence] exit complete, guard cleared");
                self.state = LifecycleState::Exited;
                if let Some(callback) = self.on_close_complete.as_mut() {
                    callback();
                }
            }
        }
    }

    fn changed(&self, before: Phase) -> Option<Phase> {
        let after = self.phase();
        (after != before).then_some(after)
    }
}

impl<R, S: std::fmt::Debug> std::fmt::Debug for TransitionController<R, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("transition", &self.transition)
            .field("state", &self.state)
            .field("is_open", &self.is_open)
            .field("styles", &self.styles)
            .finish_non_exhaustive()
    }
}

/// Builder for [`TransitionController`].
pub struct TransitionControllerBuilder<R, S = AnimationStyles> {
    open: bool,
    reduced_motion: bool,
    styles: S,
    render: Option<RenderFn<R, S>>,
    on_open_complete: Option<Callback>,
    on_close_complete: Option<Callback>,
}

impl<R, S> TransitionControllerBuilder<R, S> {
    /// Start a builder whose render callback receives `styles`.
    pub fn new(styles: S) -> Self {
        Self {
            open: false,
            reduced_motion: false,
            styles,
            render: None,
            on_open_complete: None,
            on_close_complete: None,
        }
    }

    /// Initial open intent. An initially open controller animates in on its
    /// first `update` or `tick`.
    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Complete every transition on the next tick.
    pub fn reduced_motion(mut self, enabled: bool) -> Self {
        self.reduced_motion = enabled;
        self
    }

    /// Set the render callback. Required.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(Phase, &S) -> R + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    pub fn on_open_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_open_complete = Some(Box::new(callback));
        self
    }

    pub fn on_close_complete(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_close_complete = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> Result<TransitionController<R, S>> {
        let render = self.render.ok_or(Error::MissingRender)?;

        let timeout = if self.reduced_motion {
            Duration::ZERO
        } else {
            DEFAULT_TIMEOUT
        };
        let config = TransitionConfig::new(timeout)
            .appear(true)
            .unmount_on_exit(true);

        Ok(TransitionController {
            transition: Transition::new(config, self.open),
            state: LifecycleState::Idle,
            is_open: self.open,
            mounted: false,
            styles: self.styles,
            render,
            on_open_complete: self.on_open_complete,
            on_close_complete: self.on_close_complete,
        })
    }
}

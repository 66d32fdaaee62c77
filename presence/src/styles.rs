//! Default style bundle handed to render callbacks.
//!
//! The controller treats the style descriptor as opaque. [`AnimationStyles`]
//! is the bundle used when the caller doesn't supply one: a fade combined
//! with a slight scale-up, resolved per phase by the renderer.

use crate::phase::Phase;

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Apply easing to progress (0.0 to 1.0).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Presentation values for one end of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseStyle {
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Scale factor relative to the natural size.
    pub scale: f32,
}

impl PhaseStyle {
    pub fn new(opacity: f32, scale: f32) -> Self {
        Self { opacity, scale }
    }

    fn lerp(self, to: PhaseStyle, t: f32) -> PhaseStyle {
        PhaseStyle {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            scale: self.scale + (to.scale - self.scale) * t,
        }
    }
}

/// Fade + scale bundle for enter/exit transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStyles {
    /// Values while exited (and at the start of entering).
    pub hidden: PhaseStyle,
    /// Values while entered (and at the start of exiting).
    pub shown: PhaseStyle,
    pub easing: Easing,
}

impl Default for AnimationStyles {
    fn default() -> Self {
        Self {
            hidden: PhaseStyle::new(0.0, 0.95),
            shown: PhaseStyle::new(1.0, 1.0),
            easing: Easing::EaseOut,
        }
    }
}

impl AnimationStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(mut self, style: PhaseStyle) -> Self {
        self.hidden = style;
        self
    }

    pub fn shown(mut self, style: PhaseStyle) -> Self {
        self.shown = style;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Resolve concrete values for `phase` at `progress` through it.
    ///
    /// Progress only matters while entering or exiting.
    pub fn resolve(&self, phase: Phase, progress: f32) -> PhaseStyle {
        match phase {
            Phase::Unmounted | Phase::Exited => self.hidden,
            Phase::Entered => self.shown,
            Phase::Entering => self.hidden.lerp(self.shown, self.easing.apply(progress)),
            Phase::Exiting => self.shown.lerp(self.hidden, self.easing.apply(progress)),
        }
    }
}

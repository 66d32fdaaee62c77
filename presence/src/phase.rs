/// Where an element is within its show/hide transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Not rendered at all.
    #[default]
    Unmounted,
    /// Mounted but fully hidden.
    Exited,
    /// Animating towards visible.
    Entering,
    /// Fully visible.
    Entered,
    /// Animating towards hidden.
    Exiting,
}

impl Phase {
    /// Returns true while an enter or exit animation is running.
    pub fn is_transitioning(self) -> bool {
        matches!(self, Phase::Entering | Phase::Exiting)
    }

    /// Returns true if the element should be in the render tree.
    pub fn is_mounted(self) -> bool {
        self != Phase::Unmounted
    }

    /// Returns true for the phases that end up (or are) visible.
    pub fn is_shown(self) -> bool {
        matches!(self, Phase::Entering | Phase::Entered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Unmounted => "unmounted",
            Phase::Exited => "exited",
            Phase::Entering => "entering",
            Phase::Entered => "entered",
            Phase::Exiting => "exiting",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

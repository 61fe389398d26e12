use crate::selection::SelectionPath;
use crate::stage::Stage;

/// A renderer-reported user action, decoupled from any input technology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEvent {
    LocationSelected(String),
    ColorSelected(String),
    ActivitySelected(String),
    StepForward,
    StepBackward,
    Home,
}

impl NavigationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationEvent::LocationSelected(_) => "location_selected",
            NavigationEvent::ColorSelected(_) => "color_selected",
            NavigationEvent::ActivitySelected(_) => "activity_selected",
            NavigationEvent::StepForward => "step_forward",
            NavigationEvent::StepBackward => "step_backward",
            NavigationEvent::Home => "home",
        }
    }
}

/// A selection event arrived at a stage that does not accept it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalTransition {
    pub requested: &'static str,
    pub stage: Stage,
}

impl std::fmt::Display for IllegalTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not accepted at stage {} ({})",
            self.requested,
            self.stage.index(),
            self.stage
        )
    }
}

impl std::error::Error for IllegalTransition {}

/// Which navigation controls are live for the current stage.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Controls {
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub home_enabled: bool,
}

/// The explorer's single owned piece of mutable state: the current stage
/// plus the accumulated selection path.
///
/// Selection events are legal in exactly one stage each and advance by one;
/// prev/next/home are always accepted (saturating). Stepping backward keeps
/// the deeper selections so stepping forward again restores the prior view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    stage: Stage,
    path: SelectionPath,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn path(&self) -> &SelectionPath {
        &self.path
    }

    pub fn select_location(&mut self, location: impl Into<String>) -> Result<(), IllegalTransition> {
        if self.stage != Stage::Overview {
            return Err(self.illegal("location_selected"));
        }
        self.path.set_location(location);
        self.stage = Stage::ColorBreakdown;
        Ok(())
    }

    // A color/activity selection also requires the shallower fields to be
    // present; the stage alone does not guarantee that once the user has
    // stepped forward past a selection. Keeps the path strictly nested.
    pub fn select_color(&mut self, fur_color: impl Into<String>) -> Result<(), IllegalTransition> {
        if self.stage != Stage::ColorBreakdown || self.path.location().is_none() {
            return Err(self.illegal("color_selected"));
        }
        self.path.set_fur_color(fur_color);
        self.stage = Stage::ActivityBreakdown;
        Ok(())
    }

    pub fn select_activity(&mut self, activity: impl Into<String>) -> Result<(), IllegalTransition> {
        if self.stage != Stage::ActivityBreakdown || self.path.fur_color().is_none() {
            return Err(self.illegal("activity_selected"));
        }
        self.path.set_activity(activity);
        self.stage = Stage::InteractionBreakdown;
        Ok(())
    }

    /// Advances one stage without requiring a selection. A missing path
    /// field downstream renders as the no-data placeholder.
    ///
    /// Returns `false` at the deepest stage, where "next" is a no-op.
    pub fn step_forward(&mut self) -> bool {
        if self.stage.is_last() {
            return false;
        }
        self.stage = self.stage.next();
        true
    }

    /// Steps back one stage; the selection belonging to the stage being
    /// left stays in the path.
    ///
    /// Returns `false` at the overview, where "previous" is a no-op.
    pub fn step_backward(&mut self) -> bool {
        if self.stage.is_first() {
            return false;
        }
        self.stage = self.stage.prev();
        true
    }

    /// Returns to the overview with an empty path, from any stage.
    pub fn reset(&mut self) {
        self.stage = Stage::Overview;
        self.path.clear();
    }

    /// Applies one renderer-reported event as at most one transition.
    ///
    /// `Ok(true)` when the state changed; a saturated prev/next changes
    /// nothing and reports `Ok(false)`. Going home always counts as a
    /// transition, even from a fresh overview.
    pub fn apply(&mut self, event: &NavigationEvent) -> Result<bool, IllegalTransition> {
        match event {
            NavigationEvent::LocationSelected(loc) => {
                self.select_location(loc.clone()).map(|_| true)
            }
            NavigationEvent::ColorSelected(color) => self.select_color(color.clone()).map(|_| true),
            NavigationEvent::ActivitySelected(activity) => {
                self.select_activity(activity.clone()).map(|_| true)
            }
            NavigationEvent::StepForward => Ok(self.step_forward()),
            NavigationEvent::StepBackward => Ok(self.step_backward()),
            NavigationEvent::Home => {
                self.reset();
                Ok(true)
            }
        }
    }

    pub fn controls(&self) -> Controls {
        Controls {
            previous_enabled: !self.stage.is_first(),
            next_enabled: !self.stage.is_last(),
            home_enabled: !self.stage.is_first(),
        }
    }

    fn illegal(&self, requested: &'static str) -> IllegalTransition {
        IllegalTransition {
            requested,
            stage: self.stage,
        }
    }
}

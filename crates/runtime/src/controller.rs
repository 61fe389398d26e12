use compute::scene_data;
use dataset::Dataset;
use scene::{IllegalTransition, NavigationEvent, NavigationState, breadcrumb};

use crate::journal::Journal;
use crate::view::{SceneFrame, SceneView};

/// Owns the loaded dataset and the navigation state, and drives one view.
///
/// Each accepted event is at most one transition followed by exactly one
/// recompute-and-render cycle; a rejected event changes nothing and
/// renders nothing, and a saturated prev/next is a silent no-op with no
/// journal entry and no re-render.
pub struct Explorer<V: SceneView> {
    dataset: Dataset,
    nav: NavigationState,
    view: V,
    journal: Journal,
}

impl<V: SceneView> Explorer<V> {
    pub fn new(dataset: Dataset, view: V) -> Self {
        Self {
            dataset,
            nav: NavigationState::new(),
            view,
            journal: Journal::new(),
        }
    }

    /// Renders the initial overview.
    pub fn start(&mut self) {
        self.journal.record("start", self.nav.stage());
        self.refresh();
    }

    /// Applies one renderer-reported event.
    pub fn handle(&mut self, event: &NavigationEvent) -> Result<(), IllegalTransition> {
        if !self.nav.apply(event)? {
            return Ok(());
        }
        self.journal.record(event.kind(), self.nav.stage());
        self.refresh();
        Ok(())
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn refresh(&mut self) {
        let stage = self.nav.stage();
        let path = self.nav.path().clone();
        let frame = SceneFrame {
            stage,
            data: scene_data(self.dataset.records(), stage, &path),
            breadcrumb: breadcrumb(stage, &path),
            controls: self.nav.controls(),
            path,
        };
        self.view.render(&frame);
    }
}

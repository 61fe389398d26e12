use compute::SceneData;
use scene::{Controls, SelectionPath, Stage};

/// Everything a renderer needs for one stage, built fresh per transition.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub stage: Stage,
    pub data: SceneData,
    pub breadcrumb: String,
    pub controls: Controls,
    pub path: SelectionPath,
}

/// Rendering collaborator, one render call per transition.
///
/// Contract:
/// - `data` may be [`SceneData::NoData`]; the view must show a
///   human-readable placeholder, never a blank chart.
/// - Views report user actions back as `scene::NavigationEvent`s through
///   whatever input loop hosts them; they never mutate navigation state
///   directly.
pub trait SceneView {
    fn render(&mut self, frame: &SceneFrame);
}

use crate::selection::SelectionPath;
use crate::stage::Stage;

const SEPARATOR: &str = " → ";
const MISSING: &str = "(no selection)";

/// Progress line for the current stage, recomputed after every transition.
///
/// Stage 0 carries its own prompt; deeper stages report the chain of
/// confirmed selections joined by an arrow. A field skipped over with the
/// "next" control shows as a missing-selection placeholder.
pub fn breadcrumb(stage: Stage, path: &SelectionPath) -> String {
    let location = path.location().unwrap_or(MISSING);
    let color = path.fur_color().unwrap_or(MISSING);
    let activity = path.activity().unwrap_or(MISSING);

    match stage {
        Stage::Overview => "Scene 0: Park Overview - Click on a park to explore".to_string(),
        Stage::ColorBreakdown => {
            format!("Scene 1: {location} - Fur Colors - Click on a color to continue")
        }
        Stage::ActivityBreakdown => format!(
            "Scene 2: {location}{SEPARATOR}{color} - Activities - Click on an activity bar"
        ),
        Stage::InteractionBreakdown => format!(
            "Scene 3: {location}{SEPARATOR}{color}{SEPARATOR}{activity} - Interactions"
        ),
    }
}

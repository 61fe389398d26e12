use compute::{CountGroup, SceneData};
use runtime::{SceneFrame, SceneView};
use scene::Stage;

const BAR_WIDTH: usize = 40;

/// Plain-text renderer for the four stages.
///
/// Remembers the clickable keys of the last frame so the input loop can
/// turn a typed row number into a selection event.
#[derive(Debug, Default)]
pub struct TextView {
    stage: Stage,
    choices: Vec<String>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The key rendered at 1-based row `index`, if any.
    pub fn choice(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.choices.get(i))
            .map(String::as_str)
    }

    fn print_count_groups(&mut self, groups: &[CountGroup], selectable: bool) {
        let max = groups.iter().map(|g| g.count).max().unwrap_or(0).max(1);
        for (i, group) in groups.iter().enumerate() {
            let width = (group.count * BAR_WIDTH).div_ceil(max);
            let bar = "#".repeat(width);
            if selectable {
                println!("  [{}] {:<16} {} {}", i + 1, group.key, bar, group.count);
                self.choices.push(group.key.clone());
            } else {
                println!("      {:<16} {} {}", group.key, bar, group.count);
            }
        }
    }
}

impl SceneView for TextView {
    fn render(&mut self, frame: &SceneFrame) {
        self.stage = frame.stage;
        self.choices.clear();

        println!();
        println!("{}", frame.breadcrumb);
        println!("{}", "-".repeat(frame.breadcrumb.len()));

        match &frame.data {
            SceneData::Overview(groups) => {
                for (i, g) in groups.iter().enumerate() {
                    let at = match (g.mean_latitude, g.mean_longitude) {
                        (Some(lat), Some(lon)) => format!(" at ({lat:.4}, {lon:.4})"),
                        _ => String::new(),
                    };
                    println!(
                        "  [{}] {} - {} sightings{}  colors: {}",
                        i + 1,
                        g.location,
                        g.count,
                        at,
                        g.colors.join(", ")
                    );
                    self.choices.push(g.location.clone());
                }
            }
            SceneData::Colors(groups) => self.print_count_groups(groups, true),
            SceneData::Activities(groups) => self.print_count_groups(groups, true),
            SceneData::Interactions(report) => {
                self.print_count_groups(&report.groups, false);
                println!();
                println!("  Total observations: {}", report.summary.total);
                match report.summary.approach_percent {
                    Some(pct) => println!(
                        "  Friendly approaches: {} ({pct}%)",
                        report.summary.approaches
                    ),
                    None => println!("  Friendly approaches: none recorded"),
                }
                println!("  This completes the exploration.");
            }
            SceneData::NoData => {
                println!("  No data available for this view.");
            }
        }

        let mut hints: Vec<&str> = Vec::new();
        if !self.choices.is_empty() {
            hints.push("<number> select");
        }
        if frame.controls.next_enabled {
            hints.push("n next");
        }
        if frame.controls.previous_enabled {
            hints.push("b back");
        }
        if frame.controls.home_enabled {
            hints.push("h home");
        }
        hints.push("q quit");
        println!();
        println!("  {}", hints.join(" | "));
    }
}

/// The four exploration stages, totally ordered 0..=3.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Stage {
    #[default]
    Overview,
    ColorBreakdown,
    ActivityBreakdown,
    InteractionBreakdown,
}

impl Stage {
    pub const ALL: [Stage; 4] = [
        Stage::Overview,
        Stage::ColorBreakdown,
        Stage::ActivityBreakdown,
        Stage::InteractionBreakdown,
    ];

    pub fn index(self) -> usize {
        match self {
            Stage::Overview => 0,
            Stage::ColorBreakdown => 1,
            Stage::ActivityBreakdown => 2,
            Stage::InteractionBreakdown => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Stage> {
        Stage::ALL.get(index).copied()
    }

    pub fn is_first(self) -> bool {
        self == Stage::Overview
    }

    pub fn is_last(self) -> bool {
        self == Stage::InteractionBreakdown
    }

    /// Next stage, saturating at the deepest one.
    pub fn next(self) -> Stage {
        Stage::from_index(self.index() + 1).unwrap_or(self)
    }

    /// Previous stage, saturating at the overview.
    pub fn prev(self) -> Stage {
        match self.index().checked_sub(1) {
            Some(i) => Stage::from_index(i).unwrap_or(self),
            None => self,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Overview => "Park Overview",
            Stage::ColorBreakdown => "Fur Colors",
            Stage::ActivityBreakdown => "Activities",
            Stage::InteractionBreakdown => "Interactions",
        };
        f.write_str(name)
    }
}

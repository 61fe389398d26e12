use scene::Stage;

/// One applied navigation transition, for traceability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// 0-based position in the session, counting the initial render as 0.
    pub sequence: u64,
    pub event: &'static str,
    pub stage: Stage,
}

/// Ordered record of every transition the controller applied.
///
/// Rejected events are not recorded; the journal only mirrors state the
/// user actually reached.
#[derive(Debug, Default)]
pub struct Journal {
    transitions: Vec<Transition>,
    next_sequence: u64,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, event: &'static str, stage: Stage) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.transitions.push(Transition {
            sequence,
            event,
            stage,
        });
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn drain(&mut self) -> Vec<Transition> {
        std::mem::take(&mut self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::Journal;
    use scene::Stage;

    #[test]
    fn records_transitions_in_sequence() {
        let mut journal = Journal::new();
        journal.record("start", Stage::Overview);
        journal.record("location_selected", Stage::ColorBreakdown);
        assert_eq!(journal.transitions().len(), 2);
        assert_eq!(journal.transitions()[1].sequence, 1);
        assert_eq!(journal.transitions()[1].stage, Stage::ColorBreakdown);
    }

    #[test]
    fn drain_clears_but_keeps_counting() {
        let mut journal = Journal::new();
        journal.record("start", Stage::Overview);
        let drained = journal.drain();
        assert_eq!(drained.len(), 1);
        assert!(journal.transitions().is_empty());

        journal.record("home", Stage::Overview);
        assert_eq!(journal.transitions()[0].sequence, 1);
    }
}

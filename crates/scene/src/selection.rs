/// The accumulated drill-down selections, strictly nested.
///
/// Nesting contract:
/// - `fur_color` may be set only while `location` is set.
/// - `activity` may be set only while `location` and `fur_color` are set.
///
/// Fields are only written through [`crate::navigation::NavigationState`],
/// which enforces the contract; stepping backward leaves them in place so a
/// later forward step restores the prior view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPath {
    location: Option<String>,
    fur_color: Option<String>,
    activity: Option<String>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn fur_color(&self) -> Option<&str> {
        self.fur_color.as_deref()
    }

    pub fn activity(&self) -> Option<&str> {
        self.activity.as_deref()
    }

    /// Number of populated fields, counted from the front.
    pub fn depth(&self) -> usize {
        [
            self.location.is_some(),
            self.fur_color.is_some(),
            self.activity.is_some(),
        ]
        .iter()
        .take_while(|set| **set)
        .count()
    }

    /// True iff no populated field follows an unpopulated one.
    pub fn is_nested(&self) -> bool {
        let set = [
            self.location.is_some(),
            self.fur_color.is_some(),
            self.activity.is_some(),
        ];
        set.windows(2).all(|w| w[0] || !w[1])
    }

    // Re-selecting a shallower field keeps any deeper fields in place; they
    // are logically unused until their stage is reached again, matching the
    // permissive prev/next controls.
    pub(crate) fn set_location(&mut self, location: impl Into<String>) {
        self.location = Some(location.into());
    }

    pub(crate) fn set_fur_color(&mut self, fur_color: impl Into<String>) {
        debug_assert!(self.location.is_some());
        self.fur_color = Some(fur_color.into());
    }

    pub(crate) fn set_activity(&mut self, activity: impl Into<String>) {
        debug_assert!(self.fur_color.is_some());
        self.activity = Some(activity.into());
    }

    pub(crate) fn clear(&mut self) {
        self.location = None;
        self.fur_color = None;
        self.activity = None;
    }

    /// Confirmed selections in drill-down order, shallowest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.location
            .iter()
            .chain(self.fur_color.iter())
            .chain(self.activity.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::SelectionPath;

    #[test]
    fn depth_counts_leading_fields() {
        let mut path = SelectionPath::new();
        assert_eq!(path.depth(), 0);
        path.set_location("Central Park");
        assert_eq!(path.depth(), 1);
        path.set_fur_color("Gray");
        assert_eq!(path.depth(), 2);
        path.set_activity("Climbing");
        assert_eq!(path.depth(), 3);
        assert!(path.is_nested());
    }

    #[test]
    fn reselecting_a_location_keeps_deeper_fields() {
        let mut path = SelectionPath::new();
        path.set_location("Central Park");
        path.set_fur_color("Gray");
        path.set_activity("Climbing");
        path.set_location("Riverside Park");
        assert_eq!(path.location(), Some("Riverside Park"));
        assert_eq!(path.fur_color(), Some("Gray"));
        assert_eq!(path.activity(), Some("Climbing"));
        assert!(path.is_nested());
    }

    #[test]
    fn labels_iterate_in_drill_down_order() {
        let mut path = SelectionPath::new();
        path.set_location("Central Park");
        path.set_fur_color("Gray");
        let got: Vec<&str> = path.labels().collect();
        assert_eq!(got, vec!["Central Park", "Gray"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut path = SelectionPath::new();
        path.set_location("Central Park");
        path.clear();
        assert_eq!(path, SelectionPath::new());
    }
}

use dataset::Observation;
use scene::{SelectionPath, Stage};

/// The interaction label counted as a positive human reaction.
pub const APPROACH_LABEL: &str = "Approaches";

/// Per-location overview row.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    pub location: String,
    /// All records at the location, coordinates present or not.
    pub count: usize,
    pub mean_latitude: Option<f64>,
    pub mean_longitude: Option<f64>,
    /// Distinct non-empty fur colors, first-occurrence order.
    pub colors: Vec<String>,
}

/// One counted bar for the color, activity, and interaction stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountGroup {
    pub key: String,
    pub count: usize,
}

impl CountGroup {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionSummary {
    pub total: usize,
    pub approaches: usize,
    /// Rounded percentage of approaches; `None` when there is no data,
    /// never a division-by-zero artifact.
    pub approach_percent: Option<u8>,
}

impl InteractionSummary {
    pub fn from_groups(groups: &[CountGroup]) -> Self {
        let total: usize = groups.iter().map(|g| g.count).sum();
        let approaches = groups
            .iter()
            .find(|g| g.key == APPROACH_LABEL)
            .map(|g| g.count)
            .unwrap_or(0);
        let approach_percent = if total > 0 {
            Some((100.0 * approaches as f64 / total as f64).round() as u8)
        } else {
            None
        };
        Self {
            total,
            approaches,
            approach_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReport {
    pub groups: Vec<CountGroup>,
    pub summary: InteractionSummary,
}

/// Everything one stage render consumes, recomputed per transition and
/// discarded afterwards. `NoData` is the explicit empty-result marker:
/// no records match the current path (or the path is missing the field
/// the stage needs), and views must show a placeholder instead of an
/// empty chart.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneData {
    Overview(Vec<LocationGroup>),
    Colors(Vec<CountGroup>),
    Activities(Vec<CountGroup>),
    Interactions(InteractionReport),
    NoData,
}

impl SceneData {
    pub fn is_no_data(&self) -> bool {
        matches!(self, SceneData::NoData)
    }
}

/// Groups records by non-empty location, first-occurrence order.
///
/// Per group: total record count, arithmetic mean of the coordinates that
/// are present (absent coordinates stay in the count but not the mean), and
/// the distinct non-empty fur colors observed.
///
/// Returns `None` when no record carries a location.
pub fn overview_by_location(records: &[Observation]) -> Option<Vec<LocationGroup>> {
    struct Accumulator {
        location: String,
        count: usize,
        latitudes: Vec<f64>,
        longitudes: Vec<f64>,
        colors: Vec<String>,
    }

    let mut groups: Vec<Accumulator> = Vec::new();
    for record in records {
        if record.location.is_empty() {
            continue;
        }
        let idx = match groups.iter().position(|g| g.location == record.location) {
            Some(idx) => idx,
            None => {
                groups.push(Accumulator {
                    location: record.location.clone(),
                    count: 0,
                    latitudes: Vec::new(),
                    longitudes: Vec::new(),
                    colors: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let acc = &mut groups[idx];
        acc.count += 1;
        if let Some(lat) = record.latitude {
            acc.latitudes.push(lat);
        }
        if let Some(lon) = record.longitude {
            acc.longitudes.push(lon);
        }
        if !record.fur_color.is_empty() && !acc.colors.iter().any(|c| c == &record.fur_color) {
            acc.colors.push(record.fur_color.clone());
        }
    }

    if groups.is_empty() {
        return None;
    }
    Some(
        groups
            .into_iter()
            .map(|acc| LocationGroup {
                location: acc.location,
                count: acc.count,
                mean_latitude: mean(&acc.latitudes),
                mean_longitude: mean(&acc.longitudes),
                colors: acc.colors,
            })
            .collect(),
    )
}

/// Fur color counts at one location, first-occurrence order.
///
/// Records with an empty color are excluded. `None` when nothing matches.
pub fn colors_for_location(records: &[Observation], location: &str) -> Option<Vec<CountGroup>> {
    let mut groups: Vec<CountGroup> = Vec::new();
    for record in records {
        if record.location != location || record.fur_color.is_empty() {
            continue;
        }
        bump(&mut groups, &record.fur_color);
    }
    non_empty(groups)
}

/// Activity counts for one location and color, count-descending.
///
/// Each record fans out to every label in its parsed activities field, so a
/// record counts once per label. Malformed activity fields contribute
/// nothing. Ties keep first-encountered order (stable sort). `None` when no
/// label survives.
pub fn activities_for(
    records: &[Observation],
    location: &str,
    fur_color: &str,
) -> Option<Vec<CountGroup>> {
    let mut groups: Vec<CountGroup> = Vec::new();
    for record in records {
        if record.location != location || record.fur_color != fur_color {
            continue;
        }
        for label in record.activity_labels() {
            bump(&mut groups, &label);
        }
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    non_empty(groups)
}

/// Interaction counts for records at `location` with `fur_color` whose
/// parsed activity labels contain `activity`, count-descending with stable
/// ties, plus the approach summary. `None` when nothing matches.
pub fn interactions_for(
    records: &[Observation],
    location: &str,
    fur_color: &str,
    activity: &str,
) -> Option<InteractionReport> {
    let mut groups: Vec<CountGroup> = Vec::new();
    for record in records {
        if record.location != location || record.fur_color != fur_color {
            continue;
        }
        if !record.activity_labels().iter().any(|l| l == activity) {
            continue;
        }
        bump(&mut groups, record.interaction_or_unknown());
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    let groups = non_empty(groups)?;
    let summary = InteractionSummary::from_groups(&groups);
    Some(InteractionReport { groups, summary })
}

/// Aggregation entry point for one stage render.
///
/// Deterministic in `(records, stage, path)`. A path missing the field the
/// stage needs is not an error; it degrades to [`SceneData::NoData`], which
/// keeps the permissive "next" control safe.
pub fn scene_data(records: &[Observation], stage: Stage, path: &SelectionPath) -> SceneData {
    match stage {
        Stage::Overview => match overview_by_location(records) {
            Some(groups) => SceneData::Overview(groups),
            None => SceneData::NoData,
        },
        Stage::ColorBreakdown => {
            let Some(location) = path.location() else {
                return SceneData::NoData;
            };
            match colors_for_location(records, location) {
                Some(groups) => SceneData::Colors(groups),
                None => SceneData::NoData,
            }
        }
        Stage::ActivityBreakdown => {
            let (Some(location), Some(color)) = (path.location(), path.fur_color()) else {
                return SceneData::NoData;
            };
            match activities_for(records, location, color) {
                Some(groups) => SceneData::Activities(groups),
                None => SceneData::NoData,
            }
        }
        Stage::InteractionBreakdown => {
            let (Some(location), Some(color), Some(activity)) =
                (path.location(), path.fur_color(), path.activity())
            else {
                return SceneData::NoData;
            };
            match interactions_for(records, location, color, activity) {
                Some(report) => SceneData::Interactions(report),
                None => SceneData::NoData,
            }
        }
    }
}

fn bump(groups: &mut Vec<CountGroup>, key: &str) {
    match groups.iter_mut().find(|g| g.key == key) {
        Some(g) => g.count += 1,
        None => groups.push(CountGroup::new(key, 1)),
    }
}

fn non_empty(groups: Vec<CountGroup>) -> Option<Vec<CountGroup>> {
    if groups.is_empty() { None } else { Some(groups) }
}

// Arithmetic mean over the coordinate values that are present; a group
// where every record lacks the coordinate has no mean.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::{
        CountGroup, InteractionSummary, SceneData, activities_for, colors_for_location,
        interactions_for, overview_by_location, scene_data,
    };
    use dataset::Observation;
    use pretty_assertions::assert_eq;
    use scene::{NavigationState, Stage};

    fn obs(location: &str, color: &str, activities: &str, interaction: &str) -> Observation {
        Observation {
            location: location.to_string(),
            fur_color: color.to_string(),
            activities: activities.to_string(),
            interaction: interaction.to_string(),
            ..Observation::default()
        }
    }

    #[test]
    fn overview_groups_in_first_occurrence_order() {
        let records = vec![
            Observation {
                latitude: Some(40.0),
                longitude: Some(-73.0),
                ..obs("Park A", "Gray", "", "")
            },
            obs("Park B", "Black", "", ""),
            Observation {
                latitude: Some(42.0),
                longitude: None,
                ..obs("Park A", "Gray", "", "")
            },
            obs("", "White", "", ""),
        ];

        let groups = overview_by_location(&records).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].location, "Park A");
        assert_eq!(groups[0].count, 2);
        // One record has no coordinates; it stays in the count but not the mean.
        assert_eq!(groups[0].mean_latitude, Some(41.0));
        assert_eq!(groups[0].mean_longitude, Some(-73.0));
        assert_eq!(groups[0].colors, vec!["Gray".to_string()]);
        assert_eq!(groups[1].location, "Park B");
    }

    #[test]
    fn overview_mean_is_absent_when_no_record_has_coordinates() {
        let records = vec![
            obs("Park A", "Gray", "", ""),
            obs("Park A", "Black", "", ""),
        ];

        let groups = overview_by_location(&records).unwrap();
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].mean_latitude, None);
        assert_eq!(groups[0].mean_longitude, None);
    }

    #[test]
    fn overview_of_empty_dataset_is_the_empty_marker() {
        assert_eq!(overview_by_location(&[]), None);
        assert_eq!(overview_by_location(&[obs("", "Gray", "", "")]), None);
    }

    #[test]
    fn color_counts_match_the_park_scenario() {
        let records = vec![
            obs("Park A", "Gray", "", ""),
            obs("Park A", "Gray", "", ""),
            obs("Park A", "Black", "", ""),
            obs("Park B", "Cinnamon", "", ""),
            obs("Park A", "", "", ""),
        ];

        let groups = colors_for_location(&records, "Park A").unwrap();
        assert_eq!(
            groups,
            vec![CountGroup::new("Gray", 2), CountGroup::new("Black", 1)]
        );
    }

    #[test]
    fn color_counts_for_unknown_location_are_the_empty_marker() {
        let records = vec![obs("Park A", "Gray", "", "")];
        assert_eq!(colors_for_location(&records, "Park Z"), None);
    }

    #[test]
    fn activities_fan_out_per_label_and_sort_descending() {
        let records = vec![
            obs("Park A", "Gray", "['Climbing', 'Eating']", ""),
            obs("Park A", "Gray", "['Climbing']", ""),
            obs("Park A", "Black", "['Running']", ""),
            obs("Park A", "Gray", "garbage", ""),
        ];

        let groups = activities_for(&records, "Park A", "Gray").unwrap();
        assert_eq!(
            groups,
            vec![CountGroup::new("Climbing", 2), CountGroup::new("Eating", 1)]
        );
    }

    #[test]
    fn activity_ties_keep_first_encountered_order() {
        let records = vec![
            obs("Park A", "Gray", "['Eating', 'Running']", ""),
            obs("Park A", "Gray", "['Climbing', 'Climbing']", ""),
        ];

        let groups = activities_for(&records, "Park A", "Gray").unwrap();
        // All counts are 1; the stable sort preserves encounter order,
        // and the duplicated in-row label still counts once.
        assert_eq!(
            groups,
            vec![
                CountGroup::new("Eating", 1),
                CountGroup::new("Running", 1),
                CountGroup::new("Climbing", 1),
            ]
        );
    }

    #[test]
    fn interactions_filter_on_the_parsed_labels() {
        let records = vec![
            obs("Park A", "Gray", "['Climbing']", "Approaches"),
            obs("Park A", "Gray", "['Climbing', 'Eating']", "Runs From"),
            obs("Park A", "Gray", "['Eating']", "Approaches"),
            obs("Park A", "Gray", "['Climbing']", ""),
            obs("Park A", "Black", "['Climbing']", "Approaches"),
        ];

        let report = interactions_for(&records, "Park A", "Gray", "Climbing").unwrap();
        assert_eq!(
            report.groups,
            vec![
                CountGroup::new("Approaches", 1),
                CountGroup::new("Runs From", 1),
                CountGroup::new("Unknown", 1),
            ]
        );
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.approaches, 1);
        assert_eq!(report.summary.approach_percent, Some(33));
    }

    #[test]
    fn interaction_summary_percent_is_undefined_for_zero_total() {
        let summary = InteractionSummary::from_groups(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.approach_percent, None);
    }

    #[test]
    fn scene_data_degrades_to_no_data_without_a_selection() {
        let records = vec![obs("Park A", "Gray", "['Climbing']", "Approaches")];
        let nav = NavigationState::new();
        // "next" pressed straight from the overview: no location selected.
        let data = scene_data(&records, Stage::ColorBreakdown, nav.path());
        assert_eq!(data, SceneData::NoData);
    }

    #[test]
    fn scene_data_is_deterministic() {
        let records = vec![
            obs("Park A", "Gray", "['Climbing', 'Eating']", "Approaches"),
            obs("Park A", "Gray", "['Climbing']", "Runs From"),
        ];
        let mut nav = NavigationState::new();
        nav.select_location("Park A").unwrap();
        nav.select_color("Gray").unwrap();

        let first = scene_data(&records, nav.stage(), nav.path());
        let second = scene_data(&records, nav.stage(), nav.path());
        assert_eq!(first, second);
        assert!(matches!(first, SceneData::Activities(_)));
    }

    #[test]
    fn every_stage_tolerates_an_empty_dataset() {
        let mut nav = NavigationState::new();
        for stage in Stage::ALL {
            assert_eq!(scene_data(&[], stage, nav.path()), SceneData::NoData);
            nav.step_forward();
        }
    }
}

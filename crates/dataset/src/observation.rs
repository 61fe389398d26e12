use serde::Deserialize;

use crate::activities::parse_activity_list;

/// One raw observation row, immutable after load.
///
/// Column names follow the dataset contract (`location`, `latitude`,
/// `longitude`, `furColor`, `activities`, `interaction`); the census
/// export's `park_name`/`fur_color` headers are accepted as aliases.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Observation {
    #[serde(default, alias = "park_name")]
    pub location: String,
    /// Missing coordinates exclude the row from spatial means, not from counts.
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default, rename = "furColor", alias = "fur_color")]
    pub fur_color: String,
    /// Raw list-like string, e.g. `"['Climbing', 'Eating']"`. Parsed on
    /// demand via [`Observation::activity_labels`].
    #[serde(default)]
    pub activities: String,
    #[serde(default)]
    pub interaction: String,
}

impl Observation {
    /// Parsed activity labels for this row (empty on any malformed input).
    pub fn activity_labels(&self) -> Vec<String> {
        parse_activity_list(&self.activities)
    }

    /// Interaction label with `"Unknown"` substituted for an empty field.
    pub fn interaction_or_unknown(&self) -> &str {
        if self.interaction.is_empty() {
            "Unknown"
        } else {
            &self.interaction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Observation;

    #[test]
    fn empty_interaction_reads_as_unknown() {
        let mut obs = Observation::default();
        assert_eq!(obs.interaction_or_unknown(), "Unknown");
        obs.interaction = "Runs From".to_string();
        assert_eq!(obs.interaction_or_unknown(), "Runs From");
    }

    #[test]
    fn activity_labels_come_from_the_raw_field() {
        let obs = Observation {
            activities: "['Foraging']".to_string(),
            ..Observation::default()
        };
        assert_eq!(obs.activity_labels(), vec!["Foraging".to_string()]);
    }
}

use serde_json::Value;

/// Parses the loosely formatted activities field into trimmed labels.
///
/// The census export serializes the list with single quotes
/// (`"['Climbing', 'Eating']"`), so quotes are normalized before the
/// structured parse.
///
/// Total contract:
/// - Never fails. Anything that is not a bracketed list of strings
///   (including an empty field or garbage) yields an empty list.
/// - Labels are trimmed; empty labels are dropped.
/// - Duplicate labels within one row are dropped, keeping first occurrence.
pub fn parse_activity_list(raw: &str) -> Vec<String> {
    if !raw.contains('[') {
        return Vec::new();
    }

    let normalized = raw.replace('\'', "\"");
    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&normalized) else {
        return Vec::new();
    };

    let mut labels: Vec<String> = Vec::new();
    for item in &items {
        let Some(label) = item.as_str() else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        if !labels.iter().any(|l| l == label) {
            labels.push(label.to_string());
        }
    }
    labels
}

use serde::Deserialize;
use serde_json::Value;

/// Top-level Meteomatics JSON response.
///
/// Every field defaults when absent, and fields whose shape the API does
/// not guarantee are kept as raw [`Value`]s, so a payload with missing or
/// oddly-typed pieces still summarizes instead of failing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePayload {
    pub status: Value,
    pub version: Value,
    #[serde(rename = "dateGenerated")]
    pub date_generated: Value,
    pub data: Value,
}

/// One entry of the `data` array: a parameter and its coordinate blocks.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParameterEntry {
    pub parameter: Value,
    pub coordinates: Vec<CoordinateBlock>,
}

/// Samples for one location, in the order the API returned them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CoordinateBlock {
    pub lat: Value,
    pub lon: Value,
    pub dates: Vec<Sample>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sample {
    pub date: Value,
    pub value: Value,
}

impl ResponsePayload {
    /// Interpret a raw JSON document as a response payload.
    ///
    /// A document that is not a JSON object degrades to an all-default
    /// payload rather than an error.
    pub fn from_value(raw: &Value) -> Self {
        serde_json::from_value(raw.clone()).unwrap_or_default()
    }
}

/// Render the human-readable digest: one header line, then one line per
/// parameter entry.
///
/// Only the first coordinate block of each parameter is summarized.
/// Samples whose value is not a JSON number are excluded from min/max but
/// still counted and shown in the sample list.
pub fn summarize(payload: &ResponsePayload) -> String {
    let mut lines = vec![format!(
        "Status: {} | API version: {} | Generated: {}",
        text_or(&payload.status, "<unknown>"),
        text_or(&payload.version, "<unknown>"),
        text_or(&payload.date_generated, "<unknown>"),
    )];

    let entries = match payload.data.as_array() {
        Some(entries) if !entries.is_empty() => entries,
        _ => {
            lines.push("No 'data' array found in response.".to_string());
            return lines.join("\n");
        }
    };

    for raw_entry in entries {
        let entry: ParameterEntry = serde_json::from_value(raw_entry.clone()).unwrap_or_default();
        let name = text_or(&entry.parameter, "<unknown>");
        let coord = match entry.coordinates.first() {
            Some(coord) => coord,
            None => {
                lines.push(format!("Parameter {}: no coordinates returned", name));
                continue;
            }
        };
        lines.push(parameter_line(&name, coord));
    }

    lines.join("\n")
}

fn parameter_line(name: &str, coord: &CoordinateBlock) -> String {
    let count = coord.dates.len();

    let numeric: Vec<f64> = coord.dates.iter().filter_map(|s| s.value.as_f64()).collect();
    let v_min = numeric
        .iter()
        .cloned()
        .reduce(f64::min)
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "<na>".to_string());
    let v_max = numeric
        .iter()
        .cloned()
        .reduce(f64::max)
        .map(|v| format!("{:.3}", v))
        .unwrap_or_else(|| "<na>".to_string());

    let ts_first = coord
        .dates
        .first()
        .map(|s| text_or(&s.date, "<none>"))
        .unwrap_or_else(|| "<none>".to_string());
    let ts_last = coord
        .dates
        .last()
        .map(|s| text_or(&s.date, "<none>"))
        .unwrap_or_else(|| "<none>".to_string());

    let samples = if count == 0 {
        "<no samples>".to_string()
    } else {
        coord
            .dates
            .iter()
            .take(3)
            .map(|s| format!("{}={}", text_or(&s.date, "<none>"), raw_text(&s.value)))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Parameter: {} | Lat/Lon: {},{} | Count: {} | Range: {} → {} | Min/Max: {}/{} | Samples: {}",
        name,
        text_or(&coord.lat, "<unknown>"),
        text_or(&coord.lon, "<unknown>"),
        count,
        ts_first,
        ts_last,
        v_min,
        v_max,
        samples
    )
}

/// Raw display form of a JSON value: strings unquoted, everything else as
/// its JSON rendering.
fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn text_or(value: &Value, fallback: &str) -> String {
    if value.is_null() {
        fallback.to_string()
    } else {
        raw_text(value)
    }
}

//! Host payload (`{ events, options }`) to `TimelinePayload` decoder.
//!
//! htmlwidgets serializes R data frames column-wise by default, while hand-built
//! lists arrive row-wise; both shapes are accepted. Malformed fields degrade to
//! empty text instead of failing the render.

use serde_json::{Map, Value};
use timeline_core::{TimelineError, TimelineEvent, TimelineOptions, TimelinePayload};

/// Decode a payload from a JSON string.
pub fn parse_payload_str(payload_json: &str) -> Result<TimelinePayload, TimelineError> {
    let value: Value =
        serde_json::from_str(payload_json).map_err(|err| TimelineError::Parse(err.to_string()))?;
    parse_payload_value(&value)
}

/// Decode a payload from a `serde_json::Value`.
pub fn parse_payload_value(payload: &Value) -> Result<TimelinePayload, TimelineError> {
    let object = payload.as_object().ok_or_else(|| {
        TimelineError::Parse(format!(
            "Expected payload object, received {}",
            value_kind(payload)
        ))
    })?;

    let events = match object.get("events") {
        None => return Err(TimelineError::MissingData),
        Some(Value::Null) => Vec::new(),
        Some(Value::Array(rows)) => rows.iter().map(event_from_row).collect(),
        Some(Value::Object(columns)) => events_from_columns(columns),
        Some(other) => {
            return Err(TimelineError::Parse(format!(
                "Expected events array or column object, received {}",
                value_kind(other)
            )))
        }
    };

    let options = object
        .get("options")
        .and_then(Value::as_object)
        .map(options_from_object)
        .unwrap_or_default();

    Ok(TimelinePayload { events, options })
}

fn event_from_row(row: &Value) -> TimelineEvent {
    let Some(fields) = row.as_object() else {
        tracing::trace!(kind = value_kind(row), "event row is not an object");
        return TimelineEvent::default();
    };

    TimelineEvent {
        date: fields.get("date").map(coerce_text).unwrap_or_default(),
        content: fields.get("content").map(coerce_text).unwrap_or_default(),
    }
}

fn events_from_columns(columns: &Map<String, Value>) -> Vec<TimelineEvent> {
    let dates = column(columns, "date");
    let contents = column(columns, "content");
    let rows = dates.len().max(contents.len());
    tracing::debug!(rows, "decoding column-wise events");

    (0..rows)
        .map(|index| TimelineEvent {
            date: dates.get(index).map(|v| coerce_text(v)).unwrap_or_default(),
            content: contents
                .get(index)
                .map(|v| coerce_text(v))
                .unwrap_or_default(),
        })
        .collect()
}

fn column<'a>(columns: &'a Map<String, Value>, name: &str) -> Vec<&'a Value> {
    match columns.get(name) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(values)) => values.iter().collect(),
        // jsonlite unboxes single-row columns to scalars.
        Some(scalar) => vec![scalar],
    }
}

/// Render a JSON scalar as display text; anything structured becomes "".
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            tracing::trace!(kind = value_kind(value), "field coerced to empty text");
            String::new()
        }
    }
}

fn options_from_object(options: &Map<String, Value>) -> TimelineOptions {
    TimelineOptions {
        interactive: options.get("interactive").and_then(flag_value),
        list_class: options
            .get("list_class")
            .and_then(Value::as_str)
            .map(str::to_string),
        selection_suffix: options
            .get("selection_suffix")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn flag_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        // Single logical vectors sometimes stay boxed.
        Value::Array(values) if values.len() == 1 => values[0].as_bool(),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Tagged parse of model output.
//!
//! The model is asked for strict JSON but cannot be trusted to return it.
//! Instead of duck-typing the reply, the outcome is an explicit tag: either a
//! JSON object was recovered, or the raw text is kept for the fallback path.

use serde_json::{Map, Value};

/// Outcome of parsing model output.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelReply {
    /// A JSON object, parsed directly or recovered from surrounding prose.
    Parsed(Map<String, Value>),
    /// No object could be recovered; the raw text is kept verbatim.
    Unparsed(String),
}

impl ModelReply {
    /// Parse raw model output.
    ///
    /// A strict parse runs first. If the body parses as JSON that is not an
    /// object, the raw text is kept as-is. If it does not parse at all, the
    /// substring between the first `{` and the last `}` is reparsed before
    /// giving up, since models commonly wrap their JSON in prose.
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => return ModelReply::Parsed(object),
            Ok(_) => return ModelReply::Unparsed(raw.to_string()),
            Err(_) => {}
        }

        if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
            if end > start {
                if let Ok(Value::Object(object)) =
                    serde_json::from_str::<Value>(&raw[start..=end])
                {
                    return ModelReply::Parsed(object);
                }
            }
        }

        ModelReply::Unparsed(raw.to_string())
    }
}

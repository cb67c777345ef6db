//! JSON recovery from raw model text.

use serde_json::Value;

/// Locate and parse the outermost `{...}` span in raw model output.
///
/// No repair beyond span location: markdown fences, prose, or trailing
/// notes around the object are tolerated, a malformed object is not.
#[must_use]
pub fn extract_json_object(raw: &str) -> Option<Value> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    let value: Value = serde_json::from_str(&raw[start..=end]).ok()?;
    value.is_object().then_some(value)
}

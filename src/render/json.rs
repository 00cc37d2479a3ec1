use crate::error::Result;
use crate::select::SelectionResult;

/// JSON object with the selected entries and the grand total.
pub fn render(result: &SelectionResult) -> Result<String> {
    // SelectionResult is a plain serde struct; serialization cannot
    // fail on it short of an allocation error.
    serde_json::to_string_pretty(result).map_err(|e| crate::error::DuscopeError::InvariantViolation(
        format!("selection not serializable: {e}"),
    ))
}

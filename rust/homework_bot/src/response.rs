use serde_json::{Map, Value};

use crate::error::PollError;

/// A validated, non-empty answer from the homework API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiAnswer {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Checks the top-level shape of an API answer.
///
/// Individual homework records are checked later by [`crate::verdict::parse_status`];
/// both raise [`PollError::Shape`]. An empty `homeworks` list is reported as
/// [`PollError::NothingNew`] so the caller can still move its watermark.
pub fn check_response(response: &Map<String, Value>) -> Result<ApiAnswer, PollError> {
    let homeworks = response
        .get("homeworks")
        .ok_or_else(|| PollError::shape("missing `homeworks`"))?
        .as_array()
        .ok_or_else(|| PollError::shape("`homeworks` is not a list"))?;
    let current_date = response
        .get("current_date")
        .ok_or_else(|| PollError::shape("missing `current_date`"))?
        .as_i64()
        .ok_or_else(|| PollError::shape("`current_date` is not an integer"))?;

    if homeworks.is_empty() {
        return Err(PollError::NothingNew { current_date });
    }
    Ok(ApiAnswer { homeworks: homeworks.clone(), current_date })
}

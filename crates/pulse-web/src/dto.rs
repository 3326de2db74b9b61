use pulse_core::SortKey;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Query string of `GET /mentions`
#[derive(Debug, Default, Deserialize)]
pub struct MentionsQuery {
  pub sort: Option<String>,
  pub ascending: Option<String>,
}

impl MentionsQuery {
  /// Sort key and direction; mentions descending when unspecified
  pub fn ordering(&self) -> Result<(SortKey, bool), ApiError> {
    let key = match self.sort.as_deref() {
      None => SortKey::default(),
      Some(raw) => raw
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("sort must be 'mentions' or 'sentiment', got '{}'", raw)))?,
    };

    let ascending = match self.ascending.as_deref() {
      None => false,
      Some(raw) if raw.eq_ignore_ascii_case("true") => true,
      Some(raw) if raw.eq_ignore_ascii_case("false") => false,
      Some(raw) => {
        return Err(ApiError::BadRequest(format!("ascending must be 'true' or 'false', got '{}'", raw)));
      }
    };

    Ok((key, ascending))
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
  pub status: String,
  pub version: String,
}

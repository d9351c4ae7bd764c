//! Path parameter parsing.

use uuid::Uuid;

use crate::backend::error::BackendError;

/// Parse a record id taken from the URL path
///
/// A malformed id is a client mistake, so it becomes a 400 naming the kind
/// of record, e.g. `"Invalid post id"`.
pub fn parse_id(raw: &str, thing: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(raw).map_err(|_| BackendError::bad_request(format!("Invalid {} id", thing)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_parse_valid_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "post").unwrap(), id);
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = parse_id("not-a-uuid", "post").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid post id");
    }
}

//! Errors surfaced by the Supabase client

use serde::de::DeserializeOwned;

/// Authentication and data access errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// The provider answered with a non-success status
    #[error("{message}")]
    Provider { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from the server: {0}")]
    Decode(String),

    #[error("Authentication is not configured")]
    NotConfigured,

    #[error("Session storage unavailable: {0}")]
    Storage(String),

    #[error("Not signed in")]
    NotSignedIn,
}

impl AuthError {
    /// Build a provider error from a failed response body.
    ///
    /// GoTrue and PostgREST disagree on the error shape, so the message is
    /// picked from the first of `error_description`, `msg`, `message`, `error`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error_description", "msg", "message", "error"]
                    .iter()
                    .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
                    .map(str::to_string)
            })
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        AuthError::Provider { status, message }
    }

    /// The provider no longer knows the session (already signed out or expired)
    pub fn is_session_missing(&self) -> bool {
        matches!(
            self,
            AuthError::Provider {
                status: 401 | 403 | 404,
                ..
            }
        )
    }
}

/// Status code and body of a finished HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode a JSON body, mapping error statuses to [`AuthError::Provider`]
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, AuthError> {
        self.ensure_success()?;
        serde_json::from_str(&self.body).map_err(|e| AuthError::Decode(e.to_string()))
    }

    pub fn ensure_success(&self) -> Result<(), AuthError> {
        if self.is_success() {
            Ok(())
        } else {
            Err(AuthError::from_response(self.status, &self.body))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gotrue_legacy_error_shape() {
        let err = AuthError::from_response(
            400,
            r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        assert_eq!(
            err,
            AuthError::Provider {
                status: 400,
                message: "Invalid login credentials".to_string()
            }
        );
        assert_eq!(err.to_string(), "Invalid login credentials");
    }

    #[test]
    fn test_gotrue_current_error_shape() {
        let err = AuthError::from_response(
            422,
            r#"{"code":422,"error_code":"user_already_exists","msg":"User already registered"}"#,
        );
        assert_eq!(err.to_string(), "User already registered");
    }

    #[test]
    fn test_postgrest_error_shape() {
        let err = AuthError::from_response(
            406,
            r#"{"code":"PGRST116","details":"The result contains 0 rows","message":"JSON object requested, multiple (or no) rows returned"}"#,
        );
        assert_eq!(
            err.to_string(),
            "JSON object requested, multiple (or no) rows returned"
        );
    }

    #[test]
    fn test_unparseable_body_falls_back_to_status() {
        let err = AuthError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Request failed with status 502");

        let blank = AuthError::from_response(500, r#"{"msg":"  "}"#);
        assert_eq!(blank.to_string(), "Request failed with status 500");
    }

    #[test]
    fn test_is_session_missing() {
        assert!(AuthError::from_response(401, "").is_session_missing());
        assert!(AuthError::from_response(403, "").is_session_missing());
        assert!(AuthError::from_response(404, "").is_session_missing());
        assert!(!AuthError::from_response(500, "").is_session_missing());
        assert!(!AuthError::Network("offline".to_string()).is_session_missing());
    }

    #[test]
    fn test_raw_response_json() {
        let ok = RawResponse {
            status: 200,
            body: r#"{"value": 7}"#.to_string(),
        };
        let value: serde_json::Value = ok.json().unwrap();
        assert_eq!(value["value"], 7);

        let garbage = RawResponse {
            status: 200,
            body: "not json".to_string(),
        };
        assert!(matches!(
            garbage.json::<serde_json::Value>(),
            Err(AuthError::Decode(_))
        ));

        let failed = RawResponse {
            status: 400,
            body: r#"{"msg":"nope"}"#.to_string(),
        };
        assert_eq!(
            failed.json::<serde_json::Value>().unwrap_err().to_string(),
            "nope"
        );
    }
}

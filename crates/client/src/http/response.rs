//! Response parsing utilities for the HTTP client

use {
    ::tracing::trace,
    anyhow::Context,
    reqwest::Response,
    serde::{de::DeserializeOwned, Deserialize},
    serde_json::Value,
    std::fmt::Debug,
};

/// Error body of the identity-service API: `{"error": {"code", "message"}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: ApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub message: String,
}

/// Extracts the backend's own message from an error payload.
///
/// The identity service wraps errors as `{"error": {"message": …}}`; the
/// realtime database returns `{"error": "…"}`. Anything else is surfaced as
/// the raw body.
pub(crate) fn extract_error_message(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        return parsed.error.message;
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(msg)) = map.get("error") {
            return msg.clone();
        }
    }

    body.trim().to_string()
}

/// Response parsing methods for the Firebase admin client
impl super::client::FirebaseAdminClient {
    pub(crate) async fn parse_response<T: DeserializeOwned + Debug>(
        &self,
        res: Response,
    ) -> anyhow::Result<T> {
        let status = res.status();
        let body = res.text().await.context("failed to read response body")?;

        trace!("response ({}): {}", status, &body);

        if !status.is_success() {
            anyhow::bail!("{}", extract_error_message(&body));
        }

        serde_json::from_str(&body)
            .with_context(|| format!("failed to deserialize response: {}", body))
    }
}

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Every failure a caller can observe is one of these variants; the client
/// never swallows an error. `Display` strings double as the user-facing
/// message for alert banners.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be constructed (bad base URL, bad path).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A 2xx response arrived with an empty body where a payload was expected.
    #[error("the server returned an empty response")]
    NoResponseBody,

    /// The response body could not be decoded into the expected type.
    #[error("could not read the server response ({context}): {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The request body could not be serialized. Surfaced before any I/O.
    #[error("could not encode the request body: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// A non-2xx status with no more specific classification.
    #[error("request failed with status {code}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status { code: u16, message: Option<String> },

    /// 401 with no recognizable session/device hint.
    #[error("you are not authorized to perform this action")]
    Unauthorized,

    /// 401 whose message mentions the device: activation required.
    #[error("this device has not been activated")]
    DeviceNotActivated,

    /// 401 whose message mentions the session: employee must log in again.
    #[error("your session has expired, please log in again")]
    SessionExpired,

    /// The operation requires a fresh PIN entry. Never produced by the
    /// response classifier; raised by the auth collaborator's flows.
    #[error("please enter your PIN to continue")]
    PinRequired,

    /// 403 carrying a `lockedUntil` timestamp.
    #[error("account locked{}", .until.as_ref().map(|t| format!(" until {}", t.format("%Y-%m-%d %H:%M UTC"))).unwrap_or_default())]
    AccountLocked { until: Option<DateTime<Utc>> },

    /// The network is unreachable or the connection was refused.
    #[error("no network connection, please check your connection and try again")]
    NetworkUnavailable,

    /// The request timed out.
    #[error("the request timed out, please try again")]
    Timeout,

    /// 5xx, or a 2xx envelope reporting `success: false`.
    #[error("server error: {message}")]
    Server { message: String },

    /// Anything the transport reports that fits no other variant.
    #[error("an unexpected error occurred: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Whether waiting, retrying manually, or re-authenticating can clear
    /// this error. Non-recoverable errors are surfaced once and never
    /// auto-retried.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ApiError::NetworkUnavailable
                | ApiError::Timeout
                | ApiError::AccountLocked { .. }
                | ApiError::SessionExpired
                | ApiError::PinRequired
                | ApiError::DeviceNotActivated
        )
    }

    /// Whether the user must go back through an authentication flow.
    #[must_use]
    pub fn requires_reauth(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized
                | ApiError::SessionExpired
                | ApiError::PinRequired
                | ApiError::DeviceNotActivated
        )
    }
}

//! Response classification: `(HTTP status, raw body)` → typed result.
//!
//! The backend is not uniform: most endpoints wrap payloads in a
//! `{success, data, error, message}` envelope, a few return the payload
//! bare. [`classify`] resolves both through an ordered decode strategy —
//! try the envelope, then the bare type, then fail — expressed as data
//! ([`Decoded`]) rather than nested error control flow.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// The standard success envelope.
#[derive(Debug, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub success: bool,
    // No `#[serde(default)]` here: that would bound `T: Default` in the
    // derived impl. A missing `data` key already decodes as `None`.
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// The standard error envelope. Every field is optional on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    locked_until: Option<String>,
}

/// How a successful payload was decoded. Callers that only want the value
/// use [`Decoded::into_inner`]; tests assert on the shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    /// Payload arrived inside the standard success envelope.
    Enveloped(T),
    /// Payload arrived as the bare type with no envelope.
    Bare(T),
}

impl<T> Decoded<T> {
    pub fn into_inner(self) -> T {
        match self {
            Decoded::Enveloped(v) | Decoded::Bare(v) => v,
        }
    }
}

const GENERIC_ERROR: &str = "An unknown error occurred";

/// Classifies a response into a decoded payload or a typed error.
///
/// Ordered, first match wins:
/// 1. 2xx — envelope decode, then bare-type fallback, then decode failure.
/// 2. 401 — session/device hints in the error message, else unauthorized.
/// 3. 403 — `lockedUntil` means a locked account, else unauthorized.
/// 4. other 4xx — status error carrying the display message if decodable.
/// 5. 5xx — server error, defaulting to "Internal server error".
/// 6. anything else — status error with no message.
///
/// # Errors
///
/// Every non-success outcome is a typed [`ApiError`]; nothing is swallowed.
pub fn classify<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Decoded<T>, ApiError> {
    if (200..300).contains(&status) {
        return classify_success(body);
    }
    Err(classify_failure(status, body))
}

/// Classifies a response whose payload the caller discards. 2xx is success
/// regardless of body shape; failures classify exactly as in [`classify`].
///
/// # Errors
///
/// Returns the same typed [`ApiError`] as [`classify`] for non-2xx statuses.
pub fn classify_empty(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    Err(classify_failure(status, body))
}

fn classify_success<T: DeserializeOwned>(body: &[u8]) -> Result<Decoded<T>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::NoResponseBody);
    }

    match serde_json::from_slice::<ResponseEnvelope<T>>(body) {
        Ok(envelope) => {
            if envelope.success {
                if let Some(data) = envelope.data {
                    return Ok(Decoded::Enveloped(data));
                }
                // `success` without data but with a reported problem is a
                // server-side failure dressed as a 2xx.
                if envelope.error.is_some() || envelope.message.is_some() {
                    return Err(ApiError::Server {
                        message: display_message(envelope.message, envelope.error),
                    });
                }
                // Envelope-shaped but empty; fall through to the bare decode.
            } else {
                return Err(ApiError::Server {
                    message: display_message(envelope.message, envelope.error),
                });
            }
        }
        Err(_) => {
            // Not envelope-shaped; fall through to the bare decode.
        }
    }

    match serde_json::from_slice::<T>(body) {
        Ok(value) => Ok(Decoded::Bare(value)),
        Err(source) => Err(ApiError::Decode {
            context: "response body matched neither the envelope nor the bare payload".to_owned(),
            source,
        }),
    }
}

fn classify_failure(status: u16, body: &[u8]) -> ApiError {
    let envelope = serde_json::from_slice::<ErrorEnvelope>(body).ok();

    match status {
        401 => {
            let hint = envelope
                .and_then(|e| e.message.or(e.error))
                .unwrap_or_default()
                .to_lowercase();
            if hint.contains("session") {
                ApiError::SessionExpired
            } else if hint.contains("device") {
                ApiError::DeviceNotActivated
            } else {
                ApiError::Unauthorized
            }
        }
        403 => match envelope.and_then(|e| e.locked_until) {
            Some(raw) => ApiError::AccountLocked {
                until: parse_timestamp(&raw),
            },
            None => ApiError::Unauthorized,
        },
        400..=499 => ApiError::Status {
            code: status,
            message: envelope.map(|e| display_message(e.message, e.error)),
        },
        500..=599 => ApiError::Server {
            message: envelope
                .map_or_else(|| "Internal server error".to_owned(), |e| {
                    display_message(e.message, e.error)
                }),
        },
        _ => ApiError::Status {
            code: status,
            message: None,
        },
    }
}

fn display_message(message: Option<String>, error: Option<String>) -> String {
    message.or(error).unwrap_or_else(|| GENERIC_ERROR.to_owned())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .ok()
}

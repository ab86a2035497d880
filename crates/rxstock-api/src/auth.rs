//! Read-only seam to the auth collaborator.
//!
//! The client never mutates credentials: activation, PIN login, and logout
//! are owned by the auth layer, which hands the current tokens to the
//! transport through this trait. Injecting the provider (instead of a
//! process-wide singleton) lets tests swap in [`StaticTokens`].

/// Supplies the current credentials and location scope to the transport.
pub trait TokenProvider: Send + Sync {
    /// Long-lived device credential issued at one-time activation.
    fn device_token(&self) -> Option<String>;
    /// Short-lived per-employee credential issued at PIN login.
    fn session_token(&self) -> Option<String>;
    /// The location the logged-in employee is operating under.
    fn location_id(&self) -> Option<String>;
}

/// Fixed tokens for tests and composition roots.
#[derive(Debug, Clone, Default)]
pub struct StaticTokens {
    pub device: Option<String>,
    pub session: Option<String>,
    pub location: Option<String>,
}

impl StaticTokens {
    #[must_use]
    pub fn new(device: Option<&str>, session: Option<&str>) -> Self {
        Self {
            device: device.map(str::to_owned),
            session: session.map(str::to_owned),
            location: None,
        }
    }
}

impl TokenProvider for StaticTokens {
    fn device_token(&self) -> Option<String> {
        self.device.clone()
    }

    fn session_token(&self) -> Option<String> {
        self.session.clone()
    }

    fn location_id(&self) -> Option<String> {
        self.location.clone()
    }
}

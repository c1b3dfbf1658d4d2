use serde::Deserialize;

/// Payload of the stored bearer token. Decoded without verification,
/// trusted for display and UI branching only.
#[derive(Debug, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub subject: String,
    pub email: String,
}

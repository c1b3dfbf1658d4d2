use crate::domain::models::session::{Session, TokenClaims};
use crate::domain::ports::SessionStore;
use jsonwebtoken::{DecodingKey, Validation, decode};
use tracing::warn;

/// Decodes the payload of a stored bearer token without checking its
/// signature or expiry. The result is used for personalization and UI
/// branching only; authorization stays with the server, which receives the
/// same token as bearer credential.
pub fn decode_identity(token: &str) -> Option<Session> {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    match decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => Some(Session {
            subject: data.claims.sub,
            email: data.claims.email,
        }),
        Err(e) => {
            warn!("stored token could not be decoded: {e}");
            None
        }
    }
}

/// Reads the stored token, if any, and derives the viewer identity from it.
/// A missing or undecodable token yields an anonymous viewer.
pub fn current_session(store: &dyn SessionStore) -> Option<Session> {
    let token = match store.token() {
        Ok(t) => t?,
        Err(e) => {
            warn!("session storage unreadable: {e}");
            return None;
        }
    };
    decode_identity(&token)
}

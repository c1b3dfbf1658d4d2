use crate::domain::ports::{AuthApi, SessionStore};
use crate::error::AppError;
use tracing::info;

const MIN_PASSWORD_LEN: usize = 6;

pub async fn register(api: &dyn AuthApi, email: &str, password: &str) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Please fill in all fields".to_string()));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    api.register(email.trim(), password).await
}

/// Logs in against the remote API and persists the returned bearer token
/// plus the identity email.
pub async fn login(
    api: &dyn AuthApi,
    store: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<(), AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Please fill in all fields".to_string()));
    }
    let token = api.login(email.trim(), password).await?;
    store.store_login(&token, email.trim())?;
    info!("logged in as {}", email.trim());
    Ok(())
}

pub fn logout(store: &dyn SessionStore) -> Result<(), AppError> {
    store.clear_token()
}

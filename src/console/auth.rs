use crate::console::prompt;
use crate::domain::services::auth_flow;
use crate::error::AppError;
use crate::state::AppState;

pub async fn register(state: &AppState) -> Result<(), AppError> {
    println!("\n=== Create account ===\n");
    let email = prompt("Email: ")?;
    let password = prompt("Password (min 6 characters): ")?;

    match auth_flow::register(state.auth_api.as_ref(), &email, &password).await {
        Ok(()) => println!("Account created. Use `login` to sign in."),
        Err(e) => println!("{}", e.user_message()),
    }
    Ok(())
}

pub async fn login(state: &AppState) -> Result<(), AppError> {
    println!("\n=== Sign in ===\n");
    let email = prompt("Email: ")?;
    let password = prompt("Password: ")?;

    match auth_flow::login(
        state.auth_api.as_ref(),
        state.session_store.as_ref(),
        &email,
        &password,
    )
    .await
    {
        Ok(()) => println!("Signed in as {email}."),
        Err(e) => println!("{}", e.user_message()),
    }
    Ok(())
}

pub fn logout(state: &AppState) {
    match auth_flow::logout(state.session_store.as_ref()) {
        Ok(()) => println!("Signed out."),
        Err(e) => println!("{}", e.user_message()),
    }
}

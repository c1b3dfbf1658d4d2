pub mod auth;
pub mod create;
pub mod detail;
pub mod directory;

use crate::error::AppError;
use crate::state::AppState;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

pub(crate) fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Blocking-alert analog: the message must be acknowledged before the
/// screen continues.
pub(crate) fn alert(message: &str) {
    println!("\n!! {message}");
    let _ = prompt("Press Enter to continue... ");
}

pub async fn run_loop(state: Arc<AppState>) -> Result<(), AppError> {
    loop {
        directory::render(&state).await;

        let input = prompt("\n> ")?;
        let mut parts = input.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("show"), Some(id)) => detail::show(&state, id).await?,
            (Some("show"), None) => println!("Usage: show <event-id>"),
            (Some("new"), _) => create::run(&state).await?,
            (Some("register"), _) => auth::register(&state).await?,
            (Some("login"), _) => auth::login(&state).await?,
            (Some("logout"), _) => auth::logout(&state),
            (Some("quit" | "q" | "exit"), _) => return Ok(()),
            (Some("list") | None, _) => {}
            (Some(other), _) => println!("Unknown command: {other}"),
        }
    }
}

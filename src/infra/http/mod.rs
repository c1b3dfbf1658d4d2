pub mod auth_client;
pub mod dtos;
pub mod events_client;
pub mod reservations_client;

use crate::error::AppError;
use dtos::ApiErrorBody;
use reqwest::{Response, StatusCode};

/// Maps a non-success response to an error, pulling the server-provided
/// `message` out of the body when one is present.
pub(crate) async fn reject(res: Response) -> AppError {
    let status = res.status();
    let message = res
        .json::<ApiErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_default();

    if status == StatusCode::NOT_FOUND {
        AppError::NotFound(if message.is_empty() {
            "resource not found".to_string()
        } else {
            message
        })
    } else {
        AppError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

use axum::{extract::State, routing::post, Json, Router};

use crate::error::Result;
use crate::mail::send_mail;
use crate::models::{MailRequest, MailSentResponse};
use crate::state::AppState;

/// Mail hook routes
pub fn mail_routes() -> Router<AppState> {
    Router::new().route("/", post(send))
}

/// POST /api/v1/mail - Relay one platform mail through Mailjet
async fn send(
    State(state): State<AppState>,
    Json(request): Json<MailRequest>,
) -> Result<Json<MailSentResponse>> {
    let credentials = state.settings.get_credentials().await?;
    send_mail(&request, &credentials, state.transport.as_ref()).await?;

    Ok(Json(MailSentResponse { sent: true }))
}

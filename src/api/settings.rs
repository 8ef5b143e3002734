use axum::{extract::State, routing::get, Json, Router};

use crate::error::Result;
use crate::models::{MailjetOptions, UpdateSettingsRequest, UpdateSettingsResponse};
use crate::settings::sanitize_text_field;
use crate::state::AppState;

/// Settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).put(update_settings))
}

/// GET /api/v1/settings - Current Mailjet options, private key masked
async fn get_settings(State(state): State<AppState>) -> Result<Json<MailjetOptions>> {
    Ok(Json(state.settings.get_options().await?.masked()))
}

/// PUT /api/v1/settings - Save both keys
async fn update_settings(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<UpdateSettingsResponse>> {
    let options = MailjetOptions {
        mailjet_api_key_field: Some(sanitize_text_field(&request.mailjet_api_key_field)),
        mailjet_private_key_field: Some(sanitize_text_field(&request.mailjet_private_key_field)),
    };

    state.settings.save_options(&options).await?;

    tracing::info!("Mailjet settings updated");

    Ok(Json(UpdateSettingsResponse {
        message: "Settings Saved".to_string(),
        settings: options.masked(),
    }))
}

//! Settings endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::parameters::{Parameters, UpdateParameters},
};

/// Get current settings
#[utoipa::path(
    get,
    path = "/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Current parameters", body = Parameters)
    )
)]
pub async fn get_settings(State(state): State<crate::AppState>) -> Json<Parameters> {
    Json(state.services.settings.get_settings().await)
}

/// Update settings (partial)
#[utoipa::path(
    put,
    path = "/settings",
    tag = "settings",
    request_body = UpdateParameters,
    responses(
        (status = 200, description = "Settings updated", body = Parameters),
        (status = 400, description = "Merged parameters are invalid", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_settings(
    State(state): State<crate::AppState>,
    Json(request): Json<UpdateParameters>,
) -> AppResult<Json<Parameters>> {
    let settings = state.services.settings.update_settings(request).await?;
    Ok(Json(settings))
}

/// Restore default settings
#[utoipa::path(
    post,
    path = "/settings/reset",
    tag = "settings",
    responses(
        (status = 200, description = "Settings reset", body = Parameters)
    )
)]
pub async fn reset_settings(State(state): State<crate::AppState>) -> Json<Parameters> {
    Json(state.services.settings.reset_settings().await)
}

use axum::extract::{
    Multipart, State,
    multipart::{MultipartError, MultipartRejection},
};
use axum::http::StatusCode;
use foodlens_core::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::AnalysisResponse, ports::FoodAnalysisService},
};
use tracing::{error, warn};

use crate::application::http::{
    food_analysis::validators::AnalyseFoodImageForm,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

const FILE_FIELD: &str = "file";

#[utoipa::path(
    post,
    path = "/analyse",
    tag = "food-analysis",
    summary = "Analyse a food image",
    description = "Sends the uploaded image to the configured model and returns a nutrition and safety report. \
        When the model output cannot be understood a placeholder report is returned with `success: true`.",
    request_body(content = AnalyseFoodImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, body = AnalysisResponse),
        (status = 400, description = "Not an image, or no file field", body = ApiErrorResponse),
        (status = 413, description = "Upload exceeds the body limit", body = ApiErrorResponse),
        (status = 500, description = "Model call failed", body = ApiErrorResponse),
        (status = 503, description = "Model not configured", body = ApiErrorResponse),
    ),
)]
pub async fn analyse_food_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response<AnalysisResponse>, ApiError> {
    // Checked before touching the body.
    state.service.ensure_configured().map_err(|e| {
        error!("Rejecting upload: {}", e);
        ApiError::from(e)
    })?;

    let mut multipart = multipart.map_err(|e| {
        warn!("Invalid multipart request: {}", e.body_text());
        ApiError::from(e)
    })?;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let media_type = state
            .service
            .validate_media_type(field.content_type())
            .map_err(|e| {
                warn!(
                    file_name = ?file_name,
                    content_type = ?field.content_type(),
                    "Rejecting non-image upload"
                );
                ApiError::from(e)
            })?;

        let image_data = field.bytes().await.map_err(|e| {
            error!(file_name = ?file_name, "Failed to read uploaded file: {}", e);
            read_error(e)
        })?;

        let form = AnalyseFoodImageForm {
            file: image_data.to_vec(),
        };

        let response = state
            .service
            .analyze_food_image(form.into_input(file_name, media_type))
            .await
            .map_err(ApiError::from)?;

        return Ok(Response::OK(response));
    }

    warn!("Upload without a '{}' field", FILE_FIELD);
    Err(ApiError::from(CoreError::MissingFile))
}

fn read_error(error: MultipartError) -> ApiError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::from(error);
    }

    ApiError::from(CoreError::AnalysisFailed(error.body_text()))
}

use super::handlers::analyse_food_image::analyse_food_image;
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::post};

pub fn food_analysis_routes(root_path: &str) -> Router<AppState> {
    Router::new().route(&format!("{}/analyse", root_path), post(analyse_food_image))
}

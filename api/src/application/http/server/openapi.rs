use utoipa::OpenApi;

use crate::application::http::{
    food_analysis::handlers::analyse_food_image::__path_analyse_food_image,
    health::__path_health,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodLens API",
        description = "Analyses food images for nutrition and pregnancy/period safety"
    ),
    paths(analyse_food_image, health),
    tags(
        (name = "food-analysis", description = "Food image analysis"),
        (name = "health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;

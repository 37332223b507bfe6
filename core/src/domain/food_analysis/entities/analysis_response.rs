use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::food_analysis::entities::FoodReport;

/// Envelope returned for every successful call to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResponse {
    pub success: bool,
    #[schema(example = "Gemini")]
    pub source: String,
    pub report: FoodReport,
}

impl AnalysisResponse {
    pub fn new(source: impl Into<String>, report: FoodReport) -> Self {
        Self {
            success: true,
            source: source.into(),
            report,
        }
    }
}

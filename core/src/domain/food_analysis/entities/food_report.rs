use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};
use utoipa::ToSchema;

const UNKNOWN_FOOD: &str = "Unknown";
const NOT_AVAILABLE: &str = "N/A";
const UNRECOGNIZED_RECOMMENDATION: &str = "Could not analyze the food image properly.";

/// Nutritional and safety report for a single food image.
///
/// Nutrient values are free text as produced by the model ("95 kcal", "0.5g").
/// Fields the model left out take their placeholder value; keys the model
/// added are kept in `extra` and serialized back at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct FoodReport {
    #[schema(example = "Apple")]
    pub food_name: String,
    #[serde(deserialize_with = "text_or_number")]
    #[schema(example = "95 kcal")]
    pub calories: String,
    #[serde(deserialize_with = "text_or_number")]
    #[schema(example = "0.5g")]
    pub protein: String,
    #[serde(deserialize_with = "text_or_number")]
    #[schema(example = "25g")]
    pub carbs: String,
    #[serde(deserialize_with = "text_or_number")]
    #[schema(example = "0.3g")]
    pub fats: String,
    #[serde(deserialize_with = "text_or_number")]
    #[schema(example = "4g")]
    pub fiber: String,
    pub pregnancy_safe: bool,
    pub period_friendly: bool,
    #[schema(example = "Good snack.")]
    pub recommendations: String,
    pub suggested_foods: Vec<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Default for FoodReport {
    fn default() -> Self {
        Self {
            food_name: UNKNOWN_FOOD.to_string(),
            calories: NOT_AVAILABLE.to_string(),
            protein: NOT_AVAILABLE.to_string(),
            carbs: NOT_AVAILABLE.to_string(),
            fats: NOT_AVAILABLE.to_string(),
            fiber: NOT_AVAILABLE.to_string(),
            pregnancy_safe: false,
            period_friendly: false,
            recommendations: UNRECOGNIZED_RECOMMENDATION.to_string(),
            suggested_foods: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl FoodReport {
    /// Placeholder returned when the model output could not be normalized.
    pub fn unrecognized() -> Self {
        Self::default()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

// Models occasionally emit `"calories": 95` instead of `"calories": "95 kcal"`.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match TextOrNumber::deserialize(deserializer) {
        Ok(TextOrNumber::Text(text)) => Ok(text),
        Ok(TextOrNumber::Number(number)) => Ok(number.to_string()),
        Err(_) => Err(de::Error::custom("expected a string or a number")),
    }
}

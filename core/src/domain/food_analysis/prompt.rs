/// Instruction sent alongside every uploaded image.
pub const FOOD_ANALYSIS_PROMPT: &str = r#"You are a diet and health expert AI.
Analyze this food image and return a JSON response ONLY in this format:
{
  "food_name": "string",
  "calories": "string",
  "protein": "string",
  "carbs": "string",
  "fats": "string",
  "fiber": "string",
  "pregnancy_safe": true or false,
  "period_friendly": true or false,
  "recommendations": "string",
  "suggested_foods": ["food1", "food2", "food3"]
}

The output must be pure JSON, no markdown, no extra text."#;

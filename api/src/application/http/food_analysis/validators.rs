use foodlens_core::domain::food_analysis::value_objects::{AnalyzeFoodImageInput, ImageMediaType};
use utoipa::ToSchema;

/// Multipart body accepted by `POST /analyse`.
#[derive(Debug, ToSchema)]
pub struct AnalyseFoodImageForm {
    /// Food photo. The part's content type must start with `image/`.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

impl AnalyseFoodImageForm {
    pub fn into_input(
        self,
        file_name: Option<String>,
        media_type: ImageMediaType,
    ) -> AnalyzeFoodImageInput {
        AnalyzeFoodImageInput {
            file_name,
            media_type,
            image_data: self.file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_carries_the_upload_into_the_service_input() {
        let media_type = ImageMediaType::parse(Some("image/png")).unwrap();
        let form = AnalyseFoodImageForm {
            file: vec![1, 2, 3],
        };

        let input = form.into_input(Some("apple.png".to_string()), media_type.clone());

        assert_eq!(input.file_name.as_deref(), Some("apple.png"));
        assert_eq!(input.media_type, media_type);
        assert_eq!(input.image_data, vec![1, 2, 3]);
    }
}

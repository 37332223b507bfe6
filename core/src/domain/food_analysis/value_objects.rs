use crate::domain::common::entities::app_errors::CoreError;

const IMAGE_TYPE_PREFIX: &str = "image/";

/// A media type that has been checked to describe an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageMediaType(String);

impl ImageMediaType {
    pub fn parse(content_type: Option<&str>) -> Result<Self, CoreError> {
        let content_type = content_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(CoreError::InvalidFileType)?;

        let is_image = content_type
            .get(..IMAGE_TYPE_PREFIX.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(IMAGE_TYPE_PREFIX));

        if !is_image {
            return Err(CoreError::InvalidFileType);
        }

        Ok(Self(content_type.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeFoodImageInput {
    pub file_name: Option<String>,
    pub media_type: ImageMediaType,
    pub image_data: Vec<u8>,
}

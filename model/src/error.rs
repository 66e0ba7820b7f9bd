use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unsupported image type: expected png, jpeg, gif or webp")]
    UnsupportedImageType,
}

impl<T> From<ModelError> for Result<T, ModelError> {
    fn from(e: ModelError) -> Self {
        Err(e)
    }
}

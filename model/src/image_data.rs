use crate::ModelError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Serialize, Serializer};

/// Raw image bytes destined for an API payload field, such as an avatar or emoji image.
///
/// The MIME type is detected from the magic bytes when the value is constructed, so an
/// unsupported image is rejected before any request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    mime: &'static str,
    data: Vec<u8>,
}

impl ImageData {
    pub fn new(data: Vec<u8>) -> Result<ImageData, ModelError> {
        let mime = detect_mime(&data).ok_or(ModelError::UnsupportedImageType)?;
        Ok(ImageData { mime, data })
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.data))
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_url())
    }
}

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

pub fn detect_mime(data: &[u8]) -> Option<&'static str> {
    if data.starts_with(PNG) {
        Some("image/png")
    } else if data.starts_with(JPEG)
        || data.get(6..10) == Some(&b"JFIF"[..])
        || data.get(6..10) == Some(&b"Exif"[..])
    {
        Some("image/jpeg")
    } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if data.starts_with(b"RIFF") && data.get(8..12) == Some(&b"WEBP"[..]) {
        Some("image/webp")
    } else {
        None
    }
}

/// Encodes `data` as a `data:<mime>;base64,<payload>` URL.
pub fn bytes_to_data_url(data: &[u8]) -> Result<String, ModelError> {
    let mime = detect_mime(data).ok_or(ModelError::UnsupportedImageType)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];

    #[test]
    fn test_detects_all_families() {
        assert_eq!(detect_mime(PNG_BYTES), Some("image/png"));
        assert_eq!(detect_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(detect_mime(b"\0\0\0\0\0\0JFIF\0"), Some("image/jpeg"));
        assert_eq!(detect_mime(b"\0\0\0\0\0\0Exif\0"), Some("image/jpeg"));
        assert_eq!(detect_mime(b"GIF87a..."), Some("image/gif"));
        assert_eq!(detect_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(detect_mime(b"RIFF\x10\0\0\0WEBPVP8 "), Some("image/webp"));
    }

    #[test]
    fn test_rejects_unknown() {
        assert_eq!(bytes_to_data_url(b"hello world"), Err(ModelError::UnsupportedImageType));
        assert_eq!(bytes_to_data_url(b""), Err(ModelError::UnsupportedImageType));
        assert_eq!(bytes_to_data_url(b"RIFF\0\0\0\0WAVE"), Err(ModelError::UnsupportedImageType));
        assert!(ImageData::new(b"GIF90a".to_vec()).is_err());
    }

    #[test]
    fn test_data_url() {
        let url = bytes_to_data_url(b"GIF89a").unwrap();
        assert_eq!(url, "data:image/gif;base64,R0lGODlh");

        let image = ImageData::new(PNG_BYTES.to_vec()).unwrap();
        assert_eq!(image.mime(), "image/png");
        assert_eq!(
            serde_json::to_string(&image).unwrap(),
            format!("\"{}\"", image.to_data_url())
        );
    }
}

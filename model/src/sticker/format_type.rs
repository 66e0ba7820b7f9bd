use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Copy, Clone, Debug, Deserialize_repr, Serialize_repr, PartialEq, Eq)]
#[repr(u8)]
pub enum FormatType {
    Png = 1,
    Apng = 2,
    Lottie = 3,
    Gif = 4,
}

impl FormatType {
    /// File extension served by the CDN for this format.
    pub fn extension(self) -> &'static str {
        match self {
            FormatType::Png | FormatType::Apng => "png",
            FormatType::Lottie => "json",
            FormatType::Gif => "gif",
        }
    }
}

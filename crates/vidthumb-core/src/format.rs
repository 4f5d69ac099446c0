use serde::{Deserialize, Serialize};

/// Target encoding for an extracted frame.
///
/// Wire codes match the original plugin protocol: 0 = JPEG, 1 = PNG,
/// 2 = WebP, anything else falls back to JPEG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    /// Map a numeric format code to a format. Unrecognized codes are JPEG.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ImageFormat::Png,
            2 => ImageFormat::Webp,
            _ => ImageFormat::Jpeg,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            ImageFormat::Jpeg => 0,
            ImageFormat::Png => 1,
            ImageFormat::Webp => 2,
        }
    }

    /// File extension for thumbnails written in this format.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    /// Whether the `quality` request field has any effect on the encoder.
    pub fn is_lossy(self) -> bool {
        matches!(self, ImageFormat::Jpeg)
    }
}

use std::collections::HashMap;
use std::path::PathBuf;

use vidthumb_core::format::ImageFormat;
use vidthumb_core::request::ThumbnailRequest;

/// Builder for creating test ThumbnailRequests with sensible defaults.
pub struct ThumbnailRequestBuilder {
    request: ThumbnailRequest,
}

impl ThumbnailRequestBuilder {
    pub fn new(video: impl Into<String>) -> Self {
        Self {
            request: ThumbnailRequest::new(video),
        }
    }

    pub fn format(mut self, format: ImageFormat) -> Self {
        self.request.format = format;
        self
    }

    pub fn max_size(mut self, width: u32, height: u32) -> Self {
        self.request.max_width = width;
        self.request.max_height = height;
        self
    }

    pub fn time_ms(mut self, time_ms: u64) -> Self {
        self.request.time_ms = time_ms;
        self
    }

    pub fn quality(mut self, quality: u8) -> Self {
        self.request.quality = quality;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request
            .headers
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.request.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> ThumbnailRequest {
        self.request
    }
}

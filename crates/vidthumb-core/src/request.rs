use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::ImageFormat;
use crate::source::VideoSource;

/// One thumbnail extraction request. Transient, never persisted, never
/// shared across calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailRequest {
    /// Local absolute path, `file://` URI, or `http(s)://` URL.
    pub video: String,
    /// HTTP headers attached when fetching a remote source.
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub format: ImageFormat,
    /// 0 means "no constraint on that axis".
    #[serde(default)]
    pub max_width: u32,
    #[serde(default)]
    pub max_height: u32,
    /// Target timestamp in milliseconds.
    #[serde(default)]
    pub time_ms: u64,
    /// Lossy-encode quality, 0-100. Ignored for PNG and WebP.
    #[serde(default = "default_quality")]
    pub quality: u8,
    /// Destination file or directory, file mode only.
    #[serde(default)]
    pub output_path: Option<PathBuf>,
}

fn default_quality() -> u8 {
    75
}

impl ThumbnailRequest {
    pub fn new(video: impl Into<String>) -> Self {
        Self {
            video: video.into(),
            headers: None,
            format: ImageFormat::default(),
            max_width: 0,
            max_height: 0,
            time_ms: 0,
            quality: default_quality(),
            output_path: None,
        }
    }

    /// Parse and validate the video source field.
    pub fn source(&self) -> Result<VideoSource> {
        VideoSource::parse(&self.video, self.headers.as_ref())
    }

    pub fn time_secs(&self) -> f64 {
        self.time_ms as f64 / 1000.0
    }

    /// Load a request from a JSON job file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

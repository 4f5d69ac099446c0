use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Where the video bytes come from.
///
/// Anything that is not a local absolute path, a `file://` URI, or an
/// `http(s)://` URL is rejected before any decode work happens.
#[derive(Debug, Clone, PartialEq)]
pub enum VideoSource {
    Local(PathBuf),
    Remote {
        url: String,
        headers: HashMap<String, String>,
    },
}

impl VideoSource {
    pub fn parse(video: &str, headers: Option<&HashMap<String, String>>) -> Result<Self> {
        if let Some(rest) = video.strip_prefix("file://") {
            Ok(VideoSource::Local(PathBuf::from(rest)))
        } else if video.starts_with('/') {
            Ok(VideoSource::Local(PathBuf::from(video)))
        } else if video.starts_with("http://") || video.starts_with("https://") {
            Ok(VideoSource::Remote {
                url: video.to_string(),
                headers: headers.cloned().unwrap_or_default(),
            })
        } else {
            Err(CoreError::UnsupportedSource(video.to_string()))
        }
    }

    /// File name the source carries, used to name written thumbnails.
    /// Remote URLs use the last path segment, ignoring query and fragment.
    /// Returns None when no name can be derived.
    pub fn file_name(&self) -> Option<String> {
        match self {
            VideoSource::Local(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned()),
            VideoSource::Remote { url, .. } => {
                let rest = url.split_once("://").map(|(_, r)| r).unwrap_or(url);
                let path = rest.split(['?', '#']).next().unwrap_or(rest);
                // Skip the authority; the name is the last nonempty path segment.
                path.split('/')
                    .skip(1)
                    .filter(|s| !s.is_empty())
                    .last()
                    .map(|s| s.to_string())
            }
        }
    }
}

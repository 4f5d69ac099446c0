use std::collections::HashMap;
use std::io::Write;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{MediaError, Result};

/// Download a remote video to a temporary file so FFmpeg can demux it
/// locally. The file is deleted when the returned handle drops.
pub fn fetch_remote(url: &str, headers: &HashMap<String, String>) -> Result<NamedTempFile> {
    let client = reqwest::blocking::Client::new();
    let mut request = client.get(url);
    for (name, value) in headers {
        request = request.header(name.as_str(), value.as_str());
    }

    let mut response = request
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| MediaError::FetchError(format!("{url}: {e}")))?;

    let mut file = NamedTempFile::with_prefix("vidthumb-")?;
    let bytes = std::io::copy(&mut response, file.as_file_mut())
        .map_err(|e| MediaError::FetchError(format!("{url}: {e}")))?;
    file.as_file_mut().flush()?;

    debug!("fetched {bytes} bytes from {url}");

    Ok(file)
}

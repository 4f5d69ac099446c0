use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use vidthumb_core::output::resolve_output_path;
use vidthumb_core::request::ThumbnailRequest;
use vidthumb_core::source::VideoSource;

use crate::decoder::{FfmpegDecoder, VideoFrame};
use crate::error::{MediaError, Result};
use crate::{encoder, fetch};

/// Extract the requested frame and return it encoded in the requested
/// format. The "data" entry shape of the operation.
pub fn thumbnail_data(request: &ThumbnailRequest) -> Result<Vec<u8>> {
    let frame = extract_frame(request)?;
    encoder::encode_frame(&frame, request.format, request.quality)
}

/// Extract, encode, and write the thumbnail to disk, returning the written
/// path. The "file" entry shape; the destination follows the request's
/// `output_path` with `std::env::temp_dir()` as the default directory.
pub fn thumbnail_file(request: &ThumbnailRequest) -> Result<PathBuf> {
    thumbnail_file_in(request, &std::env::temp_dir())
}

/// `thumbnail_file` with an explicit default directory, for callers that
/// manage their own cache location.
pub fn thumbnail_file_in(request: &ThumbnailRequest, default_dir: &Path) -> Result<PathBuf> {
    let data = thumbnail_data(request)?;

    let source = request.source()?;
    let output = resolve_output_path(
        source.file_name().as_deref(),
        request.output_path.as_deref(),
        default_dir,
        request.format,
    );

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(&output)?;
    file.write_all(&data)?;
    file.flush()?;

    debug!("thumbnail saved to {}", output.display());

    Ok(output)
}

fn extract_frame(request: &ThumbnailRequest) -> Result<VideoFrame> {
    let source = request.source()?;
    let target_secs = request.time_secs();

    match source {
        VideoSource::Local(path) => {
            if !path.exists() {
                return Err(MediaError::NotFound(path));
            }
            decode_at(&path, target_secs, request)
        }
        VideoSource::Remote { url, headers } => {
            let temp = fetch::fetch_remote(&url, &headers)?;
            decode_at(temp.path(), target_secs, request)
        }
    }
}

fn decode_at(path: &Path, target_secs: f64, request: &ThumbnailRequest) -> Result<VideoFrame> {
    let mut decoder = FfmpegDecoder::open(path)?;
    decoder.frame_at(target_secs, request.max_width, request.max_height)
}

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::format::ImageFormat;

/// Decide where an encoded thumbnail lands on disk.
///
/// An explicit path that already carries the format's extension is used
/// verbatim. Any other explicit path is treated as a directory and the
/// thumbnail is named after the source video with the extension swapped.
/// Without an explicit path the same name lands in `default_dir`. When no
/// name can be derived from the source, a unique one is generated.
pub fn resolve_output_path(
    source_name: Option<&str>,
    explicit: Option<&Path>,
    default_dir: &Path,
    format: ImageFormat,
) -> PathBuf {
    let ext = format.extension();

    if let Some(path) = explicit {
        if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            return path.to_path_buf();
        }
    }

    let file_name = match source_name {
        Some(name) if !name.is_empty() => {
            let stem = name.rsplit_once('.').map(|(s, _)| s).unwrap_or(name);
            format!("{stem}.{ext}")
        }
        _ => format!("{}.{ext}", Uuid::new_v4()),
    };

    match explicit {
        Some(dir) => dir.join(file_name),
        None => default_dir.join(file_name),
    }
}

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use vidthumb_core::format::ImageFormat;
use vidthumb_core::request::ThumbnailRequest;
use vidthumb_media::thumbnail;

/// Extract a single video frame as a JPEG/PNG/WebP thumbnail.
#[derive(Parser)]
#[command(name = "vidthumb")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the thumbnail to a file and print the written path.
    File {
        #[command(flatten)]
        args: RequestArgs,

        /// Destination file or directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Emit the encoded thumbnail bytes on stdout.
    Data {
        #[command(flatten)]
        args: RequestArgs,

        /// Write the bytes here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// Video source: absolute path, file:// URI, or http(s):// URL.
    video: Option<String>,

    /// Load the request from a JSON job file instead of flags.
    #[arg(long, conflicts_with = "video")]
    request: Option<PathBuf>,

    /// Output format: jpeg, png, or webp.
    #[arg(long, default_value = "jpeg")]
    format: String,

    /// Maximum width (0 = unconstrained).
    #[arg(long, default_value = "0")]
    max_width: u32,

    /// Maximum height (0 = unconstrained).
    #[arg(long, default_value = "0")]
    max_height: u32,

    /// Target timestamp in milliseconds.
    #[arg(long, default_value = "0")]
    time_ms: u64,

    /// JPEG quality, 0-100.
    #[arg(long, default_value = "75")]
    quality: u8,

    /// HTTP header for remote sources, as name=value. Repeatable.
    #[arg(long = "header")]
    headers: Vec<String>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::File { args, out } => {
            let mut request = build_request(&args)?;
            if let Some(out) = out {
                request.output_path = Some(out);
            }
            let written = thumbnail::thumbnail_file(&request)?;
            println!("{}", written.display());
        }
        Command::Data { args, out } => {
            let request = build_request(&args)?;
            let bytes = thumbnail::thumbnail_data(&request)?;
            match out {
                Some(path) => std::fs::write(path, &bytes)?,
                None => std::io::stdout().write_all(&bytes)?,
            }
        }
    }

    Ok(())
}

fn build_request(args: &RequestArgs) -> Result<ThumbnailRequest, Box<dyn std::error::Error>> {
    if let Some(path) = &args.request {
        return Ok(ThumbnailRequest::from_json_file(path)?);
    }

    let video = args
        .video
        .as_deref()
        .ok_or("either a video source or --request is required")?;

    let mut request = ThumbnailRequest::new(video);
    request.format = parse_format(&args.format)?;
    request.max_width = args.max_width;
    request.max_height = args.max_height;
    request.time_ms = args.time_ms;
    request.quality = args.quality;
    request.headers = parse_headers(&args.headers)?;
    Ok(request)
}

fn parse_format(s: &str) -> Result<ImageFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
        "png" => Ok(ImageFormat::Png),
        "webp" => Ok(ImageFormat::Webp),
        other => Err(format!(
            "unknown format: {other} (expected jpeg, png, or webp)"
        )),
    }
}

fn parse_headers(raw: &[String]) -> Result<Option<HashMap<String, String>>, String> {
    if raw.is_empty() {
        return Ok(None);
    }
    let mut headers = HashMap::new();
    for entry in raw {
        let (name, value) = entry
            .split_once('=')
            .ok_or_else(|| format!("invalid header {entry:?}, expected name=value"))?;
        headers.insert(name.trim().to_string(), value.trim().to_string());
    }
    Ok(Some(headers))
}

use vidthumb_media::decoder::FfmpegDecoder;
use vidthumb_media::error::MediaError;
use vidthumb_test_harness::fixtures;

#[test]
fn test_open_video() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video(dir.path(), "open_test", 1.0);

    let decoder = FfmpegDecoder::open(&path).unwrap();
    let info = decoder.stream_info();
    assert_eq!(info.width, 320);
    assert_eq!(info.height, 240);
    assert!(info.fps > 29.0 && info.fps < 31.0, "fps: {}", info.fps);
    assert!(
        info.duration_secs > 0.8 && info.duration_secs < 1.5,
        "duration: {}",
        info.duration_secs
    );
}

#[test]
fn test_open_garbage_file_fails() {
    let dir = fixtures::fixture_dir();
    let path = dir.path().join("not_a_video.mp4");
    std::fs::write(&path, b"this is not a video container").unwrap();

    assert!(FfmpegDecoder::open(&path).is_err());
}

#[test]
fn test_frame_at_native_resolution() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video(dir.path(), "native_test", 1.0);

    let mut decoder = FfmpegDecoder::open(&path).unwrap();
    let frame = decoder.frame_at(0.0, 0, 0).unwrap();
    assert_eq!(frame.width, 320);
    assert_eq!(frame.height, 240);
    assert_eq!(frame.data.len(), (320 * 240 * 3) as usize);
    assert!(frame.pts_secs < 0.1, "first frame pts: {}", frame.pts_secs);
}

#[test]
fn test_frame_at_exact_box() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video(dir.path(), "box_test", 1.0);

    let mut decoder = FfmpegDecoder::open(&path).unwrap();
    // Both axes set: the box is exact, aspect ratio is not preserved.
    let frame = decoder.frame_at(0.0, 100, 100).unwrap();
    assert_eq!(frame.width, 100);
    assert_eq!(frame.height, 100);
    assert_eq!(frame.data.len(), (100 * 100 * 3) as usize);
}

#[test]
fn test_frame_at_single_axis_preserves_aspect() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video_sized(dir.path(), "aspect_test", 1.0, 400, 300);

    let mut decoder = FfmpegDecoder::open(&path).unwrap();
    let frame = decoder.frame_at(0.0, 200, 0).unwrap();
    assert_eq!(frame.width, 200);
    assert_eq!(frame.height, 150);
}

#[test]
fn test_frame_at_mid_stream_timestamp() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video(dir.path(), "mid_test", 3.0);

    let mut decoder = FfmpegDecoder::open(&path).unwrap();
    let frame = decoder.frame_at(1.5, 0, 0).unwrap();
    // The testsrc fixture has a frame every ~33ms; closest must be near.
    assert!(
        (frame.pts_secs - 1.5).abs() < 0.1,
        "frame at {} is not close to 1.5s",
        frame.pts_secs
    );
}

#[test]
fn test_frame_at_past_end_falls_back_to_final_frame() {
    let dir = fixtures::fixture_dir();
    let path = fixtures::generate_test_video(dir.path(), "past_end_test", 1.0);

    let mut decoder = FfmpegDecoder::open(&path).unwrap();
    let frame = decoder.frame_at(60.0, 0, 0).unwrap();
    assert_eq!(frame.width, 320);
    assert!(frame.pts_secs < 1.5, "final frame pts: {}", frame.pts_secs);
}

#[test]
fn test_no_frame_error_mentions_timestamp() {
    let err = MediaError::NoFrame(2.5);
    assert!(err.to_string().contains("2.500"), "message: {err}");
}

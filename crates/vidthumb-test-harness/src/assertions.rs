use vidthumb_core::format::ImageFormat;

/// Assert that an encoded buffer starts with the magic bytes of the
/// requested format.
pub fn assert_image_signature(bytes: &[u8], format: ImageFormat) {
    assert!(
        bytes.len() > 12,
        "encoded image is too short: {} bytes",
        bytes.len()
    );
    match format {
        ImageFormat::Jpeg => assert_eq!(
            &bytes[..2],
            &[0xFF, 0xD8],
            "buffer does not start with a JPEG SOI marker"
        ),
        ImageFormat::Png => assert_eq!(
            &bytes[..8],
            b"\x89PNG\r\n\x1a\n",
            "buffer does not start with a PNG signature"
        ),
        ImageFormat::Webp => {
            assert_eq!(&bytes[..4], b"RIFF", "buffer is not a RIFF container");
            assert_eq!(&bytes[8..12], b"WEBP", "RIFF container is not WebP");
        }
    }
}

/// Assert that an encoded buffer decodes to the expected dimensions.
pub fn assert_image_dimensions(bytes: &[u8], width: u32, height: u32) {
    let img = image::load_from_memory(bytes).expect("encoded buffer should decode as an image");
    assert_eq!(
        (img.width(), img.height()),
        (width, height),
        "decoded image is {}x{}, expected {width}x{height}",
        img.width(),
        img.height()
    );
}

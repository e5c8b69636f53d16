//! Input sanitization for scene text and uploaded images.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;

use crate::error::{ApiError, ApiResult};

const JPEG_MAGIC: &[u8] = &[0xFF, 0xD8, 0xFF];
const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Strip control characters (keeping newlines and tabs) and cap the length.
pub fn sanitize_scene(input: &str, max_chars: usize) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .take(max_chars)
        .collect()
}

/// Image formats accepted for captioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

/// Detect the image format from magic bytes.
pub fn sniff_image(bytes: &[u8]) -> Option<ImageFormat> {
    if bytes.starts_with(JPEG_MAGIC) {
        Some(ImageFormat::Jpeg)
    } else if bytes.starts_with(PNG_MAGIC) {
        Some(ImageFormat::Png)
    } else {
        None
    }
}

/// Decode a base64 image payload, accepting an optional `data:` URL prefix.
pub fn decode_image(encoded: &str, max_bytes: usize) -> ApiResult<Vec<u8>> {
    let payload = match encoded.split_once(";base64,") {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    let payload: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    // Reject before decoding; base64 expands by 4/3
    if payload.len() / 4 * 3 > max_bytes + 3 {
        return Err(ApiError::PayloadTooLarge(format!(
            "image exceeds {} bytes",
            max_bytes
        )));
    }

    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ApiError::bad_request(format!("image_base64 is not valid base64: {}", e)))?;

    if bytes.len() > max_bytes {
        return Err(ApiError::PayloadTooLarge(format!(
            "image exceeds {} bytes",
            max_bytes
        )));
    }

    if sniff_image(&bytes).is_none() {
        warn!(len = bytes.len(), "Rejected image with unknown format");
        return Err(ApiError::bad_request("image must be a JPEG or PNG"));
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TINY_PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];

    #[test]
    fn test_sanitize_scene() {
        assert_eq!(
            sanitize_scene("a dark\u{0007} alley\n\tat night", 100),
            "a dark alley\n\tat night"
        );
        assert_eq!(sanitize_scene("abcdef", 3), "abc");
    }

    #[test]
    fn test_sniff_image() {
        assert_eq!(sniff_image(TINY_PNG), Some(ImageFormat::Png));
        assert_eq!(sniff_image(&[0xFF, 0xD8, 0xFF, 0xE0]), Some(ImageFormat::Jpeg));
        assert_eq!(sniff_image(b"GIF89a"), None);
    }

    #[test]
    fn test_decode_image_accepts_data_url() {
        let encoded = format!("data:image/png;base64,{}", STANDARD.encode(TINY_PNG));
        assert_eq!(decode_image(&encoded, 1024).unwrap(), TINY_PNG);
    }

    #[test]
    fn test_decode_image_rejects_bad_input() {
        assert!(matches!(
            decode_image("not base64!!", 1024),
            Err(ApiError::BadRequest(_))
        ));

        let gif = STANDARD.encode(b"GIF89a....");
        assert!(matches!(decode_image(&gif, 1024), Err(ApiError::BadRequest(_))));

        let big = STANDARD.encode(vec![0xFFu8; 64]);
        assert!(matches!(
            decode_image(&big, 16),
            Err(ApiError::PayloadTooLarge(_))
        ));
    }
}

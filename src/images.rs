//! Base64/PNG codec helpers for sdapi/v1 payloads.
//!
//! The server returns images as base64-encoded PNG strings, optionally
//! carrying a `data:image/png;base64,` prefix. Decoding is best-effort:
//! entries that fail to decode are skipped, never fatal.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat};

/// Result of decoding a batch of base64 image payloads.
///
/// `raw` holds every payload whose base64 decoded; `images` only those whose
/// bytes also parsed as an image, so `images.len() <= raw.len()`.
#[derive(Debug, Clone, Default)]
pub struct DecodedImages {
    pub images: Vec<DynamicImage>,
    pub raw: Vec<Vec<u8>>,
    /// Entries dropped because base64 or image decoding failed.
    pub skipped: usize,
}

/// Strip a data-URL prefix, returning the bare base64 payload.
///
/// Plain payloads pass through unchanged.
fn strip_data_url_prefix(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, rest)) => rest,
        None => payload,
    }
}

/// Decode a batch of base64 PNG payloads, skipping entries that fail.
///
/// Pure function over the encoded strings; the client uses it to enrich
/// generation responses, and callers can reuse it on payloads they carry
/// around themselves.
pub fn decode_image_payloads<S: AsRef<str>>(encoded: &[S]) -> DecodedImages {
    let mut out = DecodedImages {
        images: Vec::with_capacity(encoded.len()),
        raw: Vec::with_capacity(encoded.len()),
        skipped: 0,
    };

    for payload in encoded {
        let bare = strip_data_url_prefix(payload.as_ref());
        let data = match STANDARD.decode(bare) {
            Ok(d) => d,
            Err(e) => {
                // Should not happen with a well-behaved server.
                tracing::warn!("skipping image with invalid base64: {e}");
                out.skipped += 1;
                continue;
            }
        };

        let parsed = image::load_from_memory(&data);
        out.raw.push(data);

        match parsed {
            Ok(img) => out.images.push(img),
            Err(e) => {
                tracing::warn!("skipping image with undecodable pixel data: {e}");
                out.skipped += 1;
            }
        }
    }

    out
}

/// Encode an image as a bare base64 PNG string.
///
/// Degenerate images the PNG encoder rejects (e.g. zero-sized) yield an
/// empty payload instead of panicking.
pub fn image_to_base64(img: &DynamicImage) -> String {
    let mut buf = Vec::new();
    if let Err(e) = img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png) {
        tracing::warn!("PNG encoding failed, returning empty payload: {e}");
        buf.clear();
    }
    STANDARD.encode(&buf)
}

/// Encode an image as a `data:image/png;base64,` URL for embedding in
/// img2img/inpainting requests.
pub fn image_to_data_url(img: &DynamicImage) -> String {
    format!("data:image/png;base64,{}", image_to_base64(img))
}

/// Wrap already-encoded PNG bytes in a `data:image/png;base64,` URL.
pub fn png_bytes_to_data_url(data: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn fixture_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([x as u8, y as u8, 0, 255])
        }))
    }

    #[test]
    fn test_strip_plain_payload_unchanged() {
        assert_eq!(strip_data_url_prefix("aGVsbG8="), "aGVsbG8=");
    }

    #[test]
    fn test_strip_data_url_prefix_keeps_payload() {
        assert_eq!(
            strip_data_url_prefix("data:image/png;base64,aGVsbG8="),
            "aGVsbG8="
        );
    }

    #[test]
    fn test_roundtrip_preserves_dimensions() {
        let img = fixture_image(5, 3);
        let encoded = image_to_base64(&img);

        let decoded = decode_image_payloads(&[encoded]);
        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.images.len(), 1);
        assert_eq!(decoded.raw.len(), 1);
        assert_eq!(decoded.images[0].width(), 5);
        assert_eq!(decoded.images[0].height(), 3);
    }

    #[test]
    fn test_data_url_payload_decodes() {
        let img = fixture_image(4, 4);
        let url = image_to_data_url(&img);
        assert!(url.starts_with("data:image/png;base64,"));

        let decoded = decode_image_payloads(&[url]);
        assert_eq!(decoded.images.len(), 1);
        assert_eq!(decoded.images[0].width(), 4);
    }

    #[test]
    fn test_invalid_base64_is_skipped() {
        let img = fixture_image(2, 2);
        let good = image_to_base64(&img);
        let decoded = decode_image_payloads(&[good, "!!!not-base64!!!".to_string()]);
        assert_eq!(decoded.images.len(), 1);
        assert_eq!(decoded.raw.len(), 1);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_valid_base64_invalid_png_keeps_raw() {
        let not_png = STANDARD.encode(b"definitely not a png");
        let decoded = decode_image_payloads(&[not_png]);
        assert!(decoded.images.is_empty());
        // Raw bytes survive even when pixel decoding fails.
        assert_eq!(decoded.raw.len(), 1);
        assert_eq!(decoded.skipped, 1);
    }

    #[test]
    fn test_empty_input() {
        let decoded = decode_image_payloads::<String>(&[]);
        assert!(decoded.images.is_empty());
        assert!(decoded.raw.is_empty());
        assert_eq!(decoded.skipped, 0);
    }

    #[test]
    fn test_zero_sized_image_encodes_without_panicking() {
        let img = DynamicImage::ImageRgba8(RgbaImage::new(0, 0));
        let encoded = image_to_base64(&img);
        // Whatever the encoder does with a degenerate image, the result is
        // still well-formed base64.
        assert!(STANDARD.decode(encoded.as_bytes()).is_ok());
    }

    #[test]
    fn test_png_bytes_to_data_url() {
        let url = png_bytes_to_data_url(b"abc");
        assert_eq!(url, format!("data:image/png;base64,{}", STANDARD.encode(b"abc")));
    }
}

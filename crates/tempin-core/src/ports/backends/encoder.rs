use base64::Engine;

use crate::identity::errors::IdentityError;
use crate::ports::ImageEncoder;

/// [`ImageEncoder`] producing base64 `data:` URIs.
///
/// The MIME type comes from the magic bytes, not the file extension.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataUriEncoder;

impl ImageEncoder for DataUriEncoder {
    fn encode(&self, bytes: &[u8]) -> Result<String, IdentityError> {
        if bytes.is_empty() {
            return Err(IdentityError::ImageEncodeFailed {
                message: "no image data".to_string(),
            });
        }

        let format =
            image::guess_format(bytes).map_err(|e| IdentityError::ImageEncodeFailed {
                message: e.to_string(),
            })?;
        let payload = base64::engine::general_purpose::STANDARD.encode(bytes);

        Ok(format!("data:{};base64,{}", format.to_mime_type(), payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_bytes() {
        let uri = DataUriEncoder.encode(PNG_SIGNATURE).unwrap();
        assert_eq!(uri, "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_mime_follows_content_not_name() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];
        let uri = DataUriEncoder.encode(&jpeg).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_encode_rejects_non_image() {
        let err = DataUriEncoder.encode(b"definitely not an image").unwrap_err();
        assert!(matches!(err, IdentityError::ImageEncodeFailed { .. }));
    }

    #[test]
    fn test_encode_rejects_empty_input() {
        let err = DataUriEncoder.encode(b"").unwrap_err();
        assert_eq!(err.to_string(), "Failed to encode image: no image data");
    }
}

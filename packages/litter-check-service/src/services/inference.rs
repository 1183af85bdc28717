use async_trait::async_trait;

/// MIME type declared for every submitted photo
pub const JPEG_MIME_TYPE: &str = "image/jpeg";

/// Image sent inline alongside the prompt
#[derive(Debug, Clone, Copy)]
pub struct InlineImage<'a> {
    pub mime_type: &'a str,
    pub data: &'a str, // base64
}

impl<'a> InlineImage<'a> {
    pub fn jpeg(data: &'a str) -> Self {
        Self {
            mime_type: JPEG_MIME_TYPE,
            data,
        }
    }
}

/// Failure of the upstream call itself (network, quota, auth).
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("inference request failed: {0}")]
    Transport(String),

    #[error("inference service returned HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("inference service returned no text{}", block_suffix(.block_reason))]
    EmptyResponse { block_reason: Option<String> },
}

fn block_suffix(block_reason: &Option<String>) -> String {
    match block_reason {
        Some(reason) => format!(" (blocked: {})", reason),
        None => String::new(),
    }
}

/// Multimodal model endpoint: prompt plus one image in, free text out.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str, image: InlineImage<'_>) -> Result<String, InferenceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InferenceError::Upstream {
            status: 429,
            message: "Resource has been exhausted".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "inference service returned HTTP 429: Resource has been exhausted"
        );

        let err = InferenceError::EmptyResponse {
            block_reason: Some("SAFETY".to_string()),
        };
        assert_eq!(err.to_string(), "inference service returned no text (blocked: SAFETY)");

        let err = InferenceError::EmptyResponse { block_reason: None };
        assert_eq!(err.to_string(), "inference service returned no text");
    }

    #[test]
    fn test_jpeg_image() {
        let image = InlineImage::jpeg("abc");
        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!(image.data, "abc");
    }
}

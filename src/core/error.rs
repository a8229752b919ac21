use thiserror::Error;

/// Errors raised across the host/engine boundary.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("engine is {engine:?} but display surface is {surface:?}")]
    SizeMismatch {
        engine: (u32, u32),
        surface: (u32, u32),
    },

    /// The engine handed out fewer bytes than `width * height * 4`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    PixelBufferSize { expected: usize, actual: usize },

    #[error("surface expects {expected} bytes, got {actual}")]
    SurfaceSize { expected: usize, actual: usize },

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("dom error: {0}")]
    Dom(String),
}

pub type HostResult<T> = Result<T, HostError>;

/// Expected RGBA byte length for a surface of the given size.
#[inline]
pub fn rgba_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) * 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_len_is_four_bytes_per_pixel() {
        assert_eq!(rgba_len(800, 600), 1_920_000);
        assert_eq!(rgba_len(0, 600), 0);
    }

    #[test]
    fn size_mismatch_message_names_both_sizes() {
        let err = HostError::SizeMismatch { engine: (4, 4), surface: (8, 2) };
        let msg = err.to_string();
        assert!(msg.contains("(4, 4)"));
        assert!(msg.contains("(8, 2)"));
    }
}

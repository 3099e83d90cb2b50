//! Error type shared by every fallible operation in the crate.
//!
//! Rendering itself is total: out-of-range pixels are clamped or skipped and
//! unknown characters draw as blanks. Errors only come from the edges of the
//! system, where caller input is validated, the strip driver flushes, or files
//! are read and written.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    /// A caller-supplied value is outside the range the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// The strip driver failed to push the buffer to the hardware.
    #[error("strip driver error: {0}")]
    Driver(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

impl MatrixError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = MatrixError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invalid_argument_message_names_the_argument() {
        let err = MatrixError::invalid("delay", "must be at most 2000 ms, got 2500");
        assert_eq!(
            err.to_string(),
            "invalid argument `delay`: must be at most 2000 ms, got 2500"
        );
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn open_missing() -> Result<()> {
            std::fs::read("/definitely/not/here.json")?;
            Ok(())
        }
        assert!(matches!(open_missing(), Err(MatrixError::Io(_))));
    }
}

use thiserror::Error;

/// Failures surfaced by session creation.
///
/// `GenerationFailed` carries a diagnostic for the debug log only. Callers branch
/// on the variant, never on the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudyError {
    #[error("topic must not be empty")]
    InvalidInput,
    #[error("content generation failed: {0}")]
    GenerationFailed(String),
}

impl StudyError {
    pub fn generation(detail: impl Into<String>) -> Self {
        StudyError::GenerationFailed(detail.into())
    }

    /// Text for the home screen status line.
    pub fn user_message(&self) -> &'static str {
        match self {
            StudyError::InvalidInput => "Please enter a topic first!",
            StudyError::GenerationFailed(_) => {
                "Something went wrong. Please try a simpler topic or check your connection."
            }
        }
    }
}

use thiserror::Error;

/// Errors that can occur while building or evaluating motions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Kinematics parameters that do not describe a physical motion.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Two arrays or lists that must be index-aligned have different lengths.
    #[error("size mismatch for {what}: expected {expected}, found {found}")]
    SizeMismatch {
        /// The quantity whose length was checked.
        what: &'static str,
        /// The length implied by the other operands.
        expected: usize,
        /// The length actually supplied.
        found: usize,
    },

    /// An argument lies outside of the domain of an operation, e.g. a
    /// non-finite time or the index of a body that does not exist.
    #[error("domain error: {0}")]
    DomainError(String),
}

/// Result type alias for motion operations.
pub type Result<T> = std::result::Result<T, MotionError>;

impl MotionError {
    pub(crate) fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
        if expected == found {
            Ok(())
        } else {
            Err(MotionError::SizeMismatch {
                what,
                expected,
                found,
            })
        }
    }

    pub(crate) fn check_time(t: f64) -> Result<()> {
        if t.is_finite() {
            Ok(())
        } else {
            Err(MotionError::DomainError(format!(
                "time must be finite, got {t}"
            )))
        }
    }
}

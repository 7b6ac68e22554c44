//! List operation errors.
//!
//! Only structural misuse is reported as a value. Allocation failure is not:
//! the global allocator aborts the process, and no layer here catches it.

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors returned by list primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// A required argument was missing, e.g. an insert anchor.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ListError::InvalidArgument("cursor has no anchor node");
        assert_eq!(err.to_string(), "Invalid argument: cursor has no anchor node");
    }
}

use std::io;
use roster_lib::validation::ValidationError;
use thiserror::Error;

/// Ways the walkthrough can fail
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = DriverError::from(ValidationError::new(150));
        assert_eq!(err.to_string(), "Marks must be between 0 and 100");
    }

    #[test]
    fn test_io_message() {
        let err = DriverError::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        assert_eq!(err.to_string(), "Failed to write output: disk full");
    }
}

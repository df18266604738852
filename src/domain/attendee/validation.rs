//! Attendee name validation

use thiserror::Error;

/// Errors that can occur during attendee validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttendeeValidationError {
    #[error("Attendee name cannot be empty")]
    EmptyName,

    #[error("Attendee name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_ATTENDEE_NAME_LENGTH: usize = 100;

/// Validate an attendee name (already trimmed by the caller)
pub fn validate_attendee_name(name: &str) -> Result<(), AttendeeValidationError> {
    if name.is_empty() {
        return Err(AttendeeValidationError::EmptyName);
    }

    if name.len() > MAX_ATTENDEE_NAME_LENGTH {
        return Err(AttendeeValidationError::NameTooLong(
            MAX_ATTENDEE_NAME_LENGTH,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_attendee_name("Alice").is_ok());
        assert!(validate_attendee_name("Mary Jane O'Connor").is_ok());
        assert!(validate_attendee_name("李小龙").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(
            validate_attendee_name(""),
            Err(AttendeeValidationError::EmptyName)
        );
    }

    #[test]
    fn test_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_attendee_name(&long_name),
            Err(AttendeeValidationError::NameTooLong(100))
        );
    }
}

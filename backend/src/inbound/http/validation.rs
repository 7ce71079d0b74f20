//! Shared validation helpers for inbound HTTP adapters.
//!
//! Field failures are collected rather than short-circuited so one response
//! names every offending field.

use crate::domain::{Email, Error, PhoneNumber, User, UserName, UserValidationError};

fn collect<T>(
    result: Result<T, UserValidationError>,
    failures: &mut Vec<UserValidationError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(failure) => {
            failures.push(failure);
            None
        }
    }
}

fn invalid_input_error(failures: &[UserValidationError]) -> Error {
    let detail = failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Error::invalid_input(format!("error when validating request body: {detail}"))
}

/// Validate the raw creation fields into a domain [`User`].
///
/// Every failing field contributes to the resulting
/// [`crate::domain::ErrorCode::InvalidInput`] message.
pub(crate) fn validated_user(
    name: &str,
    email: &str,
    phone_number: &str,
) -> Result<User, Error> {
    let mut failures = Vec::new();

    let user_name = collect(UserName::new(name), &mut failures);
    let email = collect(Email::new(email), &mut failures);
    let phone_number = collect(PhoneNumber::new(phone_number), &mut failures);

    match (user_name, email, phone_number) {
        (Some(user_name), Some(email), Some(phone_number)) => {
            Ok(User::new(user_name, email, phone_number))
        }
        _ => Err(invalid_input_error(&failures)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn valid_fields_produce_a_user() {
        let user = validated_user("ada_lovelace", "ada@example.com", "555-0100")
            .expect("valid fields pass");
        assert_eq!(user.user_name().as_ref(), "ada_lovelace");
    }

    #[rstest]
    fn blank_name_fails_with_invalid_input() {
        let err = validated_user("  ", "ada@example.com", "555-0100")
            .expect_err("blank name fails");
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(err.message().contains("name"));
    }

    #[rstest]
    fn unsafe_name_fails_with_invalid_input() {
        let err = validated_user("ada lovelace", "ada@example.com", "555-0100")
            .expect_err("unsafe name fails");
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert!(err.message().contains("invalid characters"));
    }

    #[rstest]
    fn every_failing_field_is_reported() {
        let err = validated_user("", "", "").expect_err("all fields fail");
        let message = err.message();
        assert!(message.contains("name"));
        assert!(message.contains("email"));
        assert!(message.contains("phone_number"));
        assert_eq!(message.matches(';').count(), 2);
    }
}

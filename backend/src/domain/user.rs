//! User data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors returned by [`User::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUserName,
    UserNameInvalidCharacters,
    EmptyEmail,
    EmptyPhoneNumber,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUserName => write!(f, "the field name is required and should not be blank"),
            Self::UserNameInvalidCharacters => write!(
                f,
                "the field name contains invalid characters, only a-zA-Z0-9_ are allowed",
            ),
            Self::EmptyEmail => write!(f, "the field email is required and should not be blank"),
            Self::EmptyPhoneNumber => write!(
                f,
                "the field phone_number is required and should not be blank",
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

static USER_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn user_name_regex() -> &'static Regex {
    USER_NAME_RE.get_or_init(|| {
        // Blankness is rejected separately; this constrains allowed characters.
        let pattern = "^[A-Za-z0-9_]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("user name regex failed to compile: {error}"))
    })
}

/// Unique user name acting as the natural key for a user record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(user_name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(user_name.into())
    }

    fn from_owned(user_name: String) -> Result<Self, UserValidationError> {
        if user_name.trim().is_empty() {
            return Err(UserValidationError::EmptyUserName);
        }
        if !user_name_regex().is_match(&user_name) {
            return Err(UserValidationError::UserNameInvalidCharacters);
        }
        Ok(Self(user_name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Contact email address.
///
/// Only blankness is rejected; the storage collaborator treats the value as
/// opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from owned input.
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(email.into())
    }

    fn from_owned(email: String) -> Result<Self, UserValidationError> {
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Contact phone number, stored as opaque non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`] from owned input.
    pub fn new(phone_number: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(phone_number.into())
    }

    fn from_owned(phone_number: String) -> Result<Self, UserValidationError> {
        if phone_number.trim().is_empty() {
            return Err(UserValidationError::EmptyPhoneNumber);
        }
        Ok(Self(phone_number))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `user_name` is non-blank and restricted to `[A-Za-z0-9_]`.
/// - `email` and `phone_number` are non-blank.
///
/// Wire JSON uses the `name`/`email`/`phone_number` field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "ada_lovelace")]
    user_name: UserName,
    #[schema(value_type = String, example = "ada@example.com")]
    email: Email,
    #[schema(value_type = String, example = "+44 20 7946 0000")]
    phone_number: PhoneNumber,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(user_name: UserName, email: Email, phone_number: PhoneNumber) -> Self {
        Self {
            user_name,
            email,
            phone_number,
        }
    }

    /// Fallible constructor enforcing every field invariant.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn try_from_parts(
        user_name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let user_name = UserName::new(user_name)?;
        let email = Email::new(email)?;
        let phone_number = PhoneNumber::new(phone_number)?;

        Ok(Self::new(user_name, email, phone_number))
    }

    /// Natural key identifying the user.
    pub fn user_name(&self) -> &UserName {
        &self.user_name
    }

    /// Contact email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Contact phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
struct UserDto {
    name: String,
    email: String,
    phone_number: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            user_name,
            email,
            phone_number,
        } = value;
        Self {
            name: user_name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_parts(value.name, value.email, value.phone_number)
    }
}

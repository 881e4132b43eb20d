//! Validated field value types.
//!
//! # Responsibility
//! - Define the newtypes for every validated client/country/tag field.
//! - Reject malformed input at construction, never later.
//!
//! # Invariants
//! - A constructed field value always satisfies its format constraint.
//! - Field values are immutable after construction.
//! - `CountryCode` is stored uppercase regardless of input case.

use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9]+[.-])*[A-Za-z0-9]{2,}$")
        .expect("valid email regex")
});
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("valid tag regex"));
static COUNTRY_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid country code regex"));

/// Constraint violation raised by a field constructor.
///
/// Carries the rejected raw value so callers can echo it back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Name(String),
    Phone(String),
    Email(String),
    Address(String),
    Tag(String),
    CountryCode(String),
    NoteText(String),
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name(value) => write!(
                f,
                "invalid name `{value}`: names should only contain alphanumeric characters \
                 and spaces, and it should not be blank"
            ),
            Self::Phone(value) => write!(
                f,
                "invalid phone `{value}`: phone numbers should only contain numbers, \
                 and it should be at least 3 digits long"
            ),
            Self::Email(value) => write!(
                f,
                "invalid email `{value}`: emails should be of the format local-part@domain"
            ),
            Self::Address(value) => write!(
                f,
                "invalid address `{value}`: addresses can take any values, \
                 and it should not be blank"
            ),
            Self::Tag(value) => write!(f, "invalid tag `{value}`: tag names should be alphanumeric"),
            Self::CountryCode(value) => write!(
                f,
                "invalid country code `{value}`: country codes must be exactly two letters"
            ),
            Self::NoteText(value) => {
                write!(f, "invalid note `{value}`: notes should not be blank")
            }
        }
    }
}

impl Error for FieldError {}

macro_rules! field_accessors {
    ($type:ident) => {
        impl $type {
            /// Returns the validated raw value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Display for $type {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// Client display name. Alphanumeric words separated by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if NAME_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::Name(value))
        }
    }
}

field_accessors!(Name);

/// Client phone number, digits only, at least 3 of them.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if PHONE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::Phone(value))
        }
    }
}

field_accessors!(Phone);

/// Client email of the shape `local-part@domain`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if EMAIL_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::Email(value))
        }
    }
}

field_accessors!(Email);

/// Client postal address. Any non-blank value is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if value.starts_with(char::is_whitespace) || value.trim().is_empty() {
            Err(FieldError::Address(value))
        } else {
            Ok(Self(value))
        }
    }
}

field_accessors!(Address);

/// Label attachable to clients and notes. Single alphanumeric word.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if TAG_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(FieldError::Tag(value))
        }
    }
}

field_accessors!(Tag);

/// Two-letter ISO 3166 country code, normalized to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
        let value = value.into();
        if COUNTRY_CODE_RE.is_match(&value) {
            Ok(Self(value.to_ascii_uppercase()))
        } else {
            Err(FieldError::CountryCode(value))
        }
    }
}

field_accessors!(CountryCode);

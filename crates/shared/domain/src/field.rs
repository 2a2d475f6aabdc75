//! Signup form field identifiers.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The three raw text inputs of the signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Username,
    Password,
    Confirmation,
}

impl Field {
    /// Whether values of this field must stay out of logs
    pub fn is_secret(&self) -> bool {
        !matches!(self, Field::Username)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Username => write!(f, "username"),
            Field::Password => write!(f, "password"),
            Field::Confirmation => write!(f, "confirmation"),
        }
    }
}

impl std::str::FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "username" | "user" => Ok(Field::Username),
            "password" | "pass" => Ok(Field::Password),
            "confirmation" | "confirm" | "password_again" => Ok(Field::Confirmation),
            other => Err(DomainError::validation(format!("unknown field '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("user".parse::<Field>().unwrap(), Field::Username);
        assert_eq!("confirm".parse::<Field>().unwrap(), Field::Confirmation);
        assert!("email".parse::<Field>().is_err());
    }

    #[test]
    fn test_only_username_is_public() {
        assert!(!Field::Username.is_secret());
        assert!(Field::Password.is_secret());
        assert!(Field::Confirmation.is_secret());
    }
}

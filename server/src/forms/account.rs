use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use errors::Error;

use super::FormError;
use crate::pages::FormErrorView;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = 150,
            message = "Username must be between 1 and 150 characters"
        ),
        custom(
            function = "validate_username_chars",
            message = "Username may only contain letters, digits and @/./+/-/_"
        )
    )]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "The two password fields didn't match"))]
    pub confirm: String,
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    if username
        .chars()
        .all(|c| c.is_alphanumeric() || "@.+-_".contains(c))
    {
        Ok(())
    } else {
        Err(ValidationError::new("username_chars"))
    }
}

#[derive(Debug)]
pub enum AccountError {
    UserNotFound(String),
    BadPassword,
    Registration(Vec<String>),
    Failed(Error),
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AccountError::UserNotFound(username) => {
                write!(f, "The user '{}' does not exist.", username)
            }
            AccountError::BadPassword => {
                write!(f, "Please enter a correct username and password.")
            }
            AccountError::Registration(messages) => write!(f, "{}", messages.join(" ")),
            AccountError::Failed(error) => write!(f, "{}", error),
        }
    }
}

impl FormError for AccountError {
    fn kind(&self) -> &'static str {
        match self {
            AccountError::UserNotFound(_) => "user_not_found",
            AccountError::BadPassword => "bad_password",
            AccountError::Registration(_) => "registration_invalid",
            AccountError::Failed(_) => "failed",
        }
    }
}

impl AccountError {
    /// One entry per message, registration can fail several rules at once.
    pub fn views(&self) -> Vec<FormErrorView> {
        match self {
            AccountError::Registration(messages) => messages
                .iter()
                .map(|message| FormErrorView {
                    kind: self.kind().to_string(),
                    message: message.clone(),
                })
                .collect(),
            _ => vec![FormErrorView::new(self)],
        }
    }
}

impl From<Error> for AccountError {
    fn from(error: Error) -> Self {
        match error {
            Error::ValidationError(messages) => AccountError::Registration(messages),
            error => AccountError::Failed(error),
        }
    }
}

use std::convert::TryFrom;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use errors::Error;

use super::FormError;

/// Browsers post the id as text, API clients may send a number.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ChoiceField {
    Id(i64),
    Text(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct VoteForm {
    pub choice: Option<ChoiceField>,
}

#[derive(Debug, Display)]
pub enum VoteError {
    #[display(fmt = "This question doesn't exist or is no longer available.")]
    NotFound,
    #[display(fmt = "You didn't select a valid choice.")]
    InvalidChoice,
    #[display(fmt = "{}", _0)]
    Failed(Error),
}

impl FormError for VoteError {
    fn kind(&self) -> &'static str {
        match self {
            VoteError::NotFound => "not_found",
            VoteError::InvalidChoice => "invalid_choice",
            VoteError::Failed(_) => "failed",
        }
    }
}

impl From<Error> for VoteError {
    fn from(error: Error) -> Self {
        match error {
            Error::NotFound(_) => VoteError::NotFound,
            error => VoteError::Failed(error),
        }
    }
}

impl VoteForm {
    pub fn choice_id(&self) -> Result<i32, VoteError> {
        let id = match &self.choice {
            Some(ChoiceField::Id(id)) => Some(*id),
            Some(ChoiceField::Text(text)) => text.trim().parse::<i64>().ok(),
            None => None,
        };

        id.and_then(|id| i32::try_from(id).ok())
            .ok_or(VoteError::InvalidChoice)
    }
}

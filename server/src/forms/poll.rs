use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::FormError;

pub const MIN_CHOICES: usize = 2;
pub const MAX_CHOICES: usize = 8;
pub const MAX_TEXT_LENGTH: usize = 200;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CreatePollForm {
    pub question: Option<String>,
    pub choices: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PollDraft {
    pub question: String,
    pub choices: Vec<String>,
}

#[derive(Clone, Debug, Display, PartialEq)]
pub enum CreatePollError {
    #[display(fmt = "Both a question and a list of choices are required.")]
    MissingFields,
    #[display(fmt = "The question can't be empty.")]
    EmptyQuestion,
    #[display(
        fmt = "A poll needs between {} and {} choices, got {}.",
        MIN_CHOICES,
        MAX_CHOICES,
        _0
    )]
    InvalidChoiceCount(usize),
    #[display(fmt = "Questions and choices can't be longer than {} characters.", MAX_TEXT_LENGTH)]
    TextTooLong,
}

impl FormError for CreatePollError {
    fn kind(&self) -> &'static str {
        match self {
            CreatePollError::MissingFields => "missing_fields",
            CreatePollError::EmptyQuestion => "empty_question",
            CreatePollError::InvalidChoiceCount(_) => "invalid_choice_count",
            CreatePollError::TextTooLong => "text_too_long",
        }
    }
}

fn non_empty(choices: &[String]) -> Vec<String> {
    choices
        .iter()
        .map(|choice| choice.trim())
        .filter(|choice| !choice.is_empty())
        .map(String::from)
        .collect()
}

impl CreatePollForm {
    /// What gets shown again on a failed submission: the question as typed
    /// and only the choices that had content.
    pub fn sanitized(&self) -> PollDraft {
        PollDraft {
            question: self.question.clone().unwrap_or_default(),
            choices: self.choices.as_deref().map(non_empty).unwrap_or_default(),
        }
    }

    pub fn clean(&self) -> Result<PollDraft, CreatePollError> {
        let (question, choices) = match (&self.question, &self.choices) {
            (Some(question), Some(choices)) => (question.trim(), non_empty(choices)),
            _ => return Err(CreatePollError::MissingFields),
        };

        if question.is_empty() {
            return Err(CreatePollError::EmptyQuestion);
        }

        if choices.len() < MIN_CHOICES || choices.len() > MAX_CHOICES {
            return Err(CreatePollError::InvalidChoiceCount(choices.len()));
        }

        let too_long = |text: &str| text.chars().count() > MAX_TEXT_LENGTH;
        if too_long(question) || choices.iter().any(|choice| too_long(choice)) {
            return Err(CreatePollError::TextTooLong);
        }

        Ok(PollDraft {
            question: question.to_string(),
            choices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{CreatePollError, CreatePollForm, PollDraft, MAX_TEXT_LENGTH};
    use crate::forms::FormError;

    fn form(question: Option<&str>, choices: Option<&[&str]>) -> CreatePollForm {
        CreatePollForm {
            question: question.map(String::from),
            choices: choices.map(|choices| choices.iter().map(|c| c.to_string()).collect()),
        }
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            form(None, Some(&["a", "b"])).clean(),
            Err(CreatePollError::MissingFields)
        );
        assert_eq!(
            form(Some("Why?"), None).clean(),
            Err(CreatePollError::MissingFields)
        );
    }

    #[test]
    fn test_empty_question() {
        assert_eq!(
            form(Some("   "), Some(&["a", "b"])).clean(),
            Err(CreatePollError::EmptyQuestion)
        );
    }

    #[test]
    fn test_choice_count_outside_range() {
        assert_eq!(
            form(Some("Why?"), Some(&[])).clean(),
            Err(CreatePollError::InvalidChoiceCount(0))
        );
        assert_eq!(
            form(Some("Why?"), Some(&["only", "", " "])).clean(),
            Err(CreatePollError::InvalidChoiceCount(1))
        );
        assert_eq!(
            form(Some("Why?"), Some(&["1", "2", "3", "4", "5", "6", "7", "8", "9"])).clean(),
            Err(CreatePollError::InvalidChoiceCount(9))
        );
    }

    #[test]
    fn test_empty_choices_do_not_count() {
        let draft = form(Some(" Why? "), Some(&["", "yes", "", "no", ""]))
            .clean()
            .unwrap();
        assert_eq!(
            draft,
            PollDraft {
                question: "Why?".to_string(),
                choices: vec!["yes".to_string(), "no".to_string()],
            }
        );
    }

    #[test]
    fn test_eight_choices_accepted() {
        let draft = form(Some("Why?"), Some(&["1", "2", "3", "4", "5", "6", "7", "8"]))
            .clean()
            .unwrap();
        assert_eq!(draft.choices.len(), 8);
    }

    #[test]
    fn test_text_too_long() {
        let long = "x".repeat(MAX_TEXT_LENGTH + 1);
        assert_eq!(
            form(Some(&long), Some(&["a", "b"])).clean(),
            Err(CreatePollError::TextTooLong)
        );
        assert_eq!(
            form(Some("Why?"), Some(&["a", &long])).clean(),
            Err(CreatePollError::TextTooLong)
        );
    }

    #[test]
    fn test_sanitized_keeps_non_empty_input() {
        let submitted = form(Some("Why?"), Some(&["", "only"]));
        assert_eq!(
            submitted.sanitized(),
            PollDraft {
                question: "Why?".to_string(),
                choices: vec!["only".to_string()],
            }
        );
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(CreatePollError::MissingFields.kind(), "missing_fields");
        assert_eq!(CreatePollError::InvalidChoiceCount(1).kind(), "invalid_choice_count");
        assert_eq!(
            CreatePollError::InvalidChoiceCount(9).to_string(),
            "A poll needs between 2 and 8 choices, got 9."
        );
    }
}

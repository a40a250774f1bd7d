//! View models for each page. A template layer or client renders these; handlers
//! only decide which page to send and what goes on it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::models::{Choice, Question};

use crate::forms::{FormError, PollDraft};
use crate::redirect::PendingQuery;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FormErrorView {
    pub kind: String,
    pub message: String,
}

impl FormErrorView {
    pub fn new<E: FormError>(error: &E) -> Self {
        FormErrorView {
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IndexPage {
    Empty { message: String },
    Polls { questions: Vec<Question> },
}

impl IndexPage {
    pub fn new(questions: Vec<Question>) -> Self {
        if questions.is_empty() {
            IndexPage::Empty {
                message: NO_POLLS_MESSAGE.to_string(),
            }
        } else {
            IndexPage::Polls { questions }
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DetailPage {
    pub question: Question,
    pub published_recently: bool,
    pub choices: Vec<Choice>,
    pub error: Option<FormErrorView>,
}

impl DetailPage {
    pub fn new(question: Question, choices: Vec<Choice>, error: Option<FormErrorView>) -> Self {
        DetailPage {
            published_recently: question.was_published_recently(Utc::now()),
            question,
            choices,
            error,
        }
    }
}

pub fn votes_label(votes: i32) -> String {
    if votes == 1 {
        "1 vote".to_string()
    } else {
        format!("{} votes", votes)
    }
}

#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct ChoiceTally {
    pub id: i32,
    pub choice_text: String,
    pub votes: i32,
    pub votes_label: String,
}

impl From<Choice> for ChoiceTally {
    fn from(choice: Choice) -> Self {
        ChoiceTally {
            id: choice.id,
            votes_label: votes_label(choice.votes),
            votes: choice.votes,
            choice_text: choice.choice_text,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ResultsPage {
    pub question: Question,
    pub published_recently: bool,
    pub choices: Vec<ChoiceTally>,
}

impl ResultsPage {
    pub fn new(question: Question, choices: Vec<Choice>) -> Self {
        ResultsPage {
            published_recently: question.was_published_recently(Utc::now()),
            question,
            choices: choices.into_iter().map(ChoiceTally::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatePage {
    pub question: String,
    pub choices: Vec<String>,
    pub error: Option<FormErrorView>,
}

impl CreatePage {
    pub fn new(draft: PollDraft, error: Option<FormErrorView>) -> Self {
        CreatePage {
            question: draft.question,
            choices: draft.choices,
            error,
        }
    }
}

/// Shared by login and registration. `next`, `question` and `choices` are handed back
/// so the form can post them again.
#[derive(Debug, Deserialize, Serialize)]
pub struct AccountPage {
    pub username: String,
    pub next: String,
    pub question: Option<String>,
    pub choices: Vec<String>,
    pub errors: Vec<FormErrorView>,
}

impl AccountPage {
    pub fn new(username: String, query: &PendingQuery, errors: Vec<FormErrorView>) -> Self {
        AccountPage {
            username,
            next: query.next_path().to_string(),
            question: query.question.clone(),
            choices: query.choices.clone(),
            errors,
        }
    }
}

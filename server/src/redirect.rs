use actix_web::{http::header, HttpResponse};

use errors::Error;

use crate::forms::PollDraft;

pub const LOGIN_PATH: &str = "/login/";
pub const CREATE_PATH: &str = "/create/";

pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Only same-site absolute paths are followed after login, anything else goes home.
/// Browsers strip tabs and newlines before following a URL, so control characters
/// could turn `/\t/host` into `//host`.
pub fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}

/// The `next` destination plus a poll creation waiting on authentication,
/// as carried through the login and registration query strings.
#[derive(Debug, Default, PartialEq)]
pub struct PendingQuery {
    pub next: Option<String>,
    pub question: Option<String>,
    pub choices: Vec<String>,
}

impl PendingQuery {
    pub fn parse(query_string: &str) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query_string).unwrap_or_else(|err| {
                debug!("Ignoring unreadable query string - {}", err);
                Vec::new()
            });

        let mut query = PendingQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "next" => query.next = Some(value),
                "question" => query.question = Some(value),
                "choices" => query.choices.push(value),
                _ => {}
            }
        }
        query
    }

    pub fn for_creation(draft: &PollDraft) -> Self {
        PendingQuery {
            next: Some(CREATE_PATH.to_string()),
            question: Some(draft.question.clone()),
            choices: draft.choices.clone(),
        }
    }

    pub fn next_path(&self) -> &str {
        match self.next.as_deref() {
            Some(next) if is_local_path(next) => next,
            _ => "/",
        }
    }

    pub fn draft(&self) -> PollDraft {
        PollDraft {
            question: self.question.clone().unwrap_or_default(),
            choices: self.choices.clone(),
        }
    }

    fn pending_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(self.choices.len() + 1);
        if let Some(question) = &self.question {
            pairs.push(("question", question.as_str()));
        }
        for choice in &self.choices {
            pairs.push(("choices", choice.as_str()));
        }
        pairs
    }

    /// Where to send the user once they are signed in, with the pending poll re-attached.
    pub fn destination(&self) -> Result<String, Error> {
        let next = self.next_path();
        let pairs = self.pending_pairs();
        if pairs.is_empty() {
            return Ok(next.to_string());
        }

        let separator = if next.contains('?') { '&' } else { '?' };
        Ok(format!("{}{}{}", next, separator, encode(&pairs)?))
    }

    /// Login URL that brings the user back here afterwards.
    pub fn login_url(&self) -> Result<String, Error> {
        let mut pairs = vec![("next", self.next_path())];
        pairs.extend(self.pending_pairs());
        Ok(format!("{}?{}", LOGIN_PATH, encode(&pairs)?))
    }
}

fn encode(pairs: &[(&str, &str)]) -> Result<String, Error> {
    serde_urlencoded::to_string(pairs).map_err(|err| Error::InternalServerError(err.to_string()))
}

use actix_web::{
    web::{block, Data, Json, Path},
    HttpResponse, Result,
};
use chrono::Utc;
use diesel::PgConnection;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use super::{find_published_with_choices, QUESTION_NOT_FOUND};
use crate::forms::{VoteError, VoteForm};
use crate::pages::{DetailPage, FormErrorView};
use crate::redirect::see_other;

fn cast_vote(
    conn: &PgConnection,
    question_id: i32,
    choice_id: Result<i32, VoteError>,
) -> Result<Choice, VoteError> {
    let question = Question::find_published(conn, question_id, Utc::now())?;
    let choice_id = choice_id?;

    Choice::increment_votes(conn, question.id, choice_id).map_err(|err| match err {
        Error::NotFound(_) => VoteError::InvalidChoice,
        err => VoteError::Failed(err),
    })
}

pub async fn vote(
    pool: Data<PgPool>,
    question_id: Path<i32>,
    params: Json<VoteForm>,
) -> Result<HttpResponse, Error> {
    let connection = get_conn(&pool)?;
    let question_id = question_id.into_inner();
    let choice_id = params.choice_id();

    let res = block(move || cast_vote(&connection, question_id, choice_id)).await?;

    match res {
        Ok(choice) => {
            info!(
                "Vote counted for choice {} on question {}, now at {}",
                choice.id, question_id, choice.votes
            );
            Ok(see_other(&format!("/{}/results/", question_id)))
        }
        Err(VoteError::NotFound) => Err(Error::NotFound(QUESTION_NOT_FOUND.into())),
        Err(VoteError::Failed(err)) => Err(err),
        Err(error) => {
            let connection = get_conn(&pool)?;
            let res =
                block(move || find_published_with_choices(&connection, question_id)).await?;
            let (question, choices) = res?;

            Ok(HttpResponse::Ok().json(DetailPage::new(
                question,
                choices,
                Some(FormErrorView::new(&error)),
            )))
        }
    }
}

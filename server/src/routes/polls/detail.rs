use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use chrono::Utc;
use diesel::PgConnection;

use db::{
    get_conn,
    models::{Choice, Question},
    PgPool,
};
use errors::Error;

use crate::pages::DetailPage;

pub const QUESTION_NOT_FOUND: &str = "This question doesn't exist or is no longer available";

/// A published question and its choices. Future dated questions are treated as missing.
pub fn find_published_with_choices(
    conn: &PgConnection,
    question_id: i32,
) -> Result<(Question, Vec<Choice>), Error> {
    let question = Question::find_published(conn, question_id, Utc::now()).map_err(|err| match err {
        Error::NotFound(_) => Error::NotFound(QUESTION_NOT_FOUND.into()),
        _ => err,
    })?;
    let choices = Choice::find_by_question(conn, question.id)?;

    Ok((question, choices))
}

pub async fn detail(pool: Data<PgPool>, question_id: Path<i32>) -> Result<Json<DetailPage>, Error> {
    let connection = get_conn(&pool)?;
    let question_id = question_id.into_inner();

    let res = block(move || find_published_with_choices(&connection, question_id)).await?;
    let (question, choices) = res?;

    Ok(Json(DetailPage::new(question, choices, None)))
}

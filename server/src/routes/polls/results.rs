use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};

use db::{get_conn, PgPool};
use errors::Error;

use super::find_published_with_choices;
use crate::pages::ResultsPage;

pub async fn results(
    pool: Data<PgPool>,
    question_id: Path<i32>,
) -> Result<Json<ResultsPage>, Error> {
    let connection = get_conn(&pool)?;
    let question_id = question_id.into_inner();

    let res = block(move || find_published_with_choices(&connection, question_id)).await?;
    let (question, choices) = res?;

    Ok(Json(ResultsPage::new(question, choices)))
}

use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpRequest, HttpResponse, Result,
};

use auth::get_claim_from_identity;
use db::{get_conn, models::Question, PgPool};
use errors::Error;

use crate::forms::CreatePollForm;
use crate::pages::{CreatePage, FormErrorView};
use crate::redirect::{see_other, PendingQuery};

/// Creation form, pre-filled from `question` and `choices` when resuming after login.
pub async fn new_poll(req: HttpRequest) -> Result<Json<CreatePage>, Error> {
    let query = PendingQuery::parse(req.query_string());

    Ok(Json(CreatePage::new(query.draft(), None)))
}

pub async fn create(
    id: Identity,
    pool: Data<PgPool>,
    params: Json<CreatePollForm>,
) -> Result<HttpResponse, Error> {
    let draft = match params.clean() {
        Ok(draft) => draft,
        Err(err) => {
            return Ok(HttpResponse::Ok().json(CreatePage::new(
                params.sanitized(),
                Some(FormErrorView::new(&err)),
            )))
        }
    };

    let claim = match get_claim_from_identity(&id) {
        Ok(claim) => claim,
        Err(_) => {
            let login_url = PendingQuery::for_creation(&draft).login_url()?;
            return Ok(see_other(&login_url));
        }
    };

    let connection = get_conn(&pool)?;
    let res = block(move || {
        Question::create_with_choices(&connection, &draft.question, &draft.choices)
    })
    .await?;
    let (question, choices) = res?;

    info!(
        "{} created question {} with {} choices",
        claim.username,
        question.id,
        choices.len()
    );

    Ok(see_other(&format!("/{}/", question.id)))
}

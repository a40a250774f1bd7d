use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpRequest, HttpResponse, Result,
};

use auth::start_session;
use db::{get_conn, PgPool};
use errors::Error;

use crate::accounts::authenticate;
use crate::forms::{AccountError, FormError, LoginForm};
use crate::pages::{AccountPage, FormErrorView};
use crate::redirect::{see_other, PendingQuery};
use crate::validate::validate;

pub async fn login_page(req: HttpRequest) -> Result<Json<AccountPage>, Error> {
    let query = PendingQuery::parse(req.query_string());

    Ok(Json(AccountPage::new(String::new(), &query, vec![])))
}

pub async fn login(
    req: HttpRequest,
    id: Identity,
    pool: Data<PgPool>,
    params: Json<LoginForm>,
) -> Result<HttpResponse, Error> {
    let query = PendingQuery::parse(req.query_string());
    let username = params.username.clone();

    match validate(&params) {
        Ok(()) => {}
        Err(Error::ValidationError(messages)) => {
            let errors = messages
                .into_iter()
                .map(|message| FormErrorView {
                    kind: "required".to_string(),
                    message,
                })
                .collect();
            return Ok(HttpResponse::Ok().json(AccountPage::new(username, &query, errors)));
        }
        Err(err) => return Err(err),
    }

    let connection = get_conn(&pool)?;
    let form = params.into_inner();
    let res = block(move || authenticate(&connection, &form)).await?;

    match res {
        Ok(user) => {
            start_session(&id, user.id, user.username.clone())?;
            info!("{} logged in", user.username);
            Ok(see_other(&query.destination()?))
        }
        Err(AccountError::Failed(err)) => Err(err),
        Err(err) => {
            warn!("Rejected login for '{}' - {}", username, err.kind());
            Ok(HttpResponse::Ok().json(AccountPage::new(username, &query, err.views())))
        }
    }
}

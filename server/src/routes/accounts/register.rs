use actix_identity::Identity;
use actix_web::{
    web::{block, Data, Json},
    HttpRequest, HttpResponse, Result,
};

use auth::start_session;
use db::{get_conn, PgPool};
use errors::Error;

use crate::accounts;
use crate::forms::{AccountError, RegisterForm};
use crate::pages::AccountPage;
use crate::redirect::{see_other, PendingQuery};
use crate::validate::validate;

pub async fn register_page(req: HttpRequest) -> Result<Json<AccountPage>, Error> {
    let query = PendingQuery::parse(req.query_string());

    Ok(Json(AccountPage::new(String::new(), &query, vec![])))
}

pub async fn register(
    req: HttpRequest,
    id: Identity,
    pool: Data<PgPool>,
    params: Json<RegisterForm>,
) -> Result<HttpResponse, Error> {
    let query = PendingQuery::parse(req.query_string());
    let username = params.username.clone();

    let res = match validate(&params) {
        Ok(()) => {
            let connection = get_conn(&pool)?;
            let form = params.into_inner();
            block(move || accounts::register(&connection, &form)).await?
        }
        Err(err) => Err(AccountError::from(err)),
    };

    match res {
        Ok(user) => {
            start_session(&id, user.id, user.username.clone())?;
            info!("Registered {}", user.username);
            Ok(see_other(&query.destination()?))
        }
        Err(AccountError::Failed(err)) => Err(err),
        Err(err) => Ok(HttpResponse::Ok().json(AccountPage::new(username, &query, err.views()))),
    }
}

use diesel::PgConnection;

use db::models::User;
use errors::Error;

use crate::forms::{AccountError, LoginForm, RegisterForm};

const USERNAME_TAKEN: &str = "A user with that username already exists.";

/// Checks credentials, telling an unknown username apart from a wrong password.
pub fn authenticate(conn: &PgConnection, form: &LoginForm) -> Result<User, AccountError> {
    let user = User::find_by_username(conn, &form.username)?
        .ok_or_else(|| AccountError::UserNotFound(form.username.clone()))?;

    if !user.check_password(&form.password) {
        return Err(AccountError::BadPassword);
    }

    Ok(user)
}

/// Creates the account. The form must already have passed validation.
pub fn register(conn: &PgConnection, form: &RegisterForm) -> Result<User, AccountError> {
    if User::find_by_username(conn, &form.username)?.is_some() {
        return Err(AccountError::Registration(vec![USERNAME_TAKEN.to_string()]));
    }

    User::create(conn, &form.username, &form.password).map_err(|err| match err {
        // lost a race with another registration for the same name
        Error::BadRequest(_) => AccountError::Registration(vec![USERNAME_TAKEN.to_string()]),
        err => AccountError::Failed(err),
    })
}

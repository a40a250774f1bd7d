use chrono::{DateTime, Utc};
use diesel::{self, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use auth::{hash_password, verify_password};
use errors::Error;

use crate::schema::users;

#[derive(Debug, Queryable, Identifiable, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[table_name = "users"]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: String,
}

impl User {
    pub fn create(connection: &PgConnection, username: &str, password: &str) -> Result<User, Error> {
        let password_hash = hash_password(password)?;

        let user = diesel::insert_into(users::table)
            .values(NewUser {
                username,
                password_hash,
            })
            .get_result(connection)?;

        Ok(user)
    }

    pub fn find_by_username(
        connection: &PgConnection,
        username: &str,
    ) -> Result<Option<User>, Error> {
        use crate::schema::users::dsl::{username as username_field, users as users_table};

        let user = users_table
            .filter(username_field.eq(username))
            .first::<User>(connection)
            .optional()?;

        Ok(user)
    }

    pub fn check_password(&self, password: &str) -> bool {
        verify_password(password, &self.password_hash)
    }
}

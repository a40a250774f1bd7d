#[cfg(test)]
pub mod tests {
    use std::env;

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{
        body::MessageBody, cookie::Cookie, dev::ServiceResponse, error::Error, http::header, test,
        web, App,
    };
    use chrono::{Duration, Utc};
    use diesel::{self, RunQueryDsl};
    use dotenv::dotenv;
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use auth::get_identity_service;
    use db::{
        get_conn,
        models::{Choice, Question, User},
        new_pool,
        schema::{choices, questions, users},
        Connection, PgPool,
    };

    use crate::forms::LoginForm;
    use crate::routes::{not_found, routes};

    const SESSION_COOKIE: &str = "auth";

    pub fn setup_env() {
        dotenv().ok();
        if env::var("JWT_KEY").is_err() {
            env::set_var("JWT_KEY", "polls-test-jwt-key");
        }
        if env::var("SESSION_KEY").is_err() {
            env::set_var("SESSION_KEY", "polls-test-session-key-that-is-at-least-64-bytes-long-0123456789");
        }
    }

    pub fn get_pool() -> PgPool {
        setup_env();
        new_pool()
    }

    /// Connection to the test database with every table emptied.
    pub fn reset_db(pool: &PgPool) -> Connection {
        let conn = get_conn(pool).unwrap();
        diesel::delete(choices::table).execute(&conn).unwrap();
        diesel::delete(questions::table).execute(&conn).unwrap();
        diesel::delete(users::table).execute(&conn).unwrap();
        conn
    }

    /// Question published `days` from now, negative for the past.
    pub fn create_offset_question(conn: &Connection, question_text: &str, days: i64) -> Question {
        Question::create(conn, question_text, Utc::now() + Duration::days(days)).unwrap()
    }

    pub fn create_choices(conn: &Connection, question: &Question, texts: &[&str]) -> Vec<Choice> {
        texts
            .iter()
            .map(|text| Choice::create(conn, question.id, text).unwrap())
            .collect()
    }

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
        setup_env();
        let session_key = env::var("SESSION_KEY").unwrap();
        test::init_service(
            App::new()
                .wrap(get_identity_service(session_key.as_bytes()))
                .app_data(web::Data::new(new_pool()))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await
    }

    pub struct TestResponse {
        pub status: u16,
        pub location: Option<String>,
        pub session: Option<Cookie<'static>>,
        pub body: Vec<u8>,
    }

    impl TestResponse {
        pub fn json<R: DeserializeOwned>(&self) -> R {
            serde_json::from_slice(&self.body).unwrap_or_else(|_| {
                panic!(
                    "read_response_json failed during deserialization. response: {} status: {}",
                    String::from_utf8(self.body.clone())
                        .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                    self.status
                )
            })
        }
    }

    pub async fn send(mut req: test::TestRequest, session: Option<Cookie<'static>>) -> TestResponse {
        let app = get_service().await;
        if let Some(session) = session {
            req = req.cookie(session);
        }

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let location = res
            .headers()
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let session = res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == SESSION_COOKIE)
            .map(|cookie| cookie.into_owned());
        let body = test::read_body(res).await.to_vec();

        TestResponse {
            status,
            location,
            session,
            body,
        }
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str, session: Option<Cookie<'static>>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = send(test::TestRequest::get().uri(route), session).await;
        (res.status, res.json())
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        route: &str,
        params: T,
        session: Option<Cookie<'static>>,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = send(
            test::TestRequest::post().set_json(&params).uri(route),
            session,
        )
        .await;
        (res.status, res.json())
    }

    /// POST expecting a redirect, returns the status and `Location`.
    pub async fn test_post_redirect<T: Serialize>(
        route: &str,
        params: T,
        session: Option<Cookie<'static>>,
    ) -> (u16, String) {
        let res = send(
            test::TestRequest::post().set_json(&params).uri(route),
            session,
        )
        .await;
        (res.status, res.location.unwrap_or_default())
    }

    /// Registers `username` directly in the database and signs in through `/login/`.
    pub async fn login_session(conn: &Connection, username: &str) -> Cookie<'static> {
        let password = "correct-horse-battery";
        User::create(conn, username, password).unwrap();

        let res = send(
            test::TestRequest::post()
                .set_json(&LoginForm {
                    username: username.to_string(),
                    password: password.to_string(),
                })
                .uri("/login/"),
            None,
        )
        .await;

        assert_eq!(res.status, 303);
        res.session.expect("login did not set a session cookie")
    }
}

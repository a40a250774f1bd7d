#[macro_use]
extern crate log;

use std::env;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use env_logger;

mod accounts;
mod forms;
mod pages;
mod redirect;
mod routes;
mod tests;
mod validate;

use crate::routes::{not_found, routes};

#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let session_key = env::var("SESSION_KEY").expect("SESSION_KEY must be set");
    auth::check_jwt_key().expect("JWT_KEY must be set");
    let client_host =
        env::var("CLIENT_HOST").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let pool = db::new_pool();

    info!("Starting polls server on {}", bind_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_host)
            .allow_any_method()
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .wrap(auth::get_identity_service(session_key.as_bytes()))
            .app_data(web::Data::new(pool.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}

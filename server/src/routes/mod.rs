use actix_web::{web, HttpRequest, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod accounts;
pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
        Error::BadRequest(err.to_string()).into()
    }))
    .route("/", web::get().to(polls::index))
    .service(
        web::resource("/create/")
            .route(web::get().to(polls::new_poll))
            .route(web::post().to(polls::create)),
    )
    .service(
        web::resource("/login/")
            .route(web::get().to(accounts::login_page))
            .route(web::post().to(accounts::login)),
    )
    .service(
        web::resource("/register/")
            .route(web::get().to(accounts::register_page))
            .route(web::post().to(accounts::register)),
    )
    .route("/logout/", web::get().to(accounts::logout))
    .service(
        web::scope("/{question_id:\\d+}")
            .route("/", web::get().to(polls::detail))
            .route("/results/", web::get().to(polls::results))
            .route("/vote/", web::post().to(polls::vote)),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}

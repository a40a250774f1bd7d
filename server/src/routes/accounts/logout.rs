use actix_identity::Identity;
use actix_web::{HttpRequest, HttpResponse};

use auth::end_session;

use crate::redirect::{see_other, PendingQuery};

pub async fn logout(req: HttpRequest, id: Identity) -> HttpResponse {
    end_session(&id);
    let query = PendingQuery::parse(req.query_string());

    see_other(query.next_path())
}

use crate::server::{ServerCommand, ServerTx};
use actix_web::{error, web, HttpResponse, Responder};
use tokio::sync::oneshot;

pub fn configure_status_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/session").route(web::get().to(session)));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

async fn session(srv_tx: web::Data<ServerTx>) -> Result<impl Responder, actix_web::error::Error> {
    let (tx, rx) = oneshot::channel();
    srv_tx
        .send(ServerCommand::Describe { tx })
        .map_err(|_| error::ErrorServiceUnavailable("session server is not running"))?;
    let summary = rx
        .await
        .map_err(|_| error::ErrorServiceUnavailable("session server did not answer"))?;
    Ok(HttpResponse::Ok().json(summary))
}

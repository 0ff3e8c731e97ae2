use actix_web::{middleware, App, HttpServer};
use clap::Parser;

use server::config::Config;
use server::connection::ConnectionIdSource;
use server::handlers;
use server::server::spawn_server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = Config::parse();

    let srv_tx = spawn_server();
    let connection_ids = ConnectionIdSource::default();

    log::info!("Listening on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .data(srv_tx.clone())
            .data(connection_ids.clone())
            .wrap(middleware::Logger::default())
            .configure(handlers::root)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

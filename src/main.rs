use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

mod api;
mod config;
mod errors;
mod models;
mod services;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = config::Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;
    let port = config.port;

    log::info!(
        "{} on duty over {} (environment: {}, version: {}), listening on 0.0.0.0:{}",
        config.hero,
        config.city,
        config.environment,
        config.version,
        port
    );

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT]);
        App::new()
            .app_data(config_data.clone())
            .configure(api::config)
            .wrap(cors)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

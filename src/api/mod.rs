use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::home)
        .service(handlers::health)
        .service(handlers::api_status)
        .service(handlers::villain_alert)
        .default_service(web::route().to(handlers::not_found));
}

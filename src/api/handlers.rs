use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{health::HealthResponse, status::StatusResponse, villain::VillainAlert};
use crate::services::{page_service, villain_service};

fn hostname() -> String {
    gethostname::gethostname()
        .into_string()
        .unwrap_or_else(|_| "unknown".to_string())
}

#[get("/")]
pub async fn home(config: web::Data<Config>) -> impl Responder {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let page = page_service::render_home(&config, &hostname(), &timestamp);

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page)
}

#[get("/health")]
pub async fn health(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        hero: config.hero.clone(),
        city: config.city.clone(),
        environment: config.environment.clone(),
        version: config.version.clone(),
        hostname: hostname(),
        timestamp: Utc::now(),
    })
}

#[get("/api/status")]
pub async fn api_status(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(StatusResponse {
        hero: config.hero.clone(),
        city: config.city.clone(),
        status: "PROTECTED",
        environment: config.environment.clone(),
        version: config.version.clone(),
        deployment: "argocd-gitops",
        container_orchestration: "kubernetes",
        configuration_management: "kustomize",
        ci_cd: "github-actions",
    })
}

#[get("/villain/{name}")]
pub async fn villain_alert(name: web::Path<String>, config: web::Data<Config>) -> impl Responder {
    let entry = villain_service::assess_threat(&name);
    log::debug!("villain alert: {} -> {:?}", name, entry.threat);

    HttpResponse::Ok().json(VillainAlert {
        villain: name.to_uppercase(),
        threat_level: entry.threat,
        batman_response: entry.message,
        city: config.city.clone(),
        auto_response: "ArgoCD monitoring and ready to rollback if needed",
        status: "UNDER_PROTECTION",
    })
}

pub async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::RouteNotFound)
}

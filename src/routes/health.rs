use actix_web::{web, HttpResponse, Responder};
use crate::models::{HealthResponse, MessageResponse};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/", web::get().to(root))
        .route("/ping", web::get().to(ping))
        .route("/health", web::get().to(health_check));
}

/// Liveness message
async fn root() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "API is working!".to_string(),
    })
}

async fn ping() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "pong".to_string(),
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

//! Endpoints the browser dashboard calls on startup.

use actix_web::{web, HttpResponse, Responder};
use shared::{ApiSuccess, HealthStatus};

use crate::config::Config;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/config", web::get().to(get_dashboard_config))
        .route("/health", web::get().to(health));
}

/// Upstream provider settings (API key, city, coordinates)
async fn get_dashboard_config(config: web::Data<Config>) -> impl Responder {
    log::debug!("Serving dashboard config for city {}", config.dashboard.city_id);
    HttpResponse::Ok().json(ApiSuccess::new(config.dashboard.clone()))
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiSuccess::new(HealthStatus {
        status: "ok".to_string(),
    }))
}

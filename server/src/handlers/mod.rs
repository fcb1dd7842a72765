use actix_web::web;

pub mod dashboard;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(dashboard::configure));
}

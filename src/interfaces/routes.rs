use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod api;
mod json_error;

pub use json_error::JsonError;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.configure(api::config_routes);
    cfg.configure(json_error::config_routes);
}

// Route exports
pub mod chatbot;
pub mod compatibility;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(compatibility::configure)
            .configure(chatbot::configure),
    );
}

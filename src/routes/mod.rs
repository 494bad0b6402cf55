// Route exports
pub mod auth;
pub mod discovery;
pub mod health;
pub mod messages;
pub mod profiles;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure)
        .configure(auth::configure)
        .configure(profiles::configure)
        .configure(discovery::configure)
        .configure(messages::configure);
}

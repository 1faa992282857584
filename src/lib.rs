pub mod config;
pub mod database;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod services;
pub mod swagger;
pub mod tasks;

use actix_web::web;

pub use config::Config;
pub use error::{AppError, AppResult};

/// Registers every HTTP route: the game resource and the API docs.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(swagger::swagger_config)
        .configure(handlers::game_config);
}

pub mod game_service;
pub mod subscribe_service;
pub mod user_service;

pub use game_service::*;
pub use subscribe_service::*;
pub use user_service::*;

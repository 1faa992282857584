pub mod game;
pub mod response;

pub use game::game_config;
pub use response::{Operation, ResponsePolicy};

pub mod common;
pub mod game;
pub mod subscribe;
pub mod validation;

pub use common::*;
pub use game::*;
pub use subscribe::*;
pub use validation::*;

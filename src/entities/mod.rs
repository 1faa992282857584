pub mod games;
pub mod subscribes;
pub mod users;

pub use games as game_entity;
pub use subscribes as subscribe_entity;
pub use users as user_entity;

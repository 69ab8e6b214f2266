pub mod playlist;
pub mod user;

pub use playlist::*;
pub use user::*;

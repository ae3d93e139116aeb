pub mod data;
pub mod system;
pub mod users;

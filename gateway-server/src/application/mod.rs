pub mod clock;
pub mod data_service;
pub mod user_service;

//! Mock API gateway serving `users` and `data` collections from constant
//! tables, over HTTP or through a per-event edge adapter.

pub mod application;
pub mod data;
pub mod domain;
pub mod edge;
pub mod infrastructure;
pub mod presentation;
pub mod server;

pub use presentation::AppState;
pub use server::{build_app, run_http};

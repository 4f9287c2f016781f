// Library root for the echo inference API

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{create_app, with_middleware};

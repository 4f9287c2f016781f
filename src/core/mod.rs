pub mod cors;
pub mod logging;
pub mod server;

//! tests/common/mod.rs
//! Shared helpers to spawn the app on an ephemeral port.

#![allow(dead_code)]

use axum::{serve, Router};
use echo_inference_api::{create_app, with_middleware, AppState, EnvironmentVariables};
use tokio::net::TcpListener as TokioTcpListener;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Spawns the app with default configuration and returns its base URL.
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default())
}

/// Spawns the app with the given configuration, e.g. "http://127.0.0.1:12345".
pub fn spawn_app_with(env: EnvironmentVariables) -> String {
    let app: Router = create_app(AppState::new(env)).expect("Failed to build app");
    spawn_router(app)
}

/// Spawns extra routes behind the production middleware stack.
pub fn spawn_routes_with(routes: Router<AppState>, env: EnvironmentVariables) -> String {
    let app: Router = with_middleware(routes, AppState::new(env)).expect("Failed to build app");
    spawn_router(app)
}

/// Serves an already-built router on a random unused port and returns its base URL.
pub fn spawn_router(app: Router) -> String {
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    format!("http://{}", addr)
}

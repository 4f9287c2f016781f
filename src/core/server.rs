// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    http::HeaderValue,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::trace::TraceLayer;
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};
use tracing::{error, info};

use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::api::infer::routes::infer_routes;
use crate::api::resource::routes::resource_routes;
use crate::core::cors::{allowed_origin, cors_layer, preflight_guard};
use crate::utils::{
    error_handler::{fallback_handler, handle_global_error},
    response_handler::error_wrapper,
};

/// Creates the application router with all middleware layers
pub fn create_app(state: AppState) -> Result<Router> {
    let routes: Router<AppState> = Router::new()
        // Add new route groups here
        .merge(infer_routes())
        .merge(resource_routes());

    with_middleware(routes, state)
}

/// Wraps a set of routes in the fallback and the full middleware stack
pub fn with_middleware(routes: Router<AppState>, state: AppState) -> Result<Router> {
    let env: &EnvironmentVariables = &state.environment;
    let origin: HeaderValue = allowed_origin(env)?;
    let timeout: Duration = Duration::from_secs(env.default_timeout_seconds);
    let max_body_size: usize = env.max_request_body_size;

    let app: Router = routes
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(from_fn(error_wrapper))
                .layer(from_fn_with_state(origin.clone(), preflight_guard))
                .layer(cors_layer(origin))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(timeout))
                .layer(DefaultBodyLimit::max(max_body_size))
        )
        .with_state(state);

    Ok(app)
}

/// Takes a socket handed over by listenfd, or binds HOST:PORT
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Resolves on Ctrl+C or TERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

/// Serves the app until a shutdown signal arrives
pub async fn run(state: AppState) -> Result<()> {
    let listener: TcpListener = setup_listener(&state.environment).await?;
    let protocol: String = state.environment.protocol.to_string();
    let app: Router = create_app(state)?;

    info!("Server listening on: {}://{}", protocol, listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

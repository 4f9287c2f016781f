use echo_inference_api::{
    config::state::AppState,
    core::{logging::init_tracing, server},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let state: AppState = AppState::from_env()?;

    server::run(state).await
}

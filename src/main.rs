use anyhow::Context;
use profile_menu::{
    configuration::get_configuration,
    startup::{run, AppState},
    telemetry::init,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    let _guard = init(&configuration.logger);

    let state = AppState::build(&configuration).context("Failed to build application state.")?;
    let address = configuration.application.address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(%address, "Serving profile menu");
    run(listener, state).await?;
    Ok(())
}

use anyhow::Context;
use tokio::net::TcpListener;

use welcome::{configuration, startup, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::get_subscriber("welcome".into(), "info".into(), std::io::stdout);
    telemetry::initialize_subscriber(subscriber);

    let configuration =
        configuration::get_configuration().context("Failed to read configuration")?;
    let address = configuration.application.address();

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    startup::run(listener)
        .await
        .context("Failed to run the application")
}

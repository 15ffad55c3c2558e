use catalog_service::config::Config;
use catalog_service::startup::Application;
use service_core::observability::{init_metrics, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Metrics recorder must be installed before any metrics are recorded
    init_metrics();
    init_tracing("info");

    let config = Config::from_env()?;
    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}

use halo_sqli::config::ENV_LOG;
use halo_sqli::{DemoConfig, DemoError, QueryRunner, demo};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();
    init_logging();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Demo aborted");
        eprintln!("\nError: {}\n", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), DemoError> {
    let config = DemoConfig::from_env()?;
    tracing::debug!(target_db = %config.describe(), "Configuration loaded");

    let mut runner = QueryRunner::connect(&config).await?;
    let result = run_with(&mut runner, &config).await;
    let closed = runner.close().await;
    result.and(closed)
}

async fn run_with(runner: &mut QueryRunner, config: &DemoConfig) -> Result<(), DemoError> {
    if config.create_schema {
        runner.create_schema().await?;
    }
    let scenarios = demo::scenarios(runner.flavor());
    demo::run(runner, &scenarios, &mut std::io::stdout()).await
}

fn init_logging() {
    let filter = std::env::var(ENV_LOG)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_owned());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_env_filter(filter)
        .init();
}

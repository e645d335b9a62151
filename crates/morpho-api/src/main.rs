//! morpho-api server entry point

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use morpho_api::ApiError;
use morpho_api::api::{AppState, bind, serve};
use morpho_api::config::Config;
use morpho_api::self_test::SelfTest;
use morpho_api::service::LemmaServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // Logging, RUST_LOG overrides the default level
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  let config = Config::from_env()?;
  info!(
    bind_addr = %config.bind_addr,
    backend = ?config.backend,
    preset = ?config.preset,
    "Configuration loaded"
  );

  // Single analyzer instance shared by every request
  let service = Arc::new(LemmaServiceFull::new(&config)?);
  let state = AppState::new(config.clone(), service);

  // A bind failure is reported as such, never as a self-test timeout
  let listener = bind(&config.bind_addr)
    .await
    .inspect_err(|e| error!(error = %e, "Failed to bind server address"))?;
  let local_addr = listener
    .local_addr()
    .map_err(|e| ApiError::internal(format!("failed to read local address: {}", e)))?;
  let server = tokio::spawn(serve(listener, state));

  if config.self_test {
    let outcome = match SelfTest::for_bind_addr(&local_addr.to_string()) {
      Ok(self_test) => self_test.run().await,
      Err(e) => Err(e),
    };

    match outcome {
      Ok(_) => info!("Lemma service started successfully"),
      Err(e) => {
        error!(error = %e, "Startup self-test failed");
        std::process::exit(1);
      }
    }
  }

  server.await.map_err(|e| ApiError::internal(format!("server task failed: {}", e)))?
}

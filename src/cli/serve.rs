use crate::{
    config::Config,
    info,
    server::{AppState, start_api_server},
};

/// Runs the gateway server until interrupted.
///
/// Builds the immutable configuration from the environment once, optionally
/// overriding the bind address with the `--address` flag, and hands it to the
/// server. Credentials are not checked here; missing credentials surface as
/// an authentication failure on the first search request.
pub async fn serve(address: Option<String>) {
    let mut config = Config::from_env();
    if let Some(addr) = address {
        config.server_addr = addr;
    }

    if config.api_key.is_empty() || config.api_secret.is_empty() {
        crate::warning!("AMADEUS_API_KEY/AMADEUS_API_SECRET not set; searches will fail upstream");
    }

    info!("Starting flight gateway");
    start_api_server(AppState::new(config)).await;
}

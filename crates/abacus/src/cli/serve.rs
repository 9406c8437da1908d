//! Serve command handler.

use abacus_core::TutorConfig;
use abacus_error::AbacusResult;
use tracing::info;

/// Handle the `serve` command
pub async fn handle_serve_command() -> AbacusResult<()> {
    let config = TutorConfig::from_env()?;

    info!(
        model = %config.model(),
        port = %config.port(),
        configured = config.api_key().is_some(),
        "starting tutor proxy"
    );

    abacus_server::serve(config).await
}

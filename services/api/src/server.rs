use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_support_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use support_link::config::{AppConfig, SupportConfig};
use support_link::error::AppError;
use support_link::telemetry;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    warn_if_unconfigured(&config.support);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let app_state = AppState::new(prometheus_handle);

    let app = with_support_routes(config.support.clone())
        .layer(Extension(app_state.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    app_state.mark_ready();

    info!(?config.environment, %addr, "support link service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Returns whether the warning was emitted.
fn warn_if_unconfigured(support: &SupportConfig) -> bool {
    if support.business_number().is_some() {
        return false;
    }
    warn!(
        variable = SupportConfig::BUSINESS_NUMBER_VAR,
        "whatsapp business number is not set; support link requests will fail"
    );
    true
}

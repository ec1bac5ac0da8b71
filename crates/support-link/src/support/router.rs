use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, error};

use super::whatsapp::{build_support_link, SupportLinkError, SupportLinkResponse};
use crate::config::SupportConfig;

pub const WHATSAPP_LINK_PATH: &str = "/api/support/whatsapp-link";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SupportLinkQuery {
    pub session_id: Option<String>,
}

impl SupportLinkQuery {
    /// Repeated `session_id` keys are joined with `,` in arrival order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let values: Vec<String> = pairs
            .into_iter()
            .filter(|(key, _)| key == "session_id")
            .map(|(_, value)| value)
            .collect();

        let session_id = if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        };

        Self { session_id }
    }
}

/// Router exposing the support deep-link endpoint.
pub fn support_router(config: SupportConfig) -> Router {
    Router::new()
        .route(WHATSAPP_LINK_PATH, get(whatsapp_link_handler))
        .with_state(Arc::new(config))
}

pub(crate) async fn whatsapp_link_handler(
    State(config): State<Arc<SupportConfig>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SupportLinkResponse>, SupportLinkError> {
    let query = SupportLinkQuery::from_pairs(pairs);
    let session_id = query.session_id.as_deref();
    match build_support_link(config.business_number(), session_id) {
        Ok(link) => {
            debug!(session_id = session_id.unwrap_or_default(), "support link built");
            Ok(Json(SupportLinkResponse { link }))
        }
        Err(SupportLinkError::MissingConfiguration) => {
            error!(
                variable = SupportConfig::BUSINESS_NUMBER_VAR,
                "whatsapp business number is not configured"
            );
            Err(SupportLinkError::MissingConfiguration)
        }
        Err(other) => Err(other),
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::json;

const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Bytes left unescaped by URI component encoding.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Request failures for the support link route.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupportLinkError {
    #[error("Session ID is required")]
    MissingSessionId,
    #[error("Server configuration error")]
    MissingConfiguration,
}

impl SupportLinkError {
    pub fn status(&self) -> StatusCode {
        match self {
            SupportLinkError::MissingSessionId => StatusCode::BAD_REQUEST,
            SupportLinkError::MissingConfiguration => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SupportLinkError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "msg": self.to_string() }));
        (self.status(), body).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportLinkResponse {
    pub link: String,
}

/// Pre-filled chat message quoting the session id verbatim.
pub fn support_message(session_id: &str) -> String {
    format!("Merhaba, [ID: {session_id}] numaralı görüşmemle ilgili destek almak istiyorum.")
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn whatsapp_link(number: &str, session_id: &str) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{number}?text={}",
        encode_uri_component(&support_message(session_id))
    )
}

/// Checks the session id first, then the configured number.
pub fn build_support_link(
    number: Option<&str>,
    session_id: Option<&str>,
) -> Result<String, SupportLinkError> {
    let session_id = session_id
        .filter(|value| !value.is_empty())
        .ok_or(SupportLinkError::MissingSessionId)?;
    let number = number
        .filter(|value| !value.is_empty())
        .ok_or(SupportLinkError::MissingConfiguration)?;

    Ok(whatsapp_link(number, session_id))
}

//! Support deep links into WhatsApp, pre-filled with the caller's session id.

pub mod router;
pub mod whatsapp;

pub use router::{support_router, SupportLinkQuery, WHATSAPP_LINK_PATH};
pub use whatsapp::{
    build_support_link, encode_uri_component, support_message, whatsapp_link, SupportLinkError,
    SupportLinkResponse,
};

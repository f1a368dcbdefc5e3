//! Client for the Gupshup WhatsApp messaging API.
//!
//! Every message kind is submitted to the same endpoint as a form-encoded
//! body whose `message` field holds a JSON document describing the content.
//!
//! ```rust,ignore
//! use gupshup_whatsapp::{GupshupClient, TextRequest, WhatsAppMessenger};
//!
//! let client = GupshupClient::new(api_key, "DemoApp")?;
//! let response = client
//!     .send_text(&TextRequest {
//!         source: "917834811114".into(),
//!         destination: "917834811115".into(),
//!         text: "Hello".into(),
//!     })
//!     .await?;
//! println!("{} {}", response.status, response.message_id);
//! ```

mod client;
mod config;
mod credentials;
mod error;
mod gupshupapi;
pub mod interactive;
mod message;
pub mod transport;

pub use client::{GupshupClient, WhatsAppMessenger};
pub use config::{HttpConfig, DEFAULT_TIMEOUT_SECS};
pub use credentials::GupshupCredentials;
pub use error::{BoxedError, GupshupError, Result};
pub use gupshupapi::{Channel, SendResponse};
pub use interactive::{
    InteractiveGlobalButton, InteractiveMessage, InteractiveMessageItem, InteractiveMessageOption,
    ListType, TextType,
};
pub use message::{
    AudioRequest, DocumentRequest, ImageRequest, InteractiveMessageRequest, OutboundMessage,
    StickerRequest, TextRequest, VideoRequest,
};

/// Message submission endpoint.
pub const MESSAGE_URL: &str = "https://api.gupshup.io/sm/api/v1/msg";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Tracing target for client operations.
pub const TRACING_TARGET: &str = "gupshup_whatsapp";

use crate::config::HttpConfig;
use crate::credentials::GupshupCredentials;
use crate::error::{GupshupError, Result};
use crate::gupshupapi::{Channel, ErrorReply, FormBody, Reply, SendResponse};
use crate::message::{
    AudioRequest, DocumentRequest, ImageRequest, InteractiveMessageRequest, OutboundMessage,
    StickerRequest, TextRequest, VideoRequest,
};
use crate::transport::{DefaultRequestBuilder, HttpSender, ReqwestSender, RequestBuilder};
use crate::{FORM_CONTENT_TYPE, MESSAGE_URL, TRACING_TARGET};
use async_trait::async_trait;
use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "apikey";

/// Message operations offered by Gupshup, one per message kind.
#[async_trait]
pub trait WhatsAppMessenger: Send + Sync {
    async fn send_text(&self, request: &TextRequest) -> Result<SendResponse>;
    async fn send_image(&self, request: &ImageRequest) -> Result<SendResponse>;
    async fn send_document(&self, request: &DocumentRequest) -> Result<SendResponse>;
    async fn send_audio(&self, request: &AudioRequest) -> Result<SendResponse>;
    async fn send_video(&self, request: &VideoRequest) -> Result<SendResponse>;
    async fn send_sticker(&self, request: &StickerRequest) -> Result<SendResponse>;
    async fn send_interactive_message(
        &self,
        request: &InteractiveMessageRequest,
    ) -> Result<SendResponse>;
}

/// Gupshup WhatsApp client.
///
/// Holds the API key and app name used for every submission together with
/// the transport it sends through. Cloning is cheap and clones share the
/// transport.
#[derive(Clone)]
pub struct GupshupClient {
    api_key: String,
    app_name: String,
    request_builder: Arc<dyn RequestBuilder>,
    sender: Arc<dyn HttpSender>,
}

impl fmt::Debug for GupshupClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GupshupClient")
            .field("app_name", &self.app_name)
            .finish_non_exhaustive()
    }
}

impl GupshupClient {
    /// Creates a client sending through `reqwest` with [`HttpConfig::default`] settings.
    pub fn new(api_key: impl Into<String>, app_name: impl Into<String>) -> Result<Self> {
        Self::from_credentials(
            GupshupCredentials::new(app_name, api_key),
            &HttpConfig::default(),
        )
    }

    pub fn with_transport(
        api_key: impl Into<String>,
        app_name: impl Into<String>,
        request_builder: Arc<dyn RequestBuilder>,
        sender: Arc<dyn HttpSender>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            app_name: app_name.into(),
            request_builder,
            sender,
        }
    }

    pub fn from_credentials(credentials: GupshupCredentials, config: &HttpConfig) -> Result<Self> {
        let sender = ReqwestSender::new(config)?;
        Ok(Self::with_transport(
            credentials.api_key,
            credentials.app_name,
            Arc::new(DefaultRequestBuilder),
            Arc::new(sender),
        ))
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Encodes `message` into the form body submitted to Gupshup.
    pub fn encode_form<M: OutboundMessage>(&self, message: &M) -> Result<String> {
        let encoded = message.encode_message()?;
        let body = FormBody {
            channel: Channel::Whatsapp,
            source: message.source(),
            destination: message.destination(),
            src_name: &self.app_name,
            message: &encoded,
        };

        Ok(serde_urlencoded::to_string(&body)?)
    }

    /// Submits a single message and decodes Gupshup's answer.
    pub async fn send<M: OutboundMessage + Sync>(&self, message: &M) -> Result<SendResponse> {
        let body = self.encode_form(message)?;

        let mut request = self
            .request_builder
            .build_request(Method::POST, MESSAGE_URL, body)
            .map_err(|e| {
                warn!(target: TRACING_TARGET, kind = M::KIND, "Failed to build request: {e}");
                e
            })?;

        let mut api_key = HeaderValue::from_str(&self.api_key)?;
        api_key.set_sensitive(true);
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        request
            .headers
            .insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        debug!(
            target: TRACING_TARGET,
            kind = M::KIND,
            destination = message.destination(),
            "Submitting message"
        );

        let response = self.sender.send(request).await.map_err(|e| {
            warn!(target: TRACING_TARGET, kind = M::KIND, "Failed to submit message: {e}");
            e
        })?;

        let reply: Reply = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(
                target: TRACING_TARGET,
                status = %response.status,
                "Failed to decode response: {e}"
            );
            GupshupError::Decode(e)
        })?;

        let decoded = match reply {
            Reply::Submitted(decoded) => decoded,
            Reply::Rejected(ErrorReply { status, message }) => {
                warn!(
                    target: TRACING_TARGET,
                    status = %response.status,
                    kind = M::KIND,
                    "Message rejected: {message}"
                );
                return Err(GupshupError::Api { status, message });
            }
        };

        debug!(
            target: TRACING_TARGET,
            status = %response.status,
            submission = %decoded.status,
            message_id = %decoded.message_id,
            "Message submitted"
        );

        Ok(decoded)
    }
}

#[async_trait]
impl WhatsAppMessenger for GupshupClient {
    async fn send_text(&self, request: &TextRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_image(&self, request: &ImageRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_document(&self, request: &DocumentRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_audio(&self, request: &AudioRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_video(&self, request: &VideoRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_sticker(&self, request: &StickerRequest) -> Result<SendResponse> {
        self.send(request).await
    }

    async fn send_interactive_message(
        &self,
        request: &InteractiveMessageRequest,
    ) -> Result<SendResponse> {
        self.send(request).await
    }
}

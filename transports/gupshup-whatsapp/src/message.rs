//! Typed send requests.
//!
//! Every request carries the sender (`source`) and recipient (`destination`)
//! phone numbers plus the kind-specific fields. No field is validated here,
//! empty values are passed to Gupshup as-is.

use crate::error::{GupshupError, Result};
use crate::gupshupapi::MessageContent;
use crate::interactive::InteractiveMessage;

/// A request that can be submitted through [`GupshupClient::send`](crate::GupshupClient::send).
pub trait OutboundMessage {
    /// Value of the `type` field of the encoded message.
    const KIND: &'static str;

    fn source(&self) -> &str;

    fn destination(&self) -> &str;

    /// JSON document sent in the `message` form field.
    fn encode_message(&self) -> Result<String>;
}

fn encode(content: &MessageContent<'_>) -> Result<String> {
    serde_json::to_string(content).map_err(GupshupError::Encode)
}

macro_rules! impl_envelope {
    () => {
        fn source(&self) -> &str {
            &self.source
        }

        fn destination(&self) -> &str {
            &self.destination
        }
    };
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRequest {
    pub source: String,
    pub destination: String,
    pub text: String,
}

impl OutboundMessage for TextRequest {
    const KIND: &'static str = "text";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Text { text: &self.text })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRequest {
    pub source: String,
    pub destination: String,
    /// URL of the full size image.
    pub image: String,
    /// URL of the thumbnail shown before download.
    pub preview: String,
    pub caption: String,
}

impl OutboundMessage for ImageRequest {
    const KIND: &'static str = "image";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Image {
            original_url: &self.image,
            preview_url: &self.preview,
            caption: &self.caption,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRequest {
    pub source: String,
    pub destination: String,
    pub url: String,
    pub filename: String,
}

impl OutboundMessage for DocumentRequest {
    const KIND: &'static str = "file";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Document {
            url: &self.url,
            filename: &self.filename,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioRequest {
    pub source: String,
    pub destination: String,
    pub url: String,
}

impl OutboundMessage for AudioRequest {
    const KIND: &'static str = "audio";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Audio { url: &self.url })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoRequest {
    pub source: String,
    pub destination: String,
    pub url: String,
    pub caption: String,
}

impl OutboundMessage for VideoRequest {
    const KIND: &'static str = "video";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Video {
            url: &self.url,
            caption: &self.caption,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerRequest {
    pub source: String,
    pub destination: String,
    pub url: String,
}

impl OutboundMessage for StickerRequest {
    const KIND: &'static str = "sticker";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        encode(&MessageContent::Sticker { url: &self.url })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMessageRequest {
    pub source: String,
    pub destination: String,
    pub interactive_message: InteractiveMessage,
}

impl OutboundMessage for InteractiveMessageRequest {
    const KIND: &'static str = "list";

    impl_envelope!();

    fn encode_message(&self) -> Result<String> {
        serde_json::to_string(&self.interactive_message).map_err(GupshupError::Encode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_text_escapes_quotes_and_backslashes() {
        let request = TextRequest {
            text: "say \"hi\" \\ bye\nnext line".to_string(),
            ..Default::default()
        };

        let encoded = request.encode_message().unwrap();
        let value: Value = serde_json::from_str(&encoded).unwrap();
        assert_eq!(value["type"], "text");
        assert_eq!(value["text"], "say \"hi\" \\ bye\nnext line");
    }

    #[test]
    fn test_empty_fields_pass_through() {
        let request = AudioRequest::default();

        assert_eq!(request.source(), "");
        assert_eq!(request.destination(), "");
        assert_eq!(
            request.encode_message().unwrap(),
            r#"{"type":"audio","url":""}"#
        );
    }

    #[test]
    fn test_kind_matches_encoded_type() {
        fn kind_of<M: OutboundMessage>(message: &M) -> String {
            let value: Value = serde_json::from_str(&message.encode_message().unwrap()).unwrap();
            value["type"].as_str().unwrap().to_string()
        }

        assert_eq!(kind_of(&TextRequest::default()), TextRequest::KIND);
        assert_eq!(kind_of(&ImageRequest::default()), ImageRequest::KIND);
        assert_eq!(kind_of(&DocumentRequest::default()), DocumentRequest::KIND);
        assert_eq!(kind_of(&AudioRequest::default()), AudioRequest::KIND);
        assert_eq!(kind_of(&VideoRequest::default()), VideoRequest::KIND);
        assert_eq!(kind_of(&StickerRequest::default()), StickerRequest::KIND);

        let interactive = InteractiveMessageRequest {
            source: String::new(),
            destination: String::new(),
            interactive_message: InteractiveMessage::new("Body", "Title", "1", vec![], vec![]),
        };
        assert_eq!(kind_of(&interactive), InteractiveMessageRequest::KIND);
    }
}

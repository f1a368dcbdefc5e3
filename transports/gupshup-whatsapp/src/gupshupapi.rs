//! Wire schemas of the Gupshup message endpoint.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Whatsapp,
}

/// Form-encoded body of `POST /sm/api/v1/msg`. Field order is fixed by
/// declaration order, so the same message always encodes to the same bytes.
#[derive(Serialize)]
pub(crate) struct FormBody<'a> {
    pub channel: Channel,
    pub source: &'a str,
    pub destination: &'a str,
    #[serde(rename = "src.name")]
    pub src_name: &'a str,
    pub message: &'a str,
}

/// JSON document carried in the `message` form field for media and text messages.
#[derive(Serialize, Debug)]
#[serde(tag = "type", rename_all = "lowercase")]
pub(crate) enum MessageContent<'a> {
    Text {
        text: &'a str,
    },
    Image {
        #[serde(rename = "originalUrl")]
        original_url: &'a str,
        #[serde(rename = "previewUrl")]
        preview_url: &'a str,
        caption: &'a str,
    },
    #[serde(rename = "file")]
    Document {
        url: &'a str,
        filename: &'a str,
    },
    Audio {
        url: &'a str,
    },
    Video {
        url: &'a str,
        caption: &'a str,
    },
    Sticker {
        url: &'a str,
    },
}

/// Submission result returned by Gupshup.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SendResponse {
    pub status: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

/// Rejection body, e.g. `{"status":"error","message":"Invalid Destination"}`.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorReply {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum Reply {
    Submitted(SendResponse),
    Rejected(ErrorReply),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_is_tagged_as_file() {
        let content = MessageContent::Document {
            url: "https://example.com/a.pdf",
            filename: "a.pdf",
        };
        assert_eq!(
            serde_json::to_value(content).unwrap(),
            json!({ "type": "file", "url": "https://example.com/a.pdf", "filename": "a.pdf" })
        );
    }

    #[test]
    fn test_image_uses_camel_case_urls() {
        let content = MessageContent::Image {
            original_url: "o",
            preview_url: "p",
            caption: "c",
        };
        assert_eq!(
            serde_json::to_value(content).unwrap(),
            json!({ "type": "image", "originalUrl": "o", "previewUrl": "p", "caption": "c" })
        );
    }

    #[test]
    fn test_form_body_field_names() {
        let body = FormBody {
            channel: Channel::Whatsapp,
            source: "917834811114",
            destination: "917834811115",
            src_name: "DemoApp",
            message: r#"{"type":"text","text":"hi"}"#,
        };
        let encoded = serde_urlencoded::to_string(&body).unwrap();
        assert!(encoded.starts_with("channel=whatsapp&source=917834811114&destination=917834811115&src.name=DemoApp&message="));

        let decoded: Vec<(String, String)> = serde_urlencoded::from_str(&encoded).unwrap();
        assert_eq!(decoded[4].1, r#"{"type":"text","text":"hi"}"#);
    }

    #[test]
    fn test_reply_distinguishes_rejection() {
        let reply: Reply =
            serde_json::from_str(r#"{"status":"error","message":"Invalid Destination"}"#).unwrap();
        assert!(matches!(
            reply,
            Reply::Rejected(ErrorReply { ref status, ref message })
                if status == "error" && message == "Invalid Destination"
        ));

        let reply: Reply =
            serde_json::from_str(r#"{"status":"submitted","messageId":"1234-56789"}"#).unwrap();
        assert!(matches!(reply, Reply::Submitted(_)));

        assert!(serde_json::from_str::<Reply>(r#"{"message":"no status"}"#).is_err());
    }

    #[test]
    fn test_response_rejects_missing_message_id() {
        let result = serde_json::from_str::<SendResponse>(r#"{"status":"error"}"#);
        assert!(result.is_err());
    }
}

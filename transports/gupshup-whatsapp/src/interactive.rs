//! Interactive list messages.
//!
//! A list message shows a body with one or more global buttons; tapping a
//! button opens sections of selectable options. The option's postback text
//! is delivered back to the application when the user picks it.

use serde::{Deserialize, Serialize};

/// Discriminator of the list message itself. Single variant, so a message
/// always encodes as `"type": "list"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    #[default]
    List,
}

/// Discriminator of buttons and options, always `"type": "text"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextType {
    #[default]
    Text,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMessage {
    pub r#type: ListType,
    pub title: String,
    pub body: String,
    #[serde(rename = "msgid")]
    pub message_id: String,
    #[serde(rename = "globalButtons")]
    pub global_buttons: Vec<InteractiveGlobalButton>,
    pub items: Vec<InteractiveMessageItem>,
}

impl InteractiveMessage {
    pub fn new(
        body: impl Into<String>,
        title: impl Into<String>,
        message_id: impl Into<String>,
        global_buttons: Vec<InteractiveGlobalButton>,
        items: Vec<InteractiveMessageItem>,
    ) -> Self {
        Self {
            r#type: ListType::List,
            title: title.into(),
            body: body.into(),
            message_id: message_id.into(),
            global_buttons,
            items,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InteractiveGlobalButton {
    pub r#type: TextType,
    pub title: String,
}

impl InteractiveGlobalButton {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            r#type: TextType::Text,
            title: title.into(),
        }
    }
}

/// A titled section of options.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMessageItem {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<InteractiveMessageOption>,
}

impl InteractiveMessageItem {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        options: Vec<InteractiveMessageOption>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            options,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InteractiveMessageOption {
    pub r#type: TextType,
    pub title: String,
    pub description: String,
    #[serde(rename = "postbackText")]
    pub postback: String,
}

impl InteractiveMessageOption {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        postback: impl Into<String>,
    ) -> Self {
        Self {
            r#type: TextType::Text,
            title: title.into(),
            description: description.into(),
            postback: postback.into(),
        }
    }
}

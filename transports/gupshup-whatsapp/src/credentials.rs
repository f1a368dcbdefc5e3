use crate::error::GupshupError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Gupshup application name and API key.
///
/// Parsed from a credential string of the form `<app_name>:<api_key>`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GupshupCredentials {
    pub app_name: String,
    pub api_key: String,
}

impl GupshupCredentials {
    pub fn new(app_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            api_key: api_key.into(),
        }
    }
}

impl FromStr for GupshupCredentials {
    type Err = GupshupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        static CREDENTIAL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = CREDENTIAL_REGEX.get_or_init(|| {
            Regex::new("^([^:]+):([0-9a-zA-Z]+)$").expect("credential regex is valid")
        });

        let caps = regex
            .captures(s.trim())
            .ok_or(GupshupError::InvalidCredentialFormat)?;

        Ok(Self {
            app_name: caps[1].to_owned(),
            api_key: caps[2].to_owned(),
        })
    }
}

impl fmt::Debug for GupshupCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GupshupCredentials")
            .field("app_name", &self.app_name)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

//! Shared types for helper invocation

use serde::{Deserialize, Serialize};

/// A username/secret pair returned by a credential source
///
/// Either field may be empty. Serialized with the field names credential
/// helpers use on the wire; parsing accepts those and their lowercase forms
/// only.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    #[serde(rename = "Username", alias = "username")]
    pub username: String,
    #[serde(rename = "Secret", alias = "secret")]
    pub secret: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// No credentials: both fields empty
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.secret.is_empty()
    }
}

impl From<(String, String)> for Credentials {
    fn from((username, secret): (String, String)) -> Self {
        Self { username, secret }
    }
}

// Secrets must not end up in logs or panic messages.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = if self.secret.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &secret)
            .finish()
    }
}

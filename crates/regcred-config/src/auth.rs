//! Inline credential entries from the `auths` section

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A single entry of the `auths` map
///
/// Entries either carry `username`/`password` directly or the base64
/// encoded `username:password` pair in `auth`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthEntry {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Base64-encoded `username:password`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub auth: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(rename = "serveraddress", skip_serializing_if = "String::is_empty")]
    pub server_address: String,
    /// Token used to obtain an access token for the registry
    #[serde(rename = "identitytoken", skip_serializing_if = "String::is_empty")]
    pub identity_token: String,
    /// Bearer token sent to the registry as-is
    #[serde(rename = "registrytoken", skip_serializing_if = "String::is_empty")]
    pub registry_token: String,
}

impl AuthEntry {
    /// Build an entry from a plain username and password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// The `(username, password)` pair this entry stands for.
    ///
    /// Plain fields are returned verbatim. Only when both are empty and the
    /// `auth` field is set is the pair decoded from base64; an undecodable
    /// `auth` falls back to the (empty) plain fields.
    pub fn credentials(&self) -> (String, String) {
        if self.username.is_empty() && self.password.is_empty() && !self.auth.is_empty() {
            match self.decode_auth() {
                Ok(pair) => return pair,
                Err(e) => tracing::debug!(error = %e, "Ignoring undecodable auth field"),
            }
        }
        (self.username.clone(), self.password.clone())
    }

    /// Decode the base64 `auth` field into `(username, password)`
    pub fn decode_auth(&self) -> Result<(String, String)> {
        if self.auth.is_empty() {
            return Ok((String::new(), String::new()));
        }

        let decoded = STANDARD
            .decode(self.auth.trim())
            .map_err(|e| ConfigError::InvalidAuth {
                message: e.to_string(),
            })?;
        let decoded = String::from_utf8(decoded).map_err(|e| ConfigError::InvalidAuth {
            message: e.to_string(),
        })?;

        match decoded.split_once(':') {
            Some((user, pass)) => Ok((user.to_string(), pass.to_string())),
            None => Err(ConfigError::InvalidAuth {
                message: "expected username:password".to_string(),
            }),
        }
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "<redacted>"
    }
}

impl std::fmt::Debug for AuthEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthEntry")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("auth", &redact(&self.auth))
            .field("email", &self.email)
            .field("server_address", &self.server_address)
            .field("identity_token", &redact(&self.identity_token))
            .field("registry_token", &redact(&self.registry_token))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_entry_field_names() {
        let entry: AuthEntry = serde_json::from_str(
            r#"{
                "username": "bob",
                "password": "hunter2",
                "serveraddress": "ghcr.io",
                "identitytoken": "tok"
            }"#,
        )
        .unwrap();

        assert_eq!(entry.username, "bob");
        assert_eq!(entry.password, "hunter2");
        assert_eq!(entry.server_address, "ghcr.io");
        assert_eq!(entry.identity_token, "tok");
        assert!(entry.auth.is_empty());
    }

    #[test]
    fn test_plain_credentials_returned_verbatim() {
        let entry = AuthEntry::new("bob", "hunter2");
        assert_eq!(
            entry.credentials(),
            ("bob".to_string(), "hunter2".to_string())
        );
    }

    #[test]
    fn test_plain_fields_win_over_auth() {
        let entry = AuthEntry {
            username: "bob".into(),
            auth: "dXNlcm5hbWU6cGFzc3dvcmQ=".into(),
            ..AuthEntry::default()
        };
        assert_eq!(entry.credentials(), ("bob".to_string(), String::new()));
    }

    #[test]
    fn test_credentials_fall_back_to_auth() {
        let entry = AuthEntry {
            auth: "dXNlcm5hbWU6cGFzc3dvcmQ=".into(),
            ..AuthEntry::default()
        };
        assert_eq!(
            entry.credentials(),
            ("username".to_string(), "password".to_string())
        );
    }

    #[rstest]
    #[case("%%%")]
    // "nocolon"
    #[case("bm9jb2xvbg==")]
    // invalid UTF-8 (0xff 0xfe)
    #[case("//4=")]
    fn test_credentials_ignore_undecodable_auth(#[case] auth: &str) {
        let entry = AuthEntry {
            auth: auth.into(),
            ..AuthEntry::default()
        };
        assert_eq!(entry.credentials(), (String::new(), String::new()));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let entry = AuthEntry {
            auth: "dXNlcm5hbWU6cGFzc3dvcmQ=".into(),
            ..AuthEntry::new("bob", "hunter2")
        };
        let debug = format!("{:?}", entry);
        assert!(debug.contains("bob"));
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("dXNlcm5h"));
    }

    #[rstest]
    // "username:password"
    #[case("dXNlcm5hbWU6cGFzc3dvcmQ=", "username", "password")]
    // "docker:pa:ss" keeps everything after the first colon
    #[case("ZG9ja2VyOnBhOnNz", "docker", "pa:ss")]
    // ":" decodes to two empty halves
    #[case("Og==", "", "")]
    fn test_decode_auth(#[case] auth: &str, #[case] user: &str, #[case] pass: &str) {
        let entry = AuthEntry {
            auth: auth.into(),
            ..AuthEntry::default()
        };
        assert_eq!(
            entry.decode_auth().unwrap(),
            (user.to_string(), pass.to_string())
        );
    }

    #[test]
    fn test_decode_empty_auth() {
        let entry = AuthEntry::default();
        assert_eq!(entry.decode_auth().unwrap(), (String::new(), String::new()));
    }

    #[rstest]
    #[case("not base64!")]
    // "nocolon"
    #[case("bm9jb2xvbg==")]
    fn test_decode_auth_invalid(#[case] auth: &str) {
        let entry = AuthEntry {
            auth: auth.into(),
            ..AuthEntry::default()
        };
        let err = entry.decode_auth().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAuth { .. }));
    }
}

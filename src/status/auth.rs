// src/status/auth.rs

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Basic-auth credentials for the sink.
///
/// `username` may be empty; GitHub accepts a token with any (or no) user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    token: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` header (RFC 7617).
    pub fn authorization_header(&self) -> String {
        let pair = format!("{}:{}", self.username, self.token);
        format!("Basic {}", STANDARD.encode(pair))
    }
}

// Keep the token out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .finish()
    }
}

//! HMAC-SHA256 request signing
//!
//! Gatecoin signature algorithm:
//! 1. message = lowercase(verb + base_url + path + content_type + timestamp)
//! 2. HMAC-SHA256(secret_key, message)
//! 3. Base64 encode, single line
//!
//! GET requests sign an empty content type whatever header is sent.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::fmt;

use crate::clock::Timestamp;
use crate::credentials::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// HTTP verbs used by the private API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    /// Upper-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Credentials {
    /// Sign a request
    ///
    /// # Arguments
    /// * `timestamp` - Request date, as also sent in `API_REQUEST_DATE`
    /// * `verb` - HTTP verb
    /// * `content_type` - Content type of the request (ignored for GET)
    /// * `path` - Endpoint path without query string (e.g. "/Trade/Orders")
    ///
    /// # Returns
    /// Base64-encoded signature
    pub fn sign(&self, timestamp: Timestamp, verb: Verb, content_type: &str, path: &str) -> String {
        let content_type = match verb {
            Verb::Get => "",
            _ => content_type,
        };

        let message = format!(
            "{}{}{}{}{}",
            verb.as_str(),
            self.base_url(),
            path,
            content_type,
            timestamp
        )
        .to_lowercase();

        let mut mac = HmacSha256::new_from_slice(self.secret_key())
            .expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        let result = mac.finalize();

        // Header value must stay on one line
        BASE64
            .encode(result.into_bytes())
            .chars()
            .filter(|c| *c != '\n' && *c != '\r')
            .collect()
    }
}

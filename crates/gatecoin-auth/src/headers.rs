//! Authentication headers for private requests

use tracing::trace;

use crate::clock::Clock;
use crate::credentials::Credentials;
use crate::signer::Verb;

/// Content type header name
pub const CONTENT_TYPE: &str = "Content-Type";
/// Public key header name
pub const PUBLIC_KEY_HEADER: &str = "API_PUBLIC_KEY";
/// Request date header name
pub const REQUEST_DATE_HEADER: &str = "API_REQUEST_DATE";
/// Signature header name
pub const REQUEST_SIGNATURE_HEADER: &str = "API_REQUEST_SIGNATURE";
/// Content type sent with every request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// The four headers attached to a signed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    public_key: String,
    date: String,
    signature: String,
}

impl AuthHeaders {
    /// Value of `Content-Type`
    pub fn content_type(&self) -> &str {
        CONTENT_TYPE_JSON
    }

    /// Value of `API_PUBLIC_KEY`
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Value of `API_REQUEST_DATE`
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Value of `API_REQUEST_SIGNATURE`
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// All headers as `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (CONTENT_TYPE, self.content_type()),
            (PUBLIC_KEY_HEADER, self.public_key()),
            (REQUEST_DATE_HEADER, self.date()),
            (REQUEST_SIGNATURE_HEADER, self.signature()),
        ]
        .into_iter()
    }
}

/// Builds [`AuthHeaders`] for one request at a time
#[derive(Debug)]
pub struct HeaderBuilder<'a> {
    credentials: &'a Credentials,
    clock: &'a dyn Clock,
}

impl<'a> HeaderBuilder<'a> {
    /// Create a new header builder
    pub fn new(credentials: &'a Credentials, clock: &'a dyn Clock) -> Self {
        Self { credentials, clock }
    }

    /// Build the headers for a request to `path`
    ///
    /// The clock is read once; the same timestamp goes into the date header
    /// and the signed string.
    pub fn build(&self, path: &str, verb: Verb) -> AuthHeaders {
        let timestamp = self.clock.now();
        let signature = self
            .credentials
            .sign(timestamp, verb, CONTENT_TYPE_JSON, path);

        trace!(%verb, path, %timestamp, "Signed request");

        AuthHeaders {
            public_key: self.credentials.public_key().to_string(),
            date: timestamp.to_string(),
            signature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FixedClock, Timestamp};
    use std::sync::atomic::{AtomicU64, Ordering};

    /// Clock that advances one millisecond per read
    #[derive(Debug, Default)]
    struct TickingClock(AtomicU64);

    impl Clock for TickingClock {
        fn now(&self) -> Timestamp {
            Timestamp::from_millis(1_700_000_000_000 + self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn test_four_headers() {
        let creds = Credentials::new("public", "secret-key").unwrap();
        let clock = FixedClock::new(Timestamp::from_millis(1_700_000_000_123));
        let headers = HeaderBuilder::new(&creds, &clock).build("/Balance/Balances", Verb::Get);

        let pairs: Vec<_> = headers.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("Content-Type", "application/json"),
                ("API_PUBLIC_KEY", "public"),
                ("API_REQUEST_DATE", "1700000000.123"),
                ("API_REQUEST_SIGNATURE", "EZZOiNuuJlRlIpN7F3miUtPF80oEfWauw3gOWn8VlYA="),
            ]
        );
    }

    #[test]
    fn test_date_matches_signed_timestamp() {
        let creds = Credentials::new("public", "secret-key").unwrap();
        let clock = TickingClock::default();
        let headers = HeaderBuilder::new(&creds, &clock).build("/Trade/Orders", Verb::Post);

        // Only one clock read per build
        assert_eq!(clock.0.load(Ordering::SeqCst), 1);
        assert_eq!(headers.date(), "1700000000.000");

        let expected = creds.sign(
            Timestamp::from_millis(1_700_000_000_000),
            Verb::Post,
            CONTENT_TYPE_JSON,
            "/Trade/Orders",
        );
        assert_eq!(headers.signature(), expected);
    }

    #[test]
    fn test_content_type_sent_for_get() {
        let creds = Credentials::new("public", "secret-key").unwrap();
        let clock = FixedClock::new(Timestamp::from_millis(0));
        let headers = HeaderBuilder::new(&creds, &clock).build("/Balance/Balances", Verb::Get);
        assert_eq!(headers.content_type(), CONTENT_TYPE_JSON);
    }
}

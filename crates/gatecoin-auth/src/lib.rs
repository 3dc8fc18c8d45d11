//! Request signing and credentials for Gatecoin's REST API
//!
//! Every private Gatecoin call carries four headers: the content type, the
//! public key, the request date and an HMAC-SHA256 signature. This crate
//! builds those headers from a pair of API keys and a [`Clock`].
//!
//! # Example
//!
//! ```
//! use gatecoin_auth::{Credentials, FixedClock, HeaderBuilder, Timestamp, Verb};
//!
//! let creds = Credentials::new("public", "secret").unwrap();
//! let clock = FixedClock::new(Timestamp::from_millis(1_700_000_000_123));
//!
//! let headers = HeaderBuilder::new(&creds, &clock).build("/Balance/Balances", Verb::Get);
//! assert_eq!(headers.date(), "1700000000.123");
//! assert_eq!(headers.iter().count(), 4);
//! ```

mod clock;
mod credentials;
mod error;
mod headers;
mod signer;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use credentials::{Credentials, DEFAULT_BASE_URL};
pub use error::{AuthError, AuthResult};
pub use headers::{
    AuthHeaders, HeaderBuilder, CONTENT_TYPE, CONTENT_TYPE_JSON, PUBLIC_KEY_HEADER,
    REQUEST_DATE_HEADER, REQUEST_SIGNATURE_HEADER,
};
pub use signer::Verb;

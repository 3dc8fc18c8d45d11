//! REST API client for the Gatecoin cryptocurrency exchange
//!
//! This crate wraps Gatecoin's private REST API: balances, orders, deposit
//! addresses and withdrawals. Every call is signed with the scheme from
//! `gatecoin-auth` and sent exactly once; retries are left to the caller.
//!
//! # Features
//!
//! - **Account**: Balances
//! - **Trading**: Look up, place and cancel orders
//! - **Wallet**: Deposit addresses and withdrawals
//!
//! # Errors
//!
//! Balance, order and deposit address lookups return transport failures
//! unchanged. `create_order` and `cancel_order` report every failure as
//! [`RestError::CreateOrder`] / [`RestError::CancelOrder`], so one match arm
//! covers each. `withdrawal` reports API rejections as
//! [`RestError::Withdrawal`].
//!
//! # Example
//!
//! ```no_run
//! use gatecoin_rest::{CreateOrderRequest, Credentials, GatecoinRestClient};
//! use rust_decimal::Decimal;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GatecoinRestClient::new(Credentials::from_env()?)?;
//!
//!     let order = CreateOrderRequest::buy("BTCUSD", Decimal::new(1, 2), Decimal::from(250));
//!     let placed = client.create_order(&order).await?;
//!     println!("Placed {}", placed["clOrderId"]);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, GatecoinRestClient};
pub use dispatcher::RequestDispatcher;
pub use error::{RestError, RestResult};
pub use gatecoin_auth::{Clock, Credentials, FixedClock, SystemClock, Timestamp, Verb};

pub use types::{
    ApiOutcome, CreateOrderRequest, OrderSide, Rejection, ResponseStatus, SuccessRule,
    WithdrawalRequest,
};

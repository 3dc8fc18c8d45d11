//! Main REST client implementation

use crate::dispatcher::RequestDispatcher;
use crate::endpoints::{AccountEndpoints, TradingEndpoints, WalletEndpoints};
use crate::error::RestResult;
use crate::types::{CreateOrderRequest, WithdrawalRequest};
use gatecoin_auth::{Clock, Credentials, SystemClock};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Default user agent
const DEFAULT_USER_AGENT: &str = concat!("gatecoin-rest/", env!("CARGO_PKG_VERSION"));

/// Gatecoin REST API client
///
/// Every operation is a single signed round trip. The client holds no state
/// besides its credentials, so it can be cloned and shared freely.
///
/// # Example
///
/// ```no_run
/// use gatecoin_rest::{Credentials, GatecoinRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = GatecoinRestClient::new(creds)?;
///
///     let balances = client.balances().await?;
///     println!("{} balances", balances.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct GatecoinRestClient {
    dispatcher: RequestDispatcher,
}

impl GatecoinRestClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        info!(base_url = config.credentials.base_url(), "Created Gatecoin REST client");

        Ok(Self {
            dispatcher: RequestDispatcher::new(http_client, config.credentials, Arc::new(SystemClock)),
        })
    }

    /// Replace the clock used for request dates
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.dispatcher.set_clock(clock);
        self
    }

    /// Credentials used to sign requests
    pub fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    /// Low-level signed request access
    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.dispatcher)
    }

    /// Get balances for every currency
    pub async fn balances(&self) -> RestResult<Vec<Value>> {
        self.account().balances().await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.dispatcher)
    }

    /// Get a single order by ID
    pub async fn order(&self, id: &str) -> RestResult<Value> {
        self.trading().order(id).await
    }

    /// Place a limit order
    pub async fn create_order(&self, order: &CreateOrderRequest) -> RestResult<Value> {
        self.trading().create_order(order).await
    }

    /// Cancel an order by ID
    pub async fn cancel_order(&self, id: &str) -> RestResult<Value> {
        self.trading().cancel_order(id).await
    }

    // ========================================================================
    // Wallet Endpoints
    // ========================================================================

    /// Get wallet endpoints
    pub fn wallet(&self) -> WalletEndpoints<'_> {
        WalletEndpoints::new(&self.dispatcher)
    }

    /// Get deposit addresses
    pub async fn deposit_wallets(&self) -> RestResult<Vec<Value>> {
        self.wallet().deposit_wallets().await
    }

    /// Withdraw to a registered address
    pub async fn withdrawal(&self, request: &WithdrawalRequest) -> RestResult<Value> {
        self.wallet().withdrawal(request).await
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials and base URL
    pub credentials: Credentials,
    /// Request timeout; `None` leaves the transport default in place
    pub timeout: Option<Duration>,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

//! Electronic wallet endpoints for deposits and withdrawals

use serde_json::Value;
use tracing::{debug, instrument};

use crate::dispatcher::RequestDispatcher;
use crate::endpoints::take_array;
use crate::error::{RestError, RestResult};
use crate::types::{ApiOutcome, SuccessRule, WithdrawalRequest};

const DEPOSIT_WALLETS_PATH: &str = "/ElectronicWallet/DepositWallets";
const WITHDRAWALS_PATH: &str = "/ElectronicWallet/withdrawals";
const ADDRESSES_FIELD: &str = "addresses";

/// Electronic wallet endpoints
pub struct WalletEndpoints<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> WalletEndpoints<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get deposit addresses
    ///
    /// # Errors
    /// Transport errors are returned unchanged; a response without
    /// `addresses` yields [`RestError::Api`].
    #[instrument(skip(self))]
    pub async fn deposit_wallets(&self) -> RestResult<Vec<Value>> {
        let body: Value = self.dispatcher.get(DEPOSIT_WALLETS_PATH, None).await?;
        let body = ApiOutcome::classify(body, SuccessRule::RequireField(ADDRESSES_FIELD))
            .into_result(RestError::Api)?;

        take_array(body, ADDRESSES_FIELD)
    }

    /// Withdraw to a registered address
    ///
    /// # Errors
    /// [`RestError::Withdrawal`] when the response carries an error code.
    /// Transport errors are returned unchanged.
    #[instrument(skip(self, request), fields(currency = %request.currency, amount = %request.amount))]
    pub async fn withdrawal(&self, request: &WithdrawalRequest) -> RestResult<Value> {
        let path = format!("{}/{}", WITHDRAWALS_PATH, request.currency);
        debug!("Withdrawing {} {} to {}", request.amount, request.currency, request.address);

        let body: Value = self.dispatcher.post(&path, request).await?;
        ApiOutcome::classify(body, SuccessRule::NoErrorCode).into_result(RestError::Withdrawal)
    }
}

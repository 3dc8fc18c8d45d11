//! Account endpoints

use serde_json::Value;
use tracing::{debug, instrument};

use crate::dispatcher::RequestDispatcher;
use crate::endpoints::take_array;
use crate::error::{RestError, RestResult};
use crate::types::{ApiOutcome, SuccessRule};

const BALANCES_PATH: &str = "/Balance/Balances";
const BALANCES_FIELD: &str = "balances";

/// Account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get balances for every currency on the account
    ///
    /// # Errors
    /// Transport errors are returned unchanged. A response without a
    /// `balances` field yields [`RestError::Api`] carrying the status
    /// message, or the raw body when there is none.
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<Vec<Value>> {
        let body: Value = self.dispatcher.get(BALANCES_PATH, None).await?;
        let body = ApiOutcome::classify(body, SuccessRule::RequireField(BALANCES_FIELD))
            .into_result(RestError::Api)?;

        let balances = take_array(body, BALANCES_FIELD)?;
        debug!("Got {} balances", balances.len());
        Ok(balances)
    }
}

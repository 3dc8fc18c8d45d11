//! Trading endpoints for order management
//!
//! `create_order` and `cancel_order` fold every failure, transport included,
//! into their own error variant.

use serde_json::Value;
use tracing::{debug, instrument};

use crate::dispatcher::RequestDispatcher;
use crate::error::{RestError, RestResult};
use crate::types::{ApiOutcome, CreateOrderRequest, SuccessRule};

const ORDERS_PATH: &str = "/Trade/Orders";

/// Present on every accepted order
const CLIENT_ORDER_ID_FIELD: &str = "clOrderId";

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get a single order
    ///
    /// # Arguments
    /// * `id` - Order ID
    #[instrument(skip(self))]
    pub async fn order(&self, id: &str) -> RestResult<Value> {
        self.dispatcher.get(&order_path(id), None).await
    }

    /// Place a limit order
    ///
    /// # Errors
    /// Always [`RestError::CreateOrder`]. Its message is the API status
    /// message when the response has no `clOrderId`, the raw response when
    /// there is no status message, or the message of the underlying error.
    #[instrument(skip(self, order), fields(pair = %order.pair, side = %order.side))]
    pub async fn create_order(&self, order: &CreateOrderRequest) -> RestResult<Value> {
        self.submit_order(order)
            .await
            .map_err(RestError::into_create_order)
    }

    async fn submit_order(&self, order: &CreateOrderRequest) -> RestResult<Value> {
        debug!(
            "Placing {} order for {} {} at {}",
            order.side, order.size, order.pair, order.price
        );

        let body: Value = self.dispatcher.post(ORDERS_PATH, &order.body()).await?;
        ApiOutcome::classify(body, SuccessRule::RequireField(CLIENT_ORDER_ID_FIELD))
            .into_result(RestError::CreateOrder)
    }

    /// Cancel an order
    ///
    /// # Errors
    /// Always [`RestError::CancelOrder`]. Its message is the API status
    /// message when the response carries an error code, the status object
    /// when there is no message, or the message of the underlying error.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: &str) -> RestResult<Value> {
        self.submit_cancel(id)
            .await
            .map_err(RestError::into_cancel_order)
    }

    async fn submit_cancel(&self, id: &str) -> RestResult<Value> {
        debug!("Cancelling order {}", id);

        let body: Value = self.dispatcher.delete(&order_path(id)).await?;
        ApiOutcome::classify(body, SuccessRule::NoErrorCode).into_result(RestError::CancelOrder)
    }
}

fn order_path(id: &str) -> String {
    format!("{}/{}", ORDERS_PATH, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_path() {
        assert_eq!(order_path("BK11526710155"), "/Trade/Orders/BK11526710155");
    }
}

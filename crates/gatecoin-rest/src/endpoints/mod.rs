//! API endpoint implementations

pub mod account;
pub mod trading;
pub mod wallet;

pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;
pub use wallet::WalletEndpoints;

use serde_json::Value;

use crate::error::{RestError, RestResult};

/// Take an array field out of an accepted response body
pub(crate) fn take_array(mut body: Value, field: &str) -> RestResult<Vec<Value>> {
    match body.get_mut(field).map(Value::take) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(RestError::Parse(format!(
            "Expected array at `{}`, got {}",
            field, other
        ))),
        None => Err(RestError::Parse(format!("Missing `{}` in response", field))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_take_array() {
        let items = take_array(json!({"balances": [{"currency": "BTC"}]}), "balances").unwrap();
        assert_eq!(items, vec![json!({"currency": "BTC"})]);
    }

    #[test]
    fn test_take_array_rejects_scalar() {
        let err = take_array(json!({"balances": 3}), "balances").unwrap_err();
        assert!(matches!(err, RestError::Parse(_)));
    }
}

//! Types for Gatecoin REST API requests and responses

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

use crate::error::RestError;

// ============================================================================
// Response Classification
// ============================================================================

/// Key of the status object embedded in API responses
pub const RESPONSE_STATUS_FIELD: &str = "responseStatus";

/// View over the `responseStatus` object of a response body
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseStatus {
    /// `errorCode`, if present and not null
    pub error_code: Option<Value>,
    /// `message`, if present and not null
    pub message: Option<String>,
    /// The status object as received
    pub raw: Value,
}

impl ResponseStatus {
    /// Extract the status object from a response body
    pub fn from_body(body: &Value) -> Option<Self> {
        let raw = present(body.get(RESPONSE_STATUS_FIELD))?;
        Some(Self {
            error_code: present(raw.get("errorCode")).cloned(),
            message: present(raw.get("message")).map(value_text),
            raw: raw.clone(),
        })
    }

    /// Check if the status carries an error code
    pub fn has_error(&self) -> bool {
        self.error_code.is_some()
    }
}

/// How a response body is judged successful
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// The named top-level field must be present
    RequireField(&'static str),
    /// `responseStatus.errorCode` must be absent
    NoErrorCode,
}

/// A response the API refused
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// `responseStatus.message`, if any
    pub status_message: Option<String>,
    /// Shown when there is no status message
    pub fallback: Value,
}

impl Rejection {
    /// Status message, else the fallback rendered as JSON
    pub fn message(&self) -> String {
        self.status_message
            .clone()
            .unwrap_or_else(|| value_text(&self.fallback))
    }
}

/// Outcome of a single API response
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// The body satisfied the rule
    Accepted(Value),
    /// The body failed the rule
    Rejected(Rejection),
}

impl ApiOutcome {
    /// Judge a response body
    ///
    /// For [`SuccessRule::RequireField`] the fallback message is the whole
    /// body; for [`SuccessRule::NoErrorCode`] it is the status object.
    pub fn classify(body: Value, rule: SuccessRule) -> Self {
        let status = ResponseStatus::from_body(&body);

        match rule {
            SuccessRule::RequireField(field) => {
                if present(body.get(field)).is_some() {
                    Self::Accepted(body)
                } else {
                    Self::Rejected(Rejection {
                        status_message: status.and_then(|s| s.message),
                        fallback: body,
                    })
                }
            }
            SuccessRule::NoErrorCode => match status {
                Some(status) if status.has_error() => Self::Rejected(Rejection {
                    status_message: status.message,
                    fallback: status.raw,
                }),
                _ => Self::Accepted(body),
            },
        }
    }

    /// Convert into a `Result`, mapping a rejection to an error
    pub fn into_result(self, err: impl FnOnce(String) -> RestError) -> Result<Value, RestError> {
        match self {
            Self::Accepted(body) => Ok(body),
            Self::Rejected(rejection) => Err(err(rejection.message())),
        }
    }
}

/// `null` and `false` count as absent
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !matches!(v, Value::Null | Value::Bool(false)))
}

/// Strings without quotes, anything else as JSON
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// Trading Types
// ============================================================================

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    /// Value of the `Way` field
    pub fn way(&self) -> &'static str {
        match self {
            Self::Buy => "Bid",
            Self::Sell => "Ask",
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            _ => Err(RestError::InvalidParameter(format!(
                "Unknown side type {}. Use buy or sell.",
                s
            ))),
        }
    }
}

/// Parameters for placing a limit order
#[derive(Debug, Clone, PartialEq)]
pub struct CreateOrderRequest {
    /// Currency pair (e.g., "BTCUSD")
    pub pair: String,
    /// Buy or sell
    pub side: OrderSide,
    /// Order quantity
    pub size: Decimal,
    /// Limit price
    pub price: Decimal,
}

impl CreateOrderRequest {
    /// Create a new order request
    pub fn new(pair: impl Into<String>, side: OrderSide, size: Decimal, price: Decimal) -> Self {
        Self {
            pair: pair.into(),
            side,
            size,
            price,
        }
    }

    /// Create a buy order request
    pub fn buy(pair: impl Into<String>, size: Decimal, price: Decimal) -> Self {
        Self::new(pair, OrderSide::Buy, size, price)
    }

    /// Create a sell order request
    pub fn sell(pair: impl Into<String>, size: Decimal, price: Decimal) -> Self {
        Self::new(pair, OrderSide::Sell, size, price)
    }

    pub(crate) fn body(&self) -> CreateOrderBody<'_> {
        CreateOrderBody {
            code: &self.pair,
            way: self.side.way(),
            amount: float_string(self.size),
            price: float_string(self.price),
        }
    }
}

/// Wire form of [`CreateOrderRequest`]
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct CreateOrderBody<'a> {
    code: &'a str,
    way: &'static str,
    amount: String,
    price: String,
}

/// Float-style rendering: at least one fractional digit
fn float_string(value: Decimal) -> String {
    let value = value.normalize();
    if value.scale() == 0 {
        format!("{}.0", value)
    } else {
        value.to_string()
    }
}

// ============================================================================
// Wallet Types
// ============================================================================

/// Parameters for a withdrawal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WithdrawalRequest {
    /// Currency to withdraw (part of the path)
    #[serde(skip)]
    pub currency: String,
    /// Destination address name
    #[serde(rename = "AddressName")]
    pub address: String,
    /// Amount to withdraw
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Validation code, when the account requires one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_code: Option<String>,
}

impl WithdrawalRequest {
    /// Create a new withdrawal request
    pub fn new(currency: impl Into<String>, address: impl Into<String>, amount: Decimal) -> Self {
        Self {
            currency: currency.into(),
            address: address.into(),
            amount,
            comment: None,
            validation_code: None,
        }
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Attach a validation code
    pub fn with_validation_code(mut self, code: impl Into<String>) -> Self {
        self.validation_code = Some(code.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_side_mapping() {
        assert_eq!(OrderSide::Buy.way(), "Bid");
        assert_eq!(OrderSide::Sell.way(), "Ask");
        assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
        assert_eq!("SELL".parse::<OrderSide>().unwrap(), OrderSide::Sell);
    }

    #[test]
    fn test_unknown_side_is_invalid_parameter() {
        let err = "hold".parse::<OrderSide>().unwrap_err();
        assert!(matches!(err, RestError::InvalidParameter(msg) if msg.contains("hold")));
    }

    #[test]
    fn test_create_order_body() {
        let request = CreateOrderRequest::buy("BTCUSD", dec!(1), dec!(250.50));
        let body = serde_json::to_value(request.body()).unwrap();
        assert_eq!(
            body,
            json!({"Code": "BTCUSD", "Way": "Bid", "Amount": "1.0", "Price": "250.5"})
        );

        let request = CreateOrderRequest::sell("ETHBTC", dec!(0.25), dec!(0.0300));
        let body = serde_json::to_value(request.body()).unwrap();
        assert_eq!(body["Way"], "Ask");
        assert_eq!(body["Amount"], "0.25");
        assert_eq!(body["Price"], "0.03");
    }

    #[test]
    fn test_withdrawal_body_omits_absent_fields() {
        let request = WithdrawalRequest::new("BTC", "my-cold-wallet", dec!(0.5));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"AddressName": "my-cold-wallet", "Amount": 0.5}));

        let request = request.with_comment("rent").with_validation_code("123456");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["Comment"], "rent");
        assert_eq!(body["ValidationCode"], "123456");
        assert!(body.get("Currency").is_none());
    }

    #[test]
    fn test_require_field_accepts() {
        let body = json!({"clOrderId": "BK11", "responseStatus": {"message": "OK"}});
        assert_eq!(
            ApiOutcome::classify(body.clone(), SuccessRule::RequireField("clOrderId")),
            ApiOutcome::Accepted(body)
        );
    }

    #[test]
    fn test_require_field_prefers_status_message() {
        let body = json!({"responseStatus": {"errorCode": "1005", "message": "Insufficient balance"}});
        match ApiOutcome::classify(body, SuccessRule::RequireField("clOrderId")) {
            ApiOutcome::Rejected(r) => assert_eq!(r.message(), "Insufficient balance"),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_require_field_falls_back_to_body() {
        let body = json!({"clOrderId": null, "foo": 1});
        match ApiOutcome::classify(body.clone(), SuccessRule::RequireField("clOrderId")) {
            ApiOutcome::Rejected(r) => {
                assert_eq!(r.fallback, body);
                assert_eq!(r.message(), body.to_string());
            }
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_no_error_code() {
        let ok = json!({"responseStatus": {"message": "OK"}});
        assert!(matches!(
            ApiOutcome::classify(ok, SuccessRule::NoErrorCode),
            ApiOutcome::Accepted(_)
        ));

        let null_code = json!({"responseStatus": {"errorCode": null, "message": "OK"}});
        assert!(matches!(
            ApiOutcome::classify(null_code, SuccessRule::NoErrorCode),
            ApiOutcome::Accepted(_)
        ));

        let no_status = json!({});
        assert!(matches!(
            ApiOutcome::classify(no_status, SuccessRule::NoErrorCode),
            ApiOutcome::Accepted(_)
        ));
    }

    #[test]
    fn test_error_code_falls_back_to_status_object() {
        let body = json!({"responseStatus": {"errorCode": 1}});
        match ApiOutcome::classify(body, SuccessRule::NoErrorCode) {
            ApiOutcome::Rejected(r) => assert_eq!(r.message(), r#"{"errorCode":1}"#),
            other => panic!("Expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_into_result() {
        let body = json!({"responseStatus": {"errorCode": 1, "message": "insufficient funds"}});
        let err = ApiOutcome::classify(body, SuccessRule::NoErrorCode)
            .into_result(RestError::CancelOrder)
            .unwrap_err();
        assert!(matches!(err, RestError::CancelOrder(msg) if msg == "insufficient funds"));
    }
}

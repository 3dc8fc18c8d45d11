//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes Gatecoin returns on its private API.

use std::sync::Arc;

use gatecoin_rest::{Credentials, FixedClock, GatecoinRestClient, Timestamp};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const PUBLIC_KEY: &str = "test-public-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// Request date every test client signs with
pub const TIMESTAMP: Timestamp = Timestamp::from_millis(1_700_000_000_123);

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn credentials(base_url: &str) -> Credentials {
    Credentials::new(PUBLIC_KEY, SECRET_KEY)
        .unwrap()
        .with_base_url(base_url)
}

/// Client pointed at `base_url` with a frozen clock
pub fn client(base_url: &str) -> GatecoinRestClient {
    GatecoinRestClient::new(credentials(base_url))
        .unwrap()
        .with_clock(Arc::new(FixedClock::new(TIMESTAMP)))
}

/// Base URL with nothing listening behind it
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn ok_status() -> Value {
    json!({"message": "OK"})
}

pub fn error_status(code: &str, message: &str) -> Value {
    json!({"errorCode": code, "message": message})
}

pub fn balances_response() -> Value {
    json!({
        "balances": [
            {
                "currency": "BTC",
                "balance": 1.5,
                "availableBalance": 1.25,
                "pendingIncoming": 0.0,
                "pendingOutgoing": 0.0,
                "openOrder": 0.25,
                "isDigital": true
            },
            {
                "currency": "USD",
                "balance": 1000.0,
                "availableBalance": 1000.0,
                "pendingIncoming": 0.0,
                "pendingOutgoing": 0.0,
                "openOrder": 0.0,
                "isDigital": false
            }
        ],
        "responseStatus": ok_status()
    })
}

pub fn order_response(id: &str) -> Value {
    json!({
        "order": {
            "code": "BTCUSD",
            "clOrderId": id,
            "side": 0,
            "price": 250.0,
            "initialQuantity": 0.01,
            "remainingQuantity": 0.01,
            "status": 1,
            "statusDesc": "New"
        },
        "responseStatus": ok_status()
    })
}

pub fn deposit_wallets_response() -> Value {
    json!({
        "addresses": [
            {"currency": "BTC", "address": "1BoatSLRHtKNngkdXEeobR76b53LETtpyT", "addressName": "main"}
        ],
        "responseStatus": ok_status()
    })
}

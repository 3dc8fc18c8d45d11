//! Example: REST API trading operations
//!
//! This example demonstrates how to use the REST API for:
//! - Checking account balances
//! - Listing deposit addresses
//! - Placing and cancelling an order
//!
//! Run with: cargo run --example rest_trading
//!
//! NOTE: Requires GATECOIN_API_KEY and GATECOIN_API_SECRET. Set
//! GATECOIN_API_URL to target a sandbox, and GATECOIN_PLACE_ORDER=1 to
//! actually place (and immediately cancel) an order.

use gatecoin_rest::{CreateOrderRequest, Credentials, GatecoinRestClient, RestError};
use rust_decimal_macros::dec;
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Gatecoin REST API Example ===\n");

    let client = GatecoinRestClient::new(Credentials::from_env()?)?;

    println!("--- Account ---\n");

    match client.balances().await {
        Ok(balances) => {
            for balance in balances {
                println!(
                    "  {}: {} (available {})",
                    balance["currency"], balance["balance"], balance["availableBalance"]
                );
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    match client.deposit_wallets().await {
        Ok(addresses) => {
            for address in addresses {
                println!("  {}: {}", address["currency"], address["address"]);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    if env::var("GATECOIN_PLACE_ORDER").as_deref() != Ok("1") {
        println!("Skipping order placement (set GATECOIN_PLACE_ORDER=1)");
        return Ok(());
    }

    println!("--- Trading ---\n");

    // Far below market so it rests on the book
    let order = CreateOrderRequest::buy("BTCUSD", dec!(0.01), dec!(1));
    let placed = match client.create_order(&order).await {
        Ok(placed) => placed,
        Err(RestError::CreateOrder(msg)) => {
            println!("  Order rejected: {}", msg);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(id) = placed["clOrderId"].as_str() else {
        return Ok(());
    };
    println!("  Placed order {}", id);
    println!("  Status: {}", client.order(id).await?);

    match client.cancel_order(id).await {
        Ok(_) => println!("  Cancelled order {}", id),
        Err(e) => println!("  Cancel failed: {}", e),
    }

    Ok(())
}

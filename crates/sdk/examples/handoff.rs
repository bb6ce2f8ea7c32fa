//! Hand-off Example
//!
//! Two users compete for one resource through the SDK.
//!
//! # Usage
//!
//! 1. Start the daemon:
//!    ```bash
//!    cargo run --package baton-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package baton-sdk --example handoff
//!    ```

use baton_sdk::BatonClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Baton SDK - Hand-off Example");
    println!("============================\n");

    let client = BatonClient::connect("http://127.0.0.1:9531").await?;

    let first = client.acquire("demo-env", "ana").await?;
    println!("ana  -> {} (owner: {})", first.status, first.owner);

    let second = client.acquire("demo-env", "bea").await?;
    println!("bea  -> {} (ahead: {:?})", second.status, second.ahead);

    let snapshot = client.query("demo-env").await?;
    println!("state: owner={} waiters={:?}\n", snapshot.owner, snapshot.waiters);

    let handoff = client.release("demo-env", "ana").await?;
    println!(
        "ana released -> {} (new owner: {})",
        handoff.status,
        handoff.new_owner.unwrap_or_default()
    );

    let done = client.release("demo-env", "bea").await?;
    println!("bea released -> {}", done.status);

    match client.query("demo-env").await {
        Err(e) if e.is_not_found() => println!("\n✓ demo-env is free again"),
        other => println!("\nunexpected: {:?}", other),
    }

    Ok(())
}

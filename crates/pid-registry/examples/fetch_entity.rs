//! Fetch one basic entity record and print it.
//!
//! ```sh
//! PID_REGISTRY_URL=https://registry.example.com/api \
//! PID_REGISTRY_SUBSCRIPTION_KEY=my-key \
//! cargo run --example fetch_entity -- 20304050607
//! ```

use pid_registry::{CacheOptions, OperationClass, RegistryClient, RegistryConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cuit = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: fetch_entity <cuit>"))?;

    let config = RegistryConfig::from_env()
        .with_cache(CacheOptions::default().with_ttl(OperationClass::EntityBasic, 3));

    let client = RegistryClient::new(config)?;

    match client.get_entity_basic(&cuit).await {
        Ok(entity) => println!("{}", serde_json::to_string_pretty(&entity)?),
        Err(err) => eprintln!("lookup failed: {}", err),
    }

    Ok(())
}

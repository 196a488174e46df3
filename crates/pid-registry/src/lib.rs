//! Client for the PID entity/bank-account registry.
//!
//! This crate fetches entity records, bank-account details, ownership
//! validations, and regulatory special-record entries from the registry
//! service over HTTP, and shields callers from redundant traffic with a
//! cache-aside layer:
//!
//! - Per-operation-class cache expiration (disable per class with a
//!   non-positive duration)
//! - Request coalescing: concurrent misses of one operation class collapse
//!   into a single upstream call via a per-class gate, with a
//!   double-checked cache read under the gate
//! - Failure classification at the transport boundary; failed fetches are
//!   never cached
//!
//! # Quick Start
//!
//! ```no_run
//! use pid_registry::{CacheOptions, OperationClass, RegistryClient, RegistryConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = RegistryConfig::default()
//!     .with_url("https://registry.example.com/api")
//!     .with_subscription_key("my-subscription-key")
//!     .with_cache(CacheOptions::default().with_ttl(OperationClass::EntityBasic, 3));
//!
//! let client = RegistryClient::new(config)?;
//!
//! let entity = client.get_entity_basic("20304050607").await?;
//! println!("{:?}", entity.display_name);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `PID_REGISTRY_URL` | Registry base URL |
//! | `PID_REGISTRY_SUBSCRIPTION_KEY` | Subscription key header value |
//! | `PID_REGISTRY_TIMEOUT` | Request timeout in seconds (default: 30) |
//! | `PID_REGISTRY_MAX_RETRIES` | Max retries for transient failures (default: 3) |

pub mod cache;
pub mod client;
pub mod config;
mod coordinator;
pub mod error;
pub mod key;
pub mod transport;
pub mod types;

// Re-export main types
pub use cache::{CacheStore, MemoryCache};
pub use client::RegistryClient;
pub use config::{CacheOptions, RegistryConfig};
pub use error::{RegistryError, RegistryResult};
pub use key::{CacheKey, OperationClass};
pub use transport::HttpTransport;
pub use types::{
    AccountOwner, AccountRouting, Activity, Address, BankAccountDetail, BankAccountOwner,
    BankRouting, Email, EntityBasicData, EntityFullData, Exclusion, SpecialRecordEntry, Tax,
    TaxCondition, Telephone,
};

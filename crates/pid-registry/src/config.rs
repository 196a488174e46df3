//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::key::OperationClass;

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

/// Registry client configuration.
///
/// Consumed once at construction. Per-operation cache durations live in
/// [`CacheOptions`]; a duration of zero or fewer minutes disables caching
/// for that operation entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Base URL for the registry service.
    #[serde(default)]
    pub base_url: String,

    /// Subscription key sent with every request.
    #[serde(default)]
    pub subscription_key: Option<String>,

    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum retries for transient transport failures.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Per-operation cache durations.
    #[serde(default)]
    pub cache: CacheOptions,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            subscription_key: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            cache: CacheOptions::default(),
        }
    }
}

impl RegistryConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `PID_REGISTRY_URL` | Registry base URL |
    /// | `PID_REGISTRY_SUBSCRIPTION_KEY` | Subscription key header value |
    /// | `PID_REGISTRY_TIMEOUT` | Request timeout in seconds (default: 30) |
    /// | `PID_REGISTRY_MAX_RETRIES` | Max retries for transient failures (default: 3) |
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("PID_REGISTRY_URL").unwrap_or_default(),
            subscription_key: std::env::var("PID_REGISTRY_SUBSCRIPTION_KEY").ok(),
            timeout_secs: std::env::var("PID_REGISTRY_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout),
            max_retries: std::env::var("PID_REGISTRY_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_max_retries),
            cache: CacheOptions::default(),
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the subscription key.
    pub fn with_subscription_key(mut self, key: impl Into<String>) -> Self {
        self.subscription_key = Some(key.into());
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the retry budget for transient failures.
    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the cache options.
    pub fn with_cache(mut self, cache: CacheOptions) -> Self {
        self.cache = cache;
        self
    }
}

/// Cache duration per operation class, in whole minutes.
///
/// Zero or negative minutes disable caching for that class: every call
/// goes straight to the registry, skipping the cache and its gate.
/// Defaults to caching disabled everywhere until configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheOptions {
    /// Basic entity data expiration.
    #[serde(default)]
    pub entity_basic_minutes: i64,

    /// Full entity data expiration.
    #[serde(default)]
    pub entity_full_minutes: i64,

    /// Special-record expiration.
    #[serde(default)]
    pub special_record_minutes: i64,

    /// Bank account detail expiration.
    #[serde(default)]
    pub bank_account_detail_minutes: i64,

    /// Bank account ownership expiration.
    #[serde(default)]
    pub bank_account_ownership_minutes: i64,
}

impl CacheOptions {
    /// Set the cache duration for one operation class.
    pub fn with_ttl(mut self, class: OperationClass, minutes: i64) -> Self {
        match class {
            OperationClass::EntityBasic => self.entity_basic_minutes = minutes,
            OperationClass::EntityFull => self.entity_full_minutes = minutes,
            OperationClass::SpecialRecord => self.special_record_minutes = minutes,
            OperationClass::BankAccountDetail => self.bank_account_detail_minutes = minutes,
            OperationClass::BankAccountOwnership => self.bank_account_ownership_minutes = minutes,
        }
        self
    }

    /// Effective duration for one operation class.
    ///
    /// Zero means caching is disabled for the class.
    pub fn ttl(&self, class: OperationClass) -> Duration {
        let minutes = match class {
            OperationClass::EntityBasic => self.entity_basic_minutes,
            OperationClass::EntityFull => self.entity_full_minutes,
            OperationClass::SpecialRecord => self.special_record_minutes,
            OperationClass::BankAccountDetail => self.bank_account_detail_minutes,
            OperationClass::BankAccountOwnership => self.bank_account_ownership_minutes,
        };

        if minutes <= 0 {
            Duration::ZERO
        } else {
            Duration::from_secs(minutes as u64 * 60)
        }
    }
}

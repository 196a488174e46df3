//! Cache-aside request coordination.
//!
//! For each lookup the coordinator decides whether to serve from cache,
//! and on a miss collapses concurrent callers of the same operation class
//! into a single upstream call. Serialization is per class, not per key:
//! all in-flight misses of one class queue on that class's gate even when
//! they target different keys, while different classes never block each
//! other. A cache hit takes the fast path and never touches a gate.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::{CacheStore, MemoryCache};
use crate::config::CacheOptions;
use crate::error::RegistryResult;
use crate::key::{CacheKey, OperationClass};
use crate::transport::HttpTransport;
use crate::types::{
    BankAccountDetail, BankAccountOwner, EntityBasicData, EntityFullData, SpecialRecordEntry,
};

/// State owned by one operation class: its expiration, its gate, and its
/// typed cache.
///
/// A zero `ttl` disables caching for the class: calls bypass both the
/// cache and the gate.
pub(crate) struct OperationSlot<T> {
    class: OperationClass,
    ttl: Duration,
    gate: Mutex<()>,
    cache: Arc<dyn CacheStore<T>>,
}

impl<T: Clone + Send + Sync + 'static> OperationSlot<T> {
    fn new(class: OperationClass, ttl: Duration) -> Self {
        Self::with_cache(class, ttl, Arc::new(MemoryCache::new()))
    }

    fn with_cache(class: OperationClass, ttl: Duration, cache: Arc<dyn CacheStore<T>>) -> Self {
        Self {
            class,
            ttl,
            gate: Mutex::new(()),
            cache,
        }
    }
}

/// One slot per operation class.
struct OperationSlots {
    entity_basic: OperationSlot<EntityBasicData>,
    entity_full: OperationSlot<EntityFullData>,
    special_record: OperationSlot<SpecialRecordEntry>,
    bank_account_detail: OperationSlot<BankAccountDetail>,
    bank_account_ownership: OperationSlot<BankAccountOwner>,
}

impl OperationSlots {
    fn from_options(options: &CacheOptions) -> Self {
        Self {
            entity_basic: OperationSlot::new(
                OperationClass::EntityBasic,
                options.ttl(OperationClass::EntityBasic),
            ),
            entity_full: OperationSlot::new(
                OperationClass::EntityFull,
                options.ttl(OperationClass::EntityFull),
            ),
            special_record: OperationSlot::new(
                OperationClass::SpecialRecord,
                options.ttl(OperationClass::SpecialRecord),
            ),
            bank_account_detail: OperationSlot::new(
                OperationClass::BankAccountDetail,
                options.ttl(OperationClass::BankAccountDetail),
            ),
            bank_account_ownership: OperationSlot::new(
                OperationClass::BankAccountOwnership,
                options.ttl(OperationClass::BankAccountOwnership),
            ),
        }
    }
}

/// Executes the cache-aside protocol for every operation class.
pub(crate) struct RequestCoordinator {
    transport: HttpTransport,
    slots: OperationSlots,
}

impl RequestCoordinator {
    pub(crate) fn new(transport: HttpTransport, options: &CacheOptions) -> Self {
        Self {
            transport,
            slots: OperationSlots::from_options(options),
        }
    }

    pub(crate) async fn entity_basic(&self, cuit: &str) -> RegistryResult<EntityBasicData> {
        self.fetch(&self.slots.entity_basic, CacheKey::EntityBasic { key: cuit })
            .await
    }

    pub(crate) async fn entity_full(&self, cuit: &str) -> RegistryResult<EntityFullData> {
        self.fetch(&self.slots.entity_full, CacheKey::EntityFull { key: cuit })
            .await
    }

    pub(crate) async fn special_record(
        &self,
        cuit: &str,
        rule: &str,
    ) -> RegistryResult<SpecialRecordEntry> {
        self.fetch(
            &self.slots.special_record,
            CacheKey::SpecialRecord { key: cuit, rule },
        )
        .await
    }

    pub(crate) async fn bank_account_detail(&self, cbu: &str) -> RegistryResult<BankAccountDetail> {
        self.fetch(
            &self.slots.bank_account_detail,
            CacheKey::BankAccountDetail { key: cbu },
        )
        .await
    }

    pub(crate) async fn bank_account_ownership(
        &self,
        cbu: &str,
        cuit: &str,
    ) -> RegistryResult<BankAccountOwner> {
        self.fetch(
            &self.slots.bank_account_ownership,
            CacheKey::BankAccountOwnership {
                account: cbu,
                owner: cuit,
            },
        )
        .await
    }

    /// The cache-aside protocol.
    ///
    /// Probe, then on a miss acquire the class gate, re-probe (another
    /// caller may have populated the key while this one waited), and only
    /// on a confirmed miss perform the single upstream call and populate
    /// the cache. The guard releases the gate on every exit path,
    /// including error and cancellation. A failed fetch never writes to
    /// the cache.
    async fn fetch<T>(&self, slot: &OperationSlot<T>, key: CacheKey<'_>) -> RegistryResult<T>
    where
        T: DeserializeOwned + Clone + Send + Sync,
    {
        let path = key.to_string();

        if slot.ttl.is_zero() {
            return self.transport.get_json(&path).await;
        }

        if let Some(value) = slot.cache.get(&path) {
            debug!(operation = %slot.class, key = %path, "cache hit");
            return Ok(value);
        }

        let _guard = slot.gate.lock().await;

        if let Some(value) = slot.cache.get(&path) {
            debug!(operation = %slot.class, key = %path, "cache hit after gate wait");
            return Ok(value);
        }

        debug!(operation = %slot.class, key = %path, "cache miss; fetching from registry");
        let value: T = self.transport.get_json(&path).await?;
        slot.cache.set(&path, value.clone(), slot.ttl);

        Ok(value)
    }
}

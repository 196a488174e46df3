//! Typed facade over the registry.

use crate::config::RegistryConfig;
use crate::coordinator::RequestCoordinator;
use crate::error::RegistryResult;
use crate::transport::HttpTransport;
use crate::types::{
    BankAccountDetail, BankAccountOwner, EntityBasicData, EntityFullData, SpecialRecordEntry,
};

/// Client for the PID registry.
///
/// Exposes the five registry lookups; caching and request coalescing are
/// handled per operation class behind each call. One client is meant to be
/// shared across concurrent callers.
pub struct RegistryClient {
    coordinator: RequestCoordinator,
}

impl RegistryClient {
    /// Create a client from configuration.
    ///
    /// Configuration problems (missing base URL, unusable subscription
    /// key) surface here as [`Config`](crate::RegistryError::Config), not
    /// on first call.
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        let transport = HttpTransport::new(&config)?;

        Ok(Self {
            coordinator: RequestCoordinator::new(transport, &config.cache),
        })
    }

    /// Create a client from environment variables.
    pub fn from_env() -> RegistryResult<Self> {
        Self::new(RegistryConfig::from_env())
    }

    /// Fetch the basic entity record for a tax key.
    pub async fn get_entity_basic(&self, cuit: &str) -> RegistryResult<EntityBasicData> {
        self.coordinator.entity_basic(cuit).await
    }

    /// Fetch the full entity record for a tax key.
    pub async fn get_entity_full(&self, cuit: &str) -> RegistryResult<EntityFullData> {
        self.coordinator.entity_full(cuit).await
    }

    /// Fetch one special-record entry for a tax key and rule.
    pub async fn get_special_record(
        &self,
        cuit: &str,
        rule: &str,
    ) -> RegistryResult<SpecialRecordEntry> {
        self.coordinator.special_record(cuit, rule).await
    }

    /// Fetch the detail of a bank account by its account address.
    pub async fn get_bank_account_detail(&self, cbu: &str) -> RegistryResult<BankAccountDetail> {
        self.coordinator.bank_account_detail(cbu).await
    }

    /// Validate that a tax key owns a bank account.
    pub async fn get_bank_account_ownership(
        &self,
        cbu: &str,
        cuit: &str,
    ) -> RegistryResult<BankAccountOwner> {
        self.coordinator.bank_account_ownership(cbu, cuit).await
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::CacheOptions;
    use crate::error::RegistryError;
    use crate::key::OperationClass;

    fn cached_client(server: &MockServer) -> RegistryClient {
        let cache = CacheOptions::default()
            .with_ttl(OperationClass::EntityBasic, 3)
            .with_ttl(OperationClass::EntityFull, 3)
            .with_ttl(OperationClass::SpecialRecord, 3)
            .with_ttl(OperationClass::BankAccountDetail, 3)
            .with_ttl(OperationClass::BankAccountOwnership, 3);

        let config = RegistryConfig::default()
            .with_url(server.uri())
            .with_subscription_key("test-key")
            .with_max_retries(0)
            .with_cache(cache);

        RegistryClient::new(config).expect("failed to create client")
    }

    #[test]
    fn missing_base_url_fails_at_construction() {
        let result = RegistryClient::new(RegistryConfig::default());
        assert!(matches!(result, Err(RegistryError::Config { .. })));
    }

    #[tokio::test]
    async fn entity_basic_fetches_once_then_serves_from_cache() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/EntityDataBasic"))
            .and(query_param("key", "5050505050"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "NaturalKey": 56,
                "DisplayName": "ACME SA"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = cached_client(&server);

        let first = client.get_entity_basic("5050505050").await.unwrap();
        let second = client.get_entity_basic("5050505050").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.natural_key, Some(56));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn entity_full_hits_its_own_path() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/EntityDataFull"))
            .and(query_param("key", "5050505050"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "NaturalKey": 56,
                "Exclusions": [{"Rule": "r-1"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = cached_client(&server);
        let entity = client.get_entity_full("5050505050").await.unwrap();

        assert_eq!(entity.basic.natural_key, Some(56));
        assert_eq!(entity.exclusions.len(), 1);
    }

    #[tokio::test]
    async fn special_record_passes_key_and_rule() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/SpecialRecord"))
            .and(query_param("key", "5050505050"))
            .and(query_param("rule", "general"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": "activo"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = cached_client(&server);
        let record = client
            .get_special_record("5050505050", "general")
            .await
            .unwrap();

        assert_eq!(record.status.as_deref(), Some("activo"));
    }

    #[tokio::test]
    async fn bank_account_detail_round_trip() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/BankAccountDetails"))
            .and(query_param("key", "2323232323"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "currency": "pesos",
                "is_active": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = cached_client(&server);
        let detail = client.get_bank_account_detail("2323232323").await.unwrap();

        assert_eq!(detail.currency.as_deref(), Some("pesos"));
        assert_eq!(detail.is_active, Some(true));
    }

    #[tokio::test]
    async fn concurrent_ownership_calls_share_one_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/BankAccountOwnership"))
            .and(query_param("account_address", "2323232323"))
            .and(query_param("owner_key", "5050505050"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"valid": true}))
                    .set_delay(Duration::from_millis(250)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = Arc::new(cached_client(&server));

        let a = {
            let client = Arc::clone(&client);
            tokio::spawn(
                async move { client.get_bank_account_ownership("2323232323", "5050505050").await },
            )
        };
        let b = {
            let client = Arc::clone(&client);
            tokio::spawn(
                async move { client.get_bank_account_ownership("2323232323", "5050505050").await },
            )
        };

        let a = a.await.unwrap().unwrap();
        let b = b.await.unwrap().unwrap();

        assert_eq!(a, b);
        assert!(a.valid);
    }

    #[tokio::test]
    async fn unauthorized_is_not_cached() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "NaturalKey": 56
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = cached_client(&server);

        let first = client.get_entity_basic("5050505050").await;
        assert!(matches!(first, Err(RegistryError::Unauthorized { .. })));

        let second = client.get_entity_basic("5050505050").await.unwrap();
        assert_eq!(second.natural_key, Some(56));
    }

    #[tokio::test]
    async fn validation_failure_carries_the_server_message() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"message": "bad cuit"})),
            )
            .mount(&server)
            .await;

        let client = cached_client(&server);
        let result = client.get_entity_basic("not-a-cuit").await;

        match result {
            Err(RegistryError::Validation { message }) => assert_eq!(message, "bad cuit"),
            other => panic!("expected Validation, got {:?}", other),
        }
    }
}

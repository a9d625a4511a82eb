//! In-memory catalog implementation for testing and development.

use crate::catalog::{
    Catalog, CatalogChangeHandler, CatalogConfig, CatalogEvent, CatalogRecord, EventType,
};
use crate::errors::{Error, Result};
use crate::gateway::Gateway;
use crate::nacos::NacosInstance;
use crate::types::GatewayType;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// In-memory catalog implementation
///
/// Thread-safe, useful for testing and development.
/// Records are lost when the last clone is dropped.
#[derive(Clone)]
pub struct MemoryCatalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    config: CatalogConfig,
    gateways: RwLock<HashMap<String, Gateway>>,
    nacos: RwLock<HashMap<String, NacosInstance>>,
    watchers: RwLock<Vec<tokio::sync::mpsc::UnboundedSender<CatalogEvent>>>,
    closed: RwLock<bool>,
}

impl MemoryCatalog {
    /// Creates a new in-memory catalog with the default config
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                config,
                gateways: RwLock::new(HashMap::new()),
                nacos: RwLock::new(HashMap::new()),
                watchers: RwLock::new(Vec::new()),
                closed: RwLock::new(false),
            }),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    async fn ensure_open(&self) -> Result<()> {
        if *self.inner.closed.read().await {
            return Err(Error::CatalogClosed);
        }
        Ok(())
    }

    /// Notifies watchers, dropping those whose receiver is gone
    async fn notify_watchers(&self, event_type: EventType, record: CatalogRecord) {
        let event = CatalogEvent {
            event_type,
            record,
            timestamp: chrono::Utc::now().timestamp(),
        };

        let mut watchers = self.inner.watchers.write().await;
        watchers.retain(|sender| sender.send(event.clone()).is_ok());
    }

    /// Finds another gateway pointing at the same backend
    fn find_connection_owner(
        gateways: &HashMap<String, Gateway>,
        gateway: &Gateway,
    ) -> Option<String> {
        let key = gateway.connection_key();
        gateways
            .values()
            .find(|g| g.gateway_id != gateway.gateway_id && g.connection_key() == key)
            .map(|g| g.gateway_id.clone())
    }

    /// Clears all records (useful for testing)
    pub async fn clear(&self) {
        let mut gateways = self.inner.gateways.write().await;
        let mut nacos = self.inner.nacos.write().await;
        gateways.clear();
        nacos.clear();
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn register_gateway(&self, gateway: &Gateway) -> Result<()> {
        self.ensure_open().await?;
        gateway.validate()?;

        let mut gateways = self.inner.gateways.write().await;
        if gateways.contains_key(&gateway.gateway_id) {
            return Err(Error::already_exists("gateway", &gateway.gateway_id));
        }

        if self.inner.config.reject_duplicate_connections {
            if let Some(existing_id) = Self::find_connection_owner(&gateways, gateway) {
                warn!(
                    gateway_id = %gateway.gateway_id,
                    existing_id = %existing_id,
                    "gateway connection already registered"
                );
                return Err(Error::DuplicateConnection { existing_id });
            }
        }

        gateways.insert(gateway.gateway_id.clone(), gateway.clone());
        drop(gateways); // Release lock before notifying

        info!(
            gateway_id = %gateway.gateway_id,
            gateway_type = %gateway.gateway_type(),
            "registered gateway"
        );
        self.notify_watchers(EventType::Added, CatalogRecord::Gateway(gateway.view()))
            .await;

        Ok(())
    }

    async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway> {
        let gateways = self.inner.gateways.read().await;
        gateways
            .get(gateway_id)
            .cloned()
            .ok_or_else(|| Error::GatewayNotFound(gateway_id.to_string()))
    }

    async fn update_gateway(&self, gateway: &Gateway) -> Result<()> {
        self.ensure_open().await?;
        gateway.validate()?;

        let mut gateways = self.inner.gateways.write().await;
        if !gateways.contains_key(&gateway.gateway_id) {
            return Err(Error::GatewayNotFound(gateway.gateway_id.clone()));
        }

        if self.inner.config.reject_duplicate_connections {
            if let Some(existing_id) = Self::find_connection_owner(&gateways, gateway) {
                return Err(Error::DuplicateConnection { existing_id });
            }
        }

        gateways.insert(gateway.gateway_id.clone(), gateway.clone());
        drop(gateways);

        debug!(gateway_id = %gateway.gateway_id, "updated gateway");
        self.notify_watchers(EventType::Updated, CatalogRecord::Gateway(gateway.view()))
            .await;

        Ok(())
    }

    async fn remove_gateway(&self, gateway_id: &str) -> Result<()> {
        self.ensure_open().await?;

        let mut gateways = self.inner.gateways.write().await;
        let gateway = gateways
            .remove(gateway_id)
            .ok_or_else(|| Error::GatewayNotFound(gateway_id.to_string()))?;
        drop(gateways);

        info!(gateway_id = %gateway_id, "removed gateway");
        self.notify_watchers(EventType::Removed, CatalogRecord::Gateway(gateway.view()))
            .await;

        Ok(())
    }

    async fn list_gateways(&self, gateway_type: Option<GatewayType>) -> Result<Vec<Gateway>> {
        let gateways = self.inner.gateways.read().await;
        let mut results: Vec<Gateway> = gateways
            .values()
            .filter(|g| gateway_type.map_or(true, |t| g.gateway_type() == t))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            a.create_at
                .cmp(&b.create_at)
                .then_with(|| a.gateway_id.cmp(&b.gateway_id))
        });
        Ok(results)
    }

    async fn register_nacos(&self, instance: &NacosInstance) -> Result<()> {
        self.ensure_open().await?;
        instance.validate()?;

        let mut nacos = self.inner.nacos.write().await;
        if nacos.contains_key(&instance.nacos_id) {
            return Err(Error::already_exists("nacos instance", &instance.nacos_id));
        }
        nacos.insert(instance.nacos_id.clone(), instance.clone());
        drop(nacos);

        info!(
            nacos_id = %instance.nacos_id,
            server_url = %instance.server_url,
            "registered nacos instance"
        );
        self.notify_watchers(EventType::Added, CatalogRecord::Nacos(instance.view()))
            .await;

        Ok(())
    }

    async fn get_nacos(&self, nacos_id: &str) -> Result<NacosInstance> {
        let nacos = self.inner.nacos.read().await;
        nacos
            .get(nacos_id)
            .cloned()
            .ok_or_else(|| Error::NacosInstanceNotFound(nacos_id.to_string()))
    }

    async fn update_nacos(&self, instance: &NacosInstance) -> Result<()> {
        self.ensure_open().await?;
        instance.validate()?;

        let mut nacos = self.inner.nacos.write().await;
        if !nacos.contains_key(&instance.nacos_id) {
            return Err(Error::NacosInstanceNotFound(instance.nacos_id.clone()));
        }
        nacos.insert(instance.nacos_id.clone(), instance.clone());
        drop(nacos);

        debug!(nacos_id = %instance.nacos_id, "updated nacos instance");
        self.notify_watchers(EventType::Updated, CatalogRecord::Nacos(instance.view()))
            .await;

        Ok(())
    }

    async fn remove_nacos(&self, nacos_id: &str) -> Result<()> {
        self.ensure_open().await?;

        let mut nacos = self.inner.nacos.write().await;
        let instance = nacos
            .remove(nacos_id)
            .ok_or_else(|| Error::NacosInstanceNotFound(nacos_id.to_string()))?;
        drop(nacos);

        info!(nacos_id = %nacos_id, "removed nacos instance");
        self.notify_watchers(EventType::Removed, CatalogRecord::Nacos(instance.view()))
            .await;

        Ok(())
    }

    async fn list_nacos(&self, admin_id: Option<&str>) -> Result<Vec<NacosInstance>> {
        let nacos = self.inner.nacos.read().await;
        let mut results: Vec<NacosInstance> = nacos
            .values()
            .filter(|n| admin_id.map_or(true, |a| n.admin_id == a))
            .cloned()
            .collect();
        results.sort_by(|a, b| {
            a.create_at
                .cmp(&b.create_at)
                .then_with(|| a.nacos_id.cmp(&b.nacos_id))
        });
        Ok(results)
    }

    async fn watch(&self, on_change: Box<dyn CatalogChangeHandler>) -> Result<()> {
        self.ensure_open().await?;

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        self.inner.watchers.write().await.push(tx);

        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                on_change.on_change(&event);
            }
        });

        Ok(())
    }

    async fn close(&self) -> Result<()> {
        let mut closed = self.inner.closed.write().await;
        if *closed {
            return Ok(());
        }

        *closed = true;

        // Dropping the senders ends the watcher tasks
        self.inner.watchers.write().await.clear();
        debug!("catalog closed");

        Ok(())
    }

    async fn health(&self) -> Result<()> {
        self.ensure_open().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::{new_gateway, GatewayConfig};
    use crate::nacos::new_nacos_instance;
    use crate::types::{ApisixConfig, HigressConfig};

    fn apisix_gateway(endpoint: &str) -> Gateway {
        new_gateway(
            "apisix",
            GatewayConfig::Apisix(ApisixConfig::new(endpoint, "test-key")),
        )
    }

    fn higress_gateway() -> Gateway {
        new_gateway(
            "higress",
            GatewayConfig::Higress(HigressConfig {
                username: "admin".to_string(),
                address: "10.0.0.1:8080".to_string(),
                password: "secret".into(),
            }),
        )
    }

    #[tokio::test]
    async fn test_register_and_get_gateway() {
        let catalog = MemoryCatalog::new();
        let gateway = apisix_gateway("http://localhost:9180");

        catalog.register_gateway(&gateway).await.unwrap();

        let retrieved = catalog.get_gateway(&gateway.gateway_id).await.unwrap();
        assert_eq!(retrieved, gateway);
    }

    #[tokio::test]
    async fn test_register_duplicate_id() {
        let catalog = MemoryCatalog::with_config(CatalogConfig {
            reject_duplicate_connections: false,
        });
        let gateway = apisix_gateway("http://localhost:9180");

        catalog.register_gateway(&gateway).await.unwrap();
        let result = catalog.register_gateway(&gateway).await;
        assert!(matches!(result, Err(Error::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_duplicate_connection_rejected() {
        let catalog = MemoryCatalog::new();
        let first = apisix_gateway("http://localhost:9180");
        let second = apisix_gateway("http://localhost:9180/");

        catalog.register_gateway(&first).await.unwrap();
        let err = catalog.register_gateway(&second).await.unwrap_err();
        assert!(
            matches!(err, Error::DuplicateConnection { ref existing_id } if *existing_id == first.gateway_id)
        );
    }

    #[tokio::test]
    async fn test_duplicate_connection_allowed_when_disabled() {
        let catalog = MemoryCatalog::with_config(CatalogConfig {
            reject_duplicate_connections: false,
        });

        catalog
            .register_gateway(&apisix_gateway("http://localhost:9180"))
            .await
            .unwrap();
        catalog
            .register_gateway(&apisix_gateway("http://localhost:9180"))
            .await
            .unwrap();

        assert_eq!(catalog.list_gateways(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_register_invalid_gateway() {
        let catalog = MemoryCatalog::new();
        let mut gateway = apisix_gateway("http://localhost:9180");
        gateway.gateway_name = String::new();

        let result = catalog.register_gateway(&gateway).await;
        assert!(matches!(result, Err(Error::MissingField(_))));
    }

    #[tokio::test]
    async fn test_update_gateway() {
        let catalog = MemoryCatalog::new();
        let mut gateway = apisix_gateway("http://localhost:9180");
        catalog.register_gateway(&gateway).await.unwrap();

        gateway.gateway_name = "apisix-renamed".to_string();
        catalog.update_gateway(&gateway).await.unwrap();

        let retrieved = catalog.get_gateway(&gateway.gateway_id).await.unwrap();
        assert_eq!(retrieved.gateway_name, "apisix-renamed");

        let missing = apisix_gateway("http://other:9180");
        assert!(matches!(
            catalog.update_gateway(&missing).await,
            Err(Error::GatewayNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_gateway() {
        let catalog = MemoryCatalog::new();
        let gateway = higress_gateway();

        catalog.register_gateway(&gateway).await.unwrap();
        catalog.remove_gateway(&gateway.gateway_id).await.unwrap();

        let result = catalog.get_gateway(&gateway.gateway_id).await;
        assert!(matches!(result, Err(Error::GatewayNotFound(_))));
    }

    #[tokio::test]
    async fn test_list_gateways_by_type() {
        let catalog = MemoryCatalog::new();
        catalog
            .register_gateway(&apisix_gateway("http://a:9180"))
            .await
            .unwrap();
        catalog
            .register_gateway(&apisix_gateway("http://b:9180"))
            .await
            .unwrap();
        catalog.register_gateway(&higress_gateway()).await.unwrap();

        let apisix = catalog
            .list_gateways(Some(GatewayType::Apisix))
            .await
            .unwrap();
        assert_eq!(apisix.len(), 2);
        assert!(apisix.iter().all(|g| g.gateway_type().is_apisix()));

        let all = catalog.list_gateways(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_nacos_lifecycle() {
        let catalog = MemoryCatalog::new();
        let instance = new_nacos_instance("registry", "http://127.0.0.1:8848", "nacos", "admin-1")
            .with_password("nacos-pass");
        let other = new_nacos_instance("registry-2", "http://127.0.0.2:8848", "nacos", "admin-2");

        catalog.register_nacos(&instance).await.unwrap();
        catalog.register_nacos(&other).await.unwrap();

        let mine = catalog.list_nacos(Some("admin-1")).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].nacos_id, instance.nacos_id);
        assert_eq!(catalog.list_nacos(None).await.unwrap().len(), 2);

        let updated = instance.clone().with_description("primary registry");
        catalog.update_nacos(&updated).await.unwrap();
        assert_eq!(
            catalog.get_nacos(&instance.nacos_id).await.unwrap().description,
            "primary registry"
        );

        catalog.remove_nacos(&instance.nacos_id).await.unwrap();
        assert!(matches!(
            catalog.get_nacos(&instance.nacos_id).await,
            Err(Error::NacosInstanceNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_close_catalog() {
        let catalog = MemoryCatalog::new();
        catalog.close().await.unwrap();

        assert!(matches!(catalog.health().await, Err(Error::CatalogClosed)));
        let result = catalog.register_gateway(&higress_gateway()).await;
        assert!(matches!(result, Err(Error::CatalogClosed)));

        // Closing twice is fine
        catalog.close().await.unwrap();
    }
}

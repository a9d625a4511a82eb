//! portal-gateway - gateway and service-registry records for an API portal
//!
//! This crate defines the records an API portal's admin backend exchanges with
//! its UI and API clients: the gateways it manages (APIG, Higress, ADP AI,
//! Apsara, APISIX) with their connection credentials, and the Nacos service
//! registry servers it discovers backends from.
//!
//! # Overview
//!
//! portal-gateway provides:
//! - A single closed [`GatewayType`](types::GatewayType) enumeration
//! - A tagged [`GatewayConfig`](gateway::GatewayConfig) so a gateway always
//!   carries exactly the config block its kind requires
//! - Validating conversions from the wire shape with typed errors
//! - A normalized [`Timestamp`](types::Timestamp) accepting text or epoch millis
//! - [`Secret`](types::Secret) credentials that never print themselves
//! - Credential-free views for display and logging
//! - An optional in-memory catalog with change notifications
//!
//! # Basic Usage
//!
//! Parsing a gateway record:
//!
//! ```
//! use portal_gateway::prelude::*;
//!
//! let json = br#"{
//!     "gatewayId": "gw-1",
//!     "gatewayName": "higress-prod",
//!     "gatewayType": "HIGRESS",
//!     "createAt": "2024-01-01T00:00:00Z",
//!     "higressConfig": {"username": "admin", "address": "10.0.0.1:8080", "password": "secret"}
//! }"#;
//!
//! let gateway = Gateway::from_json(json).unwrap();
//! assert_eq!(gateway.gateway_type(), GatewayType::Higress);
//! ```
//!
//! # Feature Flags
//!
//! - `default`: Records + memory catalog
//! - `memory-catalog`: In-memory [`catalog::memory::MemoryCatalog`]

pub mod errors;
pub mod gateway;
pub mod ids;
pub mod nacos;
pub mod records;
pub mod types;
pub mod view;

// Catalog module
pub mod catalog {
    use crate::errors::Result;
    use crate::gateway::Gateway;
    use crate::nacos::NacosInstance;
    use crate::types::GatewayType;
    use crate::view::{GatewayView, NacosInstanceView};
    use async_trait::async_trait;
    use serde::{Deserialize, Serialize};

    /// Catalog trait for managing gateway and registry instance records
    #[async_trait]
    pub trait Catalog: Send + Sync {
        async fn register_gateway(&self, gateway: &Gateway) -> Result<()>;
        async fn get_gateway(&self, gateway_id: &str) -> Result<Gateway>;
        async fn update_gateway(&self, gateway: &Gateway) -> Result<()>;
        async fn remove_gateway(&self, gateway_id: &str) -> Result<()>;
        /// Lists gateways, optionally of one kind, oldest first
        async fn list_gateways(&self, gateway_type: Option<GatewayType>) -> Result<Vec<Gateway>>;
        async fn register_nacos(&self, instance: &NacosInstance) -> Result<()>;
        async fn get_nacos(&self, nacos_id: &str) -> Result<NacosInstance>;
        async fn update_nacos(&self, instance: &NacosInstance) -> Result<()>;
        async fn remove_nacos(&self, nacos_id: &str) -> Result<()>;
        /// Lists registry instances, optionally of one administrator
        async fn list_nacos(&self, admin_id: Option<&str>) -> Result<Vec<NacosInstance>>;
        async fn watch(&self, on_change: Box<dyn CatalogChangeHandler>) -> Result<()>;
        async fn close(&self) -> Result<()>;
        async fn health(&self) -> Result<()>;
    }

    pub trait CatalogChangeHandler: Send + Sync {
        fn on_change(&self, event: &CatalogEvent);
    }

    impl<F> CatalogChangeHandler for F
    where
        F: Fn(&CatalogEvent) + Send + Sync,
    {
        fn on_change(&self, event: &CatalogEvent) {
            self(event)
        }
    }

    /// Record affected by a change, without credentials
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "lowercase")]
    pub enum CatalogRecord {
        Gateway(GatewayView),
        Nacos(NacosInstanceView),
    }

    impl CatalogRecord {
        pub fn id(&self) -> &str {
            match self {
                CatalogRecord::Gateway(g) => &g.gateway_id,
                CatalogRecord::Nacos(n) => &n.nacos_id,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CatalogEvent {
        pub event_type: EventType,
        pub record: CatalogRecord,
        pub timestamp: i64,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum EventType {
        #[serde(rename = "added")]
        Added,
        #[serde(rename = "updated")]
        Updated,
        #[serde(rename = "removed")]
        Removed,
    }

    impl std::fmt::Display for EventType {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            let s = match self {
                EventType::Added => "added",
                EventType::Updated => "updated",
                EventType::Removed => "removed",
            };
            write!(f, "{s}")
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct CatalogConfig {
        /// Reject a gateway whose connection key is already registered
        pub reject_duplicate_connections: bool,
    }

    impl Default for CatalogConfig {
        fn default() -> Self {
            Self {
                reject_duplicate_connections: true,
            }
        }
    }

    #[cfg(feature = "memory-catalog")]
    pub mod memory;
}

// Re-exports for convenience
pub use errors::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogConfig, CatalogEvent, CatalogRecord, EventType};
    pub use crate::errors::{Error, Result};
    pub use crate::gateway::*;
    pub use crate::nacos::*;
    pub use crate::records::*;
    pub use crate::types::*;
    pub use crate::view::*;
}

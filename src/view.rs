//! Credential-free views of gateway and registry records.
//!
//! Views carry only what may be shown in a listing or written to a log: the
//! locator parts of each config block, never keys, passwords or seeds.

use serde::{Deserialize, Serialize};

use crate::gateway::{Gateway, GatewayConfig};
use crate::nacos::NacosInstance;
use crate::types::{GatewayType, Timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApigConfigView {
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HigressConfigView {
    pub address: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdpAiGatewayConfigView {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApsaraGatewayConfigView {
    pub endpoint: String,
    pub product: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApisixConfigView {
    pub admin_api_endpoint: String,
    /// Effective timeout in milliseconds
    pub timeout: u64,
}

/// Gateway as shown to portal users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayView {
    pub gateway_id: String,
    pub gateway_name: String,
    pub gateway_type: GatewayType,
    pub create_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apig_config: Option<ApigConfigView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub higress_config: Option<HigressConfigView>,
    #[serde(rename = "adpAIGatewayConfig", skip_serializing_if = "Option::is_none")]
    pub adp_ai_gateway_config: Option<AdpAiGatewayConfigView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apsara_gateway_config: Option<ApsaraGatewayConfigView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apisix_config: Option<ApisixConfigView>,
}

impl From<&Gateway> for GatewayView {
    fn from(gateway: &Gateway) -> Self {
        let mut view = GatewayView {
            gateway_id: gateway.gateway_id.clone(),
            gateway_name: gateway.gateway_name.clone(),
            gateway_type: gateway.gateway_type(),
            create_at: gateway.create_at,
            apig_config: None,
            higress_config: None,
            adp_ai_gateway_config: None,
            apsara_gateway_config: None,
            apisix_config: None,
        };

        match &gateway.config {
            GatewayConfig::ApigApi(c) | GatewayConfig::ApigAi(c) => {
                view.apig_config = Some(ApigConfigView {
                    region: c.region.clone(),
                });
            }
            GatewayConfig::Higress(c) => {
                view.higress_config = Some(HigressConfigView {
                    address: c.address.clone(),
                    username: c.username.clone(),
                });
            }
            GatewayConfig::AdpAiGateway(c) => {
                view.adp_ai_gateway_config = Some(AdpAiGatewayConfigView {
                    base_url: c.base_url.clone(),
                    port: c.port(),
                });
            }
            GatewayConfig::ApsaraGateway(c) => {
                view.apsara_gateway_config = Some(ApsaraGatewayConfigView {
                    endpoint: c.endpoint.clone(),
                    product: c.product.clone(),
                    version: c.version.clone(),
                });
            }
            GatewayConfig::Apisix(c) => {
                view.apisix_config = Some(ApisixConfigView {
                    admin_api_endpoint: c.admin_api_endpoint.clone(),
                    timeout: c.effective_timeout().as_millis() as u64,
                });
            }
        }

        view
    }
}

/// Registry instance as shown to portal users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NacosInstanceView {
    pub nacos_id: String,
    pub nacos_name: String,
    pub server_url: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    pub has_password: bool,
    pub has_secret_key: bool,
    pub description: String,
    pub admin_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_at: Option<Timestamp>,
}

impl From<&NacosInstance> for NacosInstanceView {
    fn from(instance: &NacosInstance) -> Self {
        NacosInstanceView {
            nacos_id: instance.nacos_id.clone(),
            nacos_name: instance.nacos_name.clone(),
            server_url: instance.server_url.clone(),
            username: instance.username.clone(),
            access_key: instance.access_key.clone(),
            has_password: instance.password.is_some(),
            has_secret_key: instance.secret_key.is_some(),
            description: instance.description.clone(),
            admin_id: instance.admin_id.clone(),
            create_at: instance.create_at,
        }
    }
}

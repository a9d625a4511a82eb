//! Wire-shape records exchanged with the admin UI and API clients.
//!
//! Every field is optional here so that a missing value is reported by the
//! validating conversions in [`crate::gateway`] and [`crate::nacos`] rather
//! than by serde.

use serde::{Deserialize, Serialize};

use crate::types::{
    AdpAiGatewayConfig, ApigConfig, ApisixConfig, ApsaraGatewayConfig, HigressConfig, Secret,
    TimestampRepr,
};

/// Gateway record as it appears on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_name: Option<String>,
    /// Kept as text so unknown kinds can be reported by name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<TimestampRepr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apig_config: Option<ApigConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub higress_config: Option<HigressConfig>,
    #[serde(
        rename = "adpAIGatewayConfig",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub adp_ai_gateway_config: Option<AdpAiGatewayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apsara_gateway_config: Option<ApsaraGatewayConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apisix_config: Option<ApisixConfig>,
}

impl GatewayRecord {
    /// JSON keys of the config blocks that are populated
    pub fn populated_blocks(&self) -> Vec<&'static str> {
        let mut blocks = Vec::new();
        if self.apig_config.is_some() {
            blocks.push("apigConfig");
        }
        if self.higress_config.is_some() {
            blocks.push("higressConfig");
        }
        if self.adp_ai_gateway_config.is_some() {
            blocks.push("adpAIGatewayConfig");
        }
        if self.apsara_gateway_config.is_some() {
            blocks.push("apsaraGatewayConfig");
        }
        if self.apisix_config.is_some() {
            blocks.push("apisixConfig");
        }
        blocks
    }
}

/// Registry (Nacos) instance record as it appears on the wire
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NacosInstanceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nacos_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nacos_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<Secret>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_id: Option<String>,
    /// Text or epoch milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_at: Option<TimestampRepr>,
}

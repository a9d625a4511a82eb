//! Gateway records: validation, construction and JSON helpers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::ids::gen_gateway_id;
use crate::records::GatewayRecord;
use crate::types::{
    AdpAiGatewayConfig, ApigConfig, ApisixConfig, ApsaraGatewayConfig, GatewayType,
    HigressConfig, Timestamp,
};
use crate::view::GatewayView;

/// Connection config of a gateway, one variant per gateway kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayConfig {
    ApigApi(ApigConfig),
    ApigAi(ApigConfig),
    Higress(HigressConfig),
    AdpAiGateway(AdpAiGatewayConfig),
    ApsaraGateway(ApsaraGatewayConfig),
    Apisix(ApisixConfig),
}

impl GatewayConfig {
    /// Returns the gateway kind this config belongs to
    pub fn gateway_type(&self) -> GatewayType {
        match self {
            GatewayConfig::ApigApi(_) => GatewayType::ApigApi,
            GatewayConfig::ApigAi(_) => GatewayType::ApigAi,
            GatewayConfig::Higress(_) => GatewayType::Higress,
            GatewayConfig::AdpAiGateway(_) => GatewayType::AdpAiGateway,
            GatewayConfig::ApsaraGateway(_) => GatewayType::ApsaraGateway,
            GatewayConfig::Apisix(_) => GatewayType::Apisix,
        }
    }

    /// Checks the required fields of the block
    pub fn validate(&self) -> Result<()> {
        let prefix = self.gateway_type().config_key();
        match self {
            GatewayConfig::ApigApi(c) | GatewayConfig::ApigAi(c) => c.validate(prefix),
            GatewayConfig::Higress(c) => c.validate(prefix),
            GatewayConfig::AdpAiGateway(c) => c.validate(prefix),
            GatewayConfig::ApsaraGateway(c) => c.validate(prefix),
            GatewayConfig::Apisix(c) => c.validate(prefix),
        }
    }

    /// Stable key for the backend and credential, prefixed by the kind
    pub fn connection_key(&self) -> String {
        let key = match self {
            GatewayConfig::ApigApi(c) | GatewayConfig::ApigAi(c) => c.connection_key(),
            GatewayConfig::Higress(c) => c.connection_key(),
            GatewayConfig::AdpAiGateway(c) => c.connection_key(),
            GatewayConfig::ApsaraGateway(c) => c.connection_key(),
            GatewayConfig::Apisix(c) => c.connection_key(),
        };
        format!("{}:{key}", self.gateway_type())
    }
}

/// A configured gateway
///
/// The kind is carried by [`GatewayConfig`], so a gateway always has exactly
/// the config block its kind requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GatewayRecord", into = "GatewayRecord")]
pub struct Gateway {
    pub gateway_id: String,
    pub gateway_name: String,
    pub create_at: Timestamp,
    pub config: GatewayConfig,
}

/// Creates a gateway with a generated id, created now
///
/// # Examples
///
/// ```
/// use portal_gateway::gateway::{new_gateway, GatewayConfig};
/// use portal_gateway::types::{ApisixConfig, GatewayType};
///
/// let gateway = new_gateway(
///     "edge",
///     GatewayConfig::Apisix(ApisixConfig::new("http://localhost:9180", "admin-key")),
/// );
/// assert_eq!(gateway.gateway_type(), GatewayType::Apisix);
/// assert!(gateway.gateway_id.starts_with("apisix-"));
/// ```
pub fn new_gateway(gateway_name: impl Into<String>, config: GatewayConfig) -> Gateway {
    Gateway {
        gateway_id: gen_gateway_id(config.gateway_type()),
        gateway_name: gateway_name.into(),
        create_at: Timestamp::now(),
        config,
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::missing_field(field)),
    }
}

impl Gateway {
    pub fn gateway_type(&self) -> GatewayType {
        self.config.gateway_type()
    }

    /// Validates the gateway for correctness
    pub fn validate(&self) -> Result<()> {
        if self.gateway_id.trim().is_empty() {
            return Err(Error::missing_field("gatewayId"));
        }
        if self.gateway_name.trim().is_empty() {
            return Err(Error::missing_field("gatewayName"));
        }
        self.config.validate()
    }

    pub fn connection_key(&self) -> String {
        self.config.connection_key()
    }

    /// Credential-free view of the gateway
    pub fn view(&self) -> GatewayView {
        GatewayView::from(self)
    }

    /// Serializes the gateway to JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::from)
    }

    /// Serializes the gateway to pretty-printed JSON
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(Error::from)
    }

    /// Deserializes and validates a gateway from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let record: GatewayRecord =
            serde_json::from_slice(data).map_err(|e| Error::invalid_record(e.to_string()))?;
        Self::try_from(record).map_err(|e| {
            debug!(error = %e, "rejected gateway record");
            e
        })
    }
}

impl TryFrom<GatewayRecord> for Gateway {
    type Error = Error;

    fn try_from(record: GatewayRecord) -> Result<Self> {
        let gateway_type: GatewayType = record
            .gateway_type
            .as_deref()
            .ok_or_else(|| Error::missing_field("gatewayType"))?
            .parse()?;

        let expected = gateway_type.config_key();
        let foreign: Vec<&str> = record
            .populated_blocks()
            .into_iter()
            .filter(|block| *block != expected)
            .collect();

        let gateway_id = required(record.gateway_id, "gatewayId")?;
        let gateway_name = required(record.gateway_name, "gatewayName")?;
        let create_at = Timestamp::try_from(
            record
                .create_at
                .ok_or_else(|| Error::missing_field("createAt"))?,
        )?;

        if !foreign.is_empty() {
            return Err(Error::config_type_mismatch(gateway_type, foreign.join(", ")));
        }

        let missing = || Error::missing_field(expected);
        let config = match gateway_type {
            GatewayType::ApigApi => GatewayConfig::ApigApi(record.apig_config.ok_or_else(missing)?),
            GatewayType::ApigAi => GatewayConfig::ApigAi(record.apig_config.ok_or_else(missing)?),
            GatewayType::Higress => {
                GatewayConfig::Higress(record.higress_config.ok_or_else(missing)?)
            }
            GatewayType::AdpAiGateway => {
                GatewayConfig::AdpAiGateway(record.adp_ai_gateway_config.ok_or_else(missing)?)
            }
            GatewayType::ApsaraGateway => {
                GatewayConfig::ApsaraGateway(record.apsara_gateway_config.ok_or_else(missing)?)
            }
            GatewayType::Apisix => {
                GatewayConfig::Apisix(record.apisix_config.ok_or_else(missing)?)
            }
        };
        config.validate()?;

        Ok(Gateway {
            gateway_id,
            gateway_name,
            create_at,
            config,
        })
    }
}

impl From<Gateway> for GatewayRecord {
    fn from(gateway: Gateway) -> Self {
        let mut record = GatewayRecord {
            gateway_id: Some(gateway.gateway_id),
            gateway_name: Some(gateway.gateway_name),
            gateway_type: Some(gateway.config.gateway_type().as_str().to_string()),
            create_at: Some(gateway.create_at.into()),
            ..Default::default()
        };

        match gateway.config {
            GatewayConfig::ApigApi(c) | GatewayConfig::ApigAi(c) => record.apig_config = Some(c),
            GatewayConfig::Higress(c) => record.higress_config = Some(c),
            GatewayConfig::AdpAiGateway(c) => record.adp_ai_gateway_config = Some(c),
            GatewayConfig::ApsaraGateway(c) => record.apsara_gateway_config = Some(c),
            GatewayConfig::Apisix(c) => record.apisix_config = Some(c),
        }

        record
    }
}

//! Core type definitions for gateway and registry records.
//!
//! This module contains the gateway kind enumeration, the per-kind connection
//! config blocks, and the `Secret` and `Timestamp` value types they are built
//! from.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::time::Duration;

use crate::errors::{Error, Result};

/// Gateway kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GatewayType {
    /// APIG REST API gateway
    #[serde(rename = "APIG_API")]
    ApigApi,
    /// Higress gateway
    #[serde(rename = "HIGRESS")]
    Higress,
    /// APIG AI gateway
    #[serde(rename = "APIG_AI")]
    ApigAi,
    /// ADP AI gateway
    #[serde(rename = "ADP_AI_GATEWAY")]
    AdpAiGateway,
    /// Apsara (private cloud) gateway
    #[serde(rename = "APSARA_GATEWAY")]
    ApsaraGateway,
    /// Apache APISIX
    #[serde(rename = "APISIX")]
    Apisix,
}

impl GatewayType {
    /// Returns every gateway kind, in wire declaration order
    pub fn all() -> [GatewayType; 6] {
        [
            GatewayType::ApigApi,
            GatewayType::Higress,
            GatewayType::ApigAi,
            GatewayType::AdpAiGateway,
            GatewayType::ApsaraGateway,
            GatewayType::Apisix,
        ]
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayType::ApigApi => "APIG_API",
            GatewayType::Higress => "HIGRESS",
            GatewayType::ApigAi => "APIG_AI",
            GatewayType::AdpAiGateway => "ADP_AI_GATEWAY",
            GatewayType::ApsaraGateway => "APSARA_GATEWAY",
            GatewayType::Apisix => "APISIX",
        }
    }

    /// Returns the JSON key of the config block this kind requires
    pub fn config_key(&self) -> &'static str {
        match self {
            GatewayType::ApigApi | GatewayType::ApigAi => "apigConfig",
            GatewayType::Higress => "higressConfig",
            GatewayType::AdpAiGateway => "adpAIGatewayConfig",
            GatewayType::ApsaraGateway => "apsaraGatewayConfig",
            GatewayType::Apisix => "apisixConfig",
        }
    }

    /// APIG family, including the ADP and Apsara variants
    pub fn is_apig(&self) -> bool {
        matches!(
            self,
            GatewayType::ApigApi
                | GatewayType::ApigAi
                | GatewayType::AdpAiGateway
                | GatewayType::ApsaraGateway
        )
    }

    pub fn is_ai_gateway(&self) -> bool {
        matches!(self, GatewayType::ApigAi | GatewayType::AdpAiGateway)
    }

    pub fn is_higress(&self) -> bool {
        matches!(self, GatewayType::Higress)
    }

    pub fn is_adp_ai_gateway(&self) -> bool {
        matches!(self, GatewayType::AdpAiGateway)
    }

    pub fn is_apsara_gateway(&self) -> bool {
        matches!(self, GatewayType::ApsaraGateway)
    }

    pub fn is_apisix(&self) -> bool {
        matches!(self, GatewayType::Apisix)
    }
}

impl std::fmt::Display for GatewayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GatewayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        GatewayType::all()
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownGatewayType(s.to_string()))
    }
}

/// Credential value that never prints itself
///
/// Serializes verbatim so records round-trip, but `Debug` and `Display`
/// always render a mask.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    const MASK: &'static str = "******";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the plaintext value
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Short SHA256 fingerprint of the value, safe to log or use as a key
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());
        let digest = hex::encode(hasher.finalize());
        digest[..16].to_string()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({})", Self::MASK)
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::MASK)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Wire representation of a timestamp: epoch milliseconds or text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampRepr {
    /// Integer epoch milliseconds
    Epoch(i64),
    /// Fractional epoch milliseconds
    Float(f64),
    /// RFC 3339, naive ISO, or an all-digit epoch string
    Text(String),
}

/// Normalized point in time, always UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimestampRepr", into = "String")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    const NAIVE_FORMATS: [&'static str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Builds a timestamp from epoch milliseconds
    pub fn from_epoch_millis(millis: i64) -> Result<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| Error::invalid_timestamp(format!("epoch out of range: {millis}")))
    }

    /// Parses any accepted text form
    ///
    /// Text without an offset is read as UTC. An all-digit string, with an
    /// optional leading `-`, is epoch milliseconds.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_timestamp("empty timestamp"));
        }

        let digits = text.strip_prefix('-').unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let millis = text
                .parse::<i64>()
                .map_err(|e| Error::invalid_timestamp(format!("{text}: {e}")))?;
            return Self::from_epoch_millis(millis);
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }

        for format in Self::NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
                return Ok(Self(naive.and_utc()));
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            if let Some(naive) = date.and_hms_opt(0, 0, 0) {
                return Ok(Self(naive.and_utc()));
            }
        }

        Err(Error::invalid_timestamp(text.to_string()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// RFC 3339 text in UTC with a `Z` suffix
    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl TryFrom<TimestampRepr> for Timestamp {
    type Error = Error;

    fn try_from(repr: TimestampRepr) -> Result<Self> {
        match repr {
            TimestampRepr::Epoch(millis) => Self::from_epoch_millis(millis),
            TimestampRepr::Float(millis) => {
                if !millis.is_finite() {
                    return Err(Error::invalid_timestamp(format!("epoch not finite: {millis}")));
                }
                Self::from_epoch_millis(millis.trunc() as i64)
            }
            TimestampRepr::Text(text) => Self::parse(&text),
        }
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_rfc3339()
    }
}

impl From<Timestamp> for TimestampRepr {
    fn from(value: Timestamp) -> Self {
        TimestampRepr::Text(value.to_rfc3339())
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

fn require(value: &str, prefix: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::missing_field(format!("{prefix}.{field}")));
    }
    Ok(())
}

/// Connection config for APIG API and APIG AI gateways
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApigConfig {
    /// Cloud region, e.g. `cn-hangzhou`
    pub region: String,
    /// Access key ID
    pub access_key: String,
    /// Access key secret
    pub secret_key: Secret,
}

impl ApigConfig {
    pub(crate) fn validate(&self, prefix: &str) -> Result<()> {
        require(&self.region, prefix, "region")?;
        require(&self.access_key, prefix, "accessKey")?;
        require(self.secret_key.expose(), prefix, "secretKey")
    }

    /// Stable key for the backend and credential this config points at
    pub fn connection_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.region,
            self.access_key,
            self.secret_key.fingerprint()
        )
    }
}

/// Connection config for Higress gateways
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HigressConfig {
    /// Console username
    pub username: String,
    /// Console address, `host:port`
    pub address: String,
    /// Console password
    pub password: Secret,
}

impl HigressConfig {
    pub(crate) fn validate(&self, prefix: &str) -> Result<()> {
        require(&self.username, prefix, "username")?;
        require(&self.address, prefix, "address")?;
        require(self.password.expose(), prefix, "password")
    }

    pub fn connection_key(&self) -> String {
        format!(
            "{}:{}:{}",
            self.address,
            self.username,
            self.password.fingerprint()
        )
    }
}

/// Connection config for Apsara (private cloud) gateways
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApsaraGatewayConfig {
    /// API endpoint
    pub endpoint: String,
    /// Access key ID
    pub access_key: String,
    /// Access key secret
    pub secret_key: Secret,
    /// Product code sent with every request
    pub product: String,
    /// API version sent with every request
    pub version: String,
    /// Role assumed for cross-account access
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_acs_role_id: Option<String>,
}

impl ApsaraGatewayConfig {
    pub(crate) fn validate(&self, prefix: &str) -> Result<()> {
        require(&self.endpoint, prefix, "endpoint")?;
        require(&self.access_key, prefix, "accessKey")?;
        require(self.secret_key.expose(), prefix, "secretKey")?;
        require(&self.product, prefix, "product")?;
        require(&self.version, prefix, "version")
    }

    pub fn connection_key(&self) -> String {
        let role = self.x_acs_role_id.as_deref().unwrap_or_default();
        format!(
            "{}:{}:{}:{}",
            self.endpoint,
            self.access_key,
            role,
            self.secret_key.fingerprint()
        )
    }
}

/// Admin API connection config for APISIX
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApisixConfig {
    /// Admin API endpoint, e.g. `http://localhost:9180`
    pub admin_api_endpoint: String,
    /// Admin API key, sent as `X-API-KEY`
    pub admin_api_key: Secret,
    /// Request timeout in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i64>,
}

impl ApisixConfig {
    /// Request timeout used when none is configured
    pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

    /// Prefix of every Admin API path
    pub const ADMIN_API_PREFIX: &'static str = "/apisix/admin";

    /// Header carrying the admin key
    pub const ADMIN_API_KEY_HEADER: &'static str = "X-API-KEY";

    pub fn new(admin_api_endpoint: impl Into<String>, admin_api_key: impl Into<Secret>) -> Self {
        Self {
            admin_api_endpoint: admin_api_endpoint.into(),
            admin_api_key: admin_api_key.into(),
            timeout: None,
        }
    }

    pub(crate) fn validate(&self, prefix: &str) -> Result<()> {
        require(&self.admin_api_endpoint, prefix, "adminApiEndpoint")?;
        require(self.admin_api_key.expose(), prefix, "adminApiKey")?;
        match self.timeout {
            Some(timeout) if timeout <= 0 => Err(Error::validation(
                format!("{prefix}.timeout"),
                format!("timeout must be positive, got {timeout}"),
            )),
            _ => Ok(()),
        }
    }

    /// Configured timeout, or the default when unset or not positive
    pub fn effective_timeout(&self) -> Duration {
        let millis = self
            .timeout
            .and_then(|t| u64::try_from(t).ok())
            .filter(|t| *t > 0)
            .unwrap_or(Self::DEFAULT_TIMEOUT_MS);
        Duration::from_millis(millis)
    }

    /// Joins the admin endpoint, the Admin API prefix and `path`
    ///
    /// ```
    /// use portal_gateway::types::ApisixConfig;
    ///
    /// let config = ApisixConfig::new("http://localhost:9180/", "key");
    /// assert_eq!(config.admin_url("routes"), "http://localhost:9180/apisix/admin/routes");
    /// ```
    pub fn admin_url(&self, path: &str) -> String {
        let base = self.admin_api_endpoint.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{}{path}", Self::ADMIN_API_PREFIX)
        } else {
            format!("{base}{}/{path}", Self::ADMIN_API_PREFIX)
        }
    }

    /// Like [`admin_url`](Self::admin_url), with query parameters appended in order
    pub fn admin_url_with_query(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = self.admin_url(path);
        for (i, (key, value)) in params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(value);
        }
        url
    }

    pub fn connection_key(&self) -> String {
        format!(
            "{}:{}",
            self.admin_api_endpoint.trim_end_matches('/'),
            self.admin_api_key.fingerprint()
        )
    }
}

/// Connection config for ADP AI gateways
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdpAiGatewayConfig {
    /// Base URL of the ADP control API
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
    /// Seed used to derive request signatures
    pub auth_seed: Secret,
}

impl AdpAiGatewayConfig {
    pub(crate) fn validate(&self, prefix: &str) -> Result<()> {
        require(&self.base_url, prefix, "baseUrl")?;
        if let Some(port) = self.port {
            if u16::try_from(port).map_or(true, |p| p == 0) {
                return Err(Error::validation(
                    format!("{prefix}.port"),
                    format!("port must be in 1..=65535, got {port}"),
                ));
            }
        }
        require(self.auth_seed.expose(), prefix, "authSeed")
    }

    /// Port as a TCP port number, when set and in range
    pub fn port(&self) -> Option<u16> {
        self.port
            .and_then(|p| u16::try_from(p).ok())
            .filter(|p| *p != 0)
    }

    pub fn connection_key(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.port {
            Some(port) => format!("{base}:{port}:{}", self.auth_seed.fingerprint()),
            None => format!("{base}:{}", self.auth_seed.fingerprint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_type_serde() {
        let gateway_type = GatewayType::AdpAiGateway;
        let json = serde_json::to_string(&gateway_type).unwrap();
        assert_eq!(json, "\"ADP_AI_GATEWAY\"");

        let deserialized: GatewayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, gateway_type);

        assert!(serde_json::from_str::<GatewayType>("\"UNKNOWN_TYPE\"").is_err());
    }

    #[test]
    fn test_gateway_type_from_str() {
        for gateway_type in GatewayType::all() {
            assert_eq!(gateway_type.as_str().parse::<GatewayType>().unwrap(), gateway_type);
        }

        let err = "apisix".parse::<GatewayType>().unwrap_err();
        assert!(matches!(err, Error::UnknownGatewayType(ref s) if s == "apisix"));
    }

    #[test]
    fn test_gateway_type_helpers() {
        let apisix = GatewayType::Apisix;
        assert!(apisix.is_apisix());
        assert!(!apisix.is_apig());
        assert!(!apisix.is_higress());
        assert!(!apisix.is_ai_gateway());
        assert!(!apisix.is_adp_ai_gateway());
        assert!(!apisix.is_apsara_gateway());

        assert!(GatewayType::ApsaraGateway.is_apig());
        assert!(GatewayType::AdpAiGateway.is_ai_gateway());
        assert!(GatewayType::ApigAi.is_ai_gateway());
        assert!(!GatewayType::ApigApi.is_ai_gateway());
        assert_eq!(GatewayType::ApigAi.config_key(), "apigConfig");
    }

    #[test]
    fn test_secret_is_masked() {
        let secret = Secret::new("s3cr3t-value");
        assert_eq!(secret.to_string(), "******");
        assert!(!format!("{secret:?}").contains("s3cr3t"));
        assert_eq!(secret.expose(), "s3cr3t-value");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"s3cr3t-value\"");
        assert_eq!(secret.fingerprint().len(), 16);
        assert_ne!(secret.fingerprint(), Secret::new("other").fingerprint());
    }

    #[test]
    fn test_config_debug_hides_secrets() {
        let config = HigressConfig {
            username: "admin".to_string(),
            address: "10.0.0.1:8080".to_string(),
            password: "secret".into(),
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("\"secret\""));
    }

    #[test]
    fn test_timestamp_representations_agree() {
        let text = Timestamp::parse("2024-01-01T00:00:00Z").unwrap();
        let epoch = Timestamp::from_epoch_millis(1_704_067_200_000).unwrap();
        let naive = Timestamp::parse("2024-01-01T00:00:00").unwrap();
        let spaced = Timestamp::parse("2024-01-01 00:00:00").unwrap();
        let digits = Timestamp::parse("1704067200000").unwrap();
        let offset = Timestamp::parse("2024-01-01T08:00:00+08:00").unwrap();
        let date = Timestamp::parse("2024-01-01").unwrap();

        for other in [epoch, naive, spaced, digits, offset, date] {
            assert_eq!(text, other);
        }
    }

    #[test]
    fn test_timestamp_serde() {
        let from_number: Timestamp = serde_json::from_str("1704067200000").unwrap();
        let from_text: Timestamp = serde_json::from_str("\"2024-01-01T00:00:00Z\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(
            serde_json::to_string(&from_number).unwrap(),
            "\"2024-01-01T00:00:00Z\""
        );

        let fractional = Timestamp::parse("2024-01-01T00:00:00.250Z").unwrap();
        let json = serde_json::to_string(&fractional).unwrap();
        assert_eq!(serde_json::from_str::<Timestamp>(&json).unwrap(), fractional);
    }

    #[test]
    fn test_negative_epoch_text_matches_number() {
        let from_text = Timestamp::parse("-1000").unwrap();
        let from_number: Timestamp = serde_json::from_str("-1000").unwrap();
        assert_eq!(from_text, from_number);
        assert_eq!(from_text.timestamp_millis(), -1000);
        assert!(Timestamp::parse("-").is_err());
    }

    #[test]
    fn test_timestamp_invalid() {
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("yesterday").is_err());
        assert!(serde_json::from_str::<Timestamp>("\"not a date\"").is_err());
        assert!(matches!(
            Timestamp::parse("01/02/2024"),
            Err(Error::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn test_apisix_defaults() {
        let config = ApisixConfig::new("http://localhost:9180", "test-key");
        assert_eq!(config.effective_timeout(), Duration::from_millis(30_000));

        let config = ApisixConfig {
            timeout: Some(60_000),
            ..config
        };
        assert_eq!(config.effective_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_apisix_admin_url() {
        let config = ApisixConfig::new("http://localhost:9180/", "test-key");
        assert_eq!(
            config.admin_url("/routes/r1"),
            "http://localhost:9180/apisix/admin/routes/r1"
        );
        assert_eq!(
            config.admin_url_with_query("consumers", &[("page", "1"), ("page_size", "10")]),
            "http://localhost:9180/apisix/admin/consumers?page=1&page_size=10"
        );
        assert_eq!(
            config.admin_url_with_query("routes", &[]),
            "http://localhost:9180/apisix/admin/routes"
        );
    }

    #[test]
    fn test_connection_key_hides_credential() {
        let config = ApisixConfig::new("http://localhost:9180", "test-api-key");
        let key = config.connection_key();
        assert!(key.starts_with("http://localhost:9180:"));
        assert!(!key.contains("test-api-key"));

        let same = ApisixConfig::new("http://localhost:9180/", "test-api-key");
        assert_eq!(key, same.connection_key());
    }

    #[test]
    fn test_config_validation() {
        let config = ApigConfig {
            region: "cn-hangzhou".to_string(),
            access_key: "ak".to_string(),
            secret_key: Secret::default(),
        };
        let err = config.validate("apigConfig").unwrap_err();
        assert!(matches!(err, Error::MissingField(ref f) if f == "apigConfig.secretKey"));

        let config = ApisixConfig {
            timeout: Some(0),
            ..ApisixConfig::new("http://localhost:9180", "key")
        };
        assert!(matches!(
            config.validate("apisixConfig"),
            Err(Error::Validation { .. })
        ));

        let config = ApisixConfig {
            timeout: Some(-1),
            ..ApisixConfig::new("http://localhost:9180", "key")
        };
        assert!(matches!(
            config.validate("apisixConfig"),
            Err(Error::Validation { ref field, .. }) if field == "apisixConfig.timeout"
        ));
        assert_eq!(config.effective_timeout(), Duration::from_millis(30_000));
    }

    #[test]
    fn test_adp_config_validation() {
        let valid = AdpAiGatewayConfig {
            base_url: "https://adp.example.com".to_string(),
            port: Some(8443),
            auth_seed: "seed".into(),
        };
        assert!(valid.validate("adpAIGatewayConfig").is_ok());
        assert_eq!(valid.port(), Some(8443));

        for port in [0, -1, 65_536] {
            let config = AdpAiGatewayConfig {
                port: Some(port),
                ..valid.clone()
            };
            assert!(matches!(
                config.validate("adpAIGatewayConfig"),
                Err(Error::Validation { ref field, .. }) if field == "adpAIGatewayConfig.port"
            ));
            assert_eq!(config.port(), None);
        }

        let config = AdpAiGatewayConfig {
            auth_seed: Secret::default(),
            ..valid
        };
        assert!(matches!(
            config.validate("adpAIGatewayConfig"),
            Err(Error::MissingField(ref f)) if f == "adpAIGatewayConfig.authSeed"
        ));
    }

    #[test]
    fn test_apsara_config_validation() {
        let valid = ApsaraGatewayConfig {
            endpoint: "https://apsara.example.com".to_string(),
            access_key: "ak".to_string(),
            secret_key: "sk".into(),
            product: "csb".to_string(),
            version: "2023-01-01".to_string(),
            x_acs_role_id: None,
        };
        assert!(valid.validate("apsaraGatewayConfig").is_ok());

        let config = ApsaraGatewayConfig {
            product: String::new(),
            ..valid.clone()
        };
        assert!(matches!(
            config.validate("apsaraGatewayConfig"),
            Err(Error::MissingField(ref f)) if f == "apsaraGatewayConfig.product"
        ));

        let config = ApsaraGatewayConfig {
            version: "  ".to_string(),
            ..valid
        };
        assert!(matches!(
            config.validate("apsaraGatewayConfig"),
            Err(Error::MissingField(ref f)) if f == "apsaraGatewayConfig.version"
        ));
    }
}

//! Service registry (Nacos) instance records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Error, Result};
use crate::ids::gen_nacos_id;
use crate::records::NacosInstanceRecord;
use crate::types::{Secret, Timestamp};
use crate::view::NacosInstanceView;

/// A registered service registry server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NacosInstanceRecord", into = "NacosInstanceRecord")]
pub struct NacosInstance {
    pub nacos_id: String,
    pub nacos_name: String,
    /// Registry address, e.g. `http://127.0.0.1:8848`
    pub server_url: String,
    pub username: String,
    pub password: Option<Secret>,
    pub access_key: Option<String>,
    pub secret_key: Option<Secret>,
    /// Free-text annotation, may be empty
    pub description: String,
    /// Administering principal
    pub admin_id: String,
    pub create_at: Option<Timestamp>,
}

/// Creates a registry instance with a generated id, created now
pub fn new_nacos_instance(
    nacos_name: impl Into<String>,
    server_url: impl Into<String>,
    username: impl Into<String>,
    admin_id: impl Into<String>,
) -> NacosInstance {
    NacosInstance {
        nacos_id: gen_nacos_id(),
        nacos_name: nacos_name.into(),
        server_url: server_url.into(),
        username: username.into(),
        password: None,
        access_key: None,
        secret_key: None,
        description: String::new(),
        admin_id: admin_id.into(),
        create_at: Some(Timestamp::now()),
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::missing_field(field)),
    }
}

impl NacosInstance {
    /// Sets password authentication
    pub fn with_password(mut self, password: impl Into<Secret>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets access-key authentication
    pub fn with_access_key(
        mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<Secret>,
    ) -> Self {
        self.access_key = Some(access_key.into());
        self.secret_key = Some(secret_key.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True when both halves of the access-key pair are set
    pub fn has_key_auth(&self) -> bool {
        let access = self.access_key.as_deref().is_some_and(|k| !k.is_empty());
        let secret = self.secret_key.as_ref().is_some_and(|k| !k.is_empty());
        access && secret
    }

    /// Validates the instance for correctness
    pub fn validate(&self) -> Result<()> {
        let fields = [
            (&self.nacos_id, "nacosId"),
            (&self.nacos_name, "nacosName"),
            (&self.server_url, "serverUrl"),
            (&self.username, "username"),
            (&self.admin_id, "adminId"),
        ];
        for (value, field) in fields {
            if value.trim().is_empty() {
                return Err(Error::missing_field(field));
            }
        }
        Ok(())
    }

    /// Credential-free view of the instance
    pub fn view(&self) -> NacosInstanceView {
        NacosInstanceView::from(self)
    }

    /// Serializes the instance to JSON
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::from)
    }

    /// Serializes the instance to pretty-printed JSON
    pub fn to_pretty_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(Error::from)
    }

    /// Deserializes and validates an instance from JSON
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let record: NacosInstanceRecord =
            serde_json::from_slice(data).map_err(|e| Error::invalid_record(e.to_string()))?;
        Self::try_from(record).map_err(|e| {
            debug!(error = %e, "rejected nacos instance record");
            e
        })
    }
}

impl TryFrom<NacosInstanceRecord> for NacosInstance {
    type Error = Error;

    fn try_from(record: NacosInstanceRecord) -> Result<Self> {
        let instance = NacosInstance {
            nacos_id: required(record.nacos_id, "nacosId")?,
            nacos_name: required(record.nacos_name, "nacosName")?,
            server_url: required(record.server_url, "serverUrl")?,
            username: required(record.username, "username")?,
            password: record.password,
            access_key: record.access_key,
            secret_key: record.secret_key,
            description: record
                .description
                .ok_or_else(|| Error::missing_field("description"))?,
            admin_id: required(record.admin_id, "adminId")?,
            create_at: record.create_at.map(Timestamp::try_from).transpose()?,
        };
        instance.validate()?;
        Ok(instance)
    }
}

impl From<NacosInstance> for NacosInstanceRecord {
    fn from(instance: NacosInstance) -> Self {
        NacosInstanceRecord {
            nacos_id: Some(instance.nacos_id),
            nacos_name: Some(instance.nacos_name),
            server_url: Some(instance.server_url),
            username: Some(instance.username),
            password: instance.password,
            access_key: instance.access_key,
            secret_key: instance.secret_key,
            description: Some(instance.description),
            admin_id: Some(instance.admin_id),
            create_at: instance.create_at.map(Into::into),
        }
    }
}

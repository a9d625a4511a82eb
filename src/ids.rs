//! Record identifier generation.

use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::GatewayType;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

fn unique_suffix() -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);

    let mut hasher = Sha256::new();
    hasher.update(nanos.to_be_bytes());
    hasher.update(seq.to_be_bytes());
    hasher.update(std::process::id().to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..16].to_string()
}

/// Generates a gateway id: `apisix-<hex>` for APISIX, `gw-<hex>` otherwise
pub fn gen_gateway_id(gateway_type: GatewayType) -> String {
    let prefix = if gateway_type.is_apisix() { "apisix" } else { "gw" };
    format!("{prefix}-{}", unique_suffix())
}

/// Generates a registry instance id: `nacos-<hex>`
pub fn gen_nacos_id() -> String {
    format!("nacos-{}", unique_suffix())
}

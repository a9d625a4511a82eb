//! Basic example demonstrating portal-gateway usage
//!
//! This example shows:
//! - Parsing gateway and registry records from JSON
//! - Building a gateway in code
//! - Registering records with an in-memory catalog
//! - Watching for changes

use portal_gateway::catalog::memory::MemoryCatalog;
use portal_gateway::prelude::*;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    println!("portal-gateway basic example\n");

    // 1. Parse a gateway record coming from the admin UI
    let higress = Gateway::from_json(
        br#"{
            "gatewayId": "gw-higress-1",
            "gatewayName": "higress-prod",
            "gatewayType": "HIGRESS",
            "createAt": "2024-01-01T00:00:00Z",
            "higressConfig": {"username": "admin", "address": "10.0.0.1:8080", "password": "secret"}
        }"#,
    )?;
    println!("1. parsed {} ({})", higress.gateway_name, higress.gateway_type());

    // 2. Records with the wrong config block are rejected
    let rejected = Gateway::from_json(
        br#"{
            "gatewayId": "gw-bad",
            "gatewayName": "bad",
            "gatewayType": "HIGRESS",
            "createAt": "2024-01-01T00:00:00Z",
            "apigConfig": {"region": "cn-hangzhou", "accessKey": "ak", "secretKey": "sk"}
        }"#,
    );
    if let Err(err) = rejected {
        println!("2. rejected: {err}");
    }

    // 3. Build an APISIX gateway in code
    let apisix = new_gateway(
        "apisix-edge",
        GatewayConfig::Apisix(ApisixConfig::new("http://localhost:9180", "edd1c9f034335f136f87ad84b625c8f1")),
    );
    if let GatewayConfig::Apisix(config) = &apisix.config {
        println!(
            "3. built {} -> {} (timeout {:?})",
            apisix.gateway_id,
            config.admin_url("/routes"),
            config.effective_timeout()
        );
    }

    // 4. Registry instance with an epoch-millisecond createAt
    let nacos = NacosInstance::from_json(
        br#"{
            "nacosId": "nacos-1",
            "nacosName": "registry",
            "serverUrl": "http://127.0.0.1:8848",
            "username": "nacos",
            "password": "nacos",
            "description": "",
            "adminId": "admin-1",
            "createAt": 1704067200000
        }"#,
    )?;
    println!("4. parsed registry {:?}", nacos.view());

    // 5. Register everything and watch the catalog
    let catalog = MemoryCatalog::new();
    catalog
        .watch(Box::new(|event: &CatalogEvent| {
            println!("   event: {} {}", event.event_type, event.record.id());
        }))
        .await?;

    catalog.register_gateway(&higress).await?;
    catalog.register_gateway(&apisix).await?;
    catalog.register_nacos(&nacos).await?;

    tokio::time::sleep(Duration::from_millis(50)).await;

    let gateways = catalog.list_gateways(None).await?;
    println!("5. catalog holds {} gateways", gateways.len());
    println!(
        "{}",
        serde_json::to_string_pretty(&gateways.iter().map(Gateway::view).collect::<Vec<_>>())?
    );

    catalog.close().await?;
    Ok(())
}

//! Property tests for the gateway kind enumeration and timestamp normalization

use portal_gateway::prelude::*;
use proptest::prelude::*;

fn gateway_json(gateway_type: &str) -> serde_json::Value {
    serde_json::json!({
        "gatewayId": "gw-1",
        "gatewayName": "gateway",
        "gatewayType": gateway_type,
        "createAt": "2024-01-01T00:00:00Z",
        "apisixConfig": {"adminApiEndpoint": "http://localhost:9180", "adminApiKey": "k"}
    })
}

proptest! {
    #[test]
    fn unknown_kinds_are_rejected(kind in "[A-Z_]{1,20}") {
        prop_assume!(GatewayType::all().iter().all(|t| t.as_str() != kind));

        let data = serde_json::to_vec(&gateway_json(&kind)).unwrap();
        let err = Gateway::from_json(&data).unwrap_err();
        prop_assert!(matches!(err, Error::UnknownGatewayType(ref s) if *s == kind));
    }

    #[test]
    fn epoch_and_text_agree(millis in 0i64..4_102_444_800_000) {
        let from_epoch = Timestamp::from_epoch_millis(millis).unwrap();
        let from_text = Timestamp::parse(&from_epoch.to_rfc3339()).unwrap();
        let from_json: Timestamp = serde_json::from_value(serde_json::json!(millis)).unwrap();

        prop_assert_eq!(from_epoch, from_text);
        prop_assert_eq!(from_epoch, from_json);
        prop_assert_eq!(from_text.timestamp_millis(), millis);
    }

    #[test]
    fn secrets_never_leak_through_debug(secret in "[a-zA-Z0-9]{8,32}") {
        let config = ApisixConfig::new("http://localhost:9180", secret.as_str());
        let debug = format!("{config:?}");
        prop_assert!(!debug.contains(&secret));
        prop_assert!(!config.connection_key().contains(&secret));
    }
}

#[test]
fn only_the_selected_kind_is_accepted() {
    for gateway_type in GatewayType::all() {
        let data = serde_json::to_vec(&gateway_json(gateway_type.as_str())).unwrap();
        let result = Gateway::from_json(&data);

        if gateway_type.is_apisix() {
            assert!(result.is_ok());
        } else {
            assert!(matches!(result, Err(Error::ConfigTypeMismatch { .. })));
        }
    }
}

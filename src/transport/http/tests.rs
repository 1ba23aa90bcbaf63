//! Unit tests for the JSON-over-HTTP transport

use super::*;
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn config_for(server: &MockServer) -> TransportConfig {
    TransportConfig {
        endpoint: server.uri(),
        ..Default::default()
    }
}

fn args(pairs: &[(&str, Value)]) -> CallArgs {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

#[cfg(test)]
mod http_transport_tests {
    use super::*;

    #[tokio::test]
    async fn test_call_posts_args_and_decodes_envelope() {
        let mock_server = MockServer::start().await;

        let envelope = json!({
            "GetAvailLeaguesResult": {
                "League": [{ "ShortName": "bl1" }]
            }
        });

        Mock::given(method("POST"))
            .and(path("/GetAvailLeagues"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(&envelope))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(config_for(&mock_server)).unwrap();
        let envelope = transport.call("GetAvailLeagues", &CallArgs::new()).await.unwrap();

        assert!(envelope.contains_key("GetAvailLeaguesResult"));
    }

    #[tokio::test]
    async fn test_call_sends_wire_argument_names() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/GetMatchdataByLeagueSaison"))
            .and(body_json(json!({
                "leagueShortcut": "bl1",
                "leagueSaison": 2015
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "GetMatchdataByLeagueSaisonResult": null })),
            )
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(config_for(&mock_server)).unwrap();
        let call_args = args(&[
            ("leagueShortcut", json!("bl1")),
            ("leagueSaison", json!(2015)),
        ]);
        let envelope = transport
            .call("GetMatchdataByLeagueSaison", &call_args)
            .await
            .unwrap();

        assert!(envelope.contains_key("GetMatchdataByLeagueSaisonResult"));
    }

    #[tokio::test]
    async fn test_call_sends_configured_user_agent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/GetAvailSports"))
            .and(header("user-agent", "sportsdata-tests/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let config = TransportConfig {
            user_agent: "sportsdata-tests/1.0".to_string(),
            ..config_for(&mock_server)
        };
        let transport = HttpTransport::new(config).unwrap();

        assert!(transport.call("GetAvailSports", &CallArgs::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_trailing_slash_in_endpoint_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/GetAvailSports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let config = TransportConfig {
            endpoint: format!("{}/", mock_server.uri()),
            ..Default::default()
        };
        let transport = HttpTransport::new(config).unwrap();
        assert_eq!(transport.endpoint(), mock_server.uri());

        assert!(transport.call("GetAvailSports", &CallArgs::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(config_for(&mock_server)).unwrap();

        match transport.call("GetAvailLeagues", &CallArgs::new()).await {
            Err(TransportError::Http(err)) => {
                assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
            }
            other => panic!("expected Http error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(config_for(&mock_server)).unwrap();

        match transport.call("GetAvailLeagues", &CallArgs::new()).await {
            Err(TransportError::Decode(_)) => {}
            other => panic!("expected Decode error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_object_body_is_not_an_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2, 3])))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(config_for(&mock_server)).unwrap();

        match transport.call("GetAvailLeagues", &CallArgs::new()).await {
            Err(TransportError::NotAnEnvelope { body }) => assert_eq!(body, json!([1, 2, 3])),
            other => panic!("expected NotAnEnvelope, got {:?}", other),
        }
    }
}

use macvendor_client::api::OutputType;
use macvendor_client::{MacVendorClient, MacVendorError};
use macvendor_core::{LookupRequest, Resolver};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MAC: &str = "00:1A:2B:3C:4D:5E";

fn request(key: &str) -> LookupRequest {
    LookupRequest::new(MAC.parse().unwrap(), key, false).unwrap()
}

fn client(server: &MockServer) -> MacVendorClient {
    MacVendorClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn respond_once(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v1"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_resolves_flat_vendor_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1"))
        .and(query_param("search", MAC))
        .and(query_param("output", "json"))
        .and(header("X-Authentication-Token", "VALIDKEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vendorName": "Acme Corp"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).resolve(&request("VALIDKEY")).await.unwrap();
    assert_eq!(result.vendor_name(), Some("Acme Corp"));
}

#[tokio::test]
async fn test_resolves_full_details() {
    let server = MockServer::start().await;
    respond_once(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({
            "vendorDetails": {
                "oui": "001A2B",
                "isPrivate": false,
                "companyName": "Ayecom Technology Co., Ltd.",
                "companyAddress": "Hsinchu Taiwan",
                "countryCode": "TW"
            },
            "blockDetails": {
                "blockFound": true,
                "borderLeft": "001A2B000000",
                "borderRight": "001A2BFFFFFF",
                "assignmentBlockSize": "MA-L"
            },
            "macAddressDetails": {
                "searchTerm": MAC,
                "isValid": true,
                "transmissionType": "unicast",
                "administrationType": "UAA"
            }
        })),
    )
    .await;

    let result = client(&server).lookup().resolve(&request("VALIDKEY")).await.unwrap();
    assert_eq!(result.vendor_name(), Some("Ayecom Technology Co., Ltd."));
    assert_eq!(result.get("blockDetails.assignmentBlockSize"), Some("MA-L"));
    assert_eq!(result.get("macAddressDetails.transmissionType"), Some("unicast"));
    assert_eq!(result.len(), 13);
}

#[tokio::test]
async fn test_vendor_output_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1"))
        .and(query_param("output", "vendor"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Acme Corp\n"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server)
        .lookup()
        .mac(&request("VALIDKEY"))
        .output(OutputType::Vendor)
        .send()
        .await
        .unwrap();
    assert_eq!(result.vendor_name(), Some("Acme Corp"));
}

#[tokio::test]
async fn test_unauthorized_relays_service_reason_without_retry() {
    let server = MockServer::start().await;
    respond_once(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({"error": "Access restricted. Enter the correct API key."})),
    )
    .await;

    let err = client(&server).resolve(&request("BADKEY")).await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(401));
    assert!(err.to_string().contains("Access restricted. Enter the correct API key."));
}

#[tokio::test]
async fn test_forbidden_plain_text_reason() {
    let server = MockServer::start().await;
    respond_once(&server, ResponseTemplate::new(403).set_body_string("Key disabled")).await;

    let err = client(&server).resolve(&request("BADKEY")).await.unwrap_err();
    assert!(matches!(
        err,
        MacVendorError::Unauthorized { code: 403, ref reason } if reason == "Key disabled"
    ));
}

#[tokio::test]
async fn test_rate_limited_uses_default_reason() {
    let server = MockServer::start().await;
    respond_once(&server, ResponseTemplate::new(429)).await;

    let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(
        err,
        MacVendorError::RateLimited { ref reason } if reason == "Too many requests. Try your call again later."
    ));
}

#[tokio::test]
async fn test_status_mapping() {
    for (status, expected) in [
        (400, "Invalid parameters."),
        (422, "Invalid MAC address was received."),
        (500, "Internal server error. Try again or contact macaddress.io."),
        (503, "Unknown error."),
    ] {
        let server = MockServer::start().await;
        respond_once(&server, ResponseTemplate::new(status)).await;

        let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
        assert_eq!(err.status_code(), Some(status));
        assert!(
            matches!(err, MacVendorError::Api { ref reason, .. } if reason == expected),
            "status {status}: {err}"
        );
    }

    let server = MockServer::start().await;
    respond_once(&server, ResponseTemplate::new(402)).await;
    let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(err, MacVendorError::InsufficientCredits { .. }));
}

#[tokio::test]
async fn test_unparseable_body() {
    let server = MockServer::start().await;
    respond_once(&server, ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(err, MacVendorError::Json(_)));
}

#[tokio::test]
async fn test_non_object_body() {
    let server = MockServer::start().await;
    respond_once(&server, ResponseTemplate::new(200).set_body_json(json!(["Acme Corp"]))).await;

    let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(err, MacVendorError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_timeout() {
    let server = MockServer::start().await;
    respond_once(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(json!({"vendorName": "Acme Corp"}))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let client = MacVendorClient::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = client.resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(err, MacVendorError::Timeout(d) if d == Duration::from_millis(200)), "{err}");
    assert!(err.to_string().contains("200ms"), "{err}");
}

#[tokio::test]
async fn test_redirect_not_followed() {
    let server = MockServer::start().await;
    respond_once(
        &server,
        ResponseTemplate::new(302).insert_header("Location", format!("{}/moved", server.uri()).as_str()),
    )
    .await;
    Mock::given(path("/moved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"vendorName": "Acme Corp"})))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server).resolve(&request("VALIDKEY")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(302), "{err}");
}

#[tokio::test]
async fn test_connection_refused() {
    let client = MacVendorClient::builder()
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.resolve(&request("VALIDKEY")).await.unwrap_err();
    assert!(matches!(err, MacVendorError::Connection(_)), "{err}");
}

#[test]
fn test_blocking_resolve() {
    tokio_test::block_on(async {
        let server = MockServer::start().await;
        respond_once(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({"vendorName": "Acme Corp"})),
        )
        .await;

        let resolver: Box<dyn Resolver> = Box::new(client(&server));
        let result = resolver.resolve(&request("VALIDKEY")).await.unwrap();
        assert_eq!(result.vendor_name(), Some("Acme Corp"));
    });
}

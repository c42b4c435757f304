//! Integration tests for `ImageService` against a mock Admin API.
//!
//! Every request goes through the real `RestClient`/`HttpClient` stack; the
//! `api_host` setting points it at a local wiremock server.

use chrono::{TimeZone, Utc};
use serde_json::json;
use shopify_image_api::{
    metafield_type, CountOptions, HostUrl, Image, ImageService, Metafield, ResourceError,
    RestClient, Session, ShopDomain, ShopifyConfig,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

const IMAGE_FIXTURE: &str = include_str!("fixtures/image.json");
const IMAGES_FIXTURE: &str = include_str!("fixtures/images.json");
const METAFIELD_FIXTURE: &str = include_str!("fixtures/metafield.json");

const PREFIX: &str = "/admin/api/2025-10";

fn create_test_session() -> Session {
    Session::new(ShopDomain::new("fooshop").unwrap(), "test-access-token")
}

fn create_test_client(server: &MockServer) -> RestClient {
    let config = ShopifyConfig::builder()
        .api_host(HostUrl::new(server.uri()).unwrap())
        .build();
    RestClient::new(&create_test_session(), Some(&config)).unwrap()
}

fn fixture(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "application/json")
}

/// Matches requests that do not carry the given query parameter.
struct QueryParamAbsent(&'static str);

impl Match for QueryParamAbsent {
    fn matches(&self, request: &Request) -> bool {
        !request.url.query_pairs().any(|(key, _)| key == self.0)
    }
}

fn since_2016() -> CountOptions {
    CountOptions {
        created_at_min: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
        ..Default::default()
    }
}

fn assert_fixture_image(image: &Image) {
    let timestamp = Utc.with_ymd_and_hms(2017, 7, 24, 19, 9, 43).unwrap();

    assert_eq!(image.id, Some(1));
    assert_eq!(image.product_id, Some(1));
    assert_eq!(image.position, Some(1));
    assert_eq!(image.width, Some(123));
    assert_eq!(image.height, Some(456));
    assert_eq!(
        image.src.as_deref(),
        Some("https://cdn.shopify.com/s/files/1/0006/9093/3842/products/ipod-nano.png?v=1500937783")
    );
    assert_eq!(image.variant_ids, vec![808_950_810, 808_950_811]);
    assert_eq!(image.created_at, Some(timestamp));
    assert_eq!(image.updated_at, Some(timestamp));
}

// ============================================================================
// Image Operations
// ============================================================================

#[tokio::test]
async fn test_list_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(fixture(IMAGES_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let images = ImageService::new(&client).list(1, None).await.unwrap();

    assert_eq!(images.len(), 2);
    assert_fixture_image(&images[0]);
    assert_eq!(images[1].id, Some(2));
    assert!(images[1].variant_ids.is_empty());
}

#[tokio::test]
async fn test_list_images_reads_pagination_and_call_limit() {
    let server = MockServer::start().await;
    let link = format!(
        r#"<https://fooshop.myshopify.com{PREFIX}/products/1/images.json?limit=2&page_info=eyJsYXN0X2lkIjoyfQ>; rel="next""#
    );
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(
            fixture(IMAGES_FIXTURE)
                .insert_header("link", link.as_str())
                .insert_header("x-shopify-shop-api-call-limit", "3/40")
                .insert_header("x-request-id", "req-images"),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let images = ImageService::new(&client).list(1, None).await.unwrap();

    assert!(images.has_next_page());
    assert!(!images.has_prev_page());
    assert_eq!(images.next_page_info(), Some("eyJsYXN0X2lkIjoyfQ"));
    assert_eq!(images.rate_limit().unwrap().request_count, 3);
    assert_eq!(images.request_id(), Some("req-images"));
}

#[tokio::test]
async fn test_count_images_routes_on_created_at_min() {
    let server = MockServer::start().await;
    let count_path = format!("{PREFIX}/products/1/images/count.json");

    Mock::given(method("GET"))
        .and(path(count_path.as_str()))
        .and(QueryParamAbsent("created_at_min"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(count_path.as_str()))
        .and(query_param("created_at_min", "2016-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let service = ImageService::new(&client);

    assert_eq!(service.count(1, None).await.unwrap(), 2);
    assert_eq!(service.count(1, Some(CountOptions::default())).await.unwrap(), 2);
    assert_eq!(service.count(1, Some(since_2016())).await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_image() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(fixture(IMAGE_FIXTURE))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let image = ImageService::new(&client).get(1, 1, None).await.unwrap();

    assert_fixture_image(&image);
}

#[tokio::test]
async fn test_create_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .and(body_partial_json(json!({
            "image": {"variant_ids": [808950810, 808950811]}
        })))
        .respond_with(fixture(IMAGE_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let image = Image {
        src: Some(
            "https://cdn.shopify.com/s/files/1/0006/9093/3842/products/ipod-nano.png?v=1500937783"
                .to_string(),
        ),
        variant_ids: vec![808_950_810, 808_950_811],
        ..Default::default()
    };

    let client = create_test_client(&server);
    let created = ImageService::new(&client).create(1, &image).await.unwrap();

    assert_fixture_image(&created);
}

#[tokio::test]
async fn test_create_image_from_attachment() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .and(body_partial_json(json!({
            "image": {"attachment": "R0lGODlh", "filename": "pixel.gif"}
        })))
        .respond_with(fixture(IMAGE_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let image = Image {
        filename: Some("pixel.gif".to_string()),
        ..Image::with_attachment(b"GIF89a")
    };

    let client = create_test_client(&server);
    let created = ImageService::new(&client).create(1, &image).await.unwrap();

    assert_eq!(created.id, Some(1));
}

#[tokio::test]
async fn test_update_image_sends_id_in_path_only() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .and(body_partial_json(json!({"image": {"position": 1}})))
        .respond_with(fixture(IMAGE_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let image = Image {
        id: Some(1),
        position: Some(1),
        ..Default::default()
    };

    let client = create_test_client(&server);
    let updated = ImageService::new(&client).update(1, &image).await.unwrap();
    assert_fixture_image(&updated);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["image"].get("id").is_none());
}

#[tokio::test]
async fn test_update_image_without_id_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(fixture(IMAGE_FIXTURE))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).update(1, &Image::default()).await;

    assert!(matches!(
        result,
        Err(ResourceError::PathResolutionFailed {
            resource: "Image",
            operation: "update"
        })
    ));
}

#[tokio::test]
async fn test_delete_image() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    ImageService::new(&client).delete(1, 1).await.unwrap();
}

#[tokio::test]
async fn test_delete_image_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    assert!(ImageService::new(&client).delete(1, 1).await.is_ok());
}

#[tokio::test]
async fn test_delete_image_with_non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>deleted</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).delete(1, 1).await;

    assert!(matches!(result, Err(ResourceError::Decode { resource: "Image", .. })));
}

// ============================================================================
// Image Metafield Operations
// ============================================================================

#[tokio::test]
async fn test_list_metafields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/product_images/1/metafields.json")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"metafields": [{"id": 1}, {"id": 2}]})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let metafields = ImageService::new(&client)
        .list_metafields(1, None)
        .await
        .unwrap();

    let expected = vec![
        Metafield {
            id: Some(1),
            ..Default::default()
        },
        Metafield {
            id: Some(2),
            ..Default::default()
        },
    ];
    assert_eq!(metafields.into_inner(), expected);
}

#[tokio::test]
async fn test_count_metafields_routes_on_created_at_min() {
    let server = MockServer::start().await;
    let count_path = format!("{PREFIX}/product_images/1/metafields/count.json");

    Mock::given(method("GET"))
        .and(path(count_path.as_str()))
        .and(QueryParamAbsent("created_at_min"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(count_path.as_str()))
        .and(query_param("created_at_min", "2016-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let service = ImageService::new(&client);

    assert_eq!(service.count_metafields(1, None).await.unwrap(), 3);
    assert_eq!(
        service.count_metafields(1, Some(since_2016())).await.unwrap(),
        2
    );
}

#[tokio::test]
async fn test_get_metafield() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/product_images/1/metafields/2.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metafield": {"id": 2}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let metafield = ImageService::new(&client)
        .get_metafield(1, 2, None)
        .await
        .unwrap();

    assert_eq!(
        metafield.into_inner(),
        Metafield {
            id: Some(2),
            ..Default::default()
        }
    );
}

fn app_metafield() -> Metafield {
    Metafield {
        namespace: Some("affiliates".to_string()),
        key: Some("app_key".to_string()),
        value: Some(json!("app_value")),
        metafield_type: Some(metafield_type::SINGLE_LINE_TEXT_FIELD.to_string()),
        ..Default::default()
    }
}

fn assert_app_metafield(metafield: &Metafield) {
    assert_eq!(metafield.key.as_deref(), Some("app_key"));
    assert_eq!(metafield.value, Some(json!("app_value")));
    assert_eq!(
        metafield.metafield_type.as_deref(),
        Some(metafield_type::SINGLE_LINE_TEXT_FIELD)
    );
    assert_eq!(metafield.namespace.as_deref(), Some("affiliates"));
}

#[tokio::test]
async fn test_create_metafield() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/product_images/1/metafields.json")))
        .and(body_partial_json(json!({
            "metafield": {
                "namespace": "affiliates",
                "key": "app_key",
                "value": "app_value",
                "type": "single_line_text_field"
            }
        })))
        .respond_with(fixture(METAFIELD_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let created = ImageService::new(&client)
        .create_metafield(1, &app_metafield())
        .await
        .unwrap();

    assert_app_metafield(&created);
    assert_eq!(created.id, Some(721_389_482));
    assert_eq!(created.owner_resource.as_deref(), Some("product_image"));
}

#[tokio::test]
async fn test_update_metafield() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{PREFIX}/product_images/1/metafields/721389482.json")))
        .and(body_partial_json(json!({
            "metafield": {"key": "app_key", "value": "app_value"}
        })))
        .respond_with(fixture(METAFIELD_FIXTURE))
        .expect(1)
        .mount(&server)
        .await;

    let metafield = Metafield {
        id: Some(721_389_482),
        ..app_metafield()
    };

    let client = create_test_client(&server);
    let updated = ImageService::new(&client)
        .update_metafield(1, &metafield)
        .await
        .unwrap();

    assert_app_metafield(&updated);
}

#[tokio::test]
async fn test_delete_metafield() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/product_images/1/metafields/2.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    ImageService::new(&client)
        .delete_metafield(1, 2)
        .await
        .unwrap();
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_get_missing_image_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images/999.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).get(1, 999, None).await;

    match result {
        Err(ResourceError::NotFound { resource, id }) => {
            assert_eq!(resource, "Image");
            assert_eq!(id, "999");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_delete_missing_metafield_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{PREFIX}/product_images/1/metafields/3.json")))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"errors": "Not Found"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).delete_metafield(1, 3).await;

    assert!(matches!(
        result,
        Err(ResourceError::NotFound {
            resource: "Metafield",
            ..
        })
    ));
}

#[tokio::test]
async fn test_create_rejected_image_is_validation_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"image": ["Could not download image"]}}))
                .insert_header("x-request-id", "req-422"),
        )
        .mount(&server)
        .await;

    let image = Image {
        src: Some("https://example.com/missing.png".to_string()),
        ..Default::default()
    };

    let client = create_test_client(&server);
    let error = ImageService::new(&client)
        .create(1, &image)
        .await
        .unwrap_err();

    assert_eq!(error.request_id(), Some("req-422"));
    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(
                errors.get("image"),
                Some(&vec!["Could not download image".to_string()])
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_rejected_with_single_error_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"error": "Image could not be downloaded"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = ImageService::new(&client)
        .create(1, &Image::default())
        .await
        .unwrap_err();

    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(
                errors.get("base"),
                Some(&vec!["Image could not be downloaded".to_string()])
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_rejected_with_plain_text_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(ResponseTemplate::new(422).set_body_string("Unprocessable Entity"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = ImageService::new(&client)
        .create(1, &Image::default())
        .await
        .unwrap_err();

    assert!(error.to_string().contains("Unprocessable Entity"));
    match error {
        ResourceError::ValidationFailed { errors, .. } => {
            assert_eq!(
                errors.get("base"),
                Some(&vec!["Unprocessable Entity".to_string()])
            );
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_duplicate_metafield_is_validation_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{PREFIX}/product_images/1/metafields.json")))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"errors": {"key": ["must be unique within this namespace"]}})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client)
        .create_metafield(1, &app_metafield())
        .await;

    assert!(matches!(result, Err(ResourceError::ValidationFailed { .. })));
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"image\": {\"id\": 1"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).get(1, 1, None).await;

    assert!(matches!(
        result,
        Err(ResourceError::Decode {
            resource: "Image",
            ..
        })
    ));
}

#[tokio::test]
async fn test_missing_envelope_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"products": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).list(1, None).await;

    assert!(matches!(result, Err(ResourceError::Decode { .. })));
}

#[tokio::test]
async fn test_server_error_passes_through_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images/count.json")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"errors": "Internal Server Error"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = ImageService::new(&client).count(1, None).await;

    match result {
        Err(ResourceError::Http(shopify_image_api::HttpError::Response(e))) => {
            assert_eq!(e.code, 500);
            assert!(e.message.contains("Internal Server Error"));
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/products/1/images/1.json")))
        .respond_with(fixture(IMAGE_FIXTURE))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{PREFIX}/product_images/1/metafields/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let service = ImageService::new(&client);

    let (first, second, count) = tokio::join!(
        service.get(1, 1, None),
        service.get(1, 1, None),
        service.count_metafields(1, None)
    );

    assert_eq!(first.unwrap().id, Some(1));
    assert_eq!(second.unwrap().id, Some(1));
    assert_eq!(count.unwrap(), 3);
}

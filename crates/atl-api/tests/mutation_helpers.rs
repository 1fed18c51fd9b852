//! Wire-level behavior of the PUT/DELETE helpers against a mock server.

use atl_api::ApiClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&server.uri(), "atelier-test").unwrap()
}

#[tokio::test]
async fn put_data_sends_one_json_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/vendors/1"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "V"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.url("vendors/1");
    let resp = client.put_data(&url, &json!({"name": "V"})).await.unwrap();
    assert!(resp.status().is_success());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "PUT");
}

#[tokio::test]
async fn delete_data_sends_one_bodiless_delete() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/vendors/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.url("vendors/1");
    let resp = client.delete_data(&url).await.unwrap();
    assert_eq!(resp.status().as_u16(), 204);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "DELETE");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn non_success_status_is_returned_not_raised() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/products/9"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.url("products/9");
    let put = client.put_data(&url, &json!({"price": "1.00"})).await.unwrap();
    assert_eq!(put.status().as_u16(), 404);
    let delete = client.delete_data(&url).await.unwrap();
    assert_eq!(delete.status().as_u16(), 404);
}

#[tokio::test]
async fn transport_failure_is_an_error() {
    let client = ApiClient::new("http://127.0.0.1:9", "atelier-test").unwrap();
    let result = client.delete_data("http://127.0.0.1:9/vendors/1").await;
    assert!(matches!(result, Err(atl_api::ApiError::Http(_))));
}

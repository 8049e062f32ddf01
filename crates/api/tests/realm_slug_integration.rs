//! Realm slug lookup backed by the realm index endpoint.

mod support;

use std::time::Duration;

use serde_json::json;
use support::{api_for, config_builder, mount_token};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wowapi::WowApi;

fn realm_index() -> serde_json::Value {
    json!({
        "realms": [
            {"id": 57, "name": "Illidan", "slug": "illidan"},
            {"id": 1146, "name": "Twisting Nether", "slug": "twisting-nether"},
            {"id": 3678, "name": "Thrall", "slug": "thrall"}
        ]
    })
}

#[tokio::test]
async fn index_is_fetched_once_per_region() {
    let server = MockServer::start().await;
    let api = api_for(&server, "eu").await;
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .and(query_param("namespace", "dynamic-eu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(realm_index()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(api.realm_slug("twistingnether").await.as_deref(), Some("twisting-nether"));
    assert_eq!(api.realm_slug("ILLIDAN").await.as_deref(), Some("illidan"));
    assert_eq!(api.realm_slug("3678").await.as_deref(), Some("thrall"));
    assert_eq!(api.realm_slug("stormrage").await, None);
}

#[tokio::test]
async fn another_region_gets_its_own_index() {
    let server = MockServer::start().await;
    let api = api_for(&server, "eu").await;
    for namespace in ["dynamic-eu", "dynamic-us"] {
        Mock::given(method("GET"))
            .and(path("/data/wow/realm/index"))
            .and(query_param("namespace", namespace))
            .respond_with(ResponseTemplate::new(200).set_body_json(realm_index()))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert!(api.realm_slug("thrall").await.is_some());
    api.client().set_region("us").unwrap();
    assert!(api.realm_slug("thrall").await.is_some());
    assert!(api.realm_slug("illidan").await.is_some());
}

#[tokio::test]
async fn failed_fetch_is_retried_on_next_lookup() {
    let server = MockServer::start().await;
    let api = api_for(&server, "us").await;
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(404))
        .up_to_n_times(3)
        .expect(3)
        .mount(&server)
        .await;

    assert_eq!(api.realm_slug("illidan").await, None);

    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .respond_with(ResponseTemplate::new(200).set_body_json(realm_index()))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(api.realm_slug("illidan").await.as_deref(), Some("illidan"));
}

#[tokio::test]
async fn index_is_kept_under_the_region_it_was_fetched_for() {
    let server = MockServer::start().await;
    mount_token(&server).await;
    // First EU fetch is slow and fails; the waiting lookup then fetches again.
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .and(query_param("namespace", "dynamic-eu"))
        .respond_with(ResponseTemplate::new(503).set_delay(Duration::from_millis(300)))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .and(query_param("namespace", "dynamic-eu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(realm_index()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/wow/realm/index"))
        .and(query_param("namespace", "dynamic-us"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"realms": []})))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_builder(&server).region("eu").max_request_retries(1).build().unwrap();
    let api = WowApi::new(config);

    let (first, second, ()) = tokio::join!(
        api.realm_slug("thrall"),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            api.realm_slug("thrall").await
        },
        async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            api.client().set_region("us").unwrap();
        },
    );

    assert_eq!(first, None);
    assert_eq!(second.as_deref(), Some("thrall"));
}

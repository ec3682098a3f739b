#![cfg(not(coverage))]

use super::*;
use crate::state::session::SessionStore;
use httpmock::prelude::*;
use serde_json::json;

fn asset_json(id: &str, office_id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": format!("Asset {}", id),
        "serial": format!("SN-{}", id),
        "inventory": format!("INV-{}", id),
        "status": "Active",
        "officeId": office_id,
        "createdAt": "2025-03-01T10:00:00Z"
    })
}

fn payload(name: &str, office_id: &str) -> AssetPayload {
    AssetPayload {
        id: None,
        name: name.into(),
        serial: "SN-new".into(),
        inventory: "INV-new".into(),
        status: AssetStatus::Active,
        office_id: office_id.into(),
    }
}

fn api_client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.base_url())
}

fn authed_client(server: &MockServer, token: &str) -> ApiClient {
    let session = SessionStore::in_memory();
    session.save(token).unwrap();
    ApiClient::with_session(session).with_base_url(server.base_url())
}

#[tokio::test]
async fn login_posts_credentials_and_returns_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/auth/login")
                .json_body(json!({ "username": "admin", "password": "secret" }));
            then.status(200).json_body(json!({ "access_token": "abc.def" }));
        })
        .await;

    let response = api_client(&server)
        .login(&Credentials {
            username: "admin".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(response.access_token, "abc.def");
    mock.assert_async().await;
}

#[tokio::test]
async fn login_failure_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/login");
            then.status(401)
                .json_body(json!({ "statusCode": 401, "message": "Unauthorized" }));
        })
        .await;

    let err = api_client(&server)
        .login(&Credentials {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, "HTTP_401");
    assert_eq!(err.error, "Unauthorized");
}

#[tokio::test]
async fn register_accepts_any_success_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/auth/register");
            then.status(201).body("created");
        })
        .await;

    api_client(&server)
        .register(&Credentials {
            username: "new".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn requests_carry_bearer_token_only_when_valid() {
    let server = MockServer::start_async().await;
    let authed = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/offices")
                .header("Authorization", "Bearer abc.def");
            then.status(200)
                .json_body(json!([{ "id": "o1", "name": "Lima" }]));
        })
        .await;

    let offices = authed_client(&server, "abc.def")
        .list_offices()
        .await
        .unwrap();
    assert_eq!(offices.len(), 1);
    assert_eq!(offices[0].name, "Lima");
    authed.assert_async().await;

    // "undefined" is not a token; the header is omitted and the mock above
    // does not match.
    let err = authed_client(&server, "undefined")
        .list_offices()
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(authed.hits_async().await, 1);
}

#[tokio::test]
async fn office_detail_and_activities_load() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/offices/o1");
            then.status(200).json_body(json!({ "id": "o1", "name": "Lima" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/activities");
            then.status(200).json_body(json!([{
                "id": "act-1",
                "action": "create",
                "assetName": "Laptop",
                "toOffice": "Lima",
                "timestamp": "2025-03-01T10:00:00Z"
            }]));
        })
        .await;

    let client = api_client(&server);
    assert_eq!(client.get_office("o1").await.unwrap().name, "Lima");
    let activities = client.list_activities().await.unwrap();
    assert_eq!(activities[0].action, ActivityAction::Create);
    assert_eq!(activities[0].to_office.as_deref(), Some("Lima"));
}

#[tokio::test]
async fn global_search_sends_search_param() {
    let server = MockServer::start_async().await;
    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/assets")
                .query_param("search", "lap top");
            then.status(200).json_body(json!([{
                "id": "a1",
                "name": "Laptop",
                "serial": "SN-1",
                "inventory": "INV-1",
                "status": "In Repair",
                "office": { "id": "o1", "name": "Lima" }
            }]));
        })
        .await;

    let results = api_client(&server)
        .list_assets(Some("lap top"))
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].status, AssetStatus::InRepair);
    assert_eq!(
        results[0].office.as_ref().map(|o| o.name.as_str()),
        Some("Lima")
    );
    search.assert_async().await;
}

#[tokio::test]
async fn office_listing_switches_to_search_endpoint_for_queries() {
    let server = MockServer::start_async().await;
    let list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/assets/office/o1");
            then.status(200)
                .json_body(json!([asset_json("a1", "o1"), asset_json("a2", "o1")]));
        })
        .await;
    let search = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/assets/office/o1/search")
                .query_param("q", "a2");
            then.status(200).json_body(json!([asset_json("a2", "o1")]));
        })
        .await;

    let client = api_client(&server);
    assert_eq!(client.list_office_assets("o1", None).await.unwrap().len(), 2);
    assert_eq!(client.list_office_assets("o1", Some("  ")).await.unwrap().len(), 2);
    let found = client.list_office_assets("o1", Some("a2")).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "a2");

    assert_eq!(list.hits_async().await, 2);
    assert_eq!(search.hits_async().await, 1);
}

#[tokio::test]
async fn create_then_refetch_reflects_new_asset() {
    let server = MockServer::start_async().await;
    let mut list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/assets/office/o1");
            then.status(200)
                .json_body(json!([asset_json("a1", "o1"), asset_json("a2", "o1")]));
        })
        .await;
    let create = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/assets").json_body(json!({
                "name": "Printer",
                "serial": "SN-new",
                "inventory": "INV-new",
                "status": "Active",
                "officeId": "o1"
            }));
            then.status(201).json_body(asset_json("a3", "o1"));
        })
        .await;

    let client = api_client(&server);
    assert_eq!(client.list_office_assets("o1", None).await.unwrap().len(), 2);
    client.create_asset(&payload("Printer", "o1")).await.unwrap();
    create.assert_async().await;

    list.delete_async().await;
    list = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/assets/office/o1");
            then.status(200).json_body(json!([
                asset_json("a1", "o1"),
                asset_json("a2", "o1"),
                asset_json("a3", "o1")
            ]));
        })
        .await;
    assert_eq!(client.list_office_assets("o1", None).await.unwrap().len(), 3);
    list.assert_async().await;
}

#[tokio::test]
async fn update_sends_id_in_path_and_body() {
    let server = MockServer::start_async().await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT).path("/api/assets/a1").json_body(json!({
                "id": "a1",
                "name": "Renamed",
                "serial": "SN-new",
                "inventory": "INV-new",
                "status": "Active",
                "officeId": "o1"
            }));
            then.status(200).json_body(asset_json("a1", "o1"));
        })
        .await;

    let mut body = payload("Renamed", "o1");
    body.id = Some("a1".into());
    api_client(&server).update_asset("a1", &body).await.unwrap();
    update.assert_async().await;
}

#[tokio::test]
async fn move_updates_only_office_id() {
    let server = MockServer::start_async().await;
    let mv = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/api/assets/a1")
                .json_body(json!({ "officeId": "o2" }));
            then.status(200).json_body(asset_json("a1", "o2"));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/assets/office/o1");
            then.status(200).json_body(json!([asset_json("a2", "o1")]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/assets/office/o2");
            then.status(200).json_body(json!([asset_json("a1", "o2")]));
        })
        .await;

    let client = api_client(&server);
    client.move_asset("a1", "o2").await.unwrap();
    mv.assert_async().await;

    let source = client.list_office_assets("o1", None).await.unwrap();
    let target = client.list_office_assets("o2", None).await.unwrap();
    assert!(source.iter().all(|a| a.id != "a1"));
    assert!(target.iter().any(|a| a.id == "a1"));
}

#[tokio::test]
async fn delete_ignores_response_body_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/assets/a1");
            then.status(200).body("");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/assets/a2");
            then.status(200).json_body(json!({ "deleted": true }));
        })
        .await;

    let client = api_client(&server);
    client.delete_asset("a1").await.unwrap();
    client.delete_asset("a2").await.unwrap();
}

#[tokio::test]
async fn failures_map_to_error_codes() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/offices");
            then.status(200).body("not json");
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/api/assets/a1");
            then.status(500)
                .json_body(json!({ "message": "Internal server error" }));
        })
        .await;

    let client = api_client(&server);
    let parse = client.list_offices().await.unwrap_err();
    assert_eq!(parse.code, "PARSE_ERROR");

    let http = client.delete_asset("a1").await.unwrap_err();
    assert_eq!(http.code, "HTTP_500");
    assert_eq!(http.error, "Internal server error");

    let unreachable = ApiClient::new_with_base_url("http://127.0.0.1:9")
        .list_offices()
        .await
        .unwrap_err();
    assert_eq!(unreachable.code, "REQUEST_FAILED");
}

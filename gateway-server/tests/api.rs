use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request, StatusCode, header};
use gateway_server::infrastructure::settings::Settings;
use gateway_server::{AppState, build_app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn app() -> Router {
    build_app(&Settings::default(), AppState::default()).expect("app must build")
}

async fn send_raw(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).expect("request");

    let response = app().oneshot(request).await.expect("infallible");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, bytes)
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(method, uri, body).await;
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn list_users_returns_three() {
    let (status, body) = send(Method::GET, "/api/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().expect("array").len(), 3);
    assert_eq!(body["data"][1]["name"], "李四");
    assert!(body.get("pagination").is_none());
}

#[tokio::test]
async fn get_user_in_range_echoes_id() {
    for id in 1..=3 {
        let (status, body) = send(Method::GET, &format!("/api/users/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], id);
    }
}

#[tokio::test]
async fn get_user_out_of_range_is_404() {
    for id in ["0", "4", "-1", "100", "abc"] {
        let (status, body) = send(Method::GET, &format!("/users/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id {id}");
        assert_eq!(body, json!({ "success": false, "message": "用户不存在" }));
    }
}

#[tokio::test]
async fn get_user_is_byte_identical_across_calls() {
    let (_, first) = send_raw(Method::GET, "/api/users/1", None).await;
    let (_, second) = send_raw(Method::GET, "/api/users/1", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn create_user_requires_name_and_email() {
    let (status, body) = send(Method::POST, "/api/users", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "姓名和邮箱是必填项");

    let (status, _) = send(Method::POST, "/api/users", Some(json!({ "name": "A" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(Method::POST, "/api/users", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_user_treats_null_name_as_missing() {
    let (status, body) = send(
        Method::POST,
        "/users",
        Some(json!({ "name": null, "email": "a@b.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "姓名和邮箱是必填项" }));
}

#[tokio::test]
async fn create_user_defaults_role() {
    let (status, body) = send(
        Method::POST,
        "/api/users",
        Some(json!({ "name": "A", "email": "a@b.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "用户创建成功");
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["name"], "A");
    assert!(body["data"]["id"].as_i64().expect("numeric id") > 0);
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn created_user_is_not_observable() {
    let (_, created) = send(
        Method::POST,
        "/api/users",
        Some(json!({ "name": "Zed", "email": "z@b.com" })),
    )
    .await;
    assert_eq!(created["data"]["name"], "Zed");

    let (_, listed) = send(Method::GET, "/api/users", None).await;
    assert_eq!(listed["data"].as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn update_user_merges_over_defaults() {
    let (status, body) = send(
        Method::PUT,
        "/api/users/42",
        Some(json!({ "email": "new@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "用户更新成功");
    assert_eq!(body["data"]["id"], 42);
    assert_eq!(body["data"]["name"], "张三");
    assert_eq!(body["data"]["email"], "new@example.com");
    assert_eq!(body["data"]["role"], "admin");
    assert!(body["data"]["updatedAt"].is_string());
}

#[tokio::test]
async fn update_user_without_body_uses_defaults() {
    let (status, body) = send(Method::PUT, "/users/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "zhangsan@example.com");
}

#[tokio::test]
async fn delete_user_confirms_id() {
    let (status, body) = send(Method::DELETE, "/api/users/9", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "用户 9 删除成功" }));
}

#[tokio::test]
async fn delete_with_non_numeric_id_still_succeeds() {
    let (status, body) = send(Method::DELETE, "/users/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "用户 NaN 删除成功" }));

    let (status, body) = send(Method::DELETE, "/api/data/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "数据项 NaN 删除成功");
}

#[tokio::test]
async fn update_with_non_numeric_id_echoes_null_id() {
    let (status, body) = send(Method::PUT, "/data/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], Value::Null);
    assert_eq!(body["data"]["title"], "数据项NaN");

    let (status, body) = send(
        Method::PUT,
        "/api/users/abc",
        Some(json!({ "name": "Alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].get("id").is_some_and(Value::is_null));
    assert_eq!(body["data"]["name"], "Alice");
}

#[tokio::test]
async fn undecodable_id_takes_the_not_found_path() {
    let (status, body) = send(Method::GET, "/users/%FF", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "message": "用户不存在" }));

    let (status, body) = send(Method::GET, "/api/data/%FF", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "数据项不存在");

    let (status, body) = send(Method::DELETE, "/api/users/%FF", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "用户 NaN 删除成功");
}

#[tokio::test]
async fn get_item_in_range_is_detailed() {
    for id in 1..=5 {
        let (status, body) = send(Method::GET, &format!("/api/data/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["author"], "系统管理员");
        assert_eq!(body["data"]["views"], 1250);
    }

    let (status, body) = send(Method::GET, "/data/6", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "数据项不存在");
}

#[tokio::test]
async fn create_item_requires_content() {
    let (status, body) = send(Method::POST, "/api/data", Some(json!({ "title": "T" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "标题和内容是必填项");
}

#[tokio::test]
async fn create_item_treats_null_content_as_missing() {
    let (status, body) = send(
        Method::POST,
        "/api/data",
        Some(json!({ "title": "T", "content": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "message": "标题和内容是必填项" }));
}

#[tokio::test]
async fn create_item_fills_defaults() {
    let (status, body) = send(
        Method::POST,
        "/data",
        Some(json!({ "title": "T", "content": "C" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["type"], "article");
    assert_eq!(body["data"]["author"], "匿名用户");
    assert_eq!(body["data"]["tags"], json!([]));
    assert_eq!(body["data"]["views"], 0);
    assert_eq!(body["data"]["likes"], 0);
}

#[tokio::test]
async fn malformed_json_is_400_envelope() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/data")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let response = app().oneshot(request).await.expect("infallible");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "请求体格式错误");
}

#[tokio::test]
async fn update_item_merges_over_defaults() {
    let (status, body) = send(
        Method::PUT,
        "/api/data/3",
        Some(json!({ "type": "news", "tags": ["a", "b"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "数据项更新成功");
    assert_eq!(body["data"]["title"], "数据项3");
    assert_eq!(body["data"]["type"], "news");
    assert_eq!(body["data"]["tags"], json!(["a", "b"]));
    assert_eq!(body["data"]["content"], "更新后的内容");
}

#[tokio::test]
async fn delete_item_confirms_id() {
    let (status, body) = send(Method::DELETE, "/data/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "数据项 5 删除成功");
}

#[tokio::test]
async fn list_items_filters_by_type() {
    let (status, body) = send(Method::GET, "/api/data?type=news", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body["data"].as_array().expect("array");
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["type"] == "news"));
    assert_eq!(body["pagination"]["total"], 2);
    assert_eq!(body["pagination"]["totalPages"], 1);
}

#[tokio::test]
async fn list_items_second_page_of_two() {
    let (_, body) = send(Method::GET, "/api/data?page=2&limit=2", None).await;

    let ids: Vec<i64> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|item| item["id"].as_i64().expect("id"))
        .collect();
    assert_eq!(ids, vec![3, 4]);
    assert_eq!(
        body["pagination"],
        json!({ "page": 2, "limit": 2, "total": 5, "totalPages": 3 })
    );
}

#[tokio::test]
async fn list_items_out_of_range_page_is_empty() {
    let (status, body) = send(Method::GET, "/data?page=10&limit=2&type=news", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn list_items_invalid_paging_uses_defaults() {
    let (_, body) = send(Method::GET, "/api/data?page=abc&limit=-4&page=3", None).await;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["data"].as_array().expect("array").len(), 5);
}

#[tokio::test]
async fn stats_overview_is_constant() {
    let (status, body) = send(Method::GET, "/api/data/stats/overview", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["totalItems"], 150);
    assert_eq!(body["data"]["totalViews"], 12500);
    assert_eq!(body["data"]["totalLikes"], 850);
    assert_eq!(
        body["data"]["typeDistribution"],
        json!({ "article": 60, "news": 45, "report": 30, "other": 15 })
    );
    assert_eq!(
        body["data"]["recentActivity"][2],
        json!({ "date": "2024-01-13", "newItems": 7, "views": 180 })
    );
}

#[tokio::test]
async fn root_serves_banner() {
    let (status, body) = send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "running");
    assert_eq!(body["data"]["endpoints"]["users"], "/api/users");
}

#[tokio::test]
async fn health_reports_server_platform() {
    let (status, body) = send(Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["platform"], "server");
}

#[tokio::test]
async fn unknown_path_echoes_path() {
    let (status, body) = send(Method::GET, "/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "error": "接口不存在", "path": "/nonexistent" })
    );
}

#[tokio::test]
async fn unsupported_method_is_route_not_found() {
    let (status, body) = send(Method::PATCH, "/api/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["path"], "/api/users/1");
}

#[tokio::test]
async fn cors_headers_are_permissive() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/users")
        .header(header::ORIGIN, "http://example.test")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("infallible");

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("cors header"),
        "*"
    );
}

#[tokio::test]
async fn openapi_document_is_served() {
    let (status, body) = send(Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/users"].is_object());
}

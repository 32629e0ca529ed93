
use reqwest::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .expect("list response should be an array")
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[actix_rt::test]
async fn create_project_returns_201_and_category_filter_applies() {
    let app = TestApp::spawn().await;
    let body = project_body("A", "Web");

    let response = app.post_json("/projects/", &body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().expect("id should be assigned");
    for field in ["title", "description", "category", "image", "technologies", "link", "github"] {
        assert_eq!(created[field], body[field], "field {field} should round-trip");
    }

    let web: Value = app.get("/projects/?category=Web").await.json().await.unwrap();
    assert!(ids(&web).contains(&id));

    let mobile: Value = app.get("/projects/?category=Mobile").await.json().await.unwrap();
    assert!(!ids(&mobile).contains(&id));
}

#[actix_rt::test]
async fn get_by_id_returns_submitted_fields_plus_id() {
    let app = TestApp::spawn().await;
    let body = json!({
        "title": "Compiler",
        "description": "Toy compiler",
        "category": "Tools",
        "image": "data:image/png;base64,AAAA",
        "technologies": ["Rust", "LLVM"],
        "link": "https://compiler.dev",
        "github": "https://github.com/me/compiler"
    });
    let created = app.create("/projects", &body).await;
    let id = created["id"].as_i64().unwrap();

    let response = app.get(&format!("/projects/{id}/")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let mut fetched: Value = response.json().await.unwrap();
    assert_eq!(fetched["id"], id);
    fetched.as_object_mut().unwrap().remove("id");
    assert_eq!(fetched, body);
}

#[actix_rt::test]
async fn list_without_filter_or_with_all_returns_everything_in_storage_order() {
    let app = TestApp::spawn().await;
    let first = app.create("/projects", &project_body("One", "Web")).await["id"].as_i64().unwrap();
    let second = app.create("/projects", &project_body("Two", "AI")).await["id"].as_i64().unwrap();
    let third = app.create("/projects", &project_body("Three", "Mobile")).await["id"].as_i64().unwrap();

    let all: Value = app.get("/projects").await.json().await.unwrap();
    assert_eq!(ids(&all), vec![first, second, third]);

    let explicit_all: Value = app.get("/projects?category=All").await.json().await.unwrap();
    assert_eq!(ids(&explicit_all), vec![first, second, third]);
}

#[actix_rt::test]
async fn category_filter_is_exact_and_case_sensitive() {
    let app = TestApp::spawn().await;
    let web = app.create("/projects", &project_body("One", "Web")).await["id"].as_i64().unwrap();
    app.create("/projects", &project_body("Two", "Web Apps")).await;
    app.create("/projects", &project_body("Three", "web")).await;

    let filtered: Value = app.get("/projects?category=Web").await.json().await.unwrap();
    assert_eq!(ids(&filtered), vec![web]);
}

#[actix_rt::test]
async fn technologies_link_and_github_are_optional_on_create() {
    let app = TestApp::spawn().await;
    let created = app.create("/projects", &json!({
        "title": "Minimal",
        "description": "d",
        "category": "Web",
        "image": "x"
    })).await;

    assert_eq!(created["technologies"], json!([]));
    assert_eq!(created["link"], Value::Null);
    assert_eq!(created["github"], Value::Null);
}

#[actix_rt::test]
async fn missing_required_field_returns_400_with_field_detail() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/projects", &json!({
        "description": "d",
        "category": "Web",
        "image": "x"
    })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Validation failed");
    assert_eq!(body["details"][0]["field"], "title");

    let all: Value = app.get("/projects").await.json().await.unwrap();
    assert!(ids(&all).is_empty());
}

#[actix_rt::test]
async fn blank_or_oversized_fields_are_rejected() {
    let app = TestApp::spawn().await;
    let mut body = project_body("", "Web");
    body["category"] = json!("c".repeat(101));

    let response = app.post_json("/projects", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["category", "title"]);
}

#[actix_rt::test]
async fn put_replaces_every_field() {
    let app = TestApp::spawn().await;
    let mut original = project_body("Old", "Web");
    original["link"] = json!("https://old.dev");
    let id = app.create("/projects", &original).await["id"].as_i64().unwrap();

    let replacement = json!({
        "title": "New",
        "description": "new description",
        "category": "AI",
        "image": "y",
        "technologies": ["Python"]
    });
    let response = app.put_json(&format!("/projects/{id}"), &replacement).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["title"], "New");
    assert_eq!(updated["category"], "AI");
    assert_eq!(updated["technologies"], json!(["Python"]));
    assert_eq!(updated["link"], Value::Null);
}

#[actix_rt::test]
async fn patch_changes_only_given_fields() {
    let app = TestApp::spawn().await;
    let mut original = project_body("Keep", "Web");
    original["link"] = json!("https://keep.dev");
    original["github"] = json!("https://github.com/me/keep");
    let id = app.create("/projects", &original).await["id"].as_i64().unwrap();

    let response = app.patch_json(
        &format!("/projects/{id}/"),
        &json!({"category": "Design", "github": null}),
    ).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "Keep");
    assert_eq!(updated["category"], "Design");
    assert_eq!(updated["link"], "https://keep.dev");
    assert_eq!(updated["github"], Value::Null);
    assert_eq!(updated["technologies"], json!(["Go"]));
}

#[actix_rt::test]
async fn patch_with_null_required_field_is_rejected() {
    let app = TestApp::spawn().await;
    let id = app.create("/projects", &project_body("Keep", "Web")).await["id"].as_i64().unwrap();

    let response = app.patch_json(&format!("/projects/{id}"), &json!({"title": null})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(body["details"][0]["message"], "This field may not be null.");

    let unchanged: Value = app.get(&format!("/projects/{id}")).await.json().await.unwrap();
    assert_eq!(unchanged["title"], "Keep");
}

#[actix_rt::test]
async fn delete_then_get_returns_404() {
    let app = TestApp::spawn().await;
    let id = app.create("/projects", &project_body("Temp", "Web")).await["id"].as_i64().unwrap();

    let response = app.delete(&format!("/projects/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app.get(&format!("/projects/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.delete(&format!("/projects/{id}/")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn unknown_or_malformed_ids_return_404() {
    let app = TestApp::spawn().await;

    assert_eq!(app.get("/projects/999").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(app.get("/projects/not-a-number").await.status(), StatusCode::NOT_FOUND);

    let response = app.put_json("/projects/999", &project_body("X", "Web")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.patch_json("/projects/999", &json!({"title": "X"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn whitespace_only_title_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/projects", &project_body("   ", "Web")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "title");
    assert_eq!(body["details"][0]["message"], "This field may not be blank.");

    let all: Value = app.get("/projects").await.json().await.unwrap();
    assert!(ids(&all).is_empty());
}

#[actix_rt::test]
async fn every_missing_field_is_listed() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/projects", &json!({"image": "x"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["category", "description", "title"]);
    assert_eq!(body["details"][0]["message"], "This field is required.");
}

#[actix_rt::test]
async fn wrong_json_type_names_the_field() {
    let app = TestApp::spawn().await;
    let mut body = project_body("A", "Web");
    body["technologies"] = json!("Go");

    let response = app.post_json("/projects", &body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "technologies");
}

#[actix_rt::test]
async fn malformed_json_is_a_non_field_error() {
    let app = TestApp::spawn().await;

    let response = app.client
        .post(app.url("/projects"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["details"][0]["field"], "non_field_errors");
}

#[actix_rt::test]
async fn seeded_projects_accept_partial_updates() {
    let app = TestApp::spawn_seeded().await;
    let seeded: Value = app.get("/projects").await.json().await.unwrap();
    let first = &seeded[0];
    let id = first["id"].as_i64().unwrap();

    let response = app.patch_json(&format!("/projects/{id}"), &json!({"title": "Renamed"})).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Value = response.json().await.unwrap();
    assert_eq!(updated["title"], "Renamed");
    assert_eq!(updated["image"], first["image"]);
    assert_eq!(updated["category"], first["category"]);
}

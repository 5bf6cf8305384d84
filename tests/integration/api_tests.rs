//! API integration tests
//!
//! These run against a live server with a scratch database.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:7777/api";

async fn create_room(client: &Client, label: &str, room_type: &str) -> i32 {
    let form = reqwest::multipart::Form::new()
        .text("label", label.to_string())
        .text("type", room_type.to_string());

    let response = client
        .post(format!("{}/room/create", BASE_URL))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send room create request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response") as i32
}

async fn create_category(client: &Client, label: &str) -> i32 {
    let response = client
        .post(format!("{}/category/create", BASE_URL))
        .json(&json!({
            "label": label,
            "model_release_date": "2021-06-01",
            "description": "Integration test category"
        }))
        .send()
        .await
        .expect("Failed to send category create request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    body["id"].as_i64().expect("No id in response") as i32
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_category_create_requires_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/category/create", BASE_URL))
        .json(&json!({ "label": "Incomplete" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    let message = body["message"].as_str().unwrap_or_default();
    assert!(message.contains("model_release_date"));
    assert!(message.contains("description"));
}

#[tokio::test]
#[ignore]
async fn test_room_status_defaults_to_active() {
    let client = Client::new();
    let id = create_room(&client, "Default Status Room", "lab").await;

    let response = client
        .get(format!("{}/room/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "active");
    assert_eq!(body["type"], "lab");

    client
        .delete(format!("{}/room/delete/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to delete room");
}

#[tokio::test]
#[ignore]
async fn test_computer_create_rejects_unknown_room() {
    let client = Client::new();
    let category_id = create_category(&client, "Orphan Check").await;

    let response = client
        .post(format!("{}/computer/create", BASE_URL))
        .json(&json!({
            "label": "Ghost PC",
            "isassignedto": 999_999,
            "belongstocategory": category_id,
            "status": "functional"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    client
        .delete(format!("{}/category/delete/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to delete category");
}

#[tokio::test]
#[ignore]
async fn test_computer_create_rejects_zero_quantity() {
    let client = Client::new();
    let room_id = create_room(&client, "Quantity Room", "lab").await;
    let category_id = create_category(&client, "Quantity Check").await;

    let response = client
        .post(format!("{}/computer/create", BASE_URL))
        .json(&json!({
            "label": "No Units",
            "isassignedto": room_id,
            "belongstocategory": category_id,
            "status": "functional",
            "quantity": 0
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    client
        .delete(format!("{}/category/delete/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to delete category");
    client
        .delete(format!("{}/room/delete/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to delete room");
}

#[tokio::test]
#[ignore]
async fn test_update_with_no_fields_is_rejected() {
    let client = Client::new();
    let category_id = create_category(&client, "No-op Update").await;

    let response = client
        .put(format!("{}/category/edit/{}", BASE_URL, category_id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    client
        .delete(format!("{}/category/delete/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to delete category");
}

#[tokio::test]
#[ignore]
async fn test_unknown_ids_return_404() {
    let client = Client::new();

    for path in [
        "room/999999",
        "category/999999",
        "computer/999999",
        "smart-board/999999",
        "lab-utility/999999",
    ] {
        let response = client
            .get(format!("{}/{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), 404, "expected 404 for {}", path);
    }
}

#[tokio::test]
#[ignore]
async fn test_image_upload_rejects_wrong_type() {
    let client = Client::new();
    let room_id = create_room(&client, "Image Rules Room", "classroom").await;

    let part = reqwest::multipart::Part::bytes(b"#!/bin/sh\n".to_vec())
        .file_name("script.sh")
        .mime_str("application/x-sh")
        .expect("Failed to build part");
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = client
        .post(format!("{}/room/upload-image/{}", BASE_URL, room_id))
        .multipart(form)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    client
        .delete(format!("{}/room/delete/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to delete room");
}

async fn upload_room_image(client: &Client, room_id: i32, data: Vec<u8>) -> String {
    let part = reqwest::multipart::Part::bytes(data)
        .file_name("photo.png")
        .mime_str("image/png")
        .expect("Failed to build part");
    let form = reqwest::multipart::Form::new().part("image", part);

    let response = client
        .post(format!("{}/room/upload-image/{}", BASE_URL, room_id))
        .multipart(form)
        .send()
        .await
        .expect("Failed to upload image");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    body["filename"]
        .as_str()
        .expect("No filename in response")
        .to_string()
}

/// Replacing an image must leave no intermediate state behind: the row
/// points at the new file, the new file serves, the old file is gone.
#[tokio::test]
#[ignore]
async fn test_image_replacement_swaps_file_and_reference() {
    let client = Client::new();
    let room_id = create_room(&client, "Replacement Room", "lab").await;

    let first = upload_room_image(&client, room_id, vec![1, 1, 1]).await;
    let second = upload_room_image(&client, room_id, vec![2, 2, 2]).await;
    assert_ne!(first, second);

    // Old file is deleted, new file serves
    let response = client
        .get(format!("{}/room/image/{}", BASE_URL, first))
        .send()
        .await
        .expect("Failed to fetch old image");
    assert_eq!(response.status(), 404);

    let response = client
        .get(format!("{}/room/image/{}", BASE_URL, second))
        .send()
        .await
        .expect("Failed to fetch new image");
    assert!(response.status().is_success());
    let bytes = response.bytes().await.expect("Failed to read image bytes");
    assert_eq!(bytes.as_ref(), &[2, 2, 2]);

    // The row references exactly the new file
    let response = client
        .get(format!("{}/room/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to fetch room");
    let room: Value = response.json().await.expect("Failed to parse room");
    assert_eq!(room["image_file_id"].as_str(), Some(second.as_str()));

    client
        .delete(format!("{}/room/delete/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to delete room");
}

#[tokio::test]
#[ignore]
async fn test_image_path_traversal_is_rejected() {
    let client = Client::new();

    let response = client
        .get(format!("{}/room/image/..%2F..%2Fetc%2Fpasswd", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 404);
}

#[tokio::test]
#[ignore]
async fn test_register_duplicate_username_conflicts() {
    let client = Client::new();

    let payload = json!({
        "username": "dup_user_it",
        "password": "secret123",
        "name": "Duplicate User"
    });

    let first = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(first.status(), 201);

    let second = client
        .post(format!("{}/user/register", BASE_URL))
        .json(&payload)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(second.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_login_validate_wrong_password() {
    let client = Client::new();

    client
        .post(format!("{}/user/register", BASE_URL))
        .json(&json!({
            "username": "login_check_it",
            "password": "right-password",
            "name": "Login Check"
        }))
        .send()
        .await
        .expect("Failed to send request");

    let response = client
        .post(format!("{}/user/login-validate", BASE_URL))
        .json(&json!({
            "username": "login_check_it",
            "password": "wrong-password"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 401);
}

/// End-to-end inventory lifecycle: category and room creation, a computer
/// assignment, quantity-aware dashboard totals, delete-blocking, cleanup.
#[tokio::test]
#[ignore]
async fn test_inventory_lifecycle() {
    let client = Client::new();

    let category_id = create_category(&client, "Lifecycle Workstations").await;
    let room_id = create_room(&client, "Lifecycle Lab", "lab").await;

    // Three identical units on a single row
    let response = client
        .post(format!("{}/computer/create", BASE_URL))
        .json(&json!({
            "label": "Lifecycle PC",
            "install_date": "2023-09-01",
            "isassignedto": room_id,
            "belongstocategory": category_id,
            "status": "functional",
            "quantity": 3
        }))
        .send()
        .await
        .expect("Failed to create computer");
    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    let computer_id = body["id"].as_i64().expect("No id in response");

    // Quantity-weighted totals show up in the summary
    let response = client
        .get(format!("{}/dashboard/summary", BASE_URL))
        .send()
        .await
        .expect("Failed to fetch summary");
    assert!(response.status().is_success());
    let summary: Value = response.json().await.expect("Failed to parse summary");
    assert!(summary["computers"]["total"].as_i64().unwrap() >= 3);

    let room = summary["roomUtilization"]
        .as_array()
        .expect("roomUtilization missing")
        .iter()
        .find(|r| r["id"].as_i64() == Some(room_id as i64))
        .expect("room missing from utilization");
    assert_eq!(room["computer_count"].as_i64(), Some(3));
    assert_eq!(room["functional_percentage"].as_f64(), Some(100.0));

    // Category delete is blocked while the computer references it
    let response = client
        .delete(format!("{}/category/delete/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["details"]["computers"].as_i64(), Some(1));

    // Room delete is blocked too
    let response = client
        .delete(format!("{}/room/delete/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    // Removing the computer unblocks both
    let response = client
        .delete(format!("{}/computer/delete/{}", BASE_URL, computer_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/category/delete/{}", BASE_URL, category_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let response = client
        .delete(format!("{}/room/delete/{}", BASE_URL, room_id))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
}

//! Book endpoint tests

use axum::http::{header, Method, StatusCode};
use chrono::{Datelike, Utc};
use serde_json::json;

use crate::common::{app, send};

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let response = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "healthy");
    assert_eq!(response.body["storage"], "memory");
    assert_eq!(response.body["token_required"], false);
}

#[tokio::test]
async fn test_list_empty() {
    let app = app();
    let response = send(&app, Method::GET, "/api/books", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_create_and_get_book() {
    let app = app();

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Test Book", "author": "Jane Doe", "year": 1999})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let id = response.body["id"].as_i64().expect("No book ID");
    assert_eq!(response.body["title"], "Test Book");
    assert_eq!(response.body["author"], "Jane Doe");
    assert_eq!(response.body["year"], 1999);
    assert_eq!(
        response.headers[header::LOCATION].to_str().unwrap(),
        format!("/api/books/{}", id)
    );

    let response = send(&app, Method::GET, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"id": id, "title": "Test Book", "author": "Jane Doe", "year": 1999})
    );
}

#[tokio::test]
async fn test_list_preserves_creation_order() {
    let app = app();
    for title in ["First", "Second", "Third"] {
        let response = send(
            &app,
            Method::POST,
            "/api/books",
            Some(json!({"title": title, "author": "Author", "year": 2000})),
            None,
        )
        .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = send(&app, Method::GET, "/api/books", None, None).await;
    let titles: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let app = app();
    let created = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Draft", "author": "Someone", "year": 1901})),
        None,
    )
    .await;
    let id = created.body["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/books/{}", id),
        Some(json!({"title": "Final", "author": "Someone Else", "year": 2002})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(response.body, serde_json::Value::Null);

    let response = send(&app, Method::GET, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(
        response.body,
        json!({"id": id, "title": "Final", "author": "Someone Else", "year": 2002})
    );
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let app = app();
    let created = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Short Lived", "author": "Author", "year": 2010})),
        None,
    )
    .await;
    let id = created.body["id"].as_i64().unwrap();

    let response = send(&app, Method::DELETE, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = send(&app, Method::GET, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_id_is_not_found_without_mutation() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Keeper", "author": "Author", "year": 2010})),
        None,
    )
    .await;

    let response = send(&app, Method::GET, "/api/books/99", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["statusCode"], 404);

    let response = send(
        &app,
        Method::PUT,
        "/api/books/99",
        Some(json!({"title": "Ghost", "author": "Nobody", "year": 2000})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = send(&app, Method::DELETE, "/api/books/99", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = send(&app, Method::GET, "/api/books", None, None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
    assert_eq!(response.body[0]["title"], "Keeper");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = app();
    let next_year = Utc::now().year() + 1;

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "A", "author": "Author", "year": 1000})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let title = response.body["errors"]["title"][0].as_str().unwrap();
    assert!(title.contains("between 2 and 100"));
    let year = response.body["errors"]["year"][0].as_str().unwrap();
    assert!(year.contains("between 1450 and 2100"));

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Title", "author": "Author", "year": next_year})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let year = response.body["errors"]["year"][0].as_str().unwrap();
    assert!(year.contains("not be in the future"));

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"year": 2000})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body["errors"]["title"][0].as_str().unwrap().contains("required"));
    assert!(response.body["errors"]["author"][0].as_str().unwrap().contains("required"));

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "   ", "author": "", "year": 2000})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["errors"]["title"], json!(["Title is required."]));
    let author: Vec<&str> = response.body["errors"]["author"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m.as_str().unwrap())
        .collect();
    assert!(author.contains(&"Author is required."));

    // nothing reached the store
    let response = send(&app, Method::GET, "/api/books", None, None).await;
    assert_eq!(response.body, json!([]));
}

#[tokio::test]
async fn test_update_validation_error_leaves_book_untouched() {
    let app = app();
    let created = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Stable", "author": "Author", "year": 1980})),
        None,
    )
    .await;
    let id = created.body["id"].as_i64().unwrap();

    let response = send(
        &app,
        Method::PUT,
        &format!("/api/books/{}", id),
        Some(json!({"title": "X", "author": "Author", "year": 1980})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, Method::GET, &format!("/api/books/{}", id), None, None).await;
    assert_eq!(response.body["title"], "Stable");
}

#[tokio::test]
async fn test_malformed_requests_are_bad_requests() {
    let app = app();

    let response = send(&app, Method::GET, "/api/books/not-a-number", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(&app, Method::POST, "/api/books", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({"title": "Title", "author": "Author", "year": "nineteen"})),
        None,
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["statusCode"], 400);
}

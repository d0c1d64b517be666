//! Movie CRUD integration tests.
//!
//! All requests carry valid credentials (auth behavior is covered in
//! `auth_tests`); these tests exercise routing, id parsing, body
//! validation, and the store contract.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::test_utils::{
    authed_request, failing_router, response_json, sample_payload, test_router,
};

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn list_starts_empty() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("GET", "/movies", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn list_includes_created_movies() {
    let (router, _store) = test_router();

    router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/movies",
            Some(sample_payload("Dune")),
        ))
        .await
        .unwrap();

    let response = router
        .oneshot(authed_request("GET", "/movies", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|movie| movie["title"].as_str().unwrap())
        .collect();
    assert!(titles.contains(&"Dune"));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn create_returns_201_with_id() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request(
            "POST",
            "/movies",
            Some(sample_payload("Dune")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "movie created successfully");
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn create_then_read_back_round_trips() {
    let (router, _store) = test_router();

    let created = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = router
        .oneshot(authed_request("GET", &format!("/movies/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let movie = response_json(response).await;
    assert_eq!(movie["id"], id);
    assert_eq!(movie["title"], "Dune");
    assert_eq!(movie["releaseyear"], "2021");
    assert_eq!(movie["genre"], "SciFi");
    assert_eq!(movie["director"], "Villeneuve");
    assert_eq!(movie["rating"], json!(8.5));
    assert_eq!(movie["description"], "A mythic hero's journey on Arrakis");
}

#[tokio::test]
async fn create_rejects_malformed_json() {
    let (router, _store) = test_router();

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/movies")
        .header(
            "Authorization",
            super::test_utils::basic_auth_header(
                super::test_utils::TEST_USERNAME,
                super::test_utils::TEST_PASSWORD,
            ),
        )
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "invalid_request");
}

#[tokio::test]
async fn create_rejects_incomplete_payload() {
    let (router, _store) = test_router();

    // Well-formed JSON, but not a movie
    let response = router
        .oneshot(authed_request(
            "POST",
            "/movies",
            Some(json!({"title": "Dune"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_assigns_sequential_ids() {
    let (router, _store) = test_router();

    let first = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let second = response_json(
        router
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Arrival")),
            ))
            .await
            .unwrap(),
    )
    .await;

    assert_ne!(first["id"], second["id"]);
}

// =============================================================================
// Read by id
// =============================================================================

#[tokio::test]
async fn get_nonexistent_id_is_404() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("GET", "/movies/999999", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "movie_not_found");
}

#[tokio::test]
async fn get_non_numeric_id_is_400() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("GET", "/movies/abc", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "invalid_movie_id");
}

#[tokio::test]
async fn get_empty_id_segment_is_400() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("GET", "/movies/", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "missing_movie_id");
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn update_overwrites_every_field() {
    let (router, _store) = test_router();

    let created = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let replacement = json!({
        "title": "Dune: Part Two",
        "releaseyear": "2024",
        "genre": "Science Fiction",
        "director": "Denis Villeneuve",
        "rating": 8.8,
        "description": "Paul unites with the Fremen",
    });
    let response = router
        .clone()
        .oneshot(authed_request(
            "PUT",
            &format!("/movies/{id}"),
            Some(replacement),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "movie updated successfully");

    let movie = response_json(
        router
            .oneshot(authed_request("GET", &format!("/movies/{id}"), None))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(movie["id"], id);
    assert_eq!(movie["title"], "Dune: Part Two");
    assert_eq!(movie["releaseyear"], "2024");
    assert_eq!(movie["genre"], "Science Fiction");
    assert_eq!(movie["director"], "Denis Villeneuve");
    assert_eq!(movie["rating"], json!(8.8));
    assert_eq!(movie["description"], "Paul unites with the Fremen");
}

#[tokio::test]
async fn update_nonexistent_id_is_404() {
    // Zero rows affected surfaces as not-found rather than silent success
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request(
            "PUT",
            "/movies/999999",
            Some(sample_payload("Dune")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_rejects_malformed_body() {
    let (router, _store) = test_router();

    let created = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = router
        .oneshot(authed_request(
            "PUT",
            &format!("/movies/{id}"),
            Some(json!({"rating": "not-a-number"})),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_non_numeric_id_is_400_even_with_bad_body() {
    let (router, _store) = test_router();

    // Id validation runs before body parsing
    let response = router
        .oneshot(authed_request("PUT", "/movies/abc", Some(json!({}))))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "invalid_movie_id");
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn delete_removes_the_movie() {
    let (router, _store) = test_router();

    let created = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = router
        .clone()
        .oneshot(authed_request("DELETE", &format!("/movies/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "movie deleted successfully");

    let response = router
        .oneshot(authed_request("GET", &format!("/movies/{id}"), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_delete_is_404() {
    // Zero rows affected surfaces as not-found rather than silent success
    let (router, _store) = test_router();

    let created = response_json(
        router
            .clone()
            .oneshot(authed_request(
                "POST",
                "/movies",
                Some(sample_payload("Dune")),
            ))
            .await
            .unwrap(),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let first = router
        .clone()
        .oneshot(authed_request("DELETE", &format!("/movies/{id}"), None))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = router
        .oneshot(authed_request("DELETE", &format!("/movies/{id}"), None))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Method Routing
// =============================================================================

#[tokio::test]
async fn unsupported_method_on_collection_is_405() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("DELETE", "/movies", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unsupported_method_on_item_is_405() {
    let (router, _store) = test_router();

    let response = router
        .oneshot(authed_request("PATCH", "/movies/1", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Storage Failures
// =============================================================================

#[tokio::test]
async fn storage_failure_is_500_with_generic_body() {
    let router = failing_router();

    let response = router
        .oneshot(authed_request("GET", "/movies", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response_json(response).await;
    assert_eq!(body["error"]["code"], "internal_error");
    // The backend error text must not leak to the client
    assert_eq!(body["error"]["message"], "An internal error occurred");
}

#[tokio::test]
async fn storage_failure_on_create_is_500() {
    let router = failing_router();

    let response = router
        .oneshot(authed_request(
            "POST",
            "/movies",
            Some(sample_payload("Dune")),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

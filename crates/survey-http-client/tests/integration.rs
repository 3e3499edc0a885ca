//! Transport behaviour against a mockito server

use mockito::Matcher;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use survey_http_client::{HttpClient, HttpError, Method};

#[derive(Debug, Serialize)]
struct Answer<'a> {
    survey_id: u64,
    question_id: u64,
    answer: &'a str,
}

#[derive(Debug, Deserialize, PartialEq)]
struct Semester {
    id: u64,
    name: String,
}

#[tokio::test]
async fn test_error_status_is_still_an_answer() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/login")
        .with_status(401)
        .with_body(r#"{"error":"invalid credentials"}"#)
        .create_async()
        .await;

    let response = HttpClient::new()
        .request(Method::Post, &format!("{}/login", server.url()))
        .send()
        .await
        .expect("401 is delivered, not an error");

    assert_eq!(response.status(), 401);
    assert!(!response.is_success());
    let body: Value = response.json().await.expect("JSON body");
    assert_eq!(body["error"], "invalid credentials");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_json_body_and_headers_reach_server() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/student/responses")
        .match_header("content-type", "application/json")
        .match_header("x-user-id", "42")
        .match_body(Matcher::Json(json!({
            "survey_id": 3,
            "question_id": 9,
            "answer": "Great course"
        })))
        .with_status(201)
        .with_body(r#"{"id": 100}"#)
        .create_async()
        .await;

    let response = HttpClient::new()
        .request(Method::Post, &format!("{}/student/responses", server.url()))
        .header("Content-Type", "application/json")
        .header("X-User-ID", "42")
        .body(
            serde_json::to_string(&Answer {
                survey_id: 3,
                question_id: 9,
                answer: "Great course",
            })
            .expect("encodes"),
        )
        .send()
        .await
        .expect("sent");

    assert_eq!(response.status(), 201);
    assert!(response.is_success());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_same_header_twice_keeps_last_value() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/student/subjects")
        .match_header("x-user-id", "from-caller")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let response = HttpClient::new()
        .request(Method::Get, &format!("{}/student/subjects", server.url()))
        .header("X-User-ID", "from-storage")
        .header("x-user-id", "from-caller")
        .send()
        .await
        .expect("sent");

    assert_eq!(response.status(), 200);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_json_decodes_any_status() {
    let mut server = mockito::Server::new_async().await;

    let listed = server
        .mock("GET", "/admin/semesters")
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "2024.1"}]"#)
        .create_async()
        .await;
    let denied = server
        .mock("GET", "/admin/users")
        .with_status(403)
        .with_body("Forbidden")
        .create_async()
        .await;

    let client = HttpClient::new();

    let listed_answer = client
        .request(Method::Get, &format!("{}/admin/semesters", server.url()))
        .send()
        .await
        .expect("sent");
    assert!(listed_answer.is_success());
    let semesters: Vec<Semester> = listed_answer.json().await.expect("decoded");
    assert_eq!(
        semesters,
        vec![Semester {
            id: 1,
            name: "2024.1".to_string()
        }]
    );

    let denied_answer = client
        .request(Method::Get, &format!("{}/admin/users", server.url()))
        .send()
        .await
        .expect("403 is delivered");
    assert_eq!(denied_answer.status(), 403);
    assert!(!denied_answer.is_success());
    assert_eq!(denied_answer.text().await.expect("body"), "Forbidden");

    listed.assert_async().await;
    denied.assert_async().await;
}

#[tokio::test]
async fn test_empty_body_does_not_decode() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("PUT", "/admin/semesters/7/activate")
        .with_status(204)
        .create_async()
        .await;

    let result: Result<Value, _> = HttpClient::new()
        .request(
            Method::Put,
            &format!("{}/admin/semesters/7/activate", server.url()),
        )
        .send()
        .await
        .expect("sent")
        .json()
        .await;

    assert!(matches!(result, Err(HttpError::Serialization(_))));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_request_parts_fail_before_sending() {
    let client = HttpClient::new();

    let bad_header = client
        .request(Method::Get, "http://127.0.0.1:1/login")
        .header("not a header", "x")
        .send()
        .await;
    assert!(matches!(bad_header, Err(HttpError::Build(_))));

    let bad_url = client.request(Method::Get, "not a url").send().await;
    assert!(matches!(bad_url, Err(HttpError::Build(_))));
}

#[tokio::test]
async fn test_unreachable_server() {
    // Nothing listens on port 1
    let result = HttpClient::new()
        .request(Method::Get, "http://127.0.0.1:1/student/subjects")
        .send()
        .await;

    let err = result.expect_err("refused");
    assert!(!err.to_string().is_empty());
}

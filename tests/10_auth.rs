mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn first_account_is_admin_then_teacher() -> Result<()> {
    let server = common::spawn().await?;

    let (first, token) = common::register(&server, "head", "pass1234", "Head Teacher").await?;
    assert_eq!(first["role"], "admin");
    assert_eq!(first["username"], "head");
    assert_eq!(first["fullName"], "Head Teacher");
    assert!(first["id"].as_i64().is_some());
    assert!(!token.is_empty());

    let (second, _) = common::register(&server, "jane", "pass1234", "Jane Doe").await?;
    assert_eq!(second["role"], "teacher");

    let (third, _) = common::register(&server, "john", "pass1234", "John Doe").await?;
    assert_eq!(third["role"], "teacher");

    Ok(())
}

#[tokio::test]
async fn has_users_flips_after_first_registration() -> Result<()> {
    let server = common::spawn().await?;
    let client = reqwest::Client::new();

    let body = client
        .get(format!("{}/api/auth/has-users", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["hasUsers"], false);

    common::register(&server, "head", "pass1234", "Head Teacher").await?;

    let body = client
        .get(format!("{}/api/auth/has-users", server.base_url))
        .send()
        .await?
        .json::<Value>()
        .await?;
    assert_eq!(body["hasUsers"], true);

    Ok(())
}

#[tokio::test]
async fn usernames_are_unique_case_insensitively() -> Result<()> {
    let server = common::spawn().await?;
    common::register(&server, "head", "pass1234", "Head Teacher").await?;

    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": "HEAD", "password": "other123", "fullName": "Impostor" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Username already exists");

    Ok(())
}

#[tokio::test]
async fn registration_validates_input() -> Result<()> {
    let server = common::spawn().await?;
    let client = reqwest::Client::new();

    // Short password
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": "a", "password": "abc", "fullName": "A" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Missing fields
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": "a" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "All fields are required");

    // Whitespace-only fields are empty after trimming
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&json!({ "username": "  ", "password": "pass1234", "fullName": "A" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
async fn login_distinguishes_unknown_user_from_bad_password() -> Result<()> {
    let server = common::spawn().await?;
    common::register(&server, "head", "pass1234", "Head Teacher").await?;
    let client = reqwest::Client::new();

    // Wrong credential for an existing account
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "head", "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Invalid password");

    // Unknown account
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "nobody", "password": "whatever" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "User not found");

    // Correct credentials; username lookup folds case
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "HEAD", "password": "pass1234" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["user"]["username"], "head");
    assert!(body["token"].as_str().is_some());

    Ok(())
}

#[tokio::test]
async fn me_requires_a_valid_session() -> Result<()> {
    let server = common::spawn().await?;
    let (user, token) = common::register(&server, "head", "pass1234", "Head Teacher").await?;
    let client = reqwest::Client::new();

    // No token
    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Garbage token
    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .bearer_auth("not.a.token")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Valid session
    let res = client
        .get(format!("{}/api/auth/me", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["username"], "head");
    assert!(body.get("password_hash").is_none());

    Ok(())
}

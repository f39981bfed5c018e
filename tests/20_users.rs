mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn user_list_is_admin_only() -> Result<()> {
    let server = common::spawn().await?;
    let (_, admin_token) = common::register(&server, "head", "pass1234", "Head Teacher").await?;
    let (_, teacher_token) = common::register(&server, "jane", "pass1234", "Jane Doe").await?;
    let client = reqwest::Client::new();

    let url = format!("{}/api/auth/users", server.base_url);

    // No session at all
    let res = client.get(&url).send().await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Standard-role session
    let res = client.get(&url).bearer_auth(&teacher_token).send().await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Admin access required");

    // Privileged session
    let res = client.get(&url).bearer_auth(&admin_token).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    let users = body.as_array().expect("array of users");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password_hash").is_none());
    }

    Ok(())
}

#[tokio::test]
async fn role_change_works_but_never_on_self() -> Result<()> {
    let server = common::spawn().await?;
    let (admin, admin_token) = common::register(&server, "head", "pass1234", "Head Teacher").await?;
    let (teacher, _) = common::register(&server, "jane", "pass1234", "Jane Doe").await?;
    let client = reqwest::Client::new();

    // Self role-change is rejected even for an admin
    let res = client
        .put(format!(
            "{}/api/auth/users/{}/role",
            server.base_url,
            admin["id"].as_i64().unwrap()
        ))
        .bearer_auth(&admin_token)
        .json(&json!({ "role": "teacher" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Cannot change your own role");

    // Bad role value
    let res = client
        .put(format!(
            "{}/api/auth/users/{}/role",
            server.base_url,
            teacher["id"].as_i64().unwrap()
        ))
        .bearer_auth(&admin_token)
        .json(&json!({ "role": "superuser" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Promoting another account succeeds
    let res = client
        .put(format!(
            "{}/api/auth/users/{}/role",
            server.base_url,
            teacher["id"].as_i64().unwrap()
        ))
        .bearer_auth(&admin_token)
        .json(&json!({ "role": "admin" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/auth/users", server.base_url))
        .bearer_auth(&admin_token)
        .send()
        .await?;
    let users = res.json::<Value>().await?;
    let promoted = users
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == "jane")
        .cloned()
        .unwrap();
    assert_eq!(promoted["role"], "admin");

    Ok(())
}

#[tokio::test]
async fn accounts_cannot_delete_themselves() -> Result<()> {
    let server = common::spawn().await?;
    let (admin, admin_token) = common::register(&server, "head", "pass1234", "Head Teacher").await?;
    let (teacher, teacher_token) = common::register(&server, "jane", "pass1234", "Jane Doe").await?;
    let client = reqwest::Client::new();

    // Standard role cannot delete anyone
    let res = client
        .delete(format!(
            "{}/api/auth/users/{}",
            server.base_url,
            admin["id"].as_i64().unwrap()
        ))
        .bearer_auth(&teacher_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    // Admin cannot delete itself
    let res = client
        .delete(format!(
            "{}/api/auth/users/{}",
            server.base_url,
            admin["id"].as_i64().unwrap()
        ))
        .bearer_auth(&admin_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Cannot delete your own account");

    // Admin deletes another account
    let res = client
        .delete(format!(
            "{}/api/auth/users/{}",
            server.base_url,
            teacher["id"].as_i64().unwrap()
        ))
        .bearer_auth(&admin_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // The deleted account can no longer sign in
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&json!({ "username": "jane", "password": "pass1234" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

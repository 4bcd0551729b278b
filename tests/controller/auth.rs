//! Tests for the register and login endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    controller::auth::{login, register},
    model::{app::AppState, auth::CredentialsDto},
    service::auth::decode_token,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

fn credentials(email: &str, password: &str) -> Json<CredentialsDto> {
    Json(CredentialsDto {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Expect 200 when registering a fresh email
#[tokio::test]
async fn register_succeeds_for_new_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = register(State(test.state()), credentials("a@a.com", "x")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 with a "User already exists" message when registering twice
#[tokio::test]
async fn register_rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let first = register(State(test.state()), credentials("a@a.com", "x")).await;
    assert!(first.is_ok());

    let second = register(State(test.state()), credentials("a@a.com", "x")).await;

    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "User already exists");
    assert_eq!(body["error"], true);

    Ok(())
}

/// Expect a decodable token embedding the user id on successful login
#[tokio::test]
async fn login_returns_token_for_valid_credentials() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let user = test.user().insert_user("han@falcon.sw", "kessel").await?;
    let state: AppState = test.state();

    let result = login(State(state.clone()), credentials("han@falcon.sw", "kessel")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    let claims = decode_token(&state.auth, token).unwrap();
    assert_eq!(claims.sub, user.id);

    Ok(())
}

/// Expect 401 when the password does not match
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.user().insert_user("han@falcon.sw", "kessel").await?;

    let result = login(State(test.state()), credentials("han@falcon.sw", "wrong")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

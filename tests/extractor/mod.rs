//! Tests for the bearer token extractor guarding protected routes.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, Request, StatusCode},
    response::IntoResponse,
};
use holocron::{
    model::{
        app::{AppState, AuthKeys},
        auth::CurrentUser,
    },
    service::auth::issue_token,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

fn parts_with_header(value: Option<&str>) -> axum::http::request::Parts {
    let mut builder = Request::builder().uri("/planet");

    if let Some(value) = value {
        builder = builder.header(AUTHORIZATION, value);
    }

    let (parts, _) = builder.body(()).unwrap().into_parts();
    parts
}

/// Expect a valid bearer token to resolve to the embedded user id
#[tokio::test]
async fn accepts_valid_bearer_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let token = issue_token(&state.auth, 7).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().0, 7);

    Ok(())
}

/// Expect 401 with an error body when the header is missing
#[tokio::test]
async fn rejects_missing_header() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let mut parts = parts_with_header(None);

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(resp).await;
    assert_eq!(body["error"], true);

    Ok(())
}

/// Expect 401 when the header is present but not a bearer token
#[tokio::test]
async fn rejects_non_bearer_header() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let mut parts = parts_with_header(Some("Basic abc123"));

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}

/// Expect 401 for a token signed with a different secret
#[tokio::test]
async fn rejects_foreign_token() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let foreign_keys = AuthKeys::from_secret("a-different-secret");
    let token = issue_token(&foreign_keys, 7).unwrap();
    let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNAUTHORIZED
    );

    Ok(())
}

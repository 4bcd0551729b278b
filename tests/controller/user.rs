//! Tests for the user creation and listing endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holocron::{
    controller::user::{create_user, get_users},
    model::auth::CredentialsDto,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect the created user to be returned without its password
#[tokio::test]
async fn create_user_returns_user_without_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = create_user(
        State(test.state()),
        Json(CredentialsDto {
            email: "lando@cloudcity.sw".to_string(),
            password: "sabacc".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["email"], "lando@cloudcity.sw");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect 401 when creating a user with a duplicate email
#[tokio::test]
async fn create_user_rejects_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.user().insert_user("lando@cloudcity.sw", "sabacc").await?;

    let result = create_user(
        State(test.state()),
        Json(CredentialsDto {
            email: "lando@cloudcity.sw".to_string(),
            password: "other".to_string(),
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect every registered user to be listed
#[tokio::test]
async fn get_users_lists_all_users() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    test.user().insert_user("luke@rebellion.org", "nerfherder").await?;
    test.user().insert_user("leia@rebellion.org", "alderaan").await?;

    let result = get_users(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect an empty list when no users are registered
#[tokio::test]
async fn get_users_returns_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;

    let result = get_users(State(test.state())).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert!(body.as_array().unwrap().is_empty());

    Ok(())
}

//! Tests for the character listing and lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::character::{get_character, get_characters},
    model::auth::CurrentUser,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect every character to be listed
#[tokio::test]
async fn get_characters_lists_all() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    test.galaxy().insert_character("Luke Skywalker", None).await?;
    test.galaxy().insert_character("Leia Organa", None).await?;

    let result = get_characters(State(test.state()), CurrentUser(1)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect a character to be retrieved by id with its home planet id
#[tokio::test]
async fn get_character_returns_character() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let tatooine = test.galaxy().insert_planet("Tatooine").await?;
    let luke = test
        .galaxy()
        .insert_character("Luke Skywalker", Some(tatooine.id))
        .await?;

    let result = get_character(State(test.state()), CurrentUser(1), Path(luke.id)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["planet_id"], tatooine.id);

    Ok(())
}

/// Expect 404 with a "Character not found" message for an unknown id
#[tokio::test]
async fn get_character_fails_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let result = get_character(State(test.state()), CurrentUser(1), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Character not found");

    Ok(())
}

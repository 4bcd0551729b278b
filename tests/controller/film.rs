//! Tests for the film listing and lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::film::{get_film, get_films},
    model::auth::CurrentUser,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect every film to be listed
#[tokio::test]
async fn get_films_lists_all() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    test.galaxy().insert_film("A New Hope", 4).await?;
    test.galaxy().insert_film("The Empire Strikes Back", 5).await?;

    let result = get_films(State(test.state()), CurrentUser(1)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect a film to be retrieved by id with its name serialized as a string
#[tokio::test]
async fn get_film_returns_film() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let film = test.galaxy().insert_film("A New Hope", 4).await?;

    let result = get_film(State(test.state()), CurrentUser(1), Path(film.id)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    assert_eq!(body["name"], "A New Hope");
    assert_eq!(body["episode_id"], 4);
    assert_eq!(body["director"], "George Lucas");

    Ok(())
}

/// Expect 404 with a "Film not found" message for an unknown id
#[tokio::test]
async fn get_film_fails_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let result = get_film(State(test.state()), CurrentUser(1), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Film not found");

    Ok(())
}

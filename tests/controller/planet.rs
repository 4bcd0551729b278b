//! Tests for the planet listing and lookup endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    controller::planet::{get_planet, get_planets},
    model::auth::CurrentUser,
};
use holocron_test_utils::prelude::*;

use crate::util::body_json;

/// Expect every planet to be listed with its resident characters
#[tokio::test]
async fn get_planets_lists_all_with_characters() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let tatooine = test.galaxy().insert_planet("Tatooine").await?;
    test.galaxy().insert_planet("Alderaan").await?;
    test.galaxy()
        .insert_character("Luke Skywalker", Some(tatooine.id))
        .await?;

    let result = get_planets(State(test.state()), CurrentUser(1)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    let planets = body.as_array().unwrap();
    assert_eq!(planets.len(), 2);

    let tatooine_dto = planets
        .iter()
        .find(|planet| planet["name"] == "Tatooine")
        .unwrap();
    assert_eq!(tatooine_dto["characters"][0]["name"], "Luke Skywalker");

    Ok(())
}

/// Expect embedded characters to carry only id and name
#[tokio::test]
async fn get_planet_truncates_embedded_characters() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;
    let tatooine = test.galaxy().insert_planet("Tatooine").await?;
    test.galaxy()
        .insert_character("Luke Skywalker", Some(tatooine.id))
        .await?;

    let result = get_planet(State(test.state()), CurrentUser(1), Path(tatooine.id)).await;

    assert!(result.is_ok());
    let body = body_json(result.unwrap().into_response()).await;
    let character = &body["characters"][0];
    let keys: Vec<&str> = character
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&"id"));
    assert!(keys.contains(&"name"));

    Ok(())
}

/// Expect 404 with a "Planet not found" message for an unknown id
#[tokio::test]
async fn get_planet_fails_for_unknown_id() -> Result<(), TestError> {
    let test = test_setup_with_galaxy_tables!()?;

    let result = get_planet(State(test.state()), CurrentUser(1), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["message"], "Planet not found");
    assert_eq!(body["error"], true);

    Ok(())
}
